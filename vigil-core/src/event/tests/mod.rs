mod ingest_tests;
mod log_tests;
mod synth_tests;
