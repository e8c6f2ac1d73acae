mod error;
mod log;
mod record;

pub mod ingest;
pub mod synth;

#[cfg(test)]
mod tests;

pub use error::IngestError;
pub use log::EventLog;
pub use record::{EventRecord, Severity};
