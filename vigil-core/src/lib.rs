pub mod dashboard;
pub mod event;
pub mod filter;
pub mod stats;
