mod aggregation;
mod bucket;
mod render;
mod types;


pub use aggregation::aggregate;
pub use bucket::{BucketWidth, BucketWidthError};
pub use render::render_snapshot;
pub use types::DashboardSnapshot;
