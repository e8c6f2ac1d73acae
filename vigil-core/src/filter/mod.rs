mod range;


pub use range::{DateRange, by_range};
