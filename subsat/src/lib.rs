pub mod body;
pub mod elements;
pub mod errors;
pub mod file_export;
pub mod logger;
pub mod math;
pub mod prelude;
pub mod quantities;
pub mod radius_lut;
