pub mod celebration;
pub mod garden;
pub mod heart_burst;
