pub mod display;
pub mod presenter;
pub mod staging;
