pub mod animator;
pub mod limits;
