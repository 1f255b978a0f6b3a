//! Window hosts that turn platform input into session events.

#[cfg(feature = "gui")]
pub mod gui;
