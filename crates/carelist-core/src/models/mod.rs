//! Domain models for the carelist system.

mod patient;

pub use patient::*;
