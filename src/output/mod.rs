// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Building an `OutputPlan` is pure; `deliver` is the only function that
//! performs I/O.

mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use paths::FilenameRegistry;
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
