//! # Workflows Module
//!
//! High-level entry points for users of the library.
//!
//! - **Batch Dispatch** ([`dispatch`]) - Enumerate task directories under a root
//!   and run the prediction launcher once per task, sequentially, collecting a
//!   per-task report.

pub mod dispatch;
