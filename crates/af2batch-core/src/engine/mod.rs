//! # Engine Module
//!
//! Execution machinery behind the batch workflow.
//!
//! - **Configuration** ([`config`]) - Validated dispatcher settings and their builder
//! - **Error Handling** ([`error`]) - Fatal pre-flight errors and recoverable per-task errors
//! - **Progress Monitoring** ([`progress`]) - Events emitted while a batch runs
//! - **Process Execution** ([`runner`]) - The seam that spawns the external launcher
//!
//! Tasks are always executed one at a time; nothing in this module is shared
//! across threads.

pub mod config;
pub mod error;
pub mod progress;
pub mod runner;
