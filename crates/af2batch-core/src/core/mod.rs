//! # Core Module
//!
//! Stateless building blocks of a prediction batch.
//!
//! - **Task Model** ([`task`]) - Task directories under a batch root and their
//!   `af2output` output directories.
//! - **Command Assembly** ([`command`]) - Pass-through prediction parameters and
//!   the fully assembled invocation for a single task.
//!
//! Nothing in this module spawns processes; directory enumeration is the only
//! filesystem access.

pub mod command;
pub mod task;
