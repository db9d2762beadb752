//! # af2batch Core Library
//!
//! A small library for running an AlphaFold2 launcher over a directory of
//! prediction tasks, one task at a time.
//!
//! ## Architectural Philosophy
//!
//! The library mirrors a three-layer split so that the filesystem model, the
//! execution machinery and the user-facing workflow can be tested separately.
//!
//! - **[`core`]: The Foundation.** Stateless models: task directories discovered
//!   under a batch root, the pass-through prediction parameters, and the
//!   assembled command line for one invocation.
//!
//! - **[`engine`]: The Machinery.** Validated configuration, error types, progress
//!   events and the [`engine::runner::CommandRunner`] seam that actually spawns
//!   the external launcher.
//!
//! - **[`workflows`]: The Public API.** The batch dispatch procedure that ties
//!   the other two layers together and returns a per-task report.

pub mod core;
pub mod engine;
pub mod workflows;
