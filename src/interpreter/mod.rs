//! Calculator execution
//!
//! This module provides the evaluation side of the pipeline:
//! - [`evaluator`]: Postfix evaluation and the `evaluate` entry point
//! - [`variables`]: The variable table plus `assign` and `lookup`
//! - [`engine`]: The [`engine::Calculator`] session that dispatches input lines
//! - [`errors`]: The shared [`errors::CalcError`] type
//!
//! # Execution Model
//!
//! Each input line is handled to completion before the next one is read. The
//! variable table is the only state that outlives a line; it is owned by the
//! session and passed by reference into every evaluation and assignment.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod evaluator;
pub mod variables;
