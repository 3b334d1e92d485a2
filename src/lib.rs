//! # Introduction
//!
//! bigcalc evaluates integer arithmetic typed as text: literals of any size,
//! named variables, `+ - * /` and bracket grouping. It runs either as a
//! [ratatui](https://docs.rs/ratatui) terminal UI or as a plain line filter.
//!
//! ## Pipeline
//!
//! ```text
//! raw → brackets → sign normalization → tokens → postfix → value
//! ```
//!
//! 1. [`parser`] — bracket validation, sign normalization, tokenization and
//!    infix → postfix conversion.
//! 2. [`interpreter`] — postfix evaluation over arbitrary-precision integers,
//!    the variable table, and the [`interpreter::engine::Calculator`] session
//!    that dispatches each input line.
//! 3. [`transcript`] — bounded record of processed lines and replies.
//! 4. [`repl`] and [`ui`] — the two front ends.
//!
//! ## Example
//!
//! ```
//! use bigcalc::interpreter::evaluator::evaluate;
//! use bigcalc::interpreter::variables::{assign, VariableTable};
//!
//! let mut vars = VariableTable::new();
//! assign("a = 5", &mut vars).unwrap();
//! assert_eq!(evaluate("(a + 3) * 2", &vars).unwrap().to_string(), "16");
//! ```

pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod transcript;
pub mod ui;
