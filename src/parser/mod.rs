//! Expression front end
//!
//! This module turns raw expression text into a postfix token sequence:
//! - [`brackets`]: Bracket validation on the raw input
//! - [`lexer`]: Sign normalization and tokenization (text → tokens)
//! - [`postfix`]: Infix to postfix conversion (tokens → postfix tokens)
//!
//! # Pipeline
//!
//! ```text
//! raw → validate_brackets → normalize_signs → Tokenizer → to_postfix
//! ```
//!
//! Parentheses, square brackets and braces are interchangeable grouping
//! brackets once validation has confirmed they nest correctly.

pub mod brackets;
pub mod lexer;
pub mod postfix;
