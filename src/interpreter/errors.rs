//! Error types for the calculator
//!
//! This module defines [`CalcError`], the single error type returned by every
//! entry point of the pipeline ([`evaluate`], [`assign`], [`lookup`]).
//!
//! All errors are recoverable: the session reports the message and keeps
//! accepting input.
//!
//! [`evaluate`]: crate::interpreter::evaluator::evaluate
//! [`assign`]: crate::interpreter::variables::assign
//! [`lookup`]: crate::interpreter::variables::lookup

use thiserror::Error;

/// Errors reported by evaluation, assignment and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Unbalanced brackets, repeated `*`/`/`, bad operand/operator adjacency
    /// or a character the tokenizer does not recognize
    #[error("Invalid expression")]
    InvalidExpression,

    /// Left-hand side of an assignment (or a lookup name) is not a letter run
    #[error("Invalid identifier")]
    InvalidIdentifier,

    /// Right-hand side of an assignment has an unsupported shape,
    /// or the statement has more than one `=`
    #[error("Invalid assignment")]
    InvalidAssignment,

    /// Reference to an identifier with no binding
    #[error("Unknown variable")]
    UnknownVariable { name: String },

    /// Division by zero
    #[error("Division by zero")]
    ArithmeticError,
}

impl CalcError {
    /// Short machine-friendly name of the error kind, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidExpression => "invalid_expression",
            CalcError::InvalidIdentifier => "invalid_identifier",
            CalcError::InvalidAssignment => "invalid_assignment",
            CalcError::UnknownVariable { .. } => "unknown_variable",
            CalcError::ArithmeticError => "arithmetic_error",
        }
    }
}
