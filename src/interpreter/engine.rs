//! Calculator session: input dispatch, commands and transcript

use super::constants::{
    EXIT_COMMAND, EXIT_MESSAGE, HELP_COMMAND, HELP_MESSAGE, UNKNOWN_COMMAND_MESSAGE,
};
use super::errors::CalcError;
use super::evaluator::evaluate;
use super::variables::{assign, lookup, VariableTable};
use crate::parser::lexer::{is_identifier, strip_whitespace};
use crate::transcript::{EntryKind, Transcript};
use num_bigint::BigInt;

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line or successful assignment
    Silent,
    Value(BigInt),
    /// Help text or an unknown command
    Message(String),
    Error(CalcError),
    /// The session should end after printing the message
    Exit(String),
}

impl Outcome {
    /// Text to show the user, if any
    pub fn reply(&self) -> Option<String> {
        match self {
            Outcome::Silent => None,
            Outcome::Value(value) => Some(value.to_string()),
            Outcome::Message(text) | Outcome::Exit(text) => Some(text.clone()),
            Outcome::Error(err) => Some(err.to_string()),
        }
    }

    fn kind(&self) -> EntryKind {
        match self {
            Outcome::Silent => EntryKind::Silent,
            Outcome::Value(_) => EntryKind::Value,
            Outcome::Message(_) | Outcome::Exit(_) => EntryKind::Message,
            Outcome::Error(_) => EntryKind::Error,
        }
    }
}

/// A calculator session owning the variable table for its lifetime
#[derive(Debug, Default)]
pub struct Calculator {
    variables: VariableTable,
    transcript: Transcript,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose transcript keeps at most `limit` entries
    pub fn with_transcript_limit(limit: usize) -> Self {
        Calculator {
            variables: VariableTable::new(),
            transcript: Transcript::new(limit),
        }
    }

    /// Process one line of user input.
    ///
    /// Dispatch order: blank, `/command`, assignment (contains `=`),
    /// lookup (letters only), otherwise an expression.
    pub fn process(&mut self, line: &str) -> Outcome {
        let input = strip_whitespace(line);
        if input.is_empty() {
            return Outcome::Silent;
        }

        let outcome = if input.starts_with('/') {
            Self::command(&input)
        } else if input.contains('=') {
            match assign(&input, &mut self.variables) {
                Ok(()) => Outcome::Silent,
                Err(err) => Outcome::Error(err),
            }
        } else if is_identifier(&input) {
            Self::into_outcome(lookup(&input, &self.variables))
        } else {
            Self::into_outcome(evaluate(&input, &self.variables))
        };

        if let Outcome::Error(err) = &outcome {
            tracing::warn!(input = %input, kind = err.kind(), "input rejected");
        }

        self.transcript
            .record(line.trim().to_string(), outcome.reply(), outcome.kind());
        outcome
    }

    fn command(input: &str) -> Outcome {
        match input {
            EXIT_COMMAND => Outcome::Exit(EXIT_MESSAGE.to_string()),
            HELP_COMMAND => Outcome::Message(HELP_MESSAGE.to_string()),
            _ => Outcome::Message(UNKNOWN_COMMAND_MESSAGE.to_string()),
        }
    }

    fn into_outcome(result: Result<BigInt, CalcError>) -> Outcome {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(err) => Outcome::Error(err),
        }
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
