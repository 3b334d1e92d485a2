//! Variable table and the assignment/lookup entry points

use super::errors::CalcError;
use crate::parser::lexer::{is_identifier, normalize_signs, strip_whitespace};
use num_bigint::BigInt;
use rustc_hash::FxHashMap;

/// Identifier → value bindings that live for the whole session.
///
/// Keys are unique and the last assignment wins. Bindings are never removed.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    values: FxHashMap<String, BigInt>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.values.get(name)
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: BigInt) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All bindings ordered by name
    pub fn sorted(&self) -> Vec<(&str, &BigInt)> {
        let mut entries: Vec<(&str, &BigInt)> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Parse an optionally signed run of digits (sign runs are normalized first).
fn parse_signed_integer(input: &str) -> Option<BigInt> {
    let normalized = normalize_signs(input);
    let (negative, digits) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.strip_prefix('+').unwrap_or(&normalized)),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let magnitude: BigInt = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Execute an assignment statement `identifier = rhs`.
///
/// The right-hand side is either a signed integer literal or another
/// identifier, whose current value is copied (later changes to it do not
/// propagate).
pub fn assign(statement: &str, variables: &mut VariableTable) -> Result<(), CalcError> {
    let statement = strip_whitespace(statement);
    let parts: Vec<&str> = statement.split('=').collect();

    let (target, rhs) = match parts.as_slice() {
        [target, rhs] => (*target, *rhs),
        _ => return Err(CalcError::InvalidAssignment),
    };

    if !is_identifier(target) {
        return Err(CalcError::InvalidIdentifier);
    }

    let value = if is_identifier(rhs) {
        variables
            .get(rhs)
            .cloned()
            .ok_or_else(|| CalcError::UnknownVariable {
                name: rhs.to_string(),
            })?
    } else {
        parse_signed_integer(rhs).ok_or(CalcError::InvalidAssignment)?
    };

    tracing::info!(variable = target, value = %value, "variable assigned");
    variables.set(target, value);
    Ok(())
}

/// Read the current value of a variable.
pub fn lookup(identifier: &str, variables: &VariableTable) -> Result<BigInt, CalcError> {
    let identifier = strip_whitespace(identifier);
    if !is_identifier(&identifier) {
        return Err(CalcError::InvalidIdentifier);
    }
    variables
        .get(&identifier)
        .cloned()
        .ok_or(CalcError::UnknownVariable { name: identifier })
}
