//! Bracket validation
//!
//! Runs on the raw input before any other step. All three bracket families
//! are checked for correct nesting; the tokenizer later treats every family
//! as a grouping bracket.

use crate::interpreter::errors::CalcError;

fn matching_open(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Check that every bracket in `input` is properly matched and nested.
pub fn validate_brackets(input: &str) -> Result<(), CalcError> {
    let brackets: Vec<char> = input
        .chars()
        .filter(|c| matches!(c, '(' | ')' | '[' | ']' | '{' | '}'))
        .collect();

    if brackets.len() % 2 != 0 {
        return Err(CalcError::InvalidExpression);
    }

    let mut stack = Vec::new();
    for ch in brackets {
        match matching_open(ch) {
            None => stack.push(ch),
            Some(open) => {
                if stack.pop() != Some(open) {
                    return Err(CalcError::InvalidExpression);
                }
            }
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(CalcError::InvalidExpression)
    }
}
