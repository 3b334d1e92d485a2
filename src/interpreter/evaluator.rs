//! Postfix evaluation and the `evaluate` entry point

use super::errors::CalcError;
use super::variables::VariableTable;
use crate::parser::brackets::validate_brackets;
use crate::parser::lexer::{
    has_repeated_multiplicative, normalize_signs, render_tokens, strip_whitespace, Operator,
    Token, Tokenizer,
};
use crate::parser::postfix::to_postfix;
use num_bigint::BigInt;
use num_traits::Zero;

/// Evaluate an infix expression against the variable table.
///
/// Whitespace is ignored. Brackets are validated on the raw text, then signs
/// are normalized, the text is tokenized, converted to postfix and evaluated.
pub fn evaluate(expression: &str, variables: &VariableTable) -> Result<BigInt, CalcError> {
    let input = strip_whitespace(expression);

    if input.is_empty() || has_repeated_multiplicative(&input) {
        return Err(CalcError::InvalidExpression);
    }
    validate_brackets(&input)?;

    let normalized = normalize_signs(&input);
    let tokens = Tokenizer::new(&normalized).tokenize()?;
    tracing::debug!(tokens = %render_tokens(&tokens), "tokenized");

    let postfix = to_postfix(&tokens)?;
    tracing::debug!(postfix = %render_tokens(&postfix), "converted to postfix");

    evaluate_postfix(postfix, variables)
}

/// Evaluate a postfix token sequence.
///
/// The sequence is consumed. Exactly one value must remain at the end.
pub fn evaluate_postfix(
    postfix: Vec<Token>,
    variables: &VariableTable,
) -> Result<BigInt, CalcError> {
    let mut values: Vec<BigInt> = Vec::new();

    for token in postfix {
        match token {
            Token::Integer(n) => values.push(n),
            Token::Identifier(name) => match variables.get(&name) {
                Some(value) => values.push(value.clone()),
                None => return Err(CalcError::UnknownVariable { name }),
            },
            Token::Operator(Operator::Negate) => {
                let operand = values.pop().ok_or(CalcError::InvalidExpression)?;
                values.push(-operand);
            }
            Token::Operator(op) => {
                // `right` was pushed last
                let right = values.pop().ok_or(CalcError::InvalidExpression)?;
                let left = values.pop().ok_or(CalcError::InvalidExpression)?;
                values.push(apply(op, left, right)?);
            }
            Token::LeftParen | Token::RightParen => return Err(CalcError::InvalidExpression),
        }
    }

    let result = values.pop().ok_or(CalcError::InvalidExpression)?;
    if !values.is_empty() {
        return Err(CalcError::InvalidExpression);
    }
    Ok(result)
}

/// Apply a binary operator. Division truncates toward zero.
fn apply(op: Operator, left: BigInt, right: BigInt) -> Result<BigInt, CalcError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right.is_zero() {
                return Err(CalcError::ArithmeticError);
            }
            Ok(left / right)
        }
        Operator::Negate => Err(CalcError::InvalidExpression),
    }
}
