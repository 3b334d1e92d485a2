//! Infix to postfix conversion (shunting-yard)
//!
//! Operands go straight to the output, operators wait on a stack until an
//! operator of lower precedence (or a closing bracket) flushes them. Popping
//! on equal precedence makes every binary operator left-associative.
//!
//! The converter also checks operand/operator adjacency, so the evaluator
//! only ever sees well-formed postfix sequences.

use super::lexer::{Operator, Token};
use crate::interpreter::errors::CalcError;

/// Entries of the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Open,
    Op(Operator),
}

/// Convert an infix token sequence to postfix order.
pub fn to_postfix(expression: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut output = Vec::with_capacity(expression.len());
    let mut stack: Vec<Pending> = Vec::new();
    // true while the next token must start an operand
    let mut expect_operand = true;

    for token in expression {
        match token {
            Token::Integer(_) | Token::Identifier(_) => {
                if !expect_operand {
                    return Err(CalcError::InvalidExpression);
                }
                output.push(token.clone());
                expect_operand = false;
            }
            Token::LeftParen => {
                if !expect_operand {
                    return Err(CalcError::InvalidExpression);
                }
                stack.push(Pending::Open);
            }
            Token::RightParen => {
                if expect_operand {
                    return Err(CalcError::InvalidExpression);
                }
                loop {
                    match stack.pop() {
                        Some(Pending::Open) => break,
                        Some(Pending::Op(op)) => output.push(Token::Operator(op)),
                        None => return Err(CalcError::InvalidExpression),
                    }
                }
            }
            Token::Operator(op) if op.is_prefix() => {
                if !expect_operand {
                    return Err(CalcError::InvalidExpression);
                }
                stack.push(Pending::Op(*op));
            }
            Token::Operator(op) => {
                if expect_operand {
                    return Err(CalcError::InvalidExpression);
                }
                while let Some(Pending::Op(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Op(*op));
                expect_operand = true;
            }
        }
    }

    // Empty input and trailing operators both end here
    if expect_operand {
        return Err(CalcError::InvalidExpression);
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Token::Operator(op)),
            Pending::Open => return Err(CalcError::InvalidExpression),
        }
    }

    Ok(output)
}
