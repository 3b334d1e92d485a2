//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts a sign-normalized expression string into a flat [`Token`] stream
//! consumed by the postfix converter. Tokenization is total: every character
//! is either part of a token or an [`CalcError::InvalidExpression`].
//!
//! Sign handling happens in two stages. [`normalize_signs`] first collapses
//! runs of `+`/`-` into one sign, then the [`Tokenizer`] decides whether each
//! remaining sign is binary or unary from the token before it.

use crate::interpreter::errors::CalcError;
use num_bigint::BigInt;
use std::fmt;

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    /// Prefix minus in front of an identifier or a bracket group
    Negate,
}

impl Operator {
    /// Binding strength; higher binds tighter. All binary operators are
    /// left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Negate => 3,
        }
    }

    /// Whether the operator takes a single operand to its right.
    pub fn is_prefix(self) -> bool {
        matches!(self, Operator::Negate)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub | Operator::Negate => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// All token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(BigInt),
    Identifier(String),
    Operator(Operator),
    /// Any opening bracket: `(`, `[` or `{`
    LeftParen,
    /// Any closing bracket: `)`, `]` or `}`
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(Operator::Negate) => write!(f, "neg"),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Render a token sequence space-separated, for log events.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every whitespace character.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `input` is a non-empty run of ASCII letters.
pub fn is_identifier(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

/// True if the input repeats `*` or `/`, which have no normalized form.
pub fn has_repeated_multiplicative(input: &str) -> bool {
    input.contains("**") || input.contains("//")
}

/// Collapse every run of `+`/`-` into a single sign.
///
/// A run becomes `-` when it holds an odd number of `-`, otherwise `+`.
/// Rewrites are applied until nothing changes: `+--` needs two rounds.
pub fn normalize_signs(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = current
            .replace("++", "+")
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-");
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Lexer for normalized expression strings
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a new tokenizer for an already normalized expression.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CalcError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.advance() {
            let token = match ch {
                '0'..='9' => self.integer_literal(ch, false),
                'a'..='z' | 'A'..='Z' => self.identifier(ch),
                '+' | '-' if Self::in_operand_position(&tokens) => match self.unary_sign(ch)? {
                    Some(token) => token,
                    None => continue,
                },
                '+' => Token::Operator(Operator::Add),
                '-' => Token::Operator(Operator::Sub),
                '*' => Token::Operator(Operator::Mul),
                '/' => Token::Operator(Operator::Div),
                '(' | '[' | '{' => Token::LeftParen,
                ')' | ']' | '}' => Token::RightParen,
                _ => {
                    tracing::warn!(
                        character = %ch,
                        position = self.position - 1,
                        "unexpected character in expression"
                    );
                    return Err(CalcError::InvalidExpression);
                }
            };
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// A sign is unary at the start, after an operator, or after an opener.
    fn in_operand_position(tokens: &[Token]) -> bool {
        matches!(
            tokens.last(),
            None | Some(Token::Operator(_)) | Some(Token::LeftParen)
        )
    }

    /// Resolve a unary sign. Returns `None` when the sign is a no-op `+`.
    fn unary_sign(&mut self, sign: char) -> Result<Option<Token>, CalcError> {
        let negative = sign == '-';
        match self.peek() {
            Some(digit @ '0'..='9') => {
                self.advance();
                Ok(Some(self.integer_literal(digit, negative)))
            }
            Some('a'..='z' | 'A'..='Z' | '(' | '[' | '{') => {
                Ok(negative.then_some(Token::Operator(Operator::Negate)))
            }
            _ => Err(CalcError::InvalidExpression),
        }
    }

    /// Parse an integer literal of arbitrary length
    fn integer_literal(&mut self, first_digit: char, negative: bool) -> Token {
        let mut value = BigInt::from(digit_value(first_digit));

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                value = value * 10u32 + digit_value(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Integer(if negative { -value } else { value })
    }

    fn identifier(&mut self, first_char: char) -> Token {
        let mut name = String::new();
        name.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Identifier(name)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

fn digit_value(ch: char) -> u32 {
    ch.to_digit(10).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
        Tokenizer::new(input).tokenize()
    }

    fn int(n: i64) -> Token {
        Token::Integer(BigInt::from(n))
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("12+ab*(3-c)/4").unwrap();

        assert_eq!(
            tokens,
            vec![
                int(12),
                Token::Operator(Operator::Add),
                ident("ab"),
                Token::Operator(Operator::Mul),
                Token::LeftParen,
                int(3),
                Token::Operator(Operator::Sub),
                ident("c"),
                Token::RightParen,
                Token::Operator(Operator::Div),
                int(4),
            ]
        );
    }

    #[test]
    fn test_all_bracket_families_group() {
        let tokens = tokenize("[1]{2}").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                int(1),
                Token::RightParen,
                Token::LeftParen,
                int(2),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_rejected() {
        assert_eq!(tokenize("2%3"), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("a_b"), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("1.5"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_unary_minus_folds_into_literal() {
        assert_eq!(tokenize("-5").unwrap(), vec![int(-5)]);
        assert_eq!(
            tokenize("2*-3").unwrap(),
            vec![int(2), Token::Operator(Operator::Mul), int(-3)]
        );
        assert_eq!(
            tokenize("(-3)").unwrap(),
            vec![Token::LeftParen, int(-3), Token::RightParen]
        );
    }

    #[test]
    fn test_binary_minus_after_operand() {
        assert_eq!(
            tokenize("2-3").unwrap(),
            vec![int(2), Token::Operator(Operator::Sub), int(3)]
        );
        assert_eq!(
            tokenize("(1)-3").unwrap(),
            vec![
                Token::LeftParen,
                int(1),
                Token::RightParen,
                Token::Operator(Operator::Sub),
                int(3)
            ]
        );
    }

    #[test]
    fn test_unary_plus_is_dropped() {
        assert_eq!(tokenize("+a").unwrap(), vec![ident("a")]);
        assert_eq!(tokenize("+7").unwrap(), vec![int(7)]);
    }

    #[test]
    fn test_negate_before_identifier_and_group() {
        assert_eq!(
            tokenize("-a").unwrap(),
            vec![Token::Operator(Operator::Negate), ident("a")]
        );
        assert_eq!(
            tokenize("-(1)").unwrap(),
            vec![
                Token::Operator(Operator::Negate),
                Token::LeftParen,
                int(1),
                Token::RightParen
            ]
        );
    }

    #[test]
    fn test_dangling_sign_is_rejected() {
        assert_eq!(tokenize("-"), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("2*-"), Err(CalcError::InvalidExpression));
        assert_eq!(tokenize("(-)"), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_large_literal() {
        let tokens = tokenize("123456789012345678901234567890").unwrap();
        let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(tokens, vec![Token::Integer(expected)]);
    }

    #[test]
    fn test_normalize_signs() {
        assert_eq!(normalize_signs("8--5"), "8+5");
        assert_eq!(normalize_signs("8---5"), "8-5");
        assert_eq!(normalize_signs("8+++5"), "8+5");
        assert_eq!(normalize_signs("+--"), "+");
        assert_eq!(normalize_signs("+-"), "-");
        assert_eq!(normalize_signs("-+-+-"), "-");
        assert_eq!(normalize_signs("3*4"), "3*4");
    }

    #[test]
    fn test_repeated_multiplicative() {
        assert!(has_repeated_multiplicative("3**2"));
        assert!(has_repeated_multiplicative("4//2"));
        assert!(!has_repeated_multiplicative("4/2*3"));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("abc"));
        assert!(is_identifier("ABc"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a1"));
        assert!(!is_identifier("a_b"));
    }

    #[test]
    fn test_render_tokens() {
        let tokens = tokenize("-a*(2+b)").unwrap();
        assert_eq!(render_tokens(&tokens), "neg a * ( 2 + b )");
    }

    proptest! {
        #[test]
        fn prop_sign_run_collapses_by_parity(run in "[+-]{1,24}") {
            let minus_count = run.chars().filter(|&c| c == '-').count();
            let expected = if minus_count % 2 == 1 { "-" } else { "+" };
            prop_assert_eq!(normalize_signs(&run), expected);
        }

        #[test]
        fn prop_normalize_is_idempotent(input in "[0-9a-c+*/()-]{0,32}") {
            let once = normalize_signs(&input);
            prop_assert_eq!(normalize_signs(&once), once.clone());
            prop_assert!(!once.contains("++") && !once.contains("--"));
            prop_assert!(!once.contains("+-") && !once.contains("-+"));
        }
    }
}
