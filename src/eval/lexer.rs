//! Tokenizer for calculator expressions.

use super::number::{Number, MAX_INT_DIGITS};
use super::EvalError;
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    Slash,
    /// `//`
    FloorDiv,
    /// `**`, or the caret spelling `^`
    Power,
    LParen,
    RParen,
}

/// Split an expression into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        match c {
            c if c.is_whitespace() => pos += 1,
            '0'..='9' | '.' => {
                let (number, next) = lex_number(&chars, pos)?;
                tokens.push(Token::Number(number));
                pos = next;
            }
            '+' => {
                tokens.push(Token::Plus);
                pos += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                pos += 1;
            }
            '*' if chars.get(pos + 1) == Some(&'*') => {
                tokens.push(Token::Power);
                pos += 2;
            }
            '*' => {
                tokens.push(Token::Star);
                pos += 1;
            }
            '/' if chars.get(pos + 1) == Some(&'/') => {
                tokens.push(Token::FloorDiv);
                pos += 2;
            }
            '/' => {
                tokens.push(Token::Slash);
                pos += 1;
            }
            '^' => {
                tokens.push(Token::Power);
                pos += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                pos += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                pos += 1;
            }
            other => {
                return Err(EvalError::Syntax(format!("unexpected character '{}'", other)));
            }
        }
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`; returns the value and the
/// position just past it.
fn lex_number(chars: &[char], start: usize) -> Result<(Number, usize), EvalError> {
    let mut pos = start;
    let take_digits = |pos: &mut usize| -> String {
        let mut s = String::new();
        while let Some(c) = chars.get(*pos).filter(|c| c.is_ascii_digit()) {
            s.push(*c);
            *pos += 1;
        }
        s
    };

    let int_part = take_digits(&mut pos);
    let mut frac_part = None;
    if chars.get(pos) == Some(&'.') {
        pos += 1;
        frac_part = Some(take_digits(&mut pos));
    }

    if int_part.is_empty() && frac_part.as_deref().map_or(true, str::is_empty) {
        return Err(EvalError::Syntax("invalid number".to_string()));
    }

    let mut exponent = None;
    if matches!(chars.get(pos), Some('e') | Some('E')) {
        pos += 1;
        let mut exp = String::new();
        if let Some(sign) = chars.get(pos).filter(|c| **c == '+' || **c == '-') {
            exp.push(*sign);
            pos += 1;
        }
        let digits = take_digits(&mut pos);
        if digits.is_empty() {
            return Err(EvalError::Syntax("invalid exponent".to_string()));
        }
        exp.push_str(&digits);
        exponent = Some(exp);
    }

    // A literal glued to a name-like character (`2e`, `5x`) is malformed.
    if chars.get(pos).is_some_and(|c| c.is_alphanumeric() || *c == '_') {
        return Err(EvalError::Syntax("invalid number".to_string()));
    }

    if frac_part.is_none() && exponent.is_none() {
        if int_part.len() > 1 && int_part.starts_with('0') && int_part.chars().any(|c| c != '0') {
            return Err(EvalError::Syntax(
                "leading zeros in decimal integer literals are not permitted".to_string(),
            ));
        }
        if int_part.len() > MAX_INT_DIGITS {
            return Err(EvalError::Overflow);
        }
        let value = int_part
            .parse::<BigInt>()
            .map_err(|e| EvalError::Syntax(format!("invalid number: {}", e)))?;
        return Ok((Number::Int(value), pos));
    }

    let normalized = format!(
        "{}.{}e{}",
        if int_part.is_empty() { "0" } else { &int_part },
        match frac_part.as_deref() {
            Some(f) if !f.is_empty() => f,
            _ => "0",
        },
        exponent.as_deref().unwrap_or("0"),
    );
    let value = normalized
        .parse::<f64>()
        .map_err(|e| EvalError::Syntax(format!("invalid number: {}", e)))?;
    Ok((Number::Float(value), pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Token {
        Token::Number(Number::Int(BigInt::from(v)))
    }

    #[test]
    fn test_tokenize_operators() {
        let tokens = tokenize("1+2-3*4/5").unwrap();
        assert_eq!(
            tokens,
            vec![
                int(1),
                Token::Plus,
                int(2),
                Token::Minus,
                int(3),
                Token::Star,
                int(4),
                Token::Slash,
                int(5),
            ]
        );
    }

    #[test]
    fn test_double_slash_is_floor_division() {
        assert_eq!(tokenize("7//2").unwrap(), vec![int(7), Token::FloorDiv, int(2)]);
        assert_eq!(
            tokenize("7///2").unwrap(),
            vec![int(7), Token::FloorDiv, Token::Slash, int(2)]
        );
    }

    #[test]
    fn test_caret_and_double_star_are_power() {
        assert_eq!(tokenize("2^3").unwrap(), tokenize("2**3").unwrap());
        assert_eq!(tokenize("2^3").unwrap()[1], Token::Power);
    }

    #[test]
    fn test_float_literal_forms() {
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(Number::Float(5.0))]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(Number::Float(0.5))]);
        assert_eq!(tokenize("1.5e+20").unwrap(), vec![Token::Number(Number::Float(1.5e20))]);
        assert_eq!(tokenize("1e-05").unwrap(), vec![Token::Number(Number::Float(1e-5))]);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(tokenize(" 1 +\t2 ").unwrap().len(), 3);
    }

    #[test]
    fn test_leading_zero_integer_rejected() {
        assert!(matches!(tokenize("07"), Err(EvalError::Syntax(_))));
        assert_eq!(tokenize("00").unwrap(), vec![int(0)]);
        assert_eq!(tokenize("07.5").unwrap(), vec![Token::Number(Number::Float(7.5))]);
    }

    #[test]
    fn test_malformed_literals() {
        assert!(matches!(tokenize("."), Err(EvalError::Syntax(_))));
        assert!(matches!(tokenize("1e"), Err(EvalError::Syntax(_))));
        assert!(matches!(tokenize("2x"), Err(EvalError::Syntax(_))));
        assert!(matches!(tokenize("inf"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_long_integer_literals() {
        let literal = "9".repeat(60);
        let expected: BigInt = literal.parse().unwrap();
        assert_eq!(tokenize(&literal).unwrap(), vec![Token::Number(Number::Int(expected))]);

        let too_long = "9".repeat(MAX_INT_DIGITS + 1);
        assert_eq!(tokenize(&too_long), Err(EvalError::Overflow));
    }
}
