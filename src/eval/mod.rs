//! Eval module - arithmetic expression evaluation
//!
//! Expressions are parsed with a small dedicated grammar rather than handed
//! to a general-purpose interpreter: only numbers, `+ - * /`, floor division
//! `//`, `**` (also spelled `^`) and parentheses are accepted.

mod lexer;
mod number;
mod parser;

use number::Number;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("syntax error: {0}")]
    Syntax(String),
    /// A float result out of range, an integer too long to print, or an
    /// exponent too large to compute.
    #[error("numeric result out of range")]
    Overflow,
    /// A negative base raised to a fractional power. Python evaluates this
    /// to a complex number and the display shows its repr, e.g.
    /// `(1.0000000000000002+1.7320508075688772j)` for `(-8)**(1/3)`; this
    /// evaluator has no complex type and reports a generic error instead.
    #[error("result is not a real number")]
    Domain,
}

/// Evaluate a calculator expression.
pub fn evaluate(expression: &str) -> Result<Number, EvalError> {
    let tokens = lexer::tokenize(expression)?;
    let tree = parser::parse(&tokens)?;
    tree.eval()?.check_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(expression: &str) -> String {
        match evaluate(expression) {
            Ok(n) => n.to_string(),
            Err(e) => format!("<{}>", e),
        }
    }

    #[test]
    fn test_basic_button_sequences() {
        assert_eq!(show("7+3"), "10");
        assert_eq!(show("9-12"), "-3");
        assert_eq!(show("6*7"), "42");
        assert_eq!(show("7/2"), "3.5");
        assert_eq!(show("6/3"), "2.0");
        assert_eq!(show("2.5*2"), "5.0");
        assert_eq!(show("0.1+0.2"), "0.30000000000000004");
    }

    #[test]
    fn test_caret_power() {
        assert_eq!(show("2^10"), "1024");
        assert_eq!(show("2^-1"), "0.5");
        assert_eq!(show("9^0.5"), "3.0");
    }

    #[test]
    fn test_result_can_be_extended() {
        // A previous result becomes the start of the next expression.
        assert_eq!(show("3.5+1"), "4.5");
        assert_eq!(show("-3*2"), "-6");
        assert_eq!(show("1e+16*10"), "1e+17");
    }

    #[test]
    fn test_division_by_zero_is_distinct() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/(2-2)"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("0^-1"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/0.0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_generic_failures() {
        assert!(matches!(evaluate("7+"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("07+1"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1..2"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("inf+1"), Err(EvalError::Syntax(_))));
        assert_eq!(evaluate("(-8)^(1/3)"), Err(EvalError::Domain));
        assert_eq!(evaluate("10.0^400"), Err(EvalError::Overflow));
    }

    #[test]
    fn test_floor_division() {
        assert_eq!(show("7//2"), "3");
        assert_eq!(show("-7//2"), "-4");
        assert_eq!(show("7.5//2"), "3.0");
        assert_eq!(show("1+7//2*2"), "7");
        assert_eq!(evaluate("7//0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("7.5//0.0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_big_integers_print_exactly() {
        assert_eq!(
            show("2^200"),
            "1606938044258990275541962092341162602522202993782792835301376"
        );
        assert_eq!(
            show("99999999999999999999*99999999999999999999"),
            "9999999999999999999800000000000000000001"
        );
        assert_eq!(show("2**64-2**64+1"), "1");
        // Only the conversion to float can overflow.
        assert_eq!(evaluate("2^2000/1"), Err(EvalError::Overflow));
        assert_eq!(evaluate("10^4300"), Err(EvalError::Overflow));
        assert_eq!(show("10^4299").len(), 4300);
    }

    #[test]
    fn test_long_chain_evaluates() {
        let input = vec!["1"; 20_000].join("+");
        assert_eq!(show(&input), "20000");
        let input = vec!["2"; 20_000].join("*");
        assert_eq!(evaluate(&input), Err(EvalError::Overflow));
    }

    #[test]
    fn test_names_are_not_evaluated() {
        assert!(matches!(evaluate("__import__('os')"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EvalError::Syntax("empty expression".to_string()).to_string(),
            "syntax error: empty expression"
        );
    }
}
