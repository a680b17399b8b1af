//! Numeric values and their arithmetic.
//! Integers are arbitrary precision and stay exact until an operation forces
//! a float, so `7+3` reads `10`, `2^200` prints every digit and `7/2` reads
//! `3.5`.

use super::EvalError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Longest integer, in decimal digits, that is accepted or printed.
pub const MAX_INT_DIGITS: usize = 4300;

/// Every integer of at most this many bits has at most `MAX_INT_DIGITS` digits.
const MAX_INT_BITS: u64 = 14280;
/// Every integer of more than this many bits has more than `MAX_INT_DIGITS` digits.
const TOO_LONG_BITS: u64 = MAX_INT_BITS + 16;

/// A value produced by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    /// Convert to a float; integers beyond the float range overflow.
    pub fn as_f64(&self) -> Result<f64, EvalError> {
        match self {
            Number::Int(i) => i
                .to_f64()
                .filter(|f| f.is_finite())
                .ok_or(EvalError::Overflow),
            Number::Float(f) => Ok(*f),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => i.is_zero(),
            Number::Float(f) => *f == 0.0,
        }
    }

    pub fn add(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Ok(Number::Int(a + b)),
            (a, b) => Ok(Number::Float(a.as_f64()? + b.as_f64()?)),
        }
    }

    pub fn sub(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Ok(Number::Int(a - b)),
            (a, b) => Ok(Number::Float(a.as_f64()? - b.as_f64()?)),
        }
    }

    pub fn mul(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Ok(Number::Int(a * b)),
            (a, b) => Ok(Number::Float(a.as_f64()? * b.as_f64()?)),
        }
    }

    /// True division: the quotient is always a float.
    pub fn div(self, rhs: Number) -> Result<Number, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Number::Float(self.as_f64()? / rhs.as_f64()?))
    }

    /// Floor division (`//`): integers floor to an integer, a float operand
    /// gives a floored float.
    pub fn floor_div(self, rhs: Number) -> Result<Number, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Ok(Number::Int(a.div_floor(&b))),
            (a, b) => Ok(Number::Float(float_floor_div(a.as_f64()?, b.as_f64()?))),
        }
    }

    pub fn neg(self) -> Result<Number, EvalError> {
        match self {
            Number::Int(a) => Ok(Number::Int(-a)),
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }

    pub fn pow(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(base), Number::Int(exp)) if !exp.is_negative() => int_pow(base, exp),
            (Number::Int(base), Number::Int(_)) if base.is_zero() => Err(EvalError::DivisionByZero),
            (base, exp) => float_pow(base.as_f64()?, exp.as_f64()?),
        }
    }

    /// Reject integers with more than `MAX_INT_DIGITS` decimal digits.
    pub fn check_size(self) -> Result<Number, EvalError> {
        if let Number::Int(i) = &self {
            let bits = i.bits();
            let too_long = bits > TOO_LONG_BITS
                || (bits > MAX_INT_BITS && i.magnitude().to_string().len() > MAX_INT_DIGITS);
            if too_long {
                return Err(EvalError::Overflow);
            }
        }
        Ok(self)
    }
}

fn int_pow(base: BigInt, exp: BigInt) -> Result<Number, EvalError> {
    // Bases whose powers never grow can take any exponent.
    if base.is_zero() {
        return Ok(Number::Int(if exp.is_zero() { BigInt::one() } else { BigInt::zero() }));
    }
    if base.is_one() {
        return Ok(Number::Int(base));
    }
    if base == -BigInt::one() {
        return Ok(Number::Int(if exp.is_even() { BigInt::one() } else { base }));
    }
    let exp = exp.to_u32().ok_or(EvalError::Overflow)?;
    // |base| >= 2, so the result has at least (bits - 1) * exp bits.
    if (base.bits() - 1).saturating_mul(u64::from(exp)) > TOO_LONG_BITS {
        return Err(EvalError::Overflow);
    }
    Ok(Number::Int(base.pow(exp)))
}

fn float_pow(base: f64, exp: f64) -> Result<Number, EvalError> {
    if base == 0.0 && exp < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    // Would be a complex number; see `EvalError::Domain`.
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return Err(EvalError::Domain);
    }
    let result = base.powf(exp);
    if result.is_infinite() && base.is_finite() && exp.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(Number::Float(result))
}

/// Floor of `a / b` computed from the remainder, so `7.5 // 2` is exactly
/// `3.0` and `-7.5 // 2` is `-4.0`. `b` is non-zero.
fn float_floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Render a float with the shortest round-trip digits.
///
/// Fixed notation (always with a fractional part) is used when the decimal
/// exponent lies in `[-4, 16)`, exponent notation (`1e+16`, `2.5e-05`)
/// otherwise.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{:e}", x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let point = exp as usize + 1;
            if digits.len() > point {
                format!("{}.{}", &digits[..point], &digits[point..])
            } else {
                format!("{}{}.0", digits, "0".repeat(point - digits.len()))
            }
        } else {
            format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
        }
    } else {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{}e{}{:02}", head, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{:02}", head, tail, exp_sign, exp.abs())
        }
    };

    format!("{}{}", sign, body)
}
