//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the numeric type that lives on
//! the stack. Values are either arbitrary-precision integers or exact
//! rationals; there is no floating point inside the engine.
//!
//! # Normalization
//!
//! Every arithmetic result passes through [`Value::from_ratio`], which
//! collapses integer-valued rationals back to [`Value::Int`]. The invariant
//! this buys is that a stored [`Value::Ratio`] always has denominator > 1,
//! so variant tags double as an "is this an integer" test.
//!
//! # Rendering
//!
//! Integers display as plain decimal at arbitrary precision. Non-integer
//! rationals display as their nearest `f64` decimal form, which is what the
//! `n` instruction prints.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// A number on the stack: exact integer or exact rational
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(BigInt),
    Ratio(BigRational),
}

impl Value {
    /// Wrap a rational, collapsing to `Int` when the denominator is 1
    pub fn from_ratio(r: BigRational) -> Self {
        if r.is_integer() {
            Value::Int(r.to_integer())
        } else {
            Value::Ratio(r)
        }
    }

    /// The integer 1 or 0 for a comparison result
    pub fn truth(b: bool) -> Self {
        Value::Int(BigInt::from(if b { 1 } else { 0 }))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => n.is_zero(),
            Value::Ratio(r) => r.is_zero(),
        }
    }

    /// The value as an `i64` if it is an integer in range, else `None`
    ///
    /// Used wherever an instruction needs a coordinate, count, or code
    /// point; fractional values are rejected rather than truncated.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Value::Int(n) => n.to_i64(),
            Value::Ratio(_) => None,
        }
    }

    /// The value truncated toward zero as a Unicode scalar, for `o`
    pub fn as_code_point(&self) -> Option<char> {
        let n = match self {
            Value::Int(n) => n.clone(),
            Value::Ratio(r) => r.trunc().to_integer(),
        };
        n.to_u32().and_then(char::from_u32)
    }

    fn to_ratio(&self) -> BigRational {
        match self {
            Value::Int(n) => BigRational::from_integer(n.clone()),
            Value::Ratio(r) => r.clone(),
        }
    }

    pub fn add(self, other: Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a + b),
            (a, b) => Value::from_ratio(a.to_ratio() + b.to_ratio()),
        }
    }

    pub fn sub(self, other: Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a - b),
            (a, b) => Value::from_ratio(a.to_ratio() - b.to_ratio()),
        }
    }

    pub fn mul(self, other: Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a * b),
            (a, b) => Value::from_ratio(a.to_ratio() * b.to_ratio()),
        }
    }

    /// Exact division; integer-valued results collapse to `Int`
    pub fn div(self, other: Value) -> Result<Value, String> {
        if other.is_zero() {
            return Err("division by zero".to_string());
        }
        Ok(Value::from_ratio(self.to_ratio() / other.to_ratio()))
    }

    /// Floored modulo, exact over rationals: `self - other * floor(self / other)`
    pub fn rem(self, other: Value) -> Result<Value, String> {
        if other.is_zero() {
            return Err("modulo by zero".to_string());
        }
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.mod_floor(&b))),
            (a, b) => {
                let (a, b) = (a.to_ratio(), b.to_ratio());
                let quotient = (&a / &b).floor();
                Ok(Value::from_ratio(a - b * quotient))
            }
        }
    }

    /// Total order across both variants
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (a, b) => a.to_ratio().cmp(&b.to_ratio()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Ratio(r) => {
                let approx = r.to_f64().unwrap_or_else(|| {
                    // magnitudes beyond f64 range saturate
                    if r.is_negative() {
                        f64::NEG_INFINITY
                    } else {
                        f64::INFINITY
                    }
                });
                write!(f, "{}", approx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_collapses_to_int() {
        let six = Value::from(6);
        let two = Value::from(2);
        assert_eq!(six.div(two).unwrap(), Value::from(3));
    }

    #[test]
    fn test_division_keeps_exact_ratio() {
        let five = Value::from(5);
        let two = Value::from(2);
        let half = five.div(two).unwrap();

        assert!(matches!(half, Value::Ratio(_)));
        assert_eq!(half.to_string(), "2.5");
    }

    #[test]
    fn test_mixed_arithmetic_renormalizes() {
        // 5/2 + 1/2 = 3, which must come back as an integer
        let a = Value::from(5).div(Value::from(2)).unwrap();
        let b = Value::from(1).div(Value::from(2)).unwrap();
        assert_eq!(a.add(b), Value::from(3));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(Value::from(1).div(Value::from(0)).is_err());
        assert!(Value::from(1).rem(Value::from(0)).is_err());
    }

    #[test]
    fn test_floored_modulo() {
        assert_eq!(Value::from(7).rem(Value::from(3)).unwrap(), Value::from(1));
        assert_eq!(Value::from(-7).rem(Value::from(3)).unwrap(), Value::from(2));
        assert_eq!(Value::from(7).rem(Value::from(-3)).unwrap(), Value::from(-2));
    }

    #[test]
    fn test_compare_across_variants() {
        let half = Value::from(1).div(Value::from(2)).unwrap();

        assert_eq!(half.compare(&Value::from(1)), Ordering::Less);
        assert_eq!(half.compare(&Value::from(0)), Ordering::Greater);
        assert_eq!(half.compare(&half), Ordering::Equal);
    }

    #[test]
    fn test_as_index() {
        assert_eq!(Value::from(12).as_index(), Some(12));
        assert_eq!(Value::from(-1).as_index(), Some(-1));

        let half = Value::from(1).div(Value::from(2)).unwrap();
        assert_eq!(half.as_index(), None);
    }

    #[test]
    fn test_code_point_truncates() {
        assert_eq!(Value::from(104).as_code_point(), Some('h'));
        assert_eq!(Value::from(-1).as_code_point(), None);

        // 209/2 truncates to 104
        let v = Value::from(209).div(Value::from(2)).unwrap();
        assert_eq!(v.as_code_point(), Some('h'));
    }

    #[test]
    fn test_display_integer() {
        assert_eq!(Value::from(0).to_string(), "0");
        assert_eq!(Value::from(-42).to_string(), "-42");
    }
}
