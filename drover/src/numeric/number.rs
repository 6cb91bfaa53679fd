use std::fmt;

use num::{BigInt, BigRational, Complex};

use super::coerce::{coerce, Coerced};
use super::kind::Kind;

/// A number of any kind in the lattice, as a tagged variant.
///
/// `Integer` and `Big` are two representations of the same kind: exact
/// integer accumulation starts in machine width and widens to
/// arbitrary precision transparently instead of overflowing.
#[derive(Debug, Clone)]
pub enum Number {
    Integer(i64),
    Big(BigInt),
    Ratio(BigRational),
    Float(f64),
    Complex(Complex<f64>),
}

impl Number {
    pub fn kind(&self) -> Kind {
        match self {
            Number::Integer(_) | Number::Big(_) => Kind::Integer,
            Number::Ratio(_) => Kind::Ratio,
            Number::Float(_) => Kind::Float,
            Number::Complex(_) => Kind::Complex,
        }
    }

    /// An exact ratio from a numerator and denominator.
    ///
    /// The fraction is reduced. A zero denominator panics, as it does for
    /// the underlying rational type.
    pub fn ratio(numer: i64, denom: i64) -> Number {
        Number::Ratio(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn complex(re: f64, im: f64) -> Number {
        Number::Complex(Complex::new(re, im))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Big(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Number::Ratio(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Complex<f64>> for Number {
    fn from(value: Complex<f64>) -> Self {
        Number::Complex(value)
    }
}

/// Cross-kind equality: both sides are aligned to their least common
/// kind first, so `Integer(8)` equals `Big(8)` and `Float(8.0)`, while
/// exact comparisons stay exact as long as both sides are exact.
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match coerce(self.clone(), other.clone()) {
            Coerced::Integer(a, b) => a == b,
            Coerced::Big(a, b) => a == b,
            Coerced::Ratio(a, b) => a == b,
            Coerced::Float(a, b) => a == b,
            Coerced::Complex(a, b) => a == b,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => i.fmt(f),
            Number::Big(b) => b.fmt(f),
            Number::Ratio(r) => r.fmt(f),
            Number::Float(x) => x.fmt(f),
            Number::Complex(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_per_variant() {
        assert_eq!(Number::from(1).kind(), Kind::Integer);
        assert_eq!(Number::from(BigInt::from(1)).kind(), Kind::Integer);
        assert_eq!(Number::ratio(1, 2).kind(), Kind::Ratio);
        assert_eq!(Number::from(1.0).kind(), Kind::Float);
        assert_eq!(Number::complex(1.0, 2.0).kind(), Kind::Complex);
    }

    #[test]
    fn test_cross_kind_equality() {
        assert_eq!(Number::from(8), Number::from(BigInt::from(8)));
        assert_eq!(Number::from(8), Number::ratio(8, 1));
        assert_eq!(Number::from(8), Number::from(8.0));
        assert_eq!(Number::from(8.0), Number::complex(8.0, 0.0));
        assert_ne!(Number::ratio(1, 3), Number::ratio(1, 2));
        // exact comparison between exact kinds does not round-trip
        // through floats
        assert_ne!(
            Number::from(BigInt::from(i64::MAX)),
            Number::from(BigInt::from(i64::MAX) - 1),
        );
    }

    #[test]
    fn test_ratio_is_reduced() {
        assert_eq!(Number::ratio(2, 4), Number::ratio(1, 2));
    }
}
