use std::ops::{Add, Mul, Neg};

use num::BigInt;

use super::coerce::{coerce, Coerced};
use super::number::Number;

/// Lattice-promoting addition. The result kind is the least upper bound
/// of the operand kinds; machine integers widen to big integers instead
/// of overflowing.
impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match coerce(self, rhs) {
            Coerced::Integer(a, b) => match a.checked_add(b) {
                Some(v) => Number::Integer(v),
                None => Number::Big(BigInt::from(a) + b),
            },
            Coerced::Big(a, b) => Number::Big(a + b),
            Coerced::Ratio(a, b) => Number::Ratio(a + b),
            Coerced::Float(a, b) => Number::Float(a + b),
            Coerced::Complex(a, b) => Number::Complex(a + b),
        }
    }
}

/// Lattice-promoting multiplication, with the same widening rules as
/// addition.
impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match coerce(self, rhs) {
            Coerced::Integer(a, b) => match a.checked_mul(b) {
                Some(v) => Number::Integer(v),
                None => Number::Big(BigInt::from(a) * b),
            },
            Coerced::Big(a, b) => Number::Big(a * b),
            Coerced::Ratio(a, b) => Number::Ratio(a * b),
            Coerced::Float(a, b) => Number::Float(a * b),
            Coerced::Complex(a, b) => Number::Complex(a * b),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(i) => match i.checked_neg() {
                Some(v) => Number::Integer(v),
                None => Number::Big(-BigInt::from(i)),
            },
            Number::Big(b) => Number::Big(-b),
            Number::Ratio(r) => Number::Ratio(-r),
            Number::Float(f) => Number::Float(-f),
            Number::Complex(c) => Number::Complex(-c),
        }
    }
}
