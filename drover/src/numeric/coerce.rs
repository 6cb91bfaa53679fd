use num::bigint::Sign;
use num::{BigInt, BigRational, Complex};
use num_traits::ToPrimitive;

use super::kind::Kind;
use super::number::Number;

/// Two numbers aligned to their least common kind, ready for a binary
/// operation.
pub(crate) enum Coerced {
    Integer(i64, i64),
    Big(BigInt, BigInt),
    Ratio(BigRational, BigRational),
    Float(f64, f64),
    Complex(Complex<f64>, Complex<f64>),
}

pub(crate) fn coerce(a: Number, b: Number) -> Coerced {
    match a.kind().widen(b.kind()) {
        Kind::Integer => match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Coerced::Integer(x, y),
            (x, y) => Coerced::Big(into_big(x), into_big(y)),
        },
        Kind::Ratio => Coerced::Ratio(into_ratio(a), into_ratio(b)),
        Kind::Float => Coerced::Float(into_f64(a), into_f64(b)),
        Kind::Complex => Coerced::Complex(into_complex(a), into_complex(b)),
    }
}

fn into_big(n: Number) -> BigInt {
    match n {
        Number::Integer(i) => BigInt::from(i),
        Number::Big(b) => b,
        _ => unreachable!("widened to integer from a non-integer kind"),
    }
}

fn into_ratio(n: Number) -> BigRational {
    match n {
        Number::Integer(i) => BigRational::from_integer(BigInt::from(i)),
        Number::Big(b) => BigRational::from_integer(b),
        Number::Ratio(r) => r,
        _ => unreachable!("widened to ratio from a wider kind"),
    }
}

pub(crate) fn into_f64(n: Number) -> f64 {
    match n {
        Number::Integer(i) => i as f64,
        Number::Big(b) => big_to_f64(&b),
        Number::Ratio(r) => ratio_to_f64(&r),
        Number::Float(f) => f,
        Number::Complex(_) => unreachable!("widened to float from complex"),
    }
}

pub(crate) fn into_complex(n: Number) -> Complex<f64> {
    match n {
        Number::Complex(c) => c,
        real => Complex::new(into_f64(real), 0.0),
    }
}

pub(crate) fn big_to_f64(b: &BigInt) -> f64 {
    match b.to_f64() {
        Some(f) => f,
        None => signed_infinity(b.sign()),
    }
}

pub(crate) fn ratio_to_f64(r: &BigRational) -> f64 {
    match r.to_f64() {
        Some(f) => f,
        None => signed_infinity(r.numer().sign()),
    }
}

fn signed_infinity(sign: Sign) -> f64 {
    if sign == Sign::Minus {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}
