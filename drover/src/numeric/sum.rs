use std::mem;

use num::{BigInt, BigRational, Complex};

use super::coerce::{big_to_f64, into_complex, ratio_to_f64};
use super::number::Number;

/// Kind-aware summation accumulator.
///
/// The accumulator starts at the narrowest kind and widens monotonically
/// as operands are absorbed:
///
/// - exact integers accumulate in machine width and promote to arbitrary
///   precision transparently on overflow;
/// - an exact ratio keeps the accumulation exact;
/// - the first float converts the whole accumulation to floating point,
///   which from then on uses compensated (Kahan-Babuska) summation, so
///   the rounding error of the final result is bounded independent of
///   term count and cancellation order;
/// - a complex operand widens everything to complex. The compensation
///   gathered so far is folded into the real part at the transition; the
///   complex path itself is plain float arithmetic.
pub struct Summation {
    acc: Acc,
}

enum Acc {
    Untouched,
    Integer(i64),
    Big(BigInt),
    Ratio(BigRational),
    Float { total: f64, compensation: f64 },
    Complex(Complex<f64>),
}

impl Summation {
    /// An accumulator that has absorbed nothing; finishing it yields
    /// integer zero by convention.
    pub fn new() -> Self {
        Summation { acc: Acc::Untouched }
    }

    /// An accumulator seeded with an explicit initial value, which also
    /// sets the starting kind.
    pub fn seeded(init: Number) -> Self {
        let mut summation = Summation::new();
        summation.absorb(init);
        summation
    }

    pub fn absorb(&mut self, n: Number) {
        let acc = mem::replace(&mut self.acc, Acc::Untouched);
        self.acc = match (acc, n) {
            (Acc::Untouched, n) => seed(n),

            (Acc::Integer(a), Number::Integer(b)) => match a.checked_add(b) {
                Some(v) => Acc::Integer(v),
                None => Acc::Big(BigInt::from(a) + b),
            },
            (Acc::Integer(a), Number::Big(b)) => Acc::Big(BigInt::from(a) + b),
            (Acc::Integer(a), Number::Ratio(r)) => {
                Acc::Ratio(BigRational::from_integer(BigInt::from(a)) + r)
            }
            (Acc::Integer(a), Number::Float(f)) => kahan(a as f64, 0.0, f),
            (Acc::Integer(a), Number::Complex(c)) => {
                Acc::Complex(Complex::new(a as f64, 0.0) + c)
            }

            (Acc::Big(a), Number::Integer(b)) => Acc::Big(a + b),
            (Acc::Big(a), Number::Big(b)) => Acc::Big(a + b),
            (Acc::Big(a), Number::Ratio(r)) => Acc::Ratio(BigRational::from_integer(a) + r),
            (Acc::Big(a), Number::Float(f)) => kahan(big_to_f64(&a), 0.0, f),
            (Acc::Big(a), Number::Complex(c)) => {
                Acc::Complex(Complex::new(big_to_f64(&a), 0.0) + c)
            }

            (Acc::Ratio(a), Number::Integer(b)) => {
                Acc::Ratio(a + BigRational::from_integer(BigInt::from(b)))
            }
            (Acc::Ratio(a), Number::Big(b)) => Acc::Ratio(a + BigRational::from_integer(b)),
            (Acc::Ratio(a), Number::Ratio(r)) => Acc::Ratio(a + r),
            (Acc::Ratio(a), Number::Float(f)) => kahan(ratio_to_f64(&a), 0.0, f),
            (Acc::Ratio(a), Number::Complex(c)) => {
                Acc::Complex(Complex::new(ratio_to_f64(&a), 0.0) + c)
            }

            (Acc::Float { total, compensation }, Number::Integer(b)) => {
                kahan(total, compensation, b as f64)
            }
            (Acc::Float { total, compensation }, Number::Big(b)) => {
                kahan(total, compensation, big_to_f64(&b))
            }
            (Acc::Float { total, compensation }, Number::Ratio(r)) => {
                kahan(total, compensation, ratio_to_f64(&r))
            }
            (Acc::Float { total, compensation }, Number::Float(f)) => {
                kahan(total, compensation, f)
            }
            (Acc::Float { total, compensation }, Number::Complex(c)) => {
                Acc::Complex(Complex::new(total + compensation, 0.0) + c)
            }

            (Acc::Complex(a), n) => Acc::Complex(a + into_complex(n)),
        };
    }

    /// The accumulated sum, carrying the widest kind touched.
    pub fn finish(self) -> Number {
        match self.acc {
            Acc::Untouched => Number::Integer(0),
            Acc::Integer(i) => Number::Integer(i),
            Acc::Big(b) => Number::Big(b),
            Acc::Ratio(r) => Number::Ratio(r),
            Acc::Float { total, compensation } => Number::Float(total + compensation),
            Acc::Complex(c) => Number::Complex(c),
        }
    }
}

impl Default for Summation {
    fn default() -> Self {
        Summation::new()
    }
}

fn seed(n: Number) -> Acc {
    match n {
        Number::Integer(i) => Acc::Integer(i),
        Number::Big(b) => Acc::Big(b),
        Number::Ratio(r) => Acc::Ratio(r),
        Number::Float(f) => Acc::Float {
            total: f,
            compensation: 0.0,
        },
        Number::Complex(c) => Acc::Complex(c),
    }
}

// Kahan-Babuska (Neumaier variant): the correction term absorbs whichever
// operand lost bits in the addition.
fn kahan(total: f64, compensation: f64, x: f64) -> Acc {
    let new_total = total + x;
    let compensation = compensation
        + if total.abs() >= x.abs() {
            (total - new_total) + x
        } else {
            (x - new_total) + total
        };
    Acc::Float {
        total: new_total,
        compensation,
    }
}

#[cfg(test)]
mod tests {
    use super::super::kind::Kind;
    use super::*;

    fn sum_of(numbers: Vec<Number>) -> Number {
        let mut acc = Summation::new();
        for n in numbers {
            acc.absorb(n);
        }
        acc.finish()
    }

    #[test]
    fn test_empty_sum_is_integer_zero() {
        let result = sum_of(vec![]);
        assert_eq!(result.kind(), Kind::Integer);
        assert_eq!(result, Number::from(0));
    }

    #[test]
    fn test_integer_ladder() {
        assert_eq!(sum_of(vec![Number::from(3)]), Number::from(3));
        assert_eq!(
            sum_of(vec![Number::from(3), Number::from(5), Number::from(7)]),
            Number::from(15)
        );
    }

    #[test]
    fn test_kind_ladder() {
        let r = sum_of(vec![Number::from(3), Number::ratio(5, 1)]);
        assert_eq!(r.kind(), Kind::Ratio);
        assert_eq!(r, Number::from(8));

        let f = sum_of(vec![Number::from(3), Number::ratio(5, 1), Number::from(7.0)]);
        assert_eq!(f.kind(), Kind::Float);
        assert_eq!(f, Number::from(15.0));

        let c = sum_of(vec![
            Number::from(3),
            Number::ratio(5, 1),
            Number::complex(0.0, 1.0),
        ]);
        assert_eq!(c.kind(), Kind::Complex);
        assert_eq!(c, Number::complex(8.0, 1.0));

        let cf = sum_of(vec![
            Number::from(3),
            Number::ratio(5, 1),
            Number::from(7.0),
            Number::complex(0.0, 1.0),
        ]);
        assert_eq!(cf, Number::complex(15.0, 1.0));
    }

    #[test]
    fn test_integer_overflow_widens() {
        let max = Number::from(i64::MAX);
        assert_eq!(
            sum_of(vec![max.clone(), max.clone()]),
            Number::from(BigInt::from(i64::MAX) * 2)
        );
        assert_eq!(
            sum_of(vec![max; 10]),
            Number::from(BigInt::from(i64::MAX) * 10)
        );
        let min = Number::from(i64::MIN);
        assert_eq!(
            sum_of(vec![min.clone(), min]),
            Number::from(BigInt::from(i64::MIN) * 2)
        );
    }

    #[test]
    fn test_widening_and_cancelling_round_trip() {
        // [MAX, 1, -MAX, -1] ten times over nets out to exactly zero
        let mut acc = Summation::new();
        for _ in 0..10 {
            acc.absorb(Number::from(i64::MAX));
            acc.absorb(Number::from(1));
            acc.absorb(-Number::from(i64::MAX));
            acc.absorb(Number::from(-1));
        }
        assert_eq!(acc.finish(), Number::from(0));
    }

    #[test]
    fn test_exact_ratio_accumulation() {
        assert_eq!(
            sum_of(vec![Number::ratio(1, 2), Number::from(1)]),
            Number::ratio(3, 2)
        );
        assert_eq!(
            sum_of(vec![Number::ratio(1, 2), Number::ratio(1, 3)]),
            Number::ratio(5, 6)
        );
    }

    #[test]
    fn test_compensated_float_summation() {
        // small is far below the precision of large, so naive running
        // addition would lose every one of the ten small terms
        let large = 1.0e8_f64;
        let small = 1.0e-9_f64;
        assert_eq!(large + small, large);

        let mut numbers = vec![Number::from(large)];
        numbers.extend(std::iter::repeat(Number::from(small)).take(10));
        assert_eq!(sum_of(numbers), Number::from(large + small * 10.0));

        // same, reaching the float path from an exact ratio
        let mut numbers = vec![Number::ratio(100_000_000, 1)];
        numbers.extend(std::iter::repeat(Number::from(small)).take(10));
        assert_eq!(sum_of(numbers), Number::from(large + small * 10.0));
    }

    #[test]
    fn test_compensation_survives_cancellation() {
        let large = 1.0e8_f64;
        let small = 1.0e-9_f64;
        let result = sum_of(vec![
            Number::from(large),
            Number::from(small),
            Number::from(-large),
        ]);
        assert_eq!(result, Number::from(small));
    }

    #[test]
    fn test_seeded_kind() {
        let f = Summation::seeded(Number::from(0.0));
        assert_eq!(f.finish().kind(), Kind::Float);

        let mut seeded = Summation::seeded(Number::from(0.5));
        seeded.absorb(Number::from(3));
        assert_eq!(seeded.finish(), Number::from(3.5));
    }

    #[test]
    fn test_float_to_complex_folds_compensation() {
        let large = 1.0e8_f64;
        let small = 1.0e-9_f64;
        let mut acc = Summation::new();
        acc.absorb(Number::from(large));
        for _ in 0..10 {
            acc.absorb(Number::from(small));
        }
        acc.absorb(Number::complex(0.0, 1.0));
        assert_eq!(
            acc.finish(),
            Number::complex(large + small * 10.0, 1.0)
        );
    }
}
