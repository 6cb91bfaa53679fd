/// Position in the numeric-kind lattice: integer, ratio, float, complex,
/// in widening order.
///
/// A kind is only ever promoted as wider operands are absorbed, never
/// demoted. Arbitrary-precision integers share the integer kind with
/// machine integers; the representation widens, the kind does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Integer,
    Ratio,
    Float,
    Complex,
}

impl Kind {
    /// The least upper bound of two kinds.
    pub fn widen(self, other: Kind) -> Kind {
        self.max(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_is_monotone() {
        assert_eq!(Kind::Integer.widen(Kind::Ratio), Kind::Ratio);
        assert_eq!(Kind::Ratio.widen(Kind::Integer), Kind::Ratio);
        assert_eq!(Kind::Float.widen(Kind::Ratio), Kind::Float);
        assert_eq!(Kind::Integer.widen(Kind::Complex), Kind::Complex);
        assert_eq!(Kind::Complex.widen(Kind::Float), Kind::Complex);
    }
}
