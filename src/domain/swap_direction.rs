//! Trade direction across the pooled pair.

use core::fmt;

/// Which way a swap moves through the pool.
///
/// Resolved exactly once per call from the caller's two-entry path, then
/// used to pick the `(reserve_in, reserve_out)` pair and the ledgers to
/// touch. Modeling the direction as a tagged choice keeps every later
/// decision a `match` rather than a repeated address comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Selling token A for token B.
    AToB,
    /// Selling token B for token A.
    BToA,
}

impl SwapDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Returns `true` if token A is the input side.
    #[must_use]
    pub const fn input_is_a(&self) -> bool {
        matches!(self, Self::AToB)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_flips() {
        assert_eq!(SwapDirection::AToB.reversed(), SwapDirection::BToA);
        assert_eq!(SwapDirection::BToA.reversed(), SwapDirection::AToB);
    }

    #[test]
    fn input_side() {
        assert!(SwapDirection::AToB.input_is_a());
        assert!(!SwapDirection::BToA.input_is_a());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", SwapDirection::AToB), "A→B");
        assert_eq!(format!("{}", SwapDirection::BToA), "B→A");
    }
}
