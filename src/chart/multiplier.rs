use std::fmt;

use serde::Serialize;

/// Damage multiplier a defender receives from one attacking type.
///
/// The chart itself only contains `Immune`, `Half`, `Neutral` and `Double`;
/// `Quarter` and `Quadruple` arise as products of two chart cells in the
/// dual-type cases. Variant order is ascending numeric value so derived
/// `Ord` matches multiplier magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Multiplier {
    Immune,
    Quarter,
    Half,
    Neutral,
    Double,
    Quadruple,
}

/// Inconsistency between the chart data and the score domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// A pairwise multiplier product fell outside the 6-value score domain.
    UnmappedProduct { left: Multiplier, right: Multiplier },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedProduct { left, right } => write!(
                f,
                "multiplier product {} x {} has no score mapping",
                left.value_str(),
                right.value_str()
            ),
        }
    }
}

impl std::error::Error for ChartError {}

impl Multiplier {
    pub const ALL: [Multiplier; 6] = [
        Self::Immune,
        Self::Quarter,
        Self::Half,
        Self::Neutral,
        Self::Double,
        Self::Quadruple,
    ];

    /// Base-2 exponent of the multiplier value; `None` for immune.
    const fn exponent(self) -> Option<i8> {
        match self {
            Self::Immune => None,
            Self::Quarter => Some(-2),
            Self::Half => Some(-1),
            Self::Neutral => Some(0),
            Self::Double => Some(1),
            Self::Quadruple => Some(2),
        }
    }

    const fn from_exponent(exponent: i8) -> Option<Multiplier> {
        match exponent {
            -2 => Some(Self::Quarter),
            -1 => Some(Self::Half),
            0 => Some(Self::Neutral),
            1 => Some(Self::Double),
            2 => Some(Self::Quadruple),
            _ => None,
        }
    }

    /// Combined multiplier for a dual-type defender (or dual-coverage
    /// attacker): the product of the two individual multipliers.
    ///
    /// Immunity is absorbing. A product outside the score domain (x8, x16)
    /// is a fatal chart/logic inconsistency; it never occurs for the
    /// standard chart, which [`TypeChart::verify`] checks exhaustively.
    ///
    /// [`TypeChart::verify`]: crate::chart::TypeChart::verify
    pub fn combine(self, other: Multiplier) -> Result<Multiplier, ChartError> {
        match (self.exponent(), other.exponent()) {
            (None, _) | (_, None) => Ok(Self::Immune),
            (Some(left), Some(right)) => Self::from_exponent(left + right).ok_or(
                ChartError::UnmappedProduct {
                    left: self,
                    right: other,
                },
            ),
        }
    }

    /// Decimal rendering of the multiplier value, for report output.
    pub const fn value_str(self) -> &'static str {
        match self {
            Self::Immune => "0",
            Self::Quarter => "0.25",
            Self::Half => "0.5",
            Self::Neutral => "1",
            Self::Double => "2",
            Self::Quadruple => "4",
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value_str())
    }
}
