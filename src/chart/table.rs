//! The fixed 18x18 type-effectiveness chart.
//!
//! Cells store the final multiplier values directly; there is no load-time
//! rescale step. Rows are attackers, columns are defenders, both in
//! [`TypeId::ALL`] order.

use crate::chart::multiplier::{ChartError, Multiplier};
use crate::chart::types::{TypeId, TYPE_COUNT};

use Multiplier::{Double as D, Half as H, Immune as X, Neutral as N};

/// Square matrix of damage multipliers, `cells[attacker][defender]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    cells: [[Multiplier; TYPE_COUNT]; TYPE_COUNT],
}

const STANDARD_CHART: TypeChart = TypeChart {
    cells: [
        // Normal
        [N, N, N, N, N, H, N, X, H, N, N, N, N, N, N, N, N, N],
        // Fighting
        [D, N, H, H, N, D, H, X, D, N, N, N, N, H, D, N, D, H],
        // Flying
        [N, D, N, N, N, H, D, N, H, N, N, D, H, N, N, N, N, N],
        // Poison
        [N, N, N, H, H, H, N, H, X, N, N, D, N, N, N, N, N, D],
        // Ground
        [N, N, X, D, N, D, H, N, D, D, N, H, D, N, N, N, N, N],
        // Rock
        [N, H, D, N, H, N, D, N, H, D, N, N, N, N, D, N, N, N],
        // Bug
        [N, H, H, H, N, N, N, H, H, H, N, D, N, D, N, N, D, H],
        // Ghost
        [X, N, N, N, N, N, N, D, N, N, N, N, N, D, N, N, H, N],
        // Steel
        [N, N, N, N, N, D, N, N, H, H, H, N, H, N, D, N, N, D],
        // Fire
        [N, N, N, N, N, H, D, N, D, H, H, D, N, N, D, H, N, N],
        // Water
        [N, N, N, N, D, D, N, N, N, D, H, H, N, N, N, H, N, N],
        // Grass
        [N, N, H, H, D, D, H, N, H, H, D, H, N, N, N, H, N, N],
        // Electric
        [N, N, D, N, X, N, N, N, N, N, D, H, H, N, N, H, N, N],
        // Psychic
        [N, D, N, D, N, N, N, N, H, N, N, N, N, H, N, N, X, N],
        // Ice
        [N, N, D, N, D, N, N, N, H, H, H, D, N, N, H, D, N, N],
        // Dragon
        [N, N, N, N, N, N, N, N, H, N, N, N, N, N, N, D, N, X],
        // Dark
        [N, H, N, N, N, N, N, D, N, N, N, N, N, D, N, N, H, H],
        // Fairy
        [N, D, N, H, N, N, N, N, H, H, N, N, N, N, N, D, D, N],
    ],
};

impl TypeChart {
    /// The standard chart. Constant and complete; every attacker/defender
    /// pair is defined.
    pub fn standard() -> &'static TypeChart {
        &STANDARD_CHART
    }

    pub fn multiplier(&self, attacker: TypeId, defender: TypeId) -> Multiplier {
        self.cells[attacker.index()][defender.index()]
    }

    /// Exhaustive consistency check: no raw cell is `Quarter` or `Quadruple`
    /// (those only arise as products), and every pairwise product within a
    /// row stays inside the score domain. Any violation is a fatal data
    /// error in the chart literal.
    pub fn verify(&self) -> Result<(), ChartError> {
        for attacker in TypeId::ALL {
            for defender in TypeId::ALL {
                let cell = self.multiplier(attacker, defender);
                // Raw cells must come from the four chart values; a Quarter
                // or Quadruple literal would make x8/x16 products reachable.
                debug_assert!(
                    matches!(cell, X | H | N | D),
                    "chart cell {attacker}->{defender} outside raw domain"
                );
                for second in TypeId::ALL {
                    if second.index() <= defender.index() {
                        continue;
                    }
                    cell.combine(self.multiplier(attacker, second))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TypeChart;
    use crate::chart::multiplier::Multiplier;
    use crate::chart::types::TypeId;

    #[test]
    fn standard_chart_verifies() {
        TypeChart::standard()
            .verify()
            .expect("standard chart products must stay in the score domain");
    }

    #[test]
    fn raw_cells_use_only_chart_values() {
        let chart = TypeChart::standard();
        for attacker in TypeId::ALL {
            for defender in TypeId::ALL {
                let cell = chart.multiplier(attacker, defender);
                assert!(
                    matches!(
                        cell,
                        Multiplier::Immune
                            | Multiplier::Half
                            | Multiplier::Neutral
                            | Multiplier::Double
                    ),
                    "{attacker} vs {defender} is {cell}"
                );
            }
        }
    }

    #[test]
    fn known_matchups() {
        let chart = TypeChart::standard();
        assert_eq!(
            chart.multiplier(TypeId::Normal, TypeId::Ghost),
            Multiplier::Immune
        );
        assert_eq!(
            chart.multiplier(TypeId::Ground, TypeId::Flying),
            Multiplier::Immune
        );
        assert_eq!(
            chart.multiplier(TypeId::Fighting, TypeId::Normal),
            Multiplier::Double
        );
        assert_eq!(
            chart.multiplier(TypeId::Fire, TypeId::Water),
            Multiplier::Half
        );
        assert_eq!(
            chart.multiplier(TypeId::Fairy, TypeId::Dragon),
            Multiplier::Double
        );
    }
}
