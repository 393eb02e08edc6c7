//! Multiplier-to-score mapping.
//!
//! Scores are taken from the defender's point of view: taking less damage is
//! better, so smaller multipliers map to larger scores. The attacker-side
//! score for the same multiplier is the negation.

use crate::chart::Multiplier;

/// Defender-side score for a received damage multiplier.
pub const fn defense_score(multiplier: Multiplier) -> i32 {
    match multiplier {
        Multiplier::Quadruple => -2,
        Multiplier::Double => -1,
        Multiplier::Neutral => 0,
        Multiplier::Half => 1,
        Multiplier::Quarter => 2,
        Multiplier::Immune => 3,
    }
}

/// Attacker-side score for a dealt damage multiplier.
pub const fn attack_score(multiplier: Multiplier) -> i32 {
    -defense_score(multiplier)
}
