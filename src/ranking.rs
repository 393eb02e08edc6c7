//! Composite ranking: normalized defense blended with the members' average
//! normalized attack score.

use std::collections::HashMap;
use std::fmt;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::scoring::aggregate::{ScoreGroups, TYPE_SEPARATOR};
use crate::scoring::normalize::SCORE_SCALE;

/// Weight of the attack contribution relative to defense.
pub const ATTACK_COEFFICIENT: &str = "0.75";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// A defense label names a type with no normalized attack score.
    MissingAttackScore { type_name: String },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttackScore { type_name } => {
                write!(f, "no normalized attack score for type '{type_name}'")
            }
        }
    }
}

impl std::error::Error for RankError {}

fn attack_coefficient() -> BigDecimal {
    ATTACK_COEFFICIENT
        .parse()
        .unwrap_or_else(|_| unreachable!("ATTACK_COEFFICIENT is a valid decimal literal"))
}

/// Blend normalized defense and attack rankings into one composite ranking.
///
/// For each defense label: split into member types, average the members'
/// normalized attack scores (division at [`SCORE_SCALE`] digits, half-up),
/// weight by [`ATTACK_COEFFICIENT`], add to the defense score. Grouping and
/// ascending order follow the same rules as the inputs.
pub fn composite_rankings(
    defense: &ScoreGroups<BigDecimal>,
    attack: &ScoreGroups<BigDecimal>,
) -> Result<ScoreGroups<BigDecimal>, RankError> {
    let mut attack_by_type: HashMap<&str, &BigDecimal> = HashMap::new();
    for (score, labels) in attack.iter() {
        for label in labels {
            attack_by_type.insert(label.as_str(), score);
        }
    }

    let coefficient = attack_coefficient();
    let mut composite = ScoreGroups::new();
    for (defense_score, labels) in defense.iter() {
        for label in labels {
            let mut member_count = 0;
            let mut attack_sum = BigDecimal::from(0);
            for member in label.split(TYPE_SEPARATOR) {
                let score =
                    attack_by_type
                        .get(member)
                        .ok_or_else(|| RankError::MissingAttackScore {
                            type_name: member.to_string(),
                        })?;
                attack_sum = attack_sum + *score;
                member_count += 1;
            }
            let attack_mean = (attack_sum / BigDecimal::from(member_count))
                .with_scale_round(SCORE_SCALE, RoundingMode::HalfUp);
            let score = defense_score + attack_mean * &coefficient;
            composite.insert(score, label.clone());
        }
    }
    Ok(composite)
}
