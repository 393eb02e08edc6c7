pub mod aggregate;
pub mod normalize;
pub mod score;

pub use aggregate::{
    attack_rankings, defense_rankings, dual_coverage_attack_score, pair_defense_score,
    single_attack_score, single_defense_score, AttackCoverage, ScoreGroups, TYPE_SEPARATOR,
};
pub use normalize::{normalize, SCORE_SCALE};
pub use score::{attack_score, defense_score};
