//! Min-max normalization of an integer score set onto [0, 1].
//!
//! Uses exact decimal arithmetic throughout; quotients are rounded half-up
//! at a fixed scale so equal inputs always produce byte-identical keys.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::scoring::aggregate::ScoreGroups;

/// Fractional digits kept by every normalized score.
pub const SCORE_SCALE: i64 = 28;

/// Rescale each score to `(score - min) / (max - min)` at [`SCORE_SCALE`]
/// digits, preserving grouping and ascending order.
///
/// Degenerate range (every score equal): all entries normalize to 0 rather
/// than dividing by zero. Empty input yields empty output.
pub fn normalize(groups: &ScoreGroups<i32>) -> ScoreGroups<BigDecimal> {
    let mut normalized = ScoreGroups::new();
    let (Some(&min), Some(&max)) = (groups.min_score(), groups.max_score()) else {
        return normalized;
    };

    let min = BigDecimal::from(min);
    let gap = BigDecimal::from(max) - &min;
    let zero = BigDecimal::from(0);

    for (&score, labels) in groups.iter() {
        let key = if gap == zero {
            zero.with_scale(SCORE_SCALE)
        } else {
            ((BigDecimal::from(score) - &min) / &gap)
                .with_scale_round(SCORE_SCALE, RoundingMode::HalfUp)
        };
        for label in labels {
            normalized.insert(key.clone(), label.clone());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::{normalize, SCORE_SCALE};
    use crate::scoring::aggregate::ScoreGroups;
    use bigdecimal::BigDecimal;

    fn groups_of(scores: &[(i32, &str)]) -> ScoreGroups<i32> {
        let mut groups = ScoreGroups::new();
        for &(score, label) in scores {
            groups.insert(score, label);
        }
        groups
    }

    #[test]
    fn boundaries_map_to_zero_and_one() {
        let normalized = normalize(&groups_of(&[(-4, "low"), (3, "mid"), (15, "high")]));
        let min = normalized.min_score().unwrap();
        let max = normalized.max_score().unwrap();
        assert_eq!(min, &BigDecimal::from(0).with_scale(SCORE_SCALE));
        assert_eq!(max, &BigDecimal::from(1).with_scale(SCORE_SCALE));
    }

    #[test]
    fn keys_carry_the_fixed_scale() {
        let normalized = normalize(&groups_of(&[(0, "a"), (1, "b"), (3, "c")]));
        for (score, _) in normalized.iter() {
            assert_eq!(score.as_bigint_and_exponent().1, SCORE_SCALE);
        }
        // 1/3 rounded half-up at 28 digits.
        let third: BigDecimal = "0.3333333333333333333333333333".parse().unwrap();
        assert!(normalized.labels_for(&third).is_some());
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        let normalized = normalize(&groups_of(&[(7, "a"), (7, "b")]));
        assert_eq!(normalized.len(), 1);
        let zero = BigDecimal::from(0).with_scale(SCORE_SCALE);
        assert_eq!(
            normalized.labels_for(&zero).map(<[String]>::to_vec),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(normalize(&ScoreGroups::new()).is_empty());
    }

    #[test]
    fn normalization_is_monotonic() {
        let normalized = normalize(&groups_of(&[(-2, "a"), (0, "b"), (5, "c"), (9, "d")]));
        let keys: Vec<BigDecimal> = normalized.iter().map(|(score, _)| score.clone()).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
