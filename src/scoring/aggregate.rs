//! Score aggregation across the whole chart: single-type and dual-type
//! defense, single-type attack, and the dual-coverage attack variant.

use std::collections::BTreeMap;

use crate::chart::{ChartError, TypeChart, TypeId};
use crate::scoring::score::defense_score;

/// Joins member type names in a dual-type label, e.g. `"Ghost-Steel"`.
pub const TYPE_SEPARATOR: &str = "-";

/// Labels grouped by score, iterated in ascending score order.
///
/// Distinct type sets landing on the same score share a group; within a
/// group, labels keep insertion order of first occurrence so output is
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGroups<K: Ord> {
    groups: BTreeMap<K, Vec<String>>,
}

impl<K: Ord> Default for ScoreGroups<K> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<K: Ord> ScoreGroups<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, score: K, label: impl Into<String>) {
        self.groups.entry(score).or_default().push(label.into());
    }

    /// Ascending (score, labels) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[String])> {
        self.groups
            .iter()
            .map(|(score, labels)| (score, labels.as_slice()))
    }

    pub fn min_score(&self) -> Option<&K> {
        self.groups.keys().next()
    }

    pub fn max_score(&self) -> Option<&K> {
        self.groups.keys().next_back()
    }

    pub fn labels_for(&self, score: &K) -> Option<&[String]> {
        self.groups.get(score).map(Vec::as_slice)
    }

    /// Number of distinct scores, not labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn label_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Which attack aggregation the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackCoverage {
    /// Row sum only: coverage against single-type defenders.
    SingleOnly,
    /// Row sum plus coverage against every unordered dual-type defender.
    #[default]
    DualCoverage,
}

/// Defense score of a single type: sum of the mapped multipliers it
/// receives from every attacking type.
pub fn single_defense_score(chart: &TypeChart, defender: TypeId) -> i32 {
    TypeId::ALL
        .iter()
        .map(|&attacker| defense_score(chart.multiplier(attacker, defender)))
        .sum()
}

/// Defense score of a dual-type defender: the multiplier against each
/// attacker is the product of the two individual multipliers.
pub fn pair_defense_score(
    chart: &TypeChart,
    first: TypeId,
    second: TypeId,
) -> Result<i32, ChartError> {
    let mut total = 0;
    for attacker in TypeId::ALL {
        let combined = chart
            .multiplier(attacker, first)
            .combine(chart.multiplier(attacker, second))?;
        total += defense_score(combined);
    }
    Ok(total)
}

/// Attack score of a single type against single-type defenders: negation of
/// the defender-side row sum.
pub fn single_attack_score(chart: &TypeChart, attacker: TypeId) -> i32 {
    -TypeId::ALL
        .iter()
        .map(|&defender| defense_score(chart.multiplier(attacker, defender)))
        .sum::<i32>()
}

/// Attack score including coverage against dual-type defenders: the base row
/// sum plus the mapped product for every unordered defender pair, negated.
pub fn dual_coverage_attack_score(chart: &TypeChart, attacker: TypeId) -> Result<i32, ChartError> {
    let mut total = TypeId::ALL
        .iter()
        .map(|&defender| defense_score(chart.multiplier(attacker, defender)))
        .sum::<i32>();
    for first in TypeId::ALL {
        for second in TypeId::ALL {
            if second.index() <= first.index() {
                continue;
            }
            let combined = chart
                .multiplier(attacker, first)
                .combine(chart.multiplier(attacker, second))?;
            total += defense_score(combined);
        }
    }
    Ok(-total)
}

fn pair_label(first: TypeId, second: TypeId) -> String {
    format!("{}{}{}", first.name(), TYPE_SEPARATOR, second.name())
}

/// Defense rankings over all 18 single types followed by all 153 unordered
/// pairs, grouped by score.
pub fn defense_rankings(chart: &TypeChart) -> Result<ScoreGroups<i32>, ChartError> {
    let mut groups = ScoreGroups::new();
    for defender in TypeId::ALL {
        groups.insert(single_defense_score(chart, defender), defender.name());
    }
    for first in TypeId::ALL {
        for second in TypeId::ALL {
            if second.index() <= first.index() {
                continue;
            }
            let score = pair_defense_score(chart, first, second)?;
            groups.insert(score, pair_label(first, second));
        }
    }
    Ok(groups)
}

/// Attack rankings over the 18 single types, grouped by score.
pub fn attack_rankings(
    chart: &TypeChart,
    coverage: AttackCoverage,
) -> Result<ScoreGroups<i32>, ChartError> {
    let mut groups = ScoreGroups::new();
    for attacker in TypeId::ALL {
        let score = match coverage {
            AttackCoverage::SingleOnly => single_attack_score(chart, attacker),
            AttackCoverage::DualCoverage => dual_coverage_attack_score(chart, attacker)?,
        };
        groups.insert(score, attacker.name());
    }
    Ok(groups)
}
