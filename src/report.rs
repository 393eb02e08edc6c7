//! Report assembly for the full pipeline: score tables, chart dump, defense
//! and attack rankings, composite ranking. Each section toggles
//! independently; text formatting is presentation only, the scores and
//! groupings are the contract.

use std::fmt;
use std::fmt::Write as _;

use serde::Serialize;

use crate::chart::{ChartError, Multiplier, TypeChart, TypeId};
use crate::ranking::{composite_rankings, RankError};
use crate::scoring::aggregate::{attack_rankings, defense_rankings, AttackCoverage, ScoreGroups};
use crate::scoring::normalize::normalize;
use crate::scoring::score::{attack_score, defense_score};

/// Stage toggles for one pipeline run. Defaults to the fullest variant:
/// every section on, dual-coverage attack scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Emit the multiplier-to-score mapping tables.
    pub score_tables: bool,
    /// Emit the raw effectiveness chart.
    pub chart_dump: bool,
    /// Min-max normalize ranking scores. When off, rankings carry raw
    /// integer scores and the composite section (defined over normalized
    /// scores only) is omitted.
    pub normalize: bool,
    /// Emit the composite ranking.
    pub composite: bool,
    pub coverage: AttackCoverage,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            score_tables: true,
            chart_dump: true,
            normalize: true,
            composite: true,
            coverage: AttackCoverage::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    Chart(ChartError),
    Rank(RankError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chart(err) => err.fmt(f),
            Self::Rank(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<ChartError> for ReportError {
    fn from(err: ChartError) -> Self {
        Self::Chart(err)
    }
}

impl From<RankError> for ReportError {
    fn from(err: RankError) -> Self {
        Self::Rank(err)
    }
}

/// One multiplier row of the score-mapping tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTableEntry {
    pub multiplier: String,
    pub defense_score: i32,
    pub attack_score: i32,
}

/// One attacker row of the chart dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub attacker: String,
    pub multipliers: Vec<String>,
}

/// One score group of a ranking, ascending. Decimal scores keep their full
/// 28-digit rendering, so they serialize as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub score: String,
    pub labels: Vec<String>,
}

/// Machine-readable form of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_table: Option<Vec<ScoreTableEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<Vec<ChartRow>>,
    pub defense: Vec<RankingEntry>,
    pub attack: Vec<RankingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<Vec<RankingEntry>>,
}

fn ranking_entries<K: Ord + fmt::Display>(groups: &ScoreGroups<K>) -> Vec<RankingEntry> {
    groups
        .iter()
        .map(|(score, labels)| RankingEntry {
            score: score.to_string(),
            labels: labels.to_vec(),
        })
        .collect()
}

fn score_table_entries() -> Vec<ScoreTableEntry> {
    Multiplier::ALL
        .iter()
        .map(|&m| ScoreTableEntry {
            multiplier: m.value_str().to_string(),
            defense_score: defense_score(m),
            attack_score: attack_score(m),
        })
        .collect()
}

fn chart_rows(chart: &TypeChart) -> Vec<ChartRow> {
    TypeId::ALL
        .iter()
        .map(|&attacker| ChartRow {
            attacker: attacker.name().to_string(),
            multipliers: TypeId::ALL
                .iter()
                .map(|&defender| chart.multiplier(attacker, defender).value_str().to_string())
                .collect(),
        })
        .collect()
}

/// Run the pipeline and collect the selected sections.
pub fn build_report(chart: &TypeChart, config: &ReportConfig) -> Result<Report, ReportError> {
    let defense = defense_rankings(chart)?;
    let attack = attack_rankings(chart, config.coverage)?;

    let (defense_entries, attack_entries, composite_entries) = if config.normalize {
        let defense = normalize(&defense);
        let attack = normalize(&attack);
        let composite = if config.composite {
            Some(ranking_entries(&composite_rankings(&defense, &attack)?))
        } else {
            None
        };
        (ranking_entries(&defense), ranking_entries(&attack), composite)
    } else {
        (ranking_entries(&defense), ranking_entries(&attack), None)
    };

    Ok(Report {
        score_table: config.score_tables.then(score_table_entries),
        chart: config.chart_dump.then(|| chart_rows(chart)),
        defense: defense_entries,
        attack: attack_entries,
        composite: composite_entries,
    })
}

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "--------------------{title}--------------------");
}

fn render_ranking(out: &mut String, title: &str, entries: &[RankingEntry]) {
    banner(out, title);
    for entry in entries {
        let _ = writeln!(
            out,
            "score: {}, types: [{}]",
            entry.score,
            entry.labels.join(", ")
        );
    }
}

/// Run the pipeline and render the selected sections as text.
pub fn render_report(chart: &TypeChart, config: &ReportConfig) -> Result<String, ReportError> {
    let report = build_report(chart, config)?;
    let mut out = String::new();

    if let Some(table) = &report.score_table {
        banner(&mut out, "defense-multiplier-score-table");
        for entry in table {
            let _ = writeln!(
                &mut out,
                "damage taken x{} -> score {}",
                entry.multiplier, entry.defense_score
            );
        }
        banner(&mut out, "attack-multiplier-score-table");
        for entry in table {
            let _ = writeln!(
                &mut out,
                "damage dealt x{} -> score {}",
                entry.multiplier, entry.attack_score
            );
        }
    }

    if let Some(rows) = &report.chart {
        banner(&mut out, "type-effectiveness-chart");
        for row in rows {
            let _ = writeln!(
                &mut out,
                "{:>8}: {}",
                row.attacker,
                row.multipliers.join(" ")
            );
        }
    }

    render_ranking(&mut out, "defensive-attribute-advantage", &report.defense);
    render_ranking(&mut out, "offensive-attribute-advantage", &report.attack);
    if let Some(composite) = &report.composite {
        render_ranking(&mut out, "composite-attribute-ranking", composite);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{build_report, render_report, ReportConfig};
    use crate::chart::TypeChart;
    use crate::scoring::aggregate::AttackCoverage;

    #[test]
    fn default_report_has_every_section() {
        let report = build_report(TypeChart::standard(), &ReportConfig::default()).unwrap();
        assert!(report.score_table.is_some());
        assert!(report.chart.is_some());
        assert!(!report.defense.is_empty());
        assert!(!report.attack.is_empty());
        assert!(report.composite.is_some());
    }

    #[test]
    fn raw_config_drops_composite_and_keeps_integer_scores() {
        let config = ReportConfig {
            normalize: false,
            ..ReportConfig::default()
        };
        let report = build_report(TypeChart::standard(), &config).unwrap();
        assert!(report.composite.is_none());
        assert!(report.defense.iter().all(|e| !e.score.contains('.')));
    }

    #[test]
    fn sections_toggle_off() {
        let config = ReportConfig {
            score_tables: false,
            chart_dump: false,
            composite: false,
            normalize: true,
            coverage: AttackCoverage::SingleOnly,
        };
        let text = render_report(TypeChart::standard(), &config).unwrap();
        assert!(!text.contains("type-effectiveness-chart"));
        assert!(!text.contains("score-table"));
        assert!(!text.contains("composite-attribute-ranking"));
        assert!(text.contains("defensive-attribute-advantage"));
        assert!(text.contains("offensive-attribute-advantage"));
    }
}
