//! The metric catalog and the subject-vs-cohort comparator.
use serde_json::Value;

use crate::compare::StatMap;

/// How a metric's numbers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fraction shown as a percentage with one decimal, e.g. `55.0%`.
    Percent,
    /// Ratio with two decimals, e.g. `3.21`.
    Ratio,
    /// Per-minute absolute, rounded to a whole number, e.g. `412`.
    PerMinute,
}

impl ValueFormat {
    /// Render a value in this format. Negative values keep their sign.
    #[must_use]
    pub fn render(self, value: f64) -> String {
        match self {
            Self::Percent => format!("{:.1}%", value * 100.0),
            Self::Ratio => format!("{value:.2}"),
            Self::PerMinute => format!("{value:.0}"),
        }
    }
}

/// One entry of the fixed metric catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    /// Summary-map key, e.g. `"win_rate"`.
    pub key: &'static str,
    /// Tile label, e.g. `"Win rate"`.
    pub label: &'static str,
    pub format: ValueFormat,
    /// False for death-like metrics where a lower value is the good
    /// direction. All six cataloged metrics read better when higher.
    pub higher_is_better: bool,
}

/// The six metrics the comparison panel renders, in display order.
/// Summary keys outside this catalog never render.
pub const METRIC_CATALOG: [MetricDef; 6] = [
    MetricDef {
        key: "win_rate",
        label: "Win rate",
        format: ValueFormat::Percent,
        higher_is_better: true,
    },
    MetricDef {
        key: "avg_kda",
        label: "KDA",
        format: ValueFormat::Ratio,
        higher_is_better: true,
    },
    MetricDef {
        key: "avg_cs_per_min",
        label: "CS / min",
        format: ValueFormat::Ratio,
        higher_is_better: true,
    },
    MetricDef {
        key: "avg_gold_per_min",
        label: "Gold / min",
        format: ValueFormat::PerMinute,
        higher_is_better: true,
    },
    MetricDef {
        key: "avg_dmg_per_min",
        label: "Damage / min",
        format: ValueFormat::PerMinute,
        higher_is_better: true,
    },
    MetricDef {
        key: "avg_vision_per_min",
        label: "Vision / min",
        format: ValueFormat::Ratio,
        higher_is_better: true,
    },
];

/// Which side of the cohort average the subject landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Better,
    Worse,
    Even,
}

/// A rendered comparison line for one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub key: &'static str,
    pub label: &'static str,
    /// Formatted subject value.
    pub player: String,
    /// Formatted cohort value.
    pub cohort: String,
    /// Signed delta line, e.g. `"+5.0% vs rank average"`.
    pub delta: String,
    pub standing: Standing,
}

fn numeric(map: &StatMap, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

/// Compare the two summaries over the catalog. Metrics absent or
/// non-numeric in either summary are skipped, never rendered as zero.
#[must_use]
pub fn compare_summaries(player: &StatMap, cohort: &StatMap) -> Vec<MetricRow> {
    METRIC_CATALOG
        .iter()
        .filter_map(|def| {
            let player_value = numeric(player, def.key)?;
            let cohort_value = numeric(cohort, def.key)?;
            let diff = player_value - cohort_value;

            let standing = if diff == 0.0 {
                Standing::Even
            } else if def.higher_is_better == (diff > 0.0) {
                Standing::Better
            } else {
                Standing::Worse
            };

            let delta = match standing {
                Standing::Even => "Even with rank average".to_string(),
                _ if diff > 0.0 => format!("+{} vs rank average", def.format.render(diff)),
                _ => format!("{} vs rank average", def.format.render(diff)),
            };

            Some(MetricRow {
                key: def.key,
                label: def.label,
                player: def.format.render(player_value),
                cohort: def.format.render(cohort_value),
                delta,
                standing,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stat_map(value: &Value) -> StatMap {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn positive_win_rate_diff_reads_better() {
        let player = stat_map(&json!({ "win_rate": 0.55 }));
        let cohort = stat_map(&json!({ "win_rate": 0.50 }));
        let rows = compare_summaries(&player, &cohort);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.label, "Win rate");
        assert_eq!(row.player, "55.0%");
        assert_eq!(row.cohort, "50.0%");
        assert_eq!(row.delta, "+5.0% vs rank average");
        assert_eq!(row.standing, Standing::Better);
    }

    #[test]
    fn negative_diff_keeps_the_minus_sign() {
        let player = stat_map(&json!({ "avg_kda": 2.10 }));
        let cohort = stat_map(&json!({ "avg_kda": 2.41 }));
        let rows = compare_summaries(&player, &cohort);
        assert_eq!(rows[0].delta, "-0.31 vs rank average");
        assert_eq!(rows[0].standing, Standing::Worse);
    }

    #[test]
    fn equal_values_read_even_with_no_sign() {
        let player = stat_map(&json!({ "avg_gold_per_min": 400.0 }));
        let cohort = stat_map(&json!({ "avg_gold_per_min": 400.0 }));
        let rows = compare_summaries(&player, &cohort);
        assert_eq!(rows[0].delta, "Even with rank average");
        assert_eq!(rows[0].standing, Standing::Even);
    }

    #[test]
    fn missing_key_on_either_side_skips_only_that_row() {
        let player = stat_map(&json!({
            "win_rate": 0.5,
            "avg_vision_per_min": 1.1,
        }));
        let cohort = stat_map(&json!({ "win_rate": 0.5 }));
        let rows = compare_summaries(&player, &cohort);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "win_rate");
    }

    #[test]
    fn non_numeric_values_are_treated_as_missing() {
        let player = stat_map(&json!({ "avg_kda": "3.2" }));
        let cohort = stat_map(&json!({ "avg_kda": 2.8 }));
        assert!(compare_summaries(&player, &cohort).is_empty());
    }

    #[test]
    fn keys_outside_the_catalog_never_render() {
        let player = stat_map(&json!({ "avg_deaths": 4.0, "games": 20 }));
        let cohort = stat_map(&json!({ "avg_deaths": 6.0, "games": 900 }));
        assert!(compare_summaries(&player, &cohort).is_empty());
    }

    #[test]
    fn rows_follow_catalog_order() {
        let both = stat_map(&json!({
            "avg_vision_per_min": 1.0,
            "win_rate": 0.5,
            "avg_gold_per_min": 410.0,
        }));
        let keys: Vec<_> = compare_summaries(&both, &both)
            .into_iter()
            .map(|row| row.key)
            .collect();
        assert_eq!(keys, ["win_rate", "avg_gold_per_min", "avg_vision_per_min"]);
    }

    #[test]
    fn per_minute_values_round_to_whole_numbers() {
        let player = stat_map(&json!({ "avg_dmg_per_min": 612.4 }));
        let cohort = stat_map(&json!({ "avg_dmg_per_min": 580.0 }));
        let rows = compare_summaries(&player, &cohort);
        assert_eq!(rows[0].player, "612");
        assert_eq!(rows[0].delta, "+32 vs rank average");
    }
}
