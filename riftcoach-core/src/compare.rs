//! Wire types for the compare phase.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rank::{Division, Tier};
use crate::role::canonical_primary;
use crate::selection::{SampleSize, Selection};

/// The comparison service only covers this platform for now.
pub const REGION: &str = "na1";

/// A metric summary as received: raw JSON entries, so absent and
/// non-numeric values stay representable and the comparator can skip
/// them instead of defaulting to zero.
pub type StatMap = serde_json::Map<String, Value>;

/// Body POSTed to the comparison service. Field order is the wire
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub riot_id: String,
    pub region: String,
    pub tier: Tier,
    /// `null` on the wire for apex tiers.
    pub division: Option<Division>,
    pub n_recent: SampleSize,
    /// Cohort role filter; `null` when no canonical role was picked.
    pub primary_role: Option<String>,
    /// Cohort champion filter; `null` when the champion step was
    /// skipped.
    pub champion: Option<String>,
}

impl CompareRequest {
    /// Build the request from a completed selection. `None` until the
    /// rank step has been answered, which cannot happen once the
    /// wizard is on its terminal step.
    #[must_use]
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        let rank = selection.rank?;
        Some(Self {
            riot_id: selection.riot_id.trim().to_string(),
            region: REGION.to_string(),
            tier: rank.tier,
            division: rank.division,
            n_recent: selection.sample_size,
            primary_role: canonical_primary(&selection.roles).map(str::to_string),
            champion: selection.champions.first().cloned(),
        })
    }
}

/// A compare response. The two summaries drive the metric panel; every
/// other field (echoed identity, rank, cohort sizes, precomputed
/// deltas) is captured by `extra` so re-serializing reproduces the
/// whole upstream payload for the coach request and the raw-JSON view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(default)]
    pub player_summary: StatMap,
    #[serde(default)]
    pub rank_summary: StatMap,
    #[serde(flatten)]
    pub extra: StatMap,
}

impl ComparisonReport {
    /// Echoed identity, when the service included one.
    #[must_use]
    pub fn riot_id(&self) -> Option<&str> {
        self.extra.get("riot_id").and_then(Value::as_str)
    }

    /// Echoed cohort tier, when the service included one.
    #[must_use]
    pub fn tier(&self) -> Option<&str> {
        self.extra.get("tier").and_then(Value::as_str)
    }

    /// Echoed cohort division, when the service included one.
    #[must_use]
    pub fn division(&self) -> Option<&str> {
        self.extra.get("division").and_then(Value::as_str)
    }
}
