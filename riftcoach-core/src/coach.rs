//! Wire types for the coaching phase.
use serde::{Deserialize, Serialize};

use crate::compare::ComparisonReport;

/// Body POSTed to the coaching service: the entire compare response,
/// unmodified, under one key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRequest {
    pub comparison_json: ComparisonReport,
}

impl From<ComparisonReport> for CoachRequest {
    fn from(comparison_json: ComparisonReport) -> Self {
        Self { comparison_json }
    }
}

/// Coaching response; a missing `coach_text` reads as empty, never as
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoachResponse {
    #[serde(default)]
    pub coach_text: String,
}
