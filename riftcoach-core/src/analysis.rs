//! The two-phase analysis state machine.
//!
//! One [`Phase`] value per remote phase makes the pending/error/result
//! mutual exclusion structural instead of a convention across three
//! flags. The machine itself is transport-free; a driver performs the
//! HTTP calls and feeds outcomes back in.
use crate::compare::ComparisonReport;

/// Lifecycle of one independently tracked remote phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase<T> {
    /// Not started since the last reset.
    #[default]
    Idle,
    /// A request is in flight; no second one may start.
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> Phase<T> {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The success payload, if this phase has one.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure text, if this phase failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Compare-then-coach pipeline state. Each phase is observed
/// independently by the view; a failure in one never rolls back the
/// other's last good result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    pub compare: Phase<ComparisonReport>,
    pub coach: Phase<String>,
}

impl Analysis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a compare run. Rejected while one is already in flight,
    /// so at most one request per phase ever exists. A fresh run
    /// discards both phases' previous outcomes wholesale.
    #[must_use]
    pub fn start_compare(&mut self) -> bool {
        if self.compare.is_pending() {
            return false;
        }
        self.compare = Phase::Pending;
        self.coach = Phase::Idle;
        true
    }

    /// Record the compare outcome. On success the coach phase is
    /// unconditionally enqueued (it enters `Pending` here) and the
    /// report is returned as the chained coach job; the driver never
    /// decides whether coaching happens. On failure the coach phase is
    /// left untouched in its "not started" state.
    pub fn finish_compare(
        &mut self,
        outcome: Result<ComparisonReport, String>,
    ) -> Option<ComparisonReport> {
        match outcome {
            Ok(report) => {
                self.compare = Phase::Succeeded(report.clone());
                self.coach = Phase::Pending;
                Some(report)
            }
            Err(message) => {
                self.compare = Phase::Failed(message);
                None
            }
        }
    }

    /// Begin a coach run outside the auto-chain. Guarded the same way
    /// as compare, independently of the compare phase's state.
    #[must_use]
    pub fn start_coach(&mut self) -> bool {
        if self.coach.is_pending() {
            return false;
        }
        self.coach = Phase::Pending;
        true
    }

    /// Record the coach outcome. A coach failure does not invalidate
    /// the already-displayed compare result.
    pub fn finish_coach(&mut self, outcome: Result<String, String>) {
        self.coach = match outcome {
            Ok(text) => Phase::Succeeded(text),
            Err(message) => Phase::Failed(message),
        };
    }
}
