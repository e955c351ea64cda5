//! The wizard step state machine.
//!
//! Pure transition function: `(step, selection, event)` in, new step and
//! replacement [`Selection`] out. The view layer owns no wizard rules;
//! it only renders the current step and feeds events back in. Reaching
//! the terminal step's submit produces [`Effect::RunCompare`], which the
//! caller hands to the analysis driver.
use thiserror::Error;

use crate::rank::{Division, Rank, Tier};
use crate::selection::{MAX_CHAMPIONS, MAX_ROLES, SampleSize, Selection};

/// Which question is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Identity,
    Rank,
    Role,
    Champion,
}

impl WizardStep {
    /// The step `Back` returns to, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Identity => None,
            Self::Rank => Some(Self::Identity),
            Self::Role => Some(Self::Rank),
            Self::Champion => Some(Self::Role),
        }
    }
}

/// A user action the wizard can react to.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SubmitIdentity(String),
    SubmitRank {
        tier: Tier,
        division: Option<Division>,
    },
    SubmitRoles(Vec<String>),
    SkipRoles,
    SubmitChampions(Vec<String>),
    SkipChampions,
    /// Commit the sample-size field's edit-in-progress text.
    CommitSampleSize(String),
    Back,
}

/// Local validation failure; blocks the transition, never a phase error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("enter a summoner name first")]
    EmptyIdentity,
    #[error("{0} requires a division")]
    MissingDivision(Tier),
    #[error("at most {MAX_ROLES} roles may be picked")]
    TooManyRoles,
    #[error("pick at least one champion, or skip")]
    NoChampions,
    #[error("at most {MAX_CHAMPIONS} champions may be picked")]
    TooManyChampions,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("event does not apply to the current step")]
    WrongStep,
}

/// Follow-up work an accepted transition asks the caller to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Kick off the compare phase with the transition's selection.
    RunCompare,
}

/// Result of an accepted transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub step: WizardStep,
    pub selection: Selection,
    pub effect: Option<Effect>,
}

impl Transition {
    fn stay(step: WizardStep, selection: Selection) -> Self {
        Self {
            step,
            selection,
            effect: None,
        }
    }
}

/// Apply one event to the wizard. The input selection is never mutated;
/// an accepted transition carries its replacement.
///
/// # Errors
///
/// Returns a [`WizardError`] when the event fails local validation or
/// does not belong to the current step.
pub fn apply(
    step: WizardStep,
    selection: &Selection,
    event: WizardEvent,
) -> Result<Transition, WizardError> {
    match (step, event) {
        (WizardStep::Identity, WizardEvent::SubmitIdentity(name)) => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(WizardError::EmptyIdentity);
            }
            let mut next = selection.clone();
            next.riot_id = trimmed.to_string();
            Ok(Transition::stay(WizardStep::Rank, next))
        }
        (WizardStep::Rank, WizardEvent::SubmitRank { tier, division }) => {
            if !tier.is_apex() && division.is_none() {
                return Err(WizardError::MissingDivision(tier));
            }
            let mut next = selection.clone();
            next.rank = Some(Rank::new(tier, division));
            Ok(Transition::stay(WizardStep::Role, next))
        }
        (WizardStep::Role, WizardEvent::SubmitRoles(roles)) => {
            // an empty submission is observably the skip path: no role
            // filter, not a validation failure
            if roles.len() > MAX_ROLES {
                return Err(WizardError::TooManyRoles);
            }
            let mut next = selection.clone();
            next.roles = roles.into_iter().collect();
            Ok(Transition::stay(WizardStep::Champion, next))
        }
        (WizardStep::Role, WizardEvent::SkipRoles) => {
            let mut next = selection.clone();
            next.roles.clear();
            Ok(Transition::stay(WizardStep::Champion, next))
        }
        (WizardStep::Champion, WizardEvent::SubmitChampions(champions)) => {
            if champions.is_empty() {
                return Err(WizardError::NoChampions);
            }
            if champions.len() > MAX_CHAMPIONS {
                return Err(WizardError::TooManyChampions);
            }
            let mut next = selection.clone();
            next.champions = champions.into_iter().collect();
            Ok(Transition {
                step: WizardStep::Champion,
                selection: next,
                effect: Some(Effect::RunCompare),
            })
        }
        (WizardStep::Champion, WizardEvent::SkipChampions) => {
            let mut next = selection.clone();
            next.champions.clear();
            Ok(Transition {
                step: WizardStep::Champion,
                selection: next,
                effect: Some(Effect::RunCompare),
            })
        }
        (WizardStep::Champion, WizardEvent::CommitSampleSize(input)) => {
            let mut next = selection.clone();
            next.sample_size = SampleSize::commit(&input, selection.sample_size);
            Ok(Transition::stay(WizardStep::Champion, next))
        }
        (step, WizardEvent::Back) => match step.previous() {
            // Back never clears what the abandoned step collected;
            // re-submission overwrites.
            Some(previous) => Ok(Transition::stay(previous, selection.clone())),
            None => Err(WizardError::AtFirstStep),
        },
        _ => Err(WizardError::WrongStep),
    }
}
