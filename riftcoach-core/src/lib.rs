//! RiftCoach Core Engine
//!
//! Platform-agnostic logic for the RiftCoach coaching wizard: the
//! selection model, the step state machine, the metric comparator, the
//! two-phase compare/coach pipeline state, and the wire protocol types.
//! This crate performs no I/O; the web crate owns rendering and
//! transport.

pub mod analysis;
pub mod champions;
pub mod coach;
pub mod compare;
pub mod metrics;
pub mod rank;
pub mod role;
pub mod selection;
pub mod wizard;

// Re-export commonly used types
pub use analysis::{Analysis, Phase};
pub use champions::{CHAMPION_ROSTER, CatalogError, ChampionCatalog};
pub use coach::{CoachRequest, CoachResponse};
pub use compare::{CompareRequest, ComparisonReport, REGION, StatMap};
pub use metrics::{
    METRIC_CATALOG, MetricDef, MetricRow, Standing, ValueFormat, compare_summaries,
};
pub use rank::{Division, Rank, Tier};
pub use role::{Role, canonical_primary};
pub use selection::{MAX_CHAMPIONS, MAX_ROLES, PickList, SampleSize, Selection, toggle_pick};
pub use wizard::{Effect, Transition, WizardError, WizardEvent, WizardStep, apply};
