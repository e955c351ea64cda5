//! The accumulated wizard answers.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rank::Rank;

/// Most roles a player may pick; the first is the primary.
pub const MAX_ROLES: usize = 2;
/// Most champions a player may pick; the first is the primary.
pub const MAX_CHAMPIONS: usize = 2;

/// Picks stored inline; the caps keep them at two entries.
pub type PickList = SmallVec<[String; 2]>;

/// How many recent ranked matches to analyze, kept in 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSize(u8);

impl SampleSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 20;

    /// Clamp an arbitrary count into the valid domain.
    #[must_use]
    pub fn new(count: i64) -> Self {
        Self(count.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Commit an edit-in-progress field value. Numeric input is
    /// clamped into the domain; empty or unparseable input restores
    /// the previous value.
    #[must_use]
    pub fn commit(input: &str, previous: Self) -> Self {
        match input.trim().parse::<i64>() {
            Ok(count) => Self::new(count),
            Err(_) => previous,
        }
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Toggle a pick in a capped list: present removes it, absent appends
/// while under the cap, and a pick past the cap is a no-op.
#[must_use]
pub fn toggle_pick(picks: &PickList, name: &str, cap: usize) -> PickList {
    let mut next = picks.clone();
    if let Some(index) = next.iter().position(|pick| pick == name) {
        next.remove(index);
    } else if next.len() < cap {
        next.push(name.to_string());
    }
    next
}

/// Everything the wizard has collected so far. Replaced wholesale by
/// each accepted transition; discarded when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Free-form handle, e.g. `"GraceXing#NA1"`. Trimmed before use.
    pub riot_id: String,
    /// Target rank; `None` until the rank step is submitted.
    pub rank: Option<Rank>,
    /// Picked roles in priority order; index 0 is the primary.
    pub roles: PickList,
    /// Picked champions in priority order; index 0 is the primary.
    pub champions: PickList,
    /// How many recent ranked matches to analyze.
    #[serde(default)]
    pub sample_size: SampleSize,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
