//! Ranked ladder tiers and divisions.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ladder tier, lowest to highest. Wire form is the uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    /// Every tier, in climb order (the rank carousel walks this).
    pub const ALL: [Self; 10] = [
        Self::Iron,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Emerald,
        Self::Diamond,
        Self::Master,
        Self::Grandmaster,
        Self::Challenger,
    ];

    /// Apex tiers have no divisions.
    #[must_use]
    pub const fn is_apex(self) -> bool {
        matches!(self, Self::Master | Self::Grandmaster | Self::Challenger)
    }

    /// Wire representation, e.g. `"DIAMOND"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
            Self::Emerald => "EMERALD",
            Self::Diamond => "DIAMOND",
            Self::Master => "MASTER",
            Self::Grandmaster => "GRANDMASTER",
            Self::Challenger => "CHALLENGER",
        }
    }

    /// Human label for the carousel, e.g. `"Diamond"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iron => "Iron",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Emerald => "Emerald",
            Self::Diamond => "Diamond",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Division within a non-apex tier. IV is the bottom of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    /// Divisions in the order the picker shows them (climb order).
    pub const ALL: [Self; 4] = [Self::IV, Self::III, Self::II, Self::I];

    /// Roman-numeral wire form, e.g. `"II"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target rank. `division` is `None` exactly for apex tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub tier: Tier,
    pub division: Option<Division>,
}

impl Rank {
    /// Pair a tier with a division, clearing the division for apex
    /// tiers regardless of what was picked.
    #[must_use]
    pub fn new(tier: Tier, division: Option<Division>) -> Self {
        let division = if tier.is_apex() { None } else { division };
        Self { tier, division }
    }

    /// Whether this rank is complete enough to query a cohort.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.tier.is_apex() || self.division.is_some()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(division) => write!(f, "{} {division}", self.tier),
            None => write!(f, "{}", self.tier),
        }
    }
}
