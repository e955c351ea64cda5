//! The five canonical lane roles and the primary-role filter rule.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical lane role used to filter the cohort query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Roles in the order the picker tiles show them.
    pub const ALL: [Self; 5] = [Self::Top, Self::Jungle, Self::Mid, Self::Adc, Self::Support];

    /// Case-insensitive lookup; anything outside the canonical five is
    /// `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "TOP" => Some(Self::Top),
            "JUNGLE" => Some(Self::Jungle),
            "MID" => Some(Self::Mid),
            "ADC" => Some(Self::Adc),
            "SUPPORT" => Some(Self::Support),
            _ => None,
        }
    }

    /// Display name, e.g. `"Mid"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Jungle => "Jungle",
            Self::Mid => "Mid",
            Self::Adc => "ADC",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The role string sent as the cohort filter: the first selection, as
/// picked, when it names one of the canonical five. A non-canonical
/// first role silently downgrades to no filter.
#[must_use]
pub fn canonical_primary(roles: &[String]) -> Option<&str> {
    roles
        .first()
        .filter(|name| Role::parse(name).is_some())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Role::parse("mid"), Some(Role::Mid));
        assert_eq!(Role::parse("ADC"), Some(Role::Adc));
        assert_eq!(Role::parse(" Support "), Some(Role::Support));
        assert_eq!(Role::parse("Feeder"), None);
    }

    #[test]
    fn primary_keeps_the_picked_spelling() {
        let roles = vec!["Mid".to_string(), "Top".to_string()];
        assert_eq!(canonical_primary(&roles), Some("Mid"));
    }

    #[test]
    fn non_canonical_primary_downgrades_to_none() {
        let roles = vec!["Coach".to_string()];
        assert_eq!(canonical_primary(&roles), None);
        assert_eq!(canonical_primary(&[]), None);
    }
}
