use std::fmt;

use serde::{Deserialize, Serialize};

/// Smart-home automation level offered by the budget estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationTier {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl AutomationTier {
    pub fn all() -> &'static [AutomationTier] {
        &[
            AutomationTier::Basic,
            AutomationTier::Intermediate,
            AutomationTier::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Case-insensitive lookup by the form value (`basic`, `intermediate`, `advanced`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for AutomationTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_form_values() {
        assert_eq!(AutomationTier::parse("basic"), Some(AutomationTier::Basic));
        assert_eq!(
            AutomationTier::parse(" Intermediate "),
            Some(AutomationTier::Intermediate)
        );
        assert_eq!(
            AutomationTier::parse("ADVANCED"),
            Some(AutomationTier::Advanced)
        );
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(AutomationTier::parse("premium"), None);
        assert_eq!(AutomationTier::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for tier in AutomationTier::all() {
            assert_eq!(AutomationTier::parse(tier.as_str()), Some(*tier));
        }
    }
}
