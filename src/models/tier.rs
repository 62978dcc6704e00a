use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The performance tier of an employee.
///
/// The tier owns the promotion policy: how much a promotion raises the
/// salary and which tier the employee lands in afterwards.
///
/// - `Satisfactory`: Initial tier, +5% on promotion, then moves to `Exemplary`
/// - `Exemplary`: Terminal tier, +10% on every promotion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    #[default]
    Satisfactory,
    Exemplary,
}

impl PerformanceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfactory => "satisfactory",
            Self::Exemplary => "exemplary",
        }
    }

    /// Factor applied to the salary when an employee in this tier is promoted.
    pub const fn raise_multiplier(self) -> f64 {
        match self {
            Self::Satisfactory => 1.05,
            Self::Exemplary => 1.10,
        }
    }

    /// Tier reached after a promotion from this tier.
    pub const fn next(self) -> Self {
        match self {
            Self::Satisfactory => Self::Exemplary,
            Self::Exemplary => Self::Exemplary,
        }
    }

    /// Apply this tier's promotion policy to `salary`.
    ///
    /// Returns the raised salary and the tier the employee moves to.
    pub fn promote(self, salary: f64) -> (f64, Self) {
        (salary * self.raise_multiplier(), self.next())
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown performance tier: {0}")]
pub struct ParseTierError(pub String);

impl FromStr for PerformanceTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "satisfactory" => Ok(Self::Satisfactory),
            "exemplary" => Ok(Self::Exemplary),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfactory_moves_to_exemplary() {
        let (salary, tier) = PerformanceTier::Satisfactory.promote(1000.0);
        assert!((salary - 1050.0).abs() < 1e-9);
        assert_eq!(tier, PerformanceTier::Exemplary);
    }

    #[test]
    fn test_exemplary_is_absorbing() {
        let (salary, tier) = PerformanceTier::Exemplary.promote(1000.0);
        assert!((salary - 1100.0).abs() < 1e-9);
        assert_eq!(tier, PerformanceTier::Exemplary);
    }

    #[test]
    fn test_default_is_satisfactory() {
        assert_eq!(PerformanceTier::default(), PerformanceTier::Satisfactory);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "exemplary".parse::<PerformanceTier>(),
            Ok(PerformanceTier::Exemplary)
        );
        assert_eq!(
            PerformanceTier::Satisfactory.to_string().parse::<PerformanceTier>(),
            Ok(PerformanceTier::Satisfactory)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "outstanding".parse::<PerformanceTier>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown performance tier: outstanding");
    }
}
