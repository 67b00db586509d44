//! Regulatory norms and their maximum allowed mass

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const NORM_A_MAX: f64 = 500.0;
pub const NORM_B_MAX: f64 = 750.0;
pub const NORM_C_MAX: f64 = 1000.0;

/// Norm a case is checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Norm {
    #[default]
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
}

/// Maximum allowed mass for a norm
pub fn max_mass_for(norm: Norm) -> f64 {
    match norm {
        Norm::A => NORM_A_MAX,
        Norm::B => NORM_B_MAX,
        Norm::C => NORM_C_MAX,
    }
}

impl Norm {
    pub const ALL: [Norm; 3] = [Norm::A, Norm::B, Norm::C];

    pub fn max_mass(&self) -> f64 {
        max_mass_for(*self)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Norm::A => "A",
            Norm::B => "B",
            Norm::C => "C",
        }
    }

    /// Label shown next to the option, e.g. "A (max. 500 kg)"
    pub fn label(&self) -> String {
        format!("{} (max. {} kg)", self.code(), self.max_mass())
    }
}

impl std::fmt::Display for Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown norm '{0}' (expected A, B or C)")]
pub struct ParseNormError(pub String);

impl FromStr for Norm {
    type Err = ParseNormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Norm::A),
            "B" => Ok(Norm::B),
            "C" => Ok(Norm::C),
            _ => Err(ParseNormError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(max_mass_for(Norm::A), 500.0);
        assert_eq!(max_mass_for(Norm::B), 750.0);
        assert_eq!(max_mass_for(Norm::C), 1000.0);
    }

    #[test]
    fn test_every_norm_has_positive_threshold() {
        for norm in Norm::ALL {
            assert!(norm.max_mass() > 0.0, "{} has no threshold", norm);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(Norm::A.label(), "A (max. 500 kg)");
        assert_eq!(Norm::C.label(), "C (max. 1000 kg)");
    }

    #[test]
    fn test_parse() {
        assert_eq!(" b ".parse::<Norm>().unwrap(), Norm::B);
        assert_eq!("c".parse::<Norm>().unwrap(), Norm::C);
        assert!("D".parse::<Norm>().is_err());
        assert!("".parse::<Norm>().is_err());
    }

    #[test]
    fn test_serde() {
        let norm: Norm = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(norm, Norm::A);
        assert_eq!(serde_json::to_string(&Norm::B).unwrap(), "\"B\"");
    }
}
