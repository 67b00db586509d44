use serde::{Deserialize, Serialize};

use super::norm::Norm;

/// One object to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Volume (m³)
    pub volume: f64,
    /// Density (kg/m³)
    pub density: f64,
    pub norm: Norm,
}

impl Case {
    pub fn new(volume: f64, density: f64, norm: Norm) -> Self {
        Self {
            volume,
            density,
            norm,
        }
    }
}

impl Default for Case {
    fn default() -> Self {
        Self {
            volume: 0.3,
            density: 1000.0,
            norm: Norm::A,
        }
    }
}
