//! Mass calculation strategies
//!
//! Both strategies sit behind [`MassCalculator`] so the evaluator never
//! branches on the strategy itself.

use std::collections::BTreeMap;

use masscheck_types::{CalculationServiceError, CalculationStrategy};
use tracing::debug;

/// Name of the volume input passed to a calculation service
pub const INPUT_VOLUME: &str = "volume";
/// Name of the density input passed to a calculation service
pub const INPUT_DENSITY: &str = "density";
/// Name of the output read back from a calculation service
pub const OUTPUT_MASS: &str = "mass";

/// Named numeric values exchanged with a calculation service
pub type NamedValues = BTreeMap<String, f64>;

/// Computes mass from volume and density
pub trait MassCalculator {
    fn compute_mass(&self, volume: f64, density: f64) -> Result<f64, CalculationServiceError>;

    fn strategy(&self) -> CalculationStrategy;
}

/// External calculation with named inputs and named outputs
pub trait CalculationService {
    fn evaluate(&self, inputs: &NamedValues) -> Result<NamedValues, CalculationServiceError>;
}

impl<F> CalculationService for F
where
    F: Fn(&NamedValues) -> Result<NamedValues, CalculationServiceError>,
{
    fn evaluate(&self, inputs: &NamedValues) -> Result<NamedValues, CalculationServiceError> {
        self(inputs)
    }
}

/// `mass = volume * density`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFormula;

impl MassCalculator for LocalFormula {
    fn compute_mass(&self, volume: f64, density: f64) -> Result<f64, CalculationServiceError> {
        Ok(volume * density)
    }

    fn strategy(&self) -> CalculationStrategy {
        CalculationStrategy::Local
    }
}

/// Hands the calculation to a [`CalculationService`]
#[derive(Debug, Clone)]
pub struct DelegatedService<S> {
    service: S,
}

impl<S: CalculationService> DelegatedService<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: CalculationService> MassCalculator for DelegatedService<S> {
    fn compute_mass(&self, volume: f64, density: f64) -> Result<f64, CalculationServiceError> {
        let mut inputs = NamedValues::new();
        inputs.insert(INPUT_VOLUME.to_string(), volume);
        inputs.insert(INPUT_DENSITY.to_string(), density);

        let outputs = self.service.evaluate(&inputs)?;
        let mass = outputs
            .get(OUTPUT_MASS)
            .copied()
            .ok_or_else(|| CalculationServiceError::MissingValue(OUTPUT_MASS.to_string()))?;

        debug!(volume, density, mass, "delegated mass calculation");
        Ok(mass)
    }

    fn strategy(&self) -> CalculationStrategy {
        CalculationStrategy::Delegated
    }
}
