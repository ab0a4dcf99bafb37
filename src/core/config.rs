use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics core
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Number of consecutive ticks a relaxation episode may last. Also sets
    /// the share of friction applied per resolution (`1 / iterations`).
    pub relaxation_iterations: u32,

    /// Fraction of the penetration depth removed by positional correction
    pub correction_rate: f64,

    /// Tangential speed below which friction is not applied
    pub friction_velocity_threshold: f64,

    /// Skip a pair when either body excludes the other's group, instead of
    /// only when the first body excludes the second's
    pub symmetric_exceptions: bool,
}

impl SimulationConfig {
    /// Checks that every parameter is within its usable range
    pub fn validate(&self) -> Result<()> {
        if self.relaxation_iterations == 0 {
            return Err(PhysicsError::InvalidParameter(
                "relaxation_iterations must be at least 1".to_string(),
            ));
        }

        if !(self.correction_rate > 0.0 && self.correction_rate <= 1.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "correction_rate must be in (0, 1], got {}",
                self.correction_rate
            )));
        }

        if !(self.friction_velocity_threshold >= 0.0 && self.friction_velocity_threshold.is_finite()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "friction_velocity_threshold must be finite and non-negative, got {}",
                self.friction_velocity_threshold
            )));
        }

        Ok(())
    }

    pub fn with_relaxation_iterations(mut self, iterations: u32) -> Self {
        self.relaxation_iterations = iterations;
        self
    }

    pub fn with_correction_rate(mut self, rate: f64) -> Self {
        self.correction_rate = rate;
        self
    }

    pub fn with_friction_velocity_threshold(mut self, threshold: f64) -> Self {
        self.friction_velocity_threshold = threshold;
        self
    }

    pub fn with_symmetric_exceptions(mut self, symmetric: bool) -> Self {
        self.symmetric_exceptions = symmetric;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            relaxation_iterations: 15,
            correction_rate: 0.8,
            friction_velocity_threshold: 0.01,
            symmetric_exceptions: false,
        }
    }
}
