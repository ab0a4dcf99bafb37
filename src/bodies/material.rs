#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Surface properties of a body
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f64,

    /// Coefficient of friction, >= 0
    pub friction: f64,
}

impl Material {
    /// Creates a new material, clamping restitution to [0, 1] and friction to >= 0
    pub fn new(friction: f64, restitution: f64) -> Self {
        Self {
            friction,
            restitution,
        }
        .normalized()
    }

    /// Returns a copy with out-of-range coefficients pulled back into range.
    /// NaN becomes 0.
    pub fn normalized(self) -> Self {
        Self {
            restitution: if self.restitution.is_nan() {
                0.0
            } else {
                self.restitution.clamp(0.0, 1.0)
            },
            friction: if self.friction.is_nan() {
                0.0
            } else {
                self.friction.max(0.0)
            },
        }
    }

    /// Restitution used when two materials meet
    pub fn combine_restitution(a: f64, b: f64) -> f64 {
        a.min(b)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.3,
        }
    }
}
