use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The result of a positive narrow-phase test between two bodies.
///
/// Produced fresh for every overlapping pair on every sweep and never stored
/// across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CollisionRecord {
    /// Unit separation normal, pointing from the first body toward the second
    pub normal: Vector2,

    /// Penetration along `normal`, never negative
    pub depth: f64,
}

impl CollisionRecord {
    /// Creates a new collision record
    pub fn new(normal: Vector2, depth: f64) -> Self {
        Self {
            normal,
            depth: depth.max(0.0),
        }
    }

    /// Returns the same contact seen from the other body
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}
