use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Placement of a body in the plane.
///
/// The transform is shared with non-physics systems (movement, rendering), so
/// its position may be rewritten between ticks. The rotation is cosmetic:
/// collision detection always treats shapes as axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position of the shape's center in world space
    pub position: Vector2,

    /// Rotation in radians, for rendering only
    pub rotation: f64,
}

impl Transform {
    /// Creates a new transform with the given position and rotation
    #[inline]
    pub fn new(position: Vector2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }

    /// Moves the transform by the given offset
    #[inline]
    pub fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }
}
