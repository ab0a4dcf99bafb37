use bitflags::bitflags;
use crate::bodies::Body;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// A set of collision category tags.
    ///
    /// A body belongs to at most one category (its group) and may list any
    /// number of categories it refuses to collide with (its exceptions).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct CollisionGroup: u32 {
        /// Default group
        const DEFAULT    = 0x0000_0001;

        /// Static world geometry
        const STATIC     = 0x0000_0002;

        /// Player-controlled objects
        const PLAYER     = 0x0000_0004;

        /// Enemies
        const ENEMY      = 0x0000_0008;

        /// Hazards (spikes, lava, ...)
        const HAZARD     = 0x0000_0010;

        /// Projectiles
        const PROJECTILE = 0x0000_0020;

        /// Collectible pickups
        const PICKUP     = 0x0000_0040;

        /// Sensors
        const SENSOR     = 0x0000_0080;
    }
}

impl CollisionGroup {
    /// Number of bits reserved by the named categories
    const NAMED_BITS: u32 = 8;

    /// Returns an application-defined category. `index` counts from zero and
    /// must be below 24; larger indices yield `None`.
    pub fn custom(index: u32) -> Option<Self> {
        let bit = Self::NAMED_BITS.checked_add(index)?;
        if bit < u32::BITS {
            Some(Self::from_bits_retain(1 << bit))
        } else {
            None
        }
    }
}

/// A filter for determining whether two bodies should be tested for collision
pub trait CollisionFilter: Send + Sync {
    /// Returns whether the pair `(body_a, body_b)` should reach the geometry test
    fn should_collide(&self, body_a: &Body, body_b: &Body) -> bool;
}

/// One-sided exception filter: the pair is skipped when `body_b`'s group is in
/// `body_a`'s exceptions. The reverse direction is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExceptionFilter;

impl ExceptionFilter {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionFilter for ExceptionFilter {
    fn should_collide(&self, body_a: &Body, body_b: &Body) -> bool {
        !excludes(body_a, body_b)
    }
}

/// Exception filter that skips the pair when either body excludes the other
#[derive(Debug, Default, Clone, Copy)]
pub struct SymmetricExceptionFilter;

impl SymmetricExceptionFilter {
    pub fn new() -> Self {
        Self
    }
}

impl CollisionFilter for SymmetricExceptionFilter {
    fn should_collide(&self, body_a: &Body, body_b: &Body) -> bool {
        !excludes(body_a, body_b) && !excludes(body_b, body_a)
    }
}

/// Returns whether `body`'s exceptions contain `other`'s group
fn excludes(body: &Body, other: &Body) -> bool {
    match other.get_group() {
        Some(group) => body.get_exceptions().intersects(group),
        None => false,
    }
}
