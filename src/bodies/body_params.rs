use crate::bodies::Material;
use crate::collision::CollisionGroup;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Acceleration given to bodies that do not specify one
pub const DEFAULT_ACCELERATION: Vector2 = Vector2::new(0.0, -9.81);

/// Physical parameters used to construct a [`Body`](crate::bodies::Body).
///
/// `mass` is only read during construction: a positive mass becomes an
/// inverse mass of `1 / mass`. Anything else, or a mass so small that its
/// inverse is not finite, makes the body static.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyParams {
    pub mass: f64,
    pub position: Vector2,
    pub rotation: f64,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    pub material: Material,
    pub group: Option<CollisionGroup>,
    pub exceptions: CollisionGroup,
}

impl BodyParams {
    /// Parameters for a dynamic body of the given mass at the origin
    pub fn dynamic(mass: f64) -> Self {
        Self {
            mass,
            ..Self::default()
        }
    }

    /// Parameters for a static body at the origin
    pub fn fixed() -> Self {
        Self {
            mass: 0.0,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vector2) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.material.restitution = restitution;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.material.friction = friction;
        self
    }

    pub fn with_group(mut self, group: CollisionGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_exceptions(mut self, exceptions: CollisionGroup) -> Self {
        self.exceptions = exceptions;
        self
    }
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            position: Vector2::zero(),
            rotation: 0.0,
            velocity: Vector2::zero(),
            acceleration: DEFAULT_ACCELERATION,
            material: Material::default(),
            group: None,
            exceptions: CollisionGroup::empty(),
        }
    }
}
