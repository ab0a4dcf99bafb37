use crate::bodies::{BodyParams, Material, RigidBodyType};
use crate::collision::CollisionGroup;
use crate::math::{Transform, Vector2};
use crate::shapes::{Shape, ShapeSpec};
use crate::Result;

/// A simulated physical object.
///
/// The physics core reads and writes a body's position and velocity during a
/// tick; between ticks the owner may read them and may move the body directly
/// through [`Body::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// The body's collision shape
    shape: Shape,

    /// The body's placement, shared with non-physics systems
    transform: Transform,

    /// Linear velocity
    velocity: Vector2,

    /// Acceleration applied every tick, scaled by the inverse mass
    acceleration: Vector2,

    /// Inverse of the mass; zero for static bodies
    inverse_mass: f64,

    /// Restitution and friction
    material: Material,

    /// The collision category this body belongs to
    group: Option<CollisionGroup>,

    /// Categories this body does not collide with
    exceptions: CollisionGroup,
}

impl Body {
    /// Creates a body from a shape description, failing if the description is
    /// missing a dimension or carries an invalid one
    pub fn new(spec: ShapeSpec, params: BodyParams) -> Result<Self> {
        let shape = spec.build()?;
        Ok(Self::from_shape(shape, params))
    }

    /// Creates a body from an already validated shape
    pub fn from_shape(shape: Shape, params: BodyParams) -> Self {
        // Subnormal masses would overflow to an infinite inverse mass.
        let inverse_mass = if params.mass > 0.0 && (1.0 / params.mass).is_finite() {
            1.0 / params.mass
        } else {
            0.0
        };
        let body_type = RigidBodyType::from_inverse_mass(inverse_mass);

        Self {
            shape,
            transform: Transform::new(params.position, params.rotation),
            velocity: match body_type {
                RigidBodyType::Dynamic => params.velocity,
                RigidBodyType::Static => Vector2::zero(),
            },
            acceleration: params.acceleration,
            inverse_mass,
            material: params.material.normalized(),
            group: params.group,
            exceptions: params.exceptions,
        }
    }

    /// Creates a circular body
    pub fn circle(radius: f64, params: BodyParams) -> Result<Self> {
        Self::new(ShapeSpec::circle(radius), params)
    }

    /// Creates a rectangular body
    pub fn rectangle(width: f64, height: f64, params: BodyParams) -> Result<Self> {
        Self::new(ShapeSpec::rectangle(width, height), params)
    }

    /// Returns the body's collision shape
    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the body's transform
    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    /// Sets the body's transform
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.transform.position
    }

    /// Moves the body directly, bypassing the simulation
    pub fn set_position(&mut self, position: Vector2) {
        self.transform.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's velocity. Ignored for static bodies.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        if !self.is_static() {
            self.velocity = velocity;
        }
    }

    /// Returns the body's acceleration
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Sets the body's acceleration. Ignored for static bodies.
    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        if !self.is_static() {
            self.acceleration = acceleration;
        }
    }

    /// Returns the body's inverse mass
    pub fn get_inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    /// Returns whether the body is static (zero inverse mass)
    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Returns whether the body is dynamic
    pub fn is_dynamic(&self) -> bool {
        !self.is_static()
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        RigidBodyType::from_inverse_mass(self.inverse_mass)
    }

    /// Returns the body's coefficient of restitution
    pub fn get_restitution(&self) -> f64 {
        self.material.restitution
    }

    /// Returns the body's coefficient of friction
    pub fn get_friction(&self) -> f64 {
        self.material.friction
    }

    /// Returns the collision category of this body
    pub fn get_group(&self) -> Option<CollisionGroup> {
        self.group
    }

    /// Sets the collision category of this body
    pub fn set_group(&mut self, group: Option<CollisionGroup>) {
        self.group = group;
    }

    /// Returns the categories this body does not collide with
    pub fn get_exceptions(&self) -> CollisionGroup {
        self.exceptions
    }

    /// Stops this body from colliding with bodies in `group`
    pub fn add_exception(&mut self, group: CollisionGroup) {
        self.exceptions.insert(group);
    }

    /// Allows this body to collide with bodies in `group` again
    pub fn remove_exception(&mut self, group: CollisionGroup) {
        self.exceptions.remove(group);
    }

    /// Displaces a dynamic body; static bodies are left untouched
    pub(crate) fn displace(&mut self, offset: Vector2) {
        if !self.is_static() {
            self.transform.translate(offset);
        }
    }

    /// Changes a dynamic body's velocity; static bodies are left untouched
    pub(crate) fn add_velocity(&mut self, delta: Vector2) {
        if !self.is_static() {
            self.velocity += delta;
        }
    }
}
