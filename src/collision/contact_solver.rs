use crate::bodies::{Body, Material};
use crate::collision::CollisionRecord;
use crate::core::SimulationConfig;

/// Impulse-based collision response for a single overlapping pair.
///
/// Each call runs three stages in a fixed order, each reading the velocities
/// left by the previous one:
/// 1. positional correction along the normal (Baumgarte-style, under-corrected)
/// 2. a fractional friction impulse per body, opposing its tangential velocity
/// 3. a restitution impulse, skipped when the pair is already separating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseResolver {
    /// Fraction of the penetration removed per resolution
    correction_rate: f64,

    /// Tangential speed below which friction is not applied
    friction_threshold: f64,

    /// Share of the full friction impulse applied per resolution
    friction_step_fraction: f64,
}

impl ImpulseResolver {
    /// Creates a new resolver
    pub fn new(correction_rate: f64, friction_threshold: f64, relaxation_iterations: u32) -> Self {
        Self {
            correction_rate,
            friction_threshold,
            friction_step_fraction: 1.0 / relaxation_iterations.max(1) as f64,
        }
    }

    /// Creates a resolver from the simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.correction_rate,
            config.friction_velocity_threshold,
            config.relaxation_iterations,
        )
    }

    pub fn correction_rate(&self) -> f64 {
        self.correction_rate
    }

    pub fn friction_step_fraction(&self) -> f64 {
        self.friction_step_fraction
    }

    /// Resolves a collision between `body_a` and `body_b`, where `record.normal`
    /// points from A toward B.
    ///
    /// At least one of the bodies must be dynamic; static bodies are never
    /// written.
    pub fn resolve(&self, body_a: &mut Body, body_b: &mut Body, record: &CollisionRecord) {
        let inv_mass_a = body_a.get_inverse_mass();
        let inv_mass_b = body_b.get_inverse_mass();
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum <= 0.0 {
            return;
        }

        let normal = record.normal;

        let correction = normal * (record.depth / inv_mass_sum * self.correction_rate);
        body_a.displace(-(correction * inv_mass_a));
        body_b.displace(correction * inv_mass_b);

        self.apply_friction(body_a, record);
        self.apply_friction(body_b, record);

        let relative_velocity = body_b.get_velocity() - body_a.get_velocity();
        let normal_velocity = relative_velocity.dot(&normal);
        if normal_velocity > 0.0 {
            return;
        }

        let restitution = Material::combine_restitution(
            body_a.get_restitution(),
            body_b.get_restitution(),
        );
        let j = -(1.0 + restitution) * normal_velocity / inv_mass_sum;
        let impulse = normal * j;

        body_a.add_velocity(-(impulse * inv_mass_a));
        body_b.add_velocity(impulse * inv_mass_b);
    }

    fn apply_friction(&self, body: &mut Body, record: &CollisionRecord) {
        let tangent = record.normal.tangent();
        let tangent_speed = body.get_velocity().dot(&tangent);
        if tangent_speed.abs() <= self.friction_threshold {
            return;
        }

        let magnitude = body.get_friction() * body.get_inverse_mass() * self.friction_step_fraction;
        body.add_velocity(tangent * (-tangent_speed.signum() * magnitude));
    }
}

impl Default for ImpulseResolver {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
