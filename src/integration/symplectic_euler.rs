use crate::bodies::Body;
use crate::integration::Integrator;

/// Symplectic Euler integrator (semi-implicit Euler).
///
/// The body's acceleration is scaled by its inverse mass, whatever the
/// acceleration represents. Static bodies therefore never gain velocity, and
/// heavier dynamic bodies accelerate less under the same nominal gravity.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&mut self, body: &mut Body, dt: f64) {
        integrate(body, dt);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}

/// Advances one body by `dt`: velocity first, then position from the new velocity
pub fn integrate(body: &mut Body, dt: f64) {
    let velocity = body.get_velocity() + body.get_acceleration() * (body.get_inverse_mass() * dt);
    body.set_velocity(velocity);

    // Runs for static bodies too; their velocity is always zero.
    let position = body.get_position() + body.get_velocity() * dt;
    body.set_position(position);
}
