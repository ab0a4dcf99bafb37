use crate::bodies::Body;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances a body's velocity and position over a time step
    fn integrate(&mut self, body: &mut Body, dt: f64);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
