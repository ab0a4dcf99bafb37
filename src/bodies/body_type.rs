/// Type of body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Dynamic bodies are moved by acceleration and collision response
    Dynamic,

    /// Static bodies have infinite mass: they never move and are never
    /// written by collision response
    Static,
}

impl RigidBodyType {
    /// Derives the body type from an inverse mass
    pub fn from_inverse_mass(inverse_mass: f64) -> Self {
        if inverse_mass > 0.0 {
            Self::Dynamic
        } else {
            Self::Static
        }
    }
}
