//! A 2D rigid-body physics core.
//!
//! The core advances circles and axis-aligned rectangles under acceleration,
//! detects pairwise overlap and resolves it with positional correction,
//! friction and a restitution impulse. Iterative refinement is spread across
//! ticks: every [`PhysicsCore::tick`] performs exactly one all-pairs sweep.

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsCore, SimulationConfig};
pub use crate::bodies::{Body, BodyParams, RigidBodyType, Material};
pub use crate::shapes::{Shape, ShapeSpec};
pub use crate::collision::{CollisionGroup, CollisionRecord};
pub use crate::math::Vector2;

/// Error types for the physics core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("{shape} is missing its {dimension}")]
        MissingDimension {
            shape: &'static str,
            dimension: &'static str,
        },

        #[error("Invalid {dimension}: {value} (must be a finite positive number)")]
        InvalidDimension {
            dimension: &'static str,
            value: f64,
        },

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for physics core operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
