pub mod config;
pub mod events;
mod physics_core;
mod relaxation;

pub use self::config::SimulationConfig;
pub use self::events::{CollisionEvent, EventQueue};
pub use self::physics_core::PhysicsCore;
pub use self::relaxation::RelaxationState;
