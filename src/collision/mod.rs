mod collision_filter;
mod collision_record;
mod contact_solver;
pub mod narrow_phase;

pub use self::collision_filter::{
    CollisionFilter, CollisionGroup, ExceptionFilter, SymmetricExceptionFilter,
};
pub use self::collision_record::CollisionRecord;
pub use self::contact_solver::ImpulseResolver;
pub use self::narrow_phase::{detect, detect_bodies};
