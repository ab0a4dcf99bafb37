mod body;
mod body_params;
mod body_type;
mod material;

pub use self::body::Body;
pub use self::body_params::{BodyParams, DEFAULT_ACCELERATION};
pub use self::body_type::RigidBodyType;
pub use self::material::Material;
