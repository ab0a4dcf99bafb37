mod shape;
mod shape_spec;

pub use self::shape::Shape;
pub use self::shape_spec::{ShapeKind, ShapeSpec};
