use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A validated collision shape.
///
/// Dimensions are always finite and strictly positive. Rectangles are treated
/// as axis-aligned by collision detection regardless of the body's rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A circle centered on the body's position
    Circle { radius: f64 },

    /// An axis-aligned rectangle centered on the body's position
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    /// Creates a circle, failing if the radius is not a finite positive number
    pub fn circle(radius: f64) -> Result<Self> {
        Ok(Self::Circle {
            radius: check_dimension("radius", radius)?,
        })
    }

    /// Creates a rectangle, failing if either side is not a finite positive number
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Ok(Self::Rectangle {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    /// Returns the type name of the shape
    pub fn shape_type(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "Circle",
            Self::Rectangle { .. } => "Rectangle",
        }
    }

    /// Returns the half extents of the shape's bounding box
    pub fn half_extents(&self) -> Vector2 {
        match *self {
            Self::Circle { radius } => Vector2::new(radius, radius),
            Self::Rectangle { width, height } => Vector2::new(width * 0.5, height * 0.5),
        }
    }

    /// Returns the area of the shape
    pub fn area(&self) -> f64 {
        match *self {
            Self::Circle { radius } => std::f64::consts::PI * radius * radius,
            Self::Rectangle { width, height } => width * height,
        }
    }
}

fn check_dimension(dimension: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidDimension { dimension, value })
    }
}
