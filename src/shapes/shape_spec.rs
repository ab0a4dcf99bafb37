use crate::error::PhysicsError;
use crate::shapes::Shape;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// The kind of shape requested by a [`ShapeSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

/// A shape description as supplied by an orchestrator (for instance parsed
/// from level data), where dimensions may be absent.
///
/// Converting it into a [`Shape`] is the only place missing or invalid
/// dimensions are reported.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub radius: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ShapeSpec {
    /// Describes a circle with the given radius
    pub fn circle(radius: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            radius: Some(radius),
            width: None,
            height: None,
        }
    }

    /// Describes a rectangle with the given width and height
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            radius: None,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Describes a shape of the given kind with no dimensions set
    pub fn empty(kind: ShapeKind) -> Self {
        Self {
            kind,
            radius: None,
            width: None,
            height: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Validates the description and produces a [`Shape`]
    pub fn build(&self) -> Result<Shape> {
        match self.kind {
            ShapeKind::Circle => {
                let radius = require("Circle", "radius", self.radius)?;
                Shape::circle(radius)
            }
            ShapeKind::Rectangle => {
                let width = require("Rectangle", "width", self.width)?;
                let height = require("Rectangle", "height", self.height)?;
                Shape::rectangle(width, height)
            }
        }
    }
}

impl TryFrom<ShapeSpec> for Shape {
    type Error = PhysicsError;

    fn try_from(spec: ShapeSpec) -> Result<Self> {
        spec.build()
    }
}

impl From<Shape> for ShapeSpec {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Circle { radius } => Self::circle(radius),
            Shape::Rectangle { width, height } => Self::rectangle(width, height),
        }
    }
}

fn require(shape: &'static str, dimension: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or(PhysicsError::MissingDimension { shape, dimension })
}
