use crate::bodies::Body;
use crate::collision::{CollisionFilter, CollisionRecord};
use crate::math::{self, Vector2};
use crate::shapes::Shape;

/// Fraction of the summed radii used as depth when two circle centers coincide
const COINCIDENT_DEPTH_FRACTION: f64 = 0.1;

/// Tests two shapes at the given positions for overlap.
///
/// The returned normal always points from the first shape toward the second.
/// Rectangles are treated as axis-aligned.
pub fn detect(
    shape_a: &Shape,
    pos_a: Vector2,
    shape_b: &Shape,
    pos_b: Vector2,
) -> Option<CollisionRecord> {
    match (*shape_a, *shape_b) {
        (Shape::Circle { radius: radius_a }, Shape::Circle { radius: radius_b }) => {
            circle_circle(pos_a, radius_a, pos_b, radius_b)
        }
        (Shape::Rectangle { .. }, Shape::Rectangle { .. }) => {
            rectangle_rectangle(pos_a, shape_a.half_extents(), pos_b, shape_b.half_extents())
        }
        (Shape::Rectangle { .. }, Shape::Circle { radius }) => {
            rectangle_circle(pos_a, shape_a.half_extents(), pos_b, radius)
        }
        (Shape::Circle { radius }, Shape::Rectangle { .. }) => {
            // Rectangle first, then report the contact from the circle's side.
            rectangle_circle(pos_b, shape_b.half_extents(), pos_a, radius)
                .map(|record| record.flipped())
        }
    }
}

/// Runs the collision filter and then the geometry test for two bodies
pub fn detect_bodies(
    filter: &dyn CollisionFilter,
    body_a: &Body,
    body_b: &Body,
) -> Option<CollisionRecord> {
    if !filter.should_collide(body_a, body_b) {
        return None;
    }

    detect(
        body_a.get_shape(),
        body_a.get_position(),
        body_b.get_shape(),
        body_b.get_position(),
    )
}

/// Circle against circle
pub fn circle_circle(
    pos_a: Vector2,
    radius_a: f64,
    pos_b: Vector2,
    radius_b: f64,
) -> Option<CollisionRecord> {
    let offset = pos_b - pos_a;
    let dist_sq = offset.length_squared();
    let sum_radius = radius_a + radius_b;

    if dist_sq >= sum_radius * sum_radius {
        return None;
    }

    let dist = dist_sq.sqrt();
    if dist > 0.0 {
        Some(CollisionRecord::new(offset / dist, sum_radius - dist))
    } else {
        // Coincident centers have no direction to separate along.
        Some(CollisionRecord::new(
            Vector2::unit_y(),
            sum_radius * COINCIDENT_DEPTH_FRACTION,
        ))
    }
}

/// Axis-aligned rectangle against axis-aligned rectangle.
///
/// Separates along the axis of least penetration; ties go to X.
pub fn rectangle_rectangle(
    pos_a: Vector2,
    half_a: Vector2,
    pos_b: Vector2,
    half_b: Vector2,
) -> Option<CollisionRecord> {
    let offset = pos_b - pos_a;

    let overlap_x = half_a.x + half_b.x - offset.x.abs();
    if overlap_x <= 0.0 {
        return None;
    }

    let overlap_y = half_a.y + half_b.y - offset.y.abs();
    if overlap_y <= 0.0 {
        return None;
    }

    if overlap_x <= overlap_y {
        Some(CollisionRecord::new(
            Vector2::new(math::sign_or_positive(offset.x), 0.0),
            overlap_x,
        ))
    } else {
        Some(CollisionRecord::new(
            Vector2::new(0.0, math::sign_or_positive(offset.y)),
            overlap_y,
        ))
    }
}

/// Axis-aligned rectangle (first) against circle (second).
///
/// A circle whose center lies inside the rectangle is pushed out through the
/// nearest face, with depth `radius + distance to that face`.
pub fn rectangle_circle(
    rect_pos: Vector2,
    half: Vector2,
    circle_pos: Vector2,
    radius: f64,
) -> Option<CollisionRecord> {
    let offset = circle_pos - rect_pos;
    let mut closest = offset.clamp_to_extents(&half);

    if closest != offset {
        // Center outside: contact with the boundary point nearest to it.
        let to_center = offset - closest;
        let distance = to_center.length();
        let depth = radius - distance;
        if depth <= 0.0 {
            return None;
        }
        return Some(CollisionRecord::new(to_center / distance, depth));
    }

    // Center inside: snap to the nearest face.
    let gap_x = half.x - offset.x.abs();
    let gap_y = half.y - offset.y.abs();
    let face_normal = if gap_x <= gap_y {
        closest.x = half.x * math::sign_or_positive(offset.x);
        Vector2::new(math::sign_or_positive(offset.x), 0.0)
    } else {
        closest.y = half.y * math::sign_or_positive(offset.y);
        Vector2::new(0.0, math::sign_or_positive(offset.y))
    };

    let distance = offset.distance(&closest);
    Some(CollisionRecord::new(face_normal, radius + distance))
}
