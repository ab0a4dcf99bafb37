use relax2d::{
    Body, BodyParams, Material, RigidBodyType, Vector2,
    bodies::DEFAULT_ACCELERATION,
    error::PhysicsError,
    math::Transform,
    shapes::{Shape, ShapeKind, ShapeSpec},
};
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, -3.0);

    assert_eq!(v1 + v2, Vector2::new(5.0, -1.0));
    assert_eq!(v2 - v1, Vector2::new(3.0, -5.0));
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));
    assert_eq!(v1.dot(&v2), 4.0 - 6.0);

    assert_relative_eq!(v2.length(), 5.0);
    assert_relative_eq!(v2.normalize().length(), 1.0);
    assert_relative_eq!(v1.distance(&v2), (9.0f64 + 25.0).sqrt());

    let mut v = v1;
    v += v2;
    v *= 0.5;
    assert_relative_eq!(v, Vector2::new(2.5, -0.5));
}

#[test]
fn test_vector2_helpers() {
    // The friction tangent is the normal turned a quarter clockwise
    assert_eq!(Vector2::new(0.0, 1.0).tangent(), Vector2::new(1.0, 0.0));
    assert_eq!(Vector2::new(1.0, 0.0).tangent(), Vector2::new(0.0, -1.0));

    let extents = Vector2::new(1.0, 2.0);
    assert_eq!(Vector2::new(3.0, -5.0).clamp_to_extents(&extents), Vector2::new(1.0, -2.0));
    assert_eq!(Vector2::new(0.5, 1.0).clamp_to_extents(&extents), Vector2::new(0.5, 1.0));

    // Too short to normalize: returned unchanged
    assert_eq!(Vector2::zero().normalize(), Vector2::zero());
    assert!(Vector2::zero().is_zero());

    let na = Vector2::new(1.5, -2.5).to_nalgebra();
    assert_eq!(Vector2::from(na), Vector2::new(1.5, -2.5));
    assert_eq!(Vector2::from([3.0, 4.0]), Vector2::new(3.0, 4.0));
}

#[test]
fn test_transform() {
    let mut transform = Transform::from_position(Vector2::new(1.0, 1.0));
    transform.translate(Vector2::new(0.5, -2.0));
    assert_eq!(transform.position, Vector2::new(1.5, -1.0));
    assert_eq!(transform.rotation, 0.0);

    // Rotation is carried for rendering only
    let params = BodyParams::dynamic(1.0).with_rotation(0.75);
    let mut body = Body::rectangle(1.0, 1.0, params).unwrap();
    assert_eq!(body.get_transform().rotation, 0.75);

    body.set_transform(Transform::new(Vector2::new(2.0, 3.0), -0.5));
    assert_eq!(body.get_position(), Vector2::new(2.0, 3.0));
    assert_eq!(body.get_transform().rotation, -0.5);
}

#[test]
fn test_shape_construction() {
    assert_eq!(Shape::circle(2.0).unwrap(), Shape::Circle { radius: 2.0 });
    assert_eq!(
        ShapeSpec::rectangle(3.0, 1.0).build().unwrap(),
        Shape::Rectangle { width: 3.0, height: 1.0 }
    );

    let rect = Shape::rectangle(3.0, 1.0).unwrap();
    assert_eq!(rect.half_extents(), Vector2::new(1.5, 0.5));
    assert_relative_eq!(rect.area(), 3.0);
    assert_eq!(rect.shape_type(), "Rectangle");
}

#[test]
fn test_missing_dimensions() {
    let result = ShapeSpec::empty(ShapeKind::Rectangle).with_width(2.0).build();
    assert_eq!(
        result,
        Err(PhysicsError::MissingDimension { shape: "Rectangle", dimension: "height" })
    );

    let result = ShapeSpec::empty(ShapeKind::Rectangle).with_height(2.0).build();
    assert_eq!(
        result,
        Err(PhysicsError::MissingDimension { shape: "Rectangle", dimension: "width" })
    );

    let result = Shape::try_from(ShapeSpec::empty(ShapeKind::Circle));
    assert_eq!(
        result,
        Err(PhysicsError::MissingDimension { shape: "Circle", dimension: "radius" })
    );

    let circle = ShapeSpec::empty(ShapeKind::Circle).with_radius(0.5).build();
    assert_eq!(circle, Ok(Shape::Circle { radius: 0.5 }));
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Shape::circle(0.0),
        Err(PhysicsError::InvalidDimension { dimension: "radius", value: 0.0 })
    );
    assert_eq!(
        Shape::rectangle(1.0, -2.0),
        Err(PhysicsError::InvalidDimension { dimension: "height", value: -2.0 })
    );
    assert!(matches!(
        Shape::circle(f64::NAN),
        Err(PhysicsError::InvalidDimension { dimension: "radius", .. })
    ));
    assert!(Shape::circle(f64::INFINITY).is_err());
}

#[test]
fn test_body_construction_fails_without_partial_body() {
    let spec = ShapeSpec::empty(ShapeKind::Rectangle).with_width(1.0);
    let result = Body::new(spec, BodyParams::dynamic(1.0));
    assert!(matches!(result, Err(PhysicsError::MissingDimension { .. })));

    let message = Body::circle(-1.0, BodyParams::default()).unwrap_err().to_string();
    assert!(message.contains("radius"));
}

#[test]
fn test_mass_normalization() {
    let dynamic = Body::circle(1.0, BodyParams::dynamic(4.0)).unwrap();
    assert_relative_eq!(dynamic.get_inverse_mass(), 0.25);
    assert_eq!(dynamic.get_body_type(), RigidBodyType::Dynamic);
    assert!(dynamic.is_dynamic());

    // 1e-310 is subnormal: its inverse overflows to infinity
    for mass in [0.0, -3.0, f64::NAN, 1e-310] {
        let body = Body::circle(1.0, BodyParams::dynamic(mass)).unwrap();
        assert_eq!(body.get_inverse_mass(), 0.0);
        assert!(body.is_static());
        assert_eq!(body.get_body_type(), RigidBodyType::Static);
    }
}

#[test]
fn test_static_body_ignores_velocity() {
    let params = BodyParams::fixed().with_velocity(Vector2::new(3.0, 1.0));
    let mut body = Body::rectangle(2.0, 1.0, params).unwrap();
    assert_eq!(body.get_velocity(), Vector2::zero());

    body.set_velocity(Vector2::new(1.0, 1.0));
    assert_eq!(body.get_velocity(), Vector2::zero());

    body.set_acceleration(Vector2::new(3.0, 4.0));
    assert_eq!(body.get_acceleration(), DEFAULT_ACCELERATION);

    let mut dynamic = Body::circle(1.0, BodyParams::dynamic(1.0)).unwrap();
    dynamic.set_acceleration(Vector2::new(3.0, 4.0));
    assert_eq!(dynamic.get_acceleration(), Vector2::new(3.0, 4.0));

    // Position is still owned by the caller
    body.set_position(Vector2::new(4.0, 5.0));
    assert_eq!(body.get_position(), Vector2::new(4.0, 5.0));
}

#[test]
fn test_material_normalization() {
    let body = Body::circle(
        1.0,
        BodyParams::dynamic(1.0).with_restitution(1.5).with_friction(-1.0),
    )
    .unwrap();
    assert_eq!(body.get_restitution(), 1.0);
    assert_eq!(body.get_friction(), 0.0);

    let material = Material::new(0.3, -0.2);
    assert_eq!(material.restitution, 0.0);
    assert_eq!(material.friction, 0.3);

    assert_eq!(Material::combine_restitution(0.9, 0.2), 0.2);

    let params = BodyParams::dynamic(1.0).with_material(Material { friction: f64::NAN, restitution: 0.4 });
    let body = Body::circle(1.0, params).unwrap();
    assert_eq!(body.get_friction(), 0.0);
    assert_eq!(body.get_restitution(), 0.4);
}
