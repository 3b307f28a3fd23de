//! Tests for shape construction and combinator normalisation.

use super::*;

fn unit() -> Shape {
    Shape::cube(DVec3::ONE)
}

#[test]
fn test_cube_node() {
    let cube = Shape::centered_cube(DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(cube.dimension(), Some(Dimension::Solid));
    assert!(!cube.is_2d());
    assert_eq!(cube.kind(), "cube");
}

#[test]
fn test_circle_node() {
    let circle = Shape::circle(5.0);
    assert!(circle.is_2d());
    assert_eq!(circle.node_count(), 1);
}

#[test]
fn test_extrusion_is_solid() {
    let prism = Shape::circle(5.0).extrude(3.0);
    assert_eq!(prism.dimension(), Some(Dimension::Solid));
    assert_eq!(prism.node_count(), 2);
}

#[test]
fn test_with_segments_only_touches_round_primitives() {
    let octagon = Shape::circle(10.0).with_segments(8);
    assert!(matches!(octagon, Shape::Circle { segments: Some(8), .. }));
    assert_eq!(unit().with_segments(8), unit());
}

#[test]
fn test_identity_transforms_are_skipped() {
    assert_eq!(unit().translate(DVec3::ZERO), unit());
    assert_eq!(unit().rotate(DVec3::ZERO), unit());
    assert_eq!(unit().scale(DVec3::ONE), unit());
}

#[test]
fn test_transforms_of_empty_stay_empty() {
    assert!(Shape::Empty.translate(DVec3::X).is_empty());
    assert!(Shape::Empty.mirror(DVec3::Z).is_empty());
    assert!(Shape::Empty.extrude(2.0).is_empty());
}

#[test]
fn test_union_flattens_and_skips_empty() {
    let a = unit();
    let b = unit().translate(DVec3::X);
    let c = unit().translate(DVec3::Y);
    let nested = a.clone().union(b.clone());
    let merged = union_all([nested, Shape::Empty, c.clone()]);
    match merged {
        Shape::Boolean {
            operation: BooleanOperation::Union,
            children,
        } => assert_eq!(children, vec![a, b, c]),
        other => panic!("Expected Union, got {:?}", other),
    }
}

#[test]
fn test_union_of_one_is_itself() {
    assert_eq!(union_all([unit(), Shape::Empty]), unit());
    assert!(union_all(Vec::new()).is_empty());
}

#[test]
fn test_difference_keeps_operand_order() {
    let base = unit().scale(DVec3::splat(10.0));
    let first = unit();
    let second = unit().translate(DVec3::Z);
    let result = base.clone().difference(first.clone()).difference(second.clone());
    match result {
        Shape::Boolean {
            operation: BooleanOperation::Difference,
            children,
        } => assert_eq!(children, vec![base, first, second]),
        other => panic!("Expected Difference, got {:?}", other),
    }
}

#[test]
fn test_difference_of_empty_base_is_empty() {
    assert!(Shape::Empty.difference(unit()).is_empty());
}

#[test]
fn test_difference_without_cutters_is_base() {
    assert_eq!(difference_all(unit(), [Shape::Empty]), unit());
}

#[test]
fn test_intersection_with_empty_is_empty() {
    assert!(unit().intersection(Shape::Empty).is_empty());
}

#[test]
fn test_hull_and_minkowski() {
    let h = hull([unit(), Shape::Empty, unit().translate(DVec3::X * 5.0)]);
    assert_eq!(h.children().len(), 2);
    assert!(hull([Shape::Empty]).is_empty());

    let rounded = minkowski(unit(), Shape::sphere(0.5));
    assert_eq!(rounded.kind(), "minkowski");
    assert!(minkowski(unit(), Shape::Empty).is_empty());
}

#[test]
fn test_dimension_of_operation_follows_first_child() {
    let planar = union_all([Shape::circle(1.0), Shape::square(DVec2::ONE)]);
    assert!(planar.is_2d());
    assert_eq!(Shape::Empty.dimension(), None);
}

#[test]
fn test_node_count() {
    let part = unit()
        .translate(DVec3::X)
        .difference(Shape::cylinder(2.0, 0.2));
    // difference, translate, cube, cylinder
    assert_eq!(part.node_count(), 4);
}

#[test]
fn test_serializes_to_json() {
    let json = serde_json::to_string(&unit().translate(DVec3::X)).unwrap();
    assert!(json.contains("translate"));
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, unit().translate(DVec3::X));
}
