use super::*;
use approx::assert_relative_eq;

#[test]
fn test_hex_nut_slot_is_one_nut_wide() {
    let slot = hex_nut_slot(7.3, 3.4, 10.0);
    let b = slot.bounds().unwrap();
    // Hexagon circumradius is af / sqrt(3); bounds use the circumradius.
    let r = 7.3 / 3f64.sqrt();
    assert_relative_eq!(b.max.y, r, epsilon = 1e-9);
    assert_relative_eq!(b.min.z, -10.0 - r, epsilon = 1e-9);
    assert_relative_eq!(b.size().x, 3.4, epsilon = 1e-9);
    assert!(slot.validate().is_ok());
}

#[test]
fn test_hex_nut_slot_without_slot_is_a_prism() {
    let nut = hex_nut_slot(7.3, 3.4, 0.0);
    assert_eq!(nut.kind(), "rotate");
    assert!(matches!(
        nut.children()[0],
        Shape::Cylinder {
            segments: Some(6),
            ..
        }
    ));
}

#[test]
fn test_prismoid_bounds() {
    let p = prismoid(DVec2::new(10.0, 4.0), DVec2::new(6.0, 4.0), 8.0);
    let b = p.bounds().unwrap();
    assert_relative_eq!(b.min.x, -5.0);
    assert_relative_eq!(b.max.y, 2.0);
    assert_relative_eq!(b.max.z, 8.0);
    assert!(p.validate().is_ok());
}

#[test]
fn test_prismoid_to_an_edge() {
    let wedge = prismoid(DVec2::new(4.0, 4.0), DVec2::new(0.0, 4.0), 3.0);
    assert!(wedge.validate().is_ok());
}

#[test]
fn test_half_cylinder_hangs_below_zero() {
    let half = half_cylinder(100.0, 20.0);
    let b = half.bounds().unwrap();
    assert_relative_eq!(b.min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(b.max.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(b.min.z, -20.0, epsilon = 1e-9);
    assert_eq!(half.kind(), "difference");
    assert!(half.validate().is_ok());
}

#[test]
fn test_makers_mark_fits_its_size() {
    let mark = makers_mark(12.0, 0.8);
    let b = mark.bounds().unwrap();
    assert!(b.size().x <= 12.0 + 1e-9);
    assert!(b.size().y <= 12.0 + 1e-9);
    assert_relative_eq!(b.min.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, 0.8, epsilon = 1e-9);
    assert!(mark.validate().is_ok());
}
