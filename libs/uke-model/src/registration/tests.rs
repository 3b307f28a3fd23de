use super::*;
use approx::assert_relative_eq;

fn block() -> Shape {
    Shape::cube(DVec3::new(100.0, 20.0, 10.0)).translate(DVec3::new(0.0, -10.0, 0.0))
}

fn split(style: DowelStyle) -> Split {
    Split::new(
        "block",
        40.0,
        vec![DVec2::new(-5.0, 5.0), DVec2::new(5.0, 5.0)],
        style,
    )
}

#[test]
fn test_diameters() {
    assert_relative_eq!(socket_diameter(), 2.0);
    assert_relative_eq!(socket_diameter() - peg_diameter(), PEG_CLEARANCE);
}

#[test]
fn test_halves_meet_at_the_station() {
    let s = split(DowelStyle::Pins);
    let tail = s.half(&block(), Side::Tail);
    let head = s.half(&block(), Side::Head);
    let tb = tail.shape.bounds().unwrap();
    let hb = head.shape.bounds().unwrap();
    assert_relative_eq!(tb.min.x, 0.0);
    assert_relative_eq!(tb.max.x, 40.0);
    assert_relative_eq!(hb.min.x, 40.0);
    assert_relative_eq!(hb.max.x, 100.0);
    assert!(tail.shape.validate().is_ok());
    assert!(head.shape.validate().is_ok());
}

#[test]
fn test_pins_put_sockets_on_both_sides() {
    let s = split(DowelStyle::Pins);
    for side in [Side::Tail, Side::Head] {
        let half = s.half(&block(), side);
        assert_eq!(half.features.len(), 2);
        assert!(half.features.iter().all(|f| f.kind == FeatureKind::Socket));
        assert_eq!(half.shape.kind(), "difference");
    }
}

#[test]
fn test_pegs_on_one_side_only() {
    let s = split(DowelStyle::Pegs { on: Side::Head });
    let head = s.half(&block(), Side::Head);
    let tail = s.half(&block(), Side::Tail);
    assert!(head.features.iter().all(|f| f.kind == FeatureKind::Peg));
    assert!(tail.features.iter().all(|f| f.kind == FeatureKind::Socket));

    // Pegs stick out of the head half towards the tail.
    let hb = head.shape.bounds().unwrap();
    assert_relative_eq!(hb.min.x, 40.0 - (DOWEL_DEPTH - PEG_END_GAP), epsilon = 1e-9);
}

#[test]
fn test_features_mate_pairwise() {
    for style in [DowelStyle::Pins, DowelStyle::Pegs { on: Side::Tail }] {
        let pairs = registration_features(&split(style));
        assert_eq!(pairs.len(), 2);
        for (tail, head) in pairs {
            assert!(features_mate(&tail, &head), "{:?} / {:?}", tail, head);
            assert_eq!(tail.position, head.position);
        }
    }
}

#[test]
fn test_mismatched_features_do_not_mate() {
    let s = split(DowelStyle::Pins);
    let a = s.features(Side::Tail)[0];
    let mut b = s.features(Side::Head)[1];
    assert!(!features_mate(&a, &b));
    b.position = a.position;
    b.diameter += 0.1;
    assert!(!features_mate(&a, &b));
}

#[test]
fn test_half_of_empty_is_empty() {
    let s = split(DowelStyle::Pins);
    let half = s.half(&Shape::Empty, Side::Tail);
    assert!(half.shape.is_empty());
    assert!(half.features.is_empty());
}

#[test]
fn test_side_opposite() {
    assert_eq!(Side::Tail.opposite(), Side::Head);
    assert_eq!(Side::Head.opposite(), Side::Tail);
}

#[test]
fn test_socket_seat_is_the_bore() {
    let s = split(DowelStyle::Pins);
    let tail = s.features(Side::Tail)[0].seat(Side::Tail);
    assert_relative_eq!(tail.min.x, 40.0 - DOWEL_DEPTH);
    assert_relative_eq!(tail.max.x, 40.0);
    assert_relative_eq!(tail.size().y, socket_diameter());
    assert_relative_eq!(tail.center().z, 5.0);

    let head = s.features(Side::Head)[0].seat(Side::Head);
    assert_relative_eq!(head.min.x, 40.0);
    assert_relative_eq!(head.max.x, 40.0 + DOWEL_DEPTH);
}

#[test]
fn test_peg_seat_is_its_root() {
    let s = split(DowelStyle::Pegs { on: Side::Head });
    let seat = s.features(Side::Head)[0].seat(Side::Head);
    assert_relative_eq!(seat.size().x, OVERCUT);
    assert_relative_eq!(seat.size().z, peg_diameter());
}

#[test]
fn test_features_within_their_halves() {
    for style in [DowelStyle::Pins, DowelStyle::Pegs { on: Side::Tail }] {
        let s = split(style);
        for side in [Side::Tail, Side::Head] {
            assert!(features_within(&s.half(&block(), side), side));
        }
    }
}

#[test]
fn test_dowels_off_the_part_are_not_within() {
    // Dowels above a block only 4 tall.
    let thin = Shape::cube(DVec3::new(100.0, 20.0, 4.0)).translate(DVec3::new(0.0, -10.0, 0.0));
    let s = split(DowelStyle::Pins);
    assert!(!features_within(&s.half(&thin, Side::Tail), Side::Tail));
    assert!(features_within(&s.half(&Shape::Empty, Side::Head), Side::Head));
}
