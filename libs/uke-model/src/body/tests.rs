use super::*;
use approx::assert_relative_eq;

fn params() -> InstrumentParams {
    InstrumentParams::default()
}

#[test]
fn test_outer_shell_extent() {
    let p = params();
    let b = outer_shell(&p).bounds().unwrap();
    assert_relative_eq!(b.min.x, p.tail_x(), epsilon = 1e-9);
    assert_relative_eq!(b.max.x, p.neck_offset, epsilon = 1e-9);
    assert_relative_eq!(b.max.y, p.body_size / 2.0, epsilon = 1e-9);
    assert_relative_eq!(b.min.z, -p.thickness, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, 0.0, epsilon = 1e-9);
}

#[test]
fn test_cavity_sits_inside_the_shell() {
    let p = params();
    let outer = outer_shell(&p).bounds().unwrap();
    let inner = cavity(&p).bounds().unwrap();
    assert!(inner.min.cmpgt(outer.min).all());
    assert!(inner.max.cmplt(outer.max).all());
    assert_relative_eq!(inner.max.z, cavity_top_z(&p), epsilon = 1e-9);
    assert_relative_eq!(inner.min.z, cavity_bottom_z(&p), epsilon = 1e-9);
}

#[test]
fn test_soundboard_and_back_thickness() {
    let p = params();
    // Offset towards the top: thinner soundboard, thicker back.
    assert_relative_eq!(cavity_top_z(&p), -2.0, epsilon = 1e-9);
    assert_relative_eq!(cavity_bottom_z(&p), -47.0, epsilon = 1e-9);
}

#[test]
fn test_wall_is_positive() {
    let p = params();
    assert!(min_wall_thickness(&p) > 0.0);
    let top_plate = -cavity_top_z(&p);
    assert!(top_plate >= min_wall_thickness(&p));
}

#[test]
fn test_sound_hole_keeps_clear_of_the_walls() {
    let p = params();
    let hole = sound_hole(&p);
    assert!(!hole.is_clamped());
    assert_relative_eq!(hole.radius, p.sound_hole_radius);
    assert!(hole.clearance >= SOUND_HOLE_MARGIN);
    assert!(hole.center.x + hole.radius + SOUND_HOLE_MARGIN <= screw_block_inner_x(&p));
    assert_eq!(hole.center.y, 0.0);
}

#[test]
fn test_oversized_sound_hole_is_clamped() {
    let p = InstrumentParams {
        sound_hole_radius: 60.0,
        ..params()
    };
    let hole = sound_hole(&p);
    assert!(hole.is_clamped());
    assert!(hole.radius < 60.0);
    assert_relative_eq!(hole.clearance, SOUND_HOLE_MARGIN, epsilon = 1e-9);
}

#[test]
fn test_sound_hole_cutter_spans_only_the_soundboard() {
    let p = params();
    let hole = sound_hole(&p);
    let b = hole.cutter().bounds().unwrap();
    assert_relative_eq!(b.min.z, cavity_top_z(&p) - OVERCUT, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, OVERCUT, epsilon = 1e-9);
}

#[test]
fn test_screw_block_bolts_match_the_heel() {
    let p = params();
    assert_eq!(screw_block_bolts(&p), neck::neck_bolts(&p));
    for bolt in screw_block_bolts(&p) {
        assert!(bolt.x > screw_block_inner_x(&p));
        assert!(bolt.z > -(p.heel_depth() + SCREW_BLOCK_FLOOR));
    }
}

#[test]
fn test_fused_block_has_no_holes() {
    let p = params();
    let bolted = screw_block(&p, Joinery::Bolted);
    let fused = screw_block(&p, Joinery::Fused);
    assert_eq!(fused.kind(), "intersection");
    assert_eq!(bolted.kind(), "difference");
    assert!(bolted.validate().is_ok());
}

#[test]
fn test_brace_stops_short_of_the_sound_hole() {
    let p = params();
    let hole = sound_hole(&p);
    let b = brace(&p).bounds().unwrap();
    assert_relative_eq!(
        b.max.x,
        hole.center.x - hole.radius - BRACE_HOLE_GAP,
        epsilon = 1e-9
    );
    assert!(b.min.x < body_split(&p).station);
    assert_relative_eq!(b.min.z, cavity_top_z(&p) - BRACE_HEIGHT, epsilon = 1e-9);
}

#[test]
fn test_tailpiece_stands_on_the_soundboard() {
    let p = params();
    let b = placed_tailpiece(&p).bounds().unwrap();
    assert_relative_eq!(b.min.z, 0.0, epsilon = 1e-9);
    assert!(b.min.x > p.tail_x());
    assert!(b.max.x < p.lower_bout_x());
}

#[test]
fn test_body_is_valid() {
    let p = params();
    let whole = body(&p, Joinery::Bolted);
    assert!(whole.validate().is_ok());
    let b = whole.bounds().unwrap();
    assert!(b.is_finite());
}

#[test]
fn test_halves_split_at_lower_bout() {
    let p = params();
    let split = body_split(&p);
    assert_eq!(split.station, p.lower_bout_x());

    let neck_half = neck_side(&p);
    let tail_half = tail_side(&p);
    assert_relative_eq!(neck_half.shape.bounds().unwrap().min.x, split.station);
    assert_relative_eq!(tail_half.shape.bounds().unwrap().max.x, split.station);
    assert_eq!(neck_half.features.len(), 2);
    for (a, b) in neck_half.features.iter().zip(&tail_half.features) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.diameter, b.diameter);
    }
}

#[test]
fn test_lugs_rest_on_the_back() {
    let p = params();
    let b = split_lugs(&p).bounds().unwrap();
    assert_relative_eq!(b.min.z, cavity_bottom_z(&p) - OVERCUT, epsilon = 1e-9);
    assert!(b.max.z < cavity_top_z(&p) - BRACE_HEIGHT);
    let lug_y = p.body_size * SPLIT_LUG_Y_RATIO;
    assert_relative_eq!(b.max.y, lug_y + SPLIT_LUG_SIZE[1] / 2.0, epsilon = 1e-9);
}

#[test]
fn test_split_sockets_are_buried_in_the_lugs() {
    let p = params();
    let tail_half = tail_side(&p);
    let neck_half = neck_side(&p);
    assert!(tail_half
        .features
        .iter()
        .all(|f| dowel_seated(&p, f, Side::Tail)));
    assert!(neck_half
        .features
        .iter()
        .all(|f| dowel_seated(&p, f, Side::Head)));
}

#[test]
fn test_socket_off_the_lug_is_not_seated() {
    let p = params();
    let mut feature = tail_side(&p).features[0];
    feature.position.y = 0.0;
    assert!(!dowel_seated(&p, &feature, Side::Tail));
}
