use super::*;
use approx::assert_relative_eq;

fn params() -> InstrumentParams {
    InstrumentParams::default()
}

#[test]
fn test_string_positions_are_even_and_centred() {
    let ys = string_positions(42.0, 4);
    assert_eq!(ys.len(), 4);
    assert_relative_eq!(ys[0], -21.0);
    assert_relative_eq!(ys[3], 21.0);
    assert_relative_eq!(ys[1] - ys[0], ys[2] - ys[1]);
    assert!(string_positions(10.0, 0).is_empty());
}

#[test]
fn test_thicker_strings_sit_deeper() {
    // Second string is the thickest.
    assert!(notch_depth(1) > notch_depth(0));
    assert!(notch_depth(0) > notch_depth(3));
}

#[test]
fn test_nut_elevations_vary_per_string() {
    let p = params();
    let elevations = nut_string_elevations(&p);
    assert_eq!(elevations.len(), 4);
    assert!(elevations.iter().all(|&e| e > FINGERBOARD_THICKNESS));
    assert!(elevations[1] < elevations[3]);
}

#[test]
fn test_nut_shape() {
    let p = params();
    let n = nut(&p);
    let b = n.bounds().unwrap();
    assert_relative_eq!(b.size().x, NUT_LENGTH, epsilon = 1e-9);
    assert_relative_eq!(b.size().y, p.neck_width, epsilon = 1e-9);
    assert_relative_eq!(b.min.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, NUT_HEIGHT, epsilon = 1e-9);
    // block + one notch per string
    assert_eq!(n.children().len(), 1 + p.string_count as usize);
    assert!(n.validate().is_ok());
}

#[test]
fn test_bridge_variants() {
    let p = params();
    let standard = bridge(&p, BridgeVariant::Standard);
    let low = bridge(&p, BridgeVariant::Low);
    let hs = standard.bounds().unwrap();
    let hl = low.bounds().unwrap();
    assert_relative_eq!(hs.max.z, BRIDGE_HEIGHT, epsilon = 1e-9);
    assert_relative_eq!(hs.max.z - hl.max.z, BRIDGE_LOW_DROP, epsilon = 1e-9);
    assert_relative_eq!(hs.min.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(hs.size().y, bridge_length(&p), epsilon = 1e-9);
    assert!(standard.validate().is_ok());
    assert!(low.validate().is_ok());
}

#[test]
fn test_bridge_strings_fan_out() {
    let p = params();
    assert!(bridge_string_span(&p) > nut_string_span(&p));
    let low = bridge_string_elevations(&p, BridgeVariant::Low);
    let standard = bridge_string_elevations(&p, BridgeVariant::Standard);
    for (l, s) in low.iter().zip(&standard) {
        assert_relative_eq!(s - l, BRIDGE_LOW_DROP, epsilon = 1e-9);
    }
}

#[test]
fn test_bridge_feet_at_ends_and_middle() {
    let p = params();
    let [a, b, c] = bridge_feet(&p);
    assert_eq!(b, 0.0);
    assert_relative_eq!(a, -c);
    assert_relative_eq!(c + BRIDGE_FOOT_LENGTH / 2.0, bridge_length(&p) / 2.0);
}

#[test]
fn test_tailpiece_outline() {
    let p = params();
    let t = tailpiece(&p);
    let b = t.bounds().unwrap();
    assert_relative_eq!(b.size().x, TAILPIECE_LENGTH, epsilon = 1e-9);
    assert_relative_eq!(b.size().y, TAILPIECE_WIDE, epsilon = 1e-9);
    assert_relative_eq!(b.min.z, 0.0, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, TAILPIECE_HEIGHT, epsilon = 1e-9);
    assert_eq!(t.children().len(), 1 + p.string_count as usize);
    assert!(t.validate().is_ok());
}

#[test]
fn test_string_count_follows_params() {
    let p = InstrumentParams {
        string_count: 6,
        ..params()
    };
    assert_eq!(nut_string_elevations(&p).len(), 6);
    assert_eq!(nut(&p).children().len(), 7);
}
