use super::*;
use approx::assert_relative_eq;

const L: f64 = 18.0 * 25.4;

#[test]
fn test_nut_is_full_scale() {
    assert_relative_eq!(fret_position(L, 0), L);
    assert_eq!(fret_distance_from_nut(L, 0), 0.0);
    assert_eq!(fret_spacing(L, 0), 0.0);
}

#[test]
fn test_octave_halves_the_string() {
    assert_relative_eq!(fret_position(L, 12), L / 2.0, epsilon = 1e-9);
    assert_relative_eq!(fret_distance_from_nut(L, 12), L / 2.0, epsilon = 1e-9);
    assert_relative_eq!(fret_position(L, 24), L / 4.0, epsilon = 1e-9);
}

#[test]
fn test_positions_strictly_decrease_and_stay_positive() {
    let mut previous = fret_position(L, 0);
    for n in 1..=24 {
        let p = fret_position(L, n);
        assert!(p > 0.0);
        assert!(p < previous, "fret {} at {} not below {}", n, p, previous);
        previous = p;
    }
}

#[test]
fn test_spacing_shrinks_by_the_semitone_ratio() {
    let ratio = 2f64.powf(1.0 / 12.0);
    for n in 2..=18 {
        assert!(fret_spacing(L, n) > 0.0);
        assert_relative_eq!(
            fret_spacing(L, n - 1) / fret_spacing(L, n),
            ratio,
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_first_fret() {
    // 18 in scale: first fret just over 25.66 mm from the nut.
    assert_relative_eq!(fret_spacing(L, 1), 25.6611, epsilon = 1e-3);
}

#[test]
fn test_midpoint_lies_between_frets() {
    let mid = fret_midpoint(L, 5);
    assert!(mid < fret_position(L, 4));
    assert!(mid > fret_position(L, 5));
}

#[test]
fn test_table_matches_fret_count() {
    let params = InstrumentParams::default();
    let table = fret_table(&params);
    assert_eq!(table.len(), params.num_frets as usize);
    assert_eq!(table[0].number, 1);
    for fret in &table {
        assert_relative_eq!(fret.position + fret.from_nut, L, epsilon = 1e-9);
    }
    let json = serde_json::to_string(&table[11]).unwrap();
    assert!(json.contains("\"number\":12"));
}
