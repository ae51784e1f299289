use crate::*;

fn fractional_digits_all(out: &str, precision: usize) -> bool {
    out.split(' ')
        .filter(|t| t.parse::<f64>().is_ok())
        .all(|t| match t.split_once('.') {
            Some((_, frac)) => frac.len() == precision,
            None => precision == 0,
        })
}

#[test]
fn normalize_scales_into_default_target_box() {
    let path = parse("M 0 0 L 50 0 L 50 50 Z").unwrap();
    let out = normalize(&path, &NormalizeOptions::default()).unwrap();
    assert_eq!(out.scale, Scale::Uniform(2.0));
    assert_eq!(out.to_string(), "M 0 0 L 100 0 L 100 100 Z");
}

#[test]
fn normalize_translates_before_scaling() {
    let options = NormalizeOptions::default().with_precision(2).with_target_size(50.0);
    assert_eq!(
        normalize_str("M 10 20 L 30 60", &options).unwrap(),
        "M 0.00 0.00 L 25.00 50.00"
    );
}

#[test]
fn normalize_larger_side_equals_target_size() {
    let path = parse("M 3 -1 L 17 4 L 9 12.5 Z").unwrap();
    let options = NormalizeOptions::default().with_precision(3).with_target_size(64.0);
    let out = normalize(&path, &options).unwrap();
    let b = out.bounding_box().unwrap();
    assert_eq!((b.min_x, b.min_y), (0.0, 0.0));
    assert!((b.width().max(b.height()) - 64.0).abs() < 1e-3);
}

#[test]
fn normalize_output_has_exact_precision() {
    let options = NormalizeOptions::default().with_precision(3);
    let out = normalize_str("M 0 0 L 3 0 L 3 1", &options).unwrap();
    assert_eq!(out, "M 0.000 0.000 L 100.000 0.000 L 100.000 33.333");
    assert!(fractional_digits_all(&out, 3));

    let out = normalize_str("M 1.5 2.25 L 7 9.125 z", &NormalizeOptions::default()).unwrap();
    assert!(fractional_digits_all(&out, 0));
}

#[test]
fn normalize_keeps_rounded_values_in_the_path() {
    let options = NormalizeOptions::default().with_precision(3);
    let out = normalize(&parse("M 0 0 L 3 0 L 3 1").unwrap(), &options).unwrap();
    assert_eq!(out.path.commands()[2].args, vec![100.0, 33.333]);
}

#[test]
fn normalize_single_point_skips_scaling() {
    let out = normalize(&parse("M 5 5 L 5 5").unwrap(), &NormalizeOptions::default()).unwrap();
    assert_eq!(out.scale, Scale::Degenerate);
    assert_eq!(out.scale.factor(), 1.0);
    assert_eq!(out.to_string(), "M 0 0 L 0 0");
}

#[test]
fn normalize_thin_path_scales_by_its_nonzero_side() {
    let out = normalize(&parse("M 5 0 L 5 20").unwrap(), &NormalizeOptions::default()).unwrap();
    assert_eq!(out.scale, Scale::Uniform(5.0));
    assert_eq!(out.to_string(), "M 0 0 L 0 100");
}

#[test]
fn normalize_keeps_relative_letters() {
    assert_eq!(
        normalize_str("m 0 0 l 10 10", &NormalizeOptions::default()).unwrap(),
        "m 0 0 l 100 100"
    );
}

#[test]
fn normalize_can_resolve_relative_commands_first() {
    let options = NormalizeOptions::default().with_absolute(true);
    assert_eq!(
        normalize_str("m 10 10 l 10 0 l 0 10 z", &options).unwrap(),
        "M 0 0 L 100 0 L 100 100 Z"
    );
}

#[test]
fn normalize_scales_arc_radii_and_keeps_flags() {
    let options = NormalizeOptions::default().with_precision(1).with_target_size(20.0);
    assert_eq!(
        normalize_str("M 0 0 A 5 5 30 1 0 10 10", &options).unwrap(),
        "M 0.0 0.0 A 10.0 10.0 30.0 1 0 20.0 20.0"
    );
}

#[test]
fn normalize_does_not_touch_the_input_path() {
    let path = parse("M 10 10 L 20 20 Z").unwrap();
    let before = path.clone();
    let _ = normalize(&path, &NormalizeOptions::default()).unwrap();
    assert_eq!(path, before);
}

#[test]
fn normalize_of_close_only_path_fails() {
    let path = parse("Z").unwrap();
    assert_eq!(
        normalize(&path, &NormalizeOptions::default()),
        Err(Error::EmptyBoundingBox)
    );
}

#[test]
fn normalize_rounds_halves_away_from_zero() {
    let options = NormalizeOptions::default().with_target_size(1.0);
    assert_eq!(
        normalize_str("M 0 0 L 2 0 L 2 1", &options).unwrap(),
        "M 0 0 L 1 0 L 1 1"
    );
}

#[test]
fn normalize_fits_extreme_coordinates() {
    assert_eq!(
        normalize_str("M 0 0 L 1e308 5e307", &NormalizeOptions::default()).unwrap(),
        "M 0 0 L 100 50"
    );
}

#[test]
fn normalize_overflowing_extent_is_an_error() {
    assert_eq!(
        normalize_str("M -1e308 0 L 1e308 10", &NormalizeOptions::default()),
        Err(Error::NonFinite { index: 1 })
    );
}

#[test]
fn normalize_rejects_invalid_options() {
    let path = parse("M 0 0 L 1 1").unwrap();
    for options in [
        NormalizeOptions::default().with_target_size(0.0),
        NormalizeOptions::default().with_target_size(-5.0),
        NormalizeOptions::default().with_target_size(f64::NAN),
        NormalizeOptions::default().with_precision(18),
    ] {
        assert!(matches!(
            normalize(&path, &options),
            Err(Error::InvalidOptions { .. })
        ));
    }
}

#[test]
fn options_default_values() {
    let options = NormalizeOptions::default();
    assert_eq!(options.precision, 0);
    assert_eq!(options.target_size, 100.0);
    assert!(!options.absolute);
}

#[test]
fn options_from_json_fill_missing_keys() {
    let options = NormalizeOptions::from_json(r#"{"precision": 2, "targetSize": 24}"#).unwrap();
    assert_eq!(options, NormalizeOptions::default().with_precision(2).with_target_size(24.0));

    assert_eq!(NormalizeOptions::from_json("{}").unwrap(), NormalizeOptions::default());
}

#[test]
fn options_from_json_validates() {
    assert!(matches!(
        NormalizeOptions::from_json(r#"{"targetSize": 0}"#),
        Err(Error::InvalidOptions { .. })
    ));
    assert!(matches!(
        NormalizeOptions::from_json(r#"{"precision": -1}"#),
        Err(Error::InvalidOptions { .. })
    ));
    assert!(matches!(
        NormalizeOptions::from_json("not json"),
        Err(Error::InvalidOptions { .. })
    ));
}
