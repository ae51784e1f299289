use crate::*;

#[test]
fn translate_x_to_origin_leaves_y_alone() {
    assert_eq!(translate_x("M 10 10 L 20 20 Z").unwrap(), "M 0 10 L 10 20 Z");
}

#[test]
fn translate_to_origin_moves_both_axes() {
    assert_eq!(translate_xy("M 10 10 L 20 20 Z").unwrap(), "M 0 0 L 10 10 Z");
}

#[test]
fn translate_x_rounds_x_only() {
    assert_eq!(
        translate_x("M 0.5 0.25 L 3.7 1.5").unwrap(),
        "M 0 0.25 L 3 1.5"
    );
}

#[test]
fn translate_rounds_half_away_from_zero() {
    assert_eq!(translate_x("M -2 0 L 0.5 0").unwrap(), "M 0 0 L 3 0");
    assert_eq!(translate_xy("M 0 -2 L 0 0.5").unwrap(), "M 0 0 L 0 3");
}

#[test]
fn translate_result_starts_at_origin() {
    let path = parse("M 13.2 -7 L 40 2.5 L 20 30 Z").unwrap();

    let x_only = translate_x_to_origin(&path).unwrap();
    assert_eq!(compute_bounding_box(&x_only).unwrap().min_x, 0.0);

    let both = translate_to_origin(&path).unwrap();
    let b = compute_bounding_box(&both).unwrap();
    assert_eq!((b.min_x, b.min_y), (0.0, 0.0));
}

#[test]
fn translate_is_idempotent() {
    let path = parse("M 13.2 -7 L 40 2.5 L 20 30 Z").unwrap();

    let once = translate_x_to_origin(&path).unwrap();
    assert_eq!(translate_x_to_origin(&once).unwrap(), once);

    let once = translate_to_origin(&path).unwrap();
    assert_eq!(translate_to_origin(&once).unwrap(), once);
}

#[test]
fn translate_does_not_touch_the_input_path() {
    let path = parse("M 10 10 L 20 20 Z").unwrap();
    let before = path.clone();
    let x_only = translate_x_to_origin(&path).unwrap();
    let both = translate_to_origin(&path).unwrap();
    assert_eq!(path, before);
    assert_ne!(x_only, both);
}

#[test]
fn translate_treats_relative_arguments_as_coordinates() {
    assert_eq!(translate_x("m 10 10 l 5 5").unwrap(), "m 5 10 l 0 5");
}

#[test]
fn translate_moves_horizontal_lines_and_arc_endpoints_only() {
    assert_eq!(
        translate_xy("M 10 10 H 20 V 30 A 5 5 0 1 0 15 15").unwrap(),
        "M 0 0 H 10 V 20 A 5 5 0 1 0 5 5"
    );
}

#[test]
fn translate_of_close_only_path_fails() {
    let path = parse("z").unwrap();
    assert_eq!(translate_x_to_origin(&path), Err(Error::EmptyBoundingBox));
    assert_eq!(translate_to_origin(&path), Err(Error::EmptyBoundingBox));
}

#[test]
fn to_absolute_resolves_relative_commands() {
    let path = parse("m 10 10 l 5 5 h 5 v -10 z l 1 1").unwrap();
    assert_eq!(
        to_absolute(&path).unwrap().to_path_data(),
        "M 10 10 L 15 15 H 20 V 5 Z L 11 11"
    );
}

#[test]
fn to_absolute_chains_repeated_groups() {
    let path = parse("m 1 1 2 2 l 1 0 1 0").unwrap();
    assert_eq!(to_absolute(&path).unwrap().to_path_data(), "M 1 1 3 3 L 4 3 5 3");
}

#[test]
fn to_absolute_offsets_every_control_point_from_segment_start() {
    let path = parse("M 10 10 c 1 1 2 2 3 3 a 4 4 0 0 1 1 -1").unwrap();
    assert_eq!(
        to_absolute(&path).unwrap().to_path_data(),
        "M 10 10 C 11 11 12 12 13 13 A 4 4 0 0 1 14 12"
    );
}

#[test]
fn to_absolute_keeps_absolute_commands() {
    let path = parse("M 1 2 L 3 4 Z").unwrap();
    assert_eq!(to_absolute(&path).unwrap(), path);
}

#[test]
fn translate_overflow_is_an_error() {
    let path = parse("M -1e308 0 L 1e308 10").unwrap();
    assert_eq!(
        translate_x_to_origin(&path),
        Err(Error::NonFinite { index: 1 })
    );
    assert_eq!(translate_to_origin(&path), Err(Error::NonFinite { index: 1 }));
    assert_eq!(
        translate_x("M -1e308 0 L 1e308 10"),
        Err(Error::NonFinite { index: 1 })
    );
}

#[test]
fn to_absolute_overflow_is_an_error() {
    let path = parse("m 1e308 0 l 1e308 0").unwrap();
    assert_eq!(to_absolute(&path), Err(Error::NonFinite { index: 1 }));
}
