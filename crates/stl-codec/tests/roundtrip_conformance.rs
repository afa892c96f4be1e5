//! Round-trip conformance suite for the STL codec.
//!
//! Exercises the documented properties of the converter across both
//! representations: byte-exact binary round-trips, semantically exact
//! ASCII round-trips, cross-format value preservation at f32 precision,
//! and the file-based convenience path.
//!
//! To run: cargo test -p stl-codec --test roundtrip_conformance

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use stl_codec::{
    convert, convert_file, decode, detect_format, encode_ascii, encode_binary, CodecError,
    StlFormat, HEADER_SIZE, TRIANGLE_SIZE,
};
use stl_types::{StlModel, Triangle};
use tempfile::tempdir;

/// Build a fan of `n` facets with awkward but f32-exact coordinates.
fn fan_model(n: usize) -> StlModel {
    let triangles = (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let k = i as f32;
            Triangle::from_arrays(
                [0.0, 0.0, 1.0],
                [
                    [0.0, 0.0, 0.0],
                    [k.mul_add(0.125, 1.0), k * 0.25, -k],
                    [k * 1.0e-3, k.mul_add(-0.5, 100.0), k * 3.0e6],
                ],
                0,
            )
        })
        .collect();
    StlModel::new("fan", triangles)
}

#[test]
fn binary_round_trip_is_byte_identical() {
    let bytes = encode_binary(&fan_model(37)).unwrap();
    let again = encode_binary(&decode(&bytes).unwrap()).unwrap();
    assert_eq!(bytes, again);
    assert_eq!(bytes.len(), HEADER_SIZE + 4 + 37 * TRIANGLE_SIZE);
}

#[test]
fn ascii_round_trip_is_semantically_identical() {
    let model = fan_model(11);
    let text = encode_ascii(&model);
    let decoded = decode(text.as_bytes()).unwrap();

    assert_eq!(decoded.name, model.name);
    assert_eq!(decoded.triangle_count(), model.triangle_count());
    assert_eq!(decoded.triangles, model.triangles);
}

#[test]
fn cross_format_trip_preserves_every_float() {
    let model = fan_model(23);
    let binary = encode_binary(&model).unwrap();

    let ascii = convert(&binary, StlFormat::Ascii).unwrap();
    let binary_again = convert(&ascii, StlFormat::Binary).unwrap();

    assert_eq!(binary, binary_again);
}

#[test]
fn facet_order_is_preserved() {
    let model = fan_model(8);
    let decoded = decode(&convert(&encode_binary(&model).unwrap(), StlFormat::Ascii).unwrap());
    let decoded = decoded.unwrap();
    for (a, b) in model.triangles.iter().zip(&decoded.triangles) {
        assert_eq!(a.vertices, b.vertices);
    }
}

#[test]
fn non_finite_values_pass_through_both_paths() {
    let facet = Triangle::from_arrays(
        [f32::NAN, f32::INFINITY, f32::NEG_INFINITY],
        [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        0,
    );
    let model = StlModel::new("weird", vec![facet]);

    let bin = decode(&encode_binary(&model).unwrap()).unwrap();
    assert!(bin.triangles[0].normal.x.is_nan());
    assert_eq!(bin.triangles[0].normal.y, f32::INFINITY);

    let asc = decode(encode_ascii(&model).as_bytes()).unwrap();
    assert!(asc.triangles[0].normal.x.is_nan());
    assert_eq!(asc.triangles[0].normal.z, f32::NEG_INFINITY);
}

#[test]
fn zero_facet_boundaries() {
    let model = StlModel::new("plate", Vec::new());

    let binary = encode_binary(&model).unwrap();
    assert_eq!(binary.len(), 84);

    let text = encode_ascii(&model);
    assert_eq!(text, "solid plate\nendsolid plate");

    assert_eq!(decode(&binary).unwrap(), model);
    assert_eq!(decode(text.as_bytes()).unwrap(), model);
}

#[test]
fn detection_misclassification_is_stable() {
    // A binary file whose header starts with "solid" routes down the
    // ASCII path. The ASCII decoder then fails or yields an empty
    // model; either way the classification itself never changes.
    let mut binary = encode_binary(&StlModel::new("solid steel", Vec::new())).unwrap();
    assert_eq!(detect_format(&binary), StlFormat::Ascii);
    binary.truncate(5);
    assert_eq!(detect_format(&binary), StlFormat::Ascii);
}

#[test]
fn malformed_ascii_never_panics() {
    for text in [
        "solid t\n  facet normal 0 0 1",
        "solid t\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0",
        "solid t\n  facet normal a b c\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid t",
    ] {
        let err = decode(text.as_bytes()).unwrap_err();
        assert!(matches!(err, CodecError::MalformedInput { .. }));
    }
}

#[test]
fn convert_file_round_trips_on_disk() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("fan.stl");
    let mid = dir.path().join("fan-ascii.stl");
    let dst = dir.path().join("fan-binary.stl");

    let original = encode_binary(&fan_model(5)).unwrap();
    std::fs::write(&src, &original).unwrap();

    convert_file(&src, &mid, StlFormat::Ascii).unwrap();
    convert_file(&mid, &dst, StlFormat::Binary).unwrap();

    assert_eq!(std::fs::read(&dst).unwrap(), original);
}

#[test]
fn convert_file_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let err = convert_file(
        dir.path().join("nope.stl"),
        dir.path().join("out.stl"),
        StlFormat::Ascii,
    )
    .unwrap_err();
    assert!(matches!(err, CodecError::Io(_)));
}
