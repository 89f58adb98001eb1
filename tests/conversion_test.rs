use glam::{Mat4, Vec4};
use macfbx::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_color_and_vector_conversions_agree() {
    let tuple = FbxDouble3::new(0.25, 0.5, 0.75);

    let color = fbx_double3_to_color4(tuple, 0.5);
    assert_eq!(color.to_array(), [0.25, 0.5, 0.75, 0.5]);

    let v3 = fbx_double3_to_vector3(tuple);
    let v4 = fbx_double3_to_vector4(tuple, 1.0);
    assert_eq!(v4.truncate(), v3);
}

#[test]
fn test_double4_matches_double3_plus_w() {
    // A 4-tuple must convert exactly like its first three components plus
    // the fourth handed over separately, even when narrowing loses bits
    let full = fbx_double4_to_vector4(FbxDouble4::new(0.1, 0.2, 0.3, 0.4));
    let split = fbx_double3_to_vector4(FbxDouble3::new(0.1, 0.2, 0.3), 0.4f64 as f32);
    assert_eq!(full, split);
}

#[test]
fn test_whole_seconds_rescale_exactly() {
    for seconds in [1i64, 2, 30, -1, -30] {
        let time = FbxTime::from_ticks(seconds * FbxTime::TICKS_PER_SECOND);
        let span = fbx_time_to_time_span(time);
        assert_eq!(
            i64::from(span.ticks()),
            seconds * i64::from(CompressedTimeSpan::TICKS_PER_SECOND)
        );
    }
}

#[test]
fn test_zero_time_is_zero_span() {
    assert_eq!(
        fbx_time_to_time_span(FbxTime::from_ticks(0)),
        CompressedTimeSpan::ZERO
    );
}

#[test]
fn test_sdk_rows_become_engine_columns() {
    let sdk = FbxMatrix::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [20.0, 30.0, 40.0, 1.0],
    ]);
    let engine = fbx_matrix_to_matrix(&sdk);

    assert_eq!(engine.x_axis, Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(engine.y_axis, Vec4::new(5.0, 6.0, 7.0, 8.0));
    // The SDK keeps translation in the fourth row; it must land in the
    // engine's fourth column
    assert_eq!(engine.w_axis, Vec4::new(20.0, 30.0, 40.0, 1.0));
}

#[test]
fn test_matrix_round_trip_is_exact() {
    // f32 → f64 → f32 loses nothing, so the round trip must be bit-exact
    let engine = Mat4::from_cols(
        Vec4::new(0.1, 0.2, 0.3, 0.0),
        Vec4::new(-0.4, 0.5, -0.6, 0.0),
        Vec4::new(0.7, -0.8, 0.9, 0.0),
        Vec4::new(1.5, -2.5, 3.5, 1.0),
    );
    let round_tripped = fbx_matrix_to_matrix(&matrix_to_fbx_matrix(&engine));
    assert_eq!(round_tripped, engine);
}

#[test]
fn test_identity_survives_both_directions() {
    assert_eq!(fbx_matrix_to_matrix(&FbxMatrix::IDENTITY), Mat4::IDENTITY);
    assert_eq!(matrix_to_fbx_matrix(&Mat4::IDENTITY), FbxMatrix::IDENTITY);
}

#[test]
fn test_fov_against_reference_oracle() {
    // Same formula spelled out independently, to catch constant drift
    let reference = 2.0 * f64::atan(24.0 * 0.5 * 10.0 * 2.54 / 50.0);
    assert_eq!(focal_length_to_vertical_fov(24.0, 50.0), reference);
}

#[test]
fn test_utf8_round_trip_preserves_code_points() {
    let source = "Mörkö 🐉 視錐台";
    let decoded = utf8_to_string(source.as_bytes()).unwrap();
    assert_eq!(decoded, source);

    // Empty buffers are fine
    assert_eq!(utf8_to_string(&[]).unwrap(), "");
}

#[test]
fn test_invalid_utf8_is_a_recoverable_error() {
    // Truncated multi-byte sequence
    let err = utf8_to_string(&[0xF0, 0x9F, 0x90]).unwrap_err();
    assert!(matches!(err, Error::Utf8Error(_)));
}

#[test]
fn test_engine_types_serde_round_trip() {
    let color = fbx_double3_to_color4(FbxDouble3::new(0.25, 0.5, 0.75), 1.0);
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(serde_json::from_str::<Color4>(&json).unwrap(), color);

    let span = CompressedTimeSpan::new(12345);
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(
        serde_json::from_str::<CompressedTimeSpan>(&json).unwrap(),
        span
    );
}
