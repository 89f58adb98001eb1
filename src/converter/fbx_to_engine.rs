//! FBX → engine conversions
//!
//! The forward direction of the bridge: everything the importer pulls out of
//! an SDK scene on its way into engine data.

use glam::{Mat4, Vec3, Vec4};

use crate::engine::{Color4, CompressedTimeSpan};
use crate::error::{Error, Result};
use crate::fbx::{FbxDouble3, FbxDouble4, FbxMatrix, FbxTime};

/// Convert an RGB property tuple plus a separate alpha into an engine color.
///
/// FBX stores material colors as double-precision RGB with no alpha channel;
/// the components narrow in order and the alpha passes through verbatim.
#[must_use]
pub fn fbx_double3_to_color4(vector: FbxDouble3, alpha: f32) -> Color4 {
    Color4::new(vector[0] as f32, vector[1] as f32, vector[2] as f32, alpha)
}

/// Convert a 3-component property tuple into an engine vector.
#[must_use]
pub fn fbx_double3_to_vector3(vector: FbxDouble3) -> Vec3 {
    Vec3::new(vector[0] as f32, vector[1] as f32, vector[2] as f32)
}

/// Convert a 3-component property tuple plus an explicit W into an engine
/// vector.
#[must_use]
pub fn fbx_double3_to_vector4(vector: FbxDouble3, w: f32) -> Vec4 {
    Vec4::new(vector[0] as f32, vector[1] as f32, vector[2] as f32, w)
}

/// Convert a 4-component property tuple into an engine vector.
#[must_use]
pub fn fbx_double4_to_vector4(vector: FbxDouble4) -> Vec4 {
    Vec4::new(
        vector[0] as f32,
        vector[1] as f32,
        vector[2] as f32,
        vector[3] as f32,
    )
}

/// Convert an SDK timestamp into a compressed engine time span.
///
/// The rescale runs in double precision and truncates toward zero exactly
/// once, when the engine tick count is produced. Multiplying before dividing
/// keeps whole-second tick counts inside the 53-bit mantissa, so an exact
/// SDK second lands on exactly [`CompressedTimeSpan::TICKS_PER_SECOND`].
#[must_use]
pub fn fbx_time_to_time_span(time: FbxTime) -> CompressedTimeSpan {
    let ticks = time.ticks() as f64 * f64::from(CompressedTimeSpan::TICKS_PER_SECOND)
        / FbxTime::TICKS_PER_SECOND as f64;
    CompressedTimeSpan::new(ticks as i32)
}

/// Convert an SDK transform matrix into an engine matrix.
///
/// The SDK uses the row-vector convention and the engine the column-vector
/// one, so SDK row `i` becomes engine column `i` while every element narrows
/// to single precision.
#[must_use]
pub fn fbx_matrix_to_matrix(matrix: &FbxMatrix) -> Mat4 {
    let column = |i: usize| {
        Vec4::new(
            matrix.get(i, 0) as f32,
            matrix.get(i, 1) as f32,
            matrix.get(i, 2) as f32,
            matrix.get(i, 3) as f32,
        )
    };
    Mat4::from_cols(column(0), column(1), column(2), column(3))
}

/// Vertical field of view in radians for a camera film gate.
///
/// `film_height` is the film gate height in inches as the SDK stores it;
/// `focal_length` is in millimeters. The `10.0 * 2.54` chain brings the gate
/// to millimeters before the half-angle is taken. A zero focal length is not
/// an error: the division produces an infinity and the angle saturates.
#[must_use]
pub fn focal_length_to_vertical_fov(film_height: f64, focal_length: f64) -> f64 {
    if focal_length == 0.0 {
        tracing::warn!(film_height, "camera focal length is zero, field of view degenerates");
    }
    2.0 * (film_height * 0.5 * 10.0 * 2.54 / focal_length).atan()
}

/// Decode an SDK-owned byte buffer into an owned `String`.
///
/// The SDK hands strings over as raw UTF-8 bytes with a separate length.
/// The bytes are validated and copied; the source buffer can be freed or
/// reused as soon as the call returns.
///
/// # Errors
/// Returns [`Error::StringTooLarge`] if the buffer length does not fit in an
/// `i32`, and [`Error::Utf8Error`] if the bytes are not well-formed UTF-8.
/// Both checks happen before anything is copied.
pub fn utf8_to_string(bytes: &[u8]) -> Result<String> {
    if bytes.len() > i32::MAX as usize {
        return Err(Error::StringTooLarge { len: bytes.len() });
    }
    Ok(std::str::from_utf8(bytes)?.to_owned())
}
