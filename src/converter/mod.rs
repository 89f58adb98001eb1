//! FBX ↔ engine conversion functions
//!
//! This module bridges the value types handed over by the FBX SDK into the
//! engine's math, color, time, and text types, and back where the importer
//! writes transforms into the SDK scene:
//! - property tuples → `Vec3`/`Vec4`/`Color4` (narrowing casts)
//! - SDK timestamps → `CompressedTimeSpan` (tick-rate rescale)
//! - SDK matrices ↔ `Mat4` (transpose plus precision change)
//! - camera film gate → vertical field of view
//! - SDK byte buffers → `String` (validated UTF-8)
//!
//! Every function is pure and reentrant; only the string conversion
//! allocates.

pub mod engine_to_fbx;
pub mod fbx_to_engine;

pub use engine_to_fbx::matrix_to_fbx_matrix;
pub use fbx_to_engine::{
    fbx_double3_to_color4, fbx_double3_to_vector3, fbx_double3_to_vector4, fbx_double4_to_vector4,
    fbx_matrix_to_matrix, fbx_time_to_time_span, focal_length_to_vertical_fov, utf8_to_string,
};
