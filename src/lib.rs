//! # MacFbx
//!
//! FBX SDK bridge types and conversions for engine scene import.
//!
//! The FBX SDK hands everything over in its own shapes: double-precision
//! property tuples, row-major matrices, 46.2-gigahertz tick timestamps, raw
//! UTF-8 byte buffers. The engine wants `glam` vectors, column-major `Mat4`,
//! compressed animation ticks, and owned `String`s. This crate is the seam
//! between the two.
//!
//! ## What it covers
//!
//! - **Property tuples** - [`FbxDouble3`]/[`FbxDouble4`] → `Vec3`/`Vec4`/[`Color4`]
//! - **Time** - SDK ticks → [`CompressedTimeSpan`] animation timestamps
//! - **Transforms** - row-vector SDK matrices ↔ column-vector `Mat4`, both directions
//! - **Cameras** - film gate plus focal length → vertical field of view
//! - **Text** - SDK byte buffers → validated UTF-8 `String`s
//!
//! ## Quick Start
//!
//! ```
//! use macfbx::prelude::*;
//!
//! // Material color: double RGB plus an explicit alpha
//! let diffuse = fbx_double3_to_color4(FbxDouble3::new(0.8, 0.6, 0.4), 1.0);
//! assert_eq!(diffuse.a, 1.0);
//!
//! // Animation key time: SDK ticks rescale to engine ticks
//! let key_time = fbx_time_to_time_span(FbxTime::ONE_SECOND);
//! assert_eq!(key_time.ticks(), CompressedTimeSpan::TICKS_PER_SECOND);
//!
//! // Node transform: transposed on the way in, transposed back on the way out
//! let local = fbx_matrix_to_matrix(&FbxMatrix::IDENTITY);
//! assert_eq!(matrix_to_fbx_matrix(&local), FbxMatrix::IDENTITY);
//! ```
//!
//! [`FbxDouble3`]: fbx::FbxDouble3
//! [`FbxDouble4`]: fbx::FbxDouble4
//! [`Color4`]: engine::Color4
//! [`CompressedTimeSpan`]: engine::CompressedTimeSpan

pub mod converter;
pub mod engine;
pub mod error;
pub mod fbx;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        fbx_double3_to_color4, fbx_double3_to_vector3, fbx_double3_to_vector4,
        fbx_double4_to_vector4, fbx_matrix_to_matrix, fbx_time_to_time_span,
        focal_length_to_vertical_fov, matrix_to_fbx_matrix, utf8_to_string,
    };
    pub use crate::engine::{Color4, CompressedTimeSpan};
    pub use crate::error::{Error, Result};
    pub use crate::fbx::{FbxDouble3, FbxDouble4, FbxMatrix, FbxTime};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
