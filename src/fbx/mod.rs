//! Rust models of the FBX SDK value types crossing the import boundary
//!
//! The SDK itself is a C++ library; the importer only ever sees plain value
//! types coming out of it. These structs mirror that data exactly, down to
//! the double precision and the row-major matrix layout, so the conversion
//! layer can be exercised without the SDK.

pub mod time;
pub mod types;

pub use time::FbxTime;
pub use types::{FbxDouble3, FbxDouble4, FbxMatrix};
