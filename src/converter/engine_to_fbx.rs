//! Engine → FBX conversions
//!
//! The reverse direction of the bridge. Only transforms flow this way: the
//! importer evaluates poses in engine space and writes them back into SDK
//! scene nodes.

use glam::Mat4;

use crate::fbx::FbxMatrix;

/// Convert an engine matrix into an SDK transform matrix.
///
/// Exact mirror of
/// [`fbx_matrix_to_matrix`](super::fbx_to_engine::fbx_matrix_to_matrix):
/// engine column `i` becomes SDK row `i` while every element widens to
/// double precision. Converting back afterwards reproduces the input
/// exactly, since widening is lossless.
#[must_use]
pub fn matrix_to_fbx_matrix(matrix: &Mat4) -> FbxMatrix {
    let row = |i: usize| {
        let col = matrix.col(i);
        [
            f64::from(col.x),
            f64::from(col.y),
            f64::from(col.z),
            f64::from(col.w),
        ]
    };
    FbxMatrix::from_rows([row(0), row(1), row(2), row(3)])
}
