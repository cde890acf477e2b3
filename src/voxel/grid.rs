//! Mesh-to-grid coordinate transform.
//!
//! Mesh coordinates live in scanner/world space (millimeters); the voxel
//! scan works in the reference grid's index space. The transform between the
//! two is a per-axis flip followed by a translation, the narrow contract the
//! external image collaborator fulfills (it derives flips and offsets from
//! the reference volume's affine).

use serde::{Deserialize, Serialize};

/// Per-axis flip + translation into grid index space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridTransform {
    /// Negate the axis before translating.
    pub flip: [bool; 3],
    /// Translation added after the flip.
    pub offset: [f64; 3],
}

impl GridTransform {
    /// The identity transform: mesh coordinates already are grid indices.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Head-model convention for a reference volume of the given shape:
    /// the x axis is flipped and the mesh origin sits at the volume center,
    /// one slice down along z.
    pub fn centering(shape: [usize; 3]) -> Self {
        Self {
            flip: [true, false, false],
            offset: [
                (shape[0] / 2) as f64,
                (shape[1] / 2) as f64,
                (shape[2] / 2) as f64 - 1.0,
            ],
        }
    }

    /// Map a mesh-space point into grid index space.
    #[inline]
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for axis in 0..3 {
            let v = if self.flip[axis] { -p[axis] } else { p[axis] };
            out[axis] = v + self.offset[axis];
        }
        out
    }
}
