//! Seam to the external reference-image collaborator.
//!
//! Loading and saving the reference image volume (and deriving its
//! coordinate transform) is not this crate's business; callers plug in an
//! implementation of [`VolumeSource`] backed by whatever image stack they
//! use. The voxelizer only ever consumes the shape and transform it yields
//! and hands back a dense [`VoxelVolume`].

use std::path::Path;

use crate::error::MeshVoxelError;
use crate::voxel::{GridTransform, VoxelVolume};

/// Shape and mesh-to-grid transform of a reference image volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceVolume {
    /// Grid extents in voxels.
    pub shape: [usize; 3],
    /// Transform from mesh space into this grid's index space.
    pub transform: GridTransform,
}

/// Image-volume provider: load a reference grid, save a voxelized result.
pub trait VolumeSource {
    /// Read the reference volume's shape and coordinate transform.
    fn load(&self, path: &Path) -> Result<ReferenceVolume, MeshVoxelError>;

    /// Persist a voxelized volume alongside the transform it was sampled
    /// under.
    fn save(
        &self,
        volume: &VoxelVolume,
        transform: &GridTransform,
        path: &Path,
    ) -> Result<(), MeshVoxelError>;
}
