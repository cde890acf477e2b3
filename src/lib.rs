//! # mesh-voxel
//!
//! mesh-voxel reads and writes the MSH v2.2 mesh container (text and binary
//! encodings) and resamples the field data it carries onto regular 3-D grids.
//! It exists for simulation post-processing pipelines that turn tetrahedral
//! head-model results into voxel images.
//!
//! ## Features
//! - Dual-encoding MSH v2.2 codec: nodes, triangle/tetrahedron elements, and
//!   repeatable `$NodeData`/`$ElementData` blocks, with strict structural
//!   validation and typed errors
//! - Exact signed-volume point-in-tetrahedron tests, allocation-free
//! - Bucket spatial index mapping grid cells to candidate elements
//! - Region-filtered, stride-aware voxel scan with a deterministic
//!   first-match rule
//! - Optional `parallel` feature fans the scan out over rayon without
//!   changing any voxel's result
//!
//! ## Determinism
//! Voxelization is pure: identical inputs produce bit-identical volumes, in
//! both the serial and the parallel scan.
//!
//! ## Usage
//! ```no_run
//! use mesh_voxel::prelude::*;
//!
//! # fn main() -> Result<(), mesh_voxel::MeshVoxelError> {
//! let mesh = read_msh("simulation.msh")?;
//! let options = VoxelizeOptions::new(RegionFilter::single(RegionFilter::GRAY_MATTER), "normE");
//! let shape = [256, 256, 256];
//! let volume = voxelize(&mesh, &options, shape, &GridTransform::centering(shape))?;
//! assert_eq!(volume.shape(), shape);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod volume;
pub mod voxel;

pub use error::MeshVoxelError;

/// A convenient prelude to import the most-used traits & types.
pub mod prelude {
    pub use crate::error::MeshVoxelError;
    pub use crate::geometry::{Aabb, point_in_tetrahedron, signed_volume};
    pub use crate::io::{Encoding, MeshReader, MeshWriter, MshReader, MshWriter, read_msh, write_msh};
    pub use crate::mesh::{
        ElementTable, ElementType, FieldSeries, FieldTarget, Mesh, NodeTable, Provenance,
    };
    pub use crate::volume::{ReferenceVolume, VolumeSource};
    pub use crate::voxel::{
        BucketIndex, GridTransform, RegionFilter, VoxelVolume, VoxelizeOptions, voxelize,
    };
}
