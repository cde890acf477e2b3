//! Unified error type for mesh-voxel public APIs.
//!
//! Every fallible operation in the crate returns this error. Codec failures
//! are fatal: a reader either produces a fully validated [`crate::mesh::Mesh`]
//! or one of these variants, never a partially filled model.

use thiserror::Error;

/// Unified error type for mesh-voxel operations.
#[derive(Debug, Error)]
pub enum MeshVoxelError {
    /// Underlying I/O failure while reading or writing a mesh container.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed container structure: bad or missing section tag, count
    /// mismatch, unparseable record, or a tag list whose length disagrees
    /// with its declared count.
    #[error("structural parse error: {0}")]
    StructuralParse(String),

    /// Element type outside the supported set, or a point/line element in a
    /// context that only accepts triangles and tetrahedra.
    #[error("unsupported element type {0}")]
    UnsupportedElement(i32),

    /// An id column is not exactly `{1..N}` in ascending order.
    #[error("{table} ids are not contiguous from 1")]
    NonContiguousId {
        /// Which table failed the compactness check.
        table: &'static str,
    },

    /// A field data block whose value table row count disagrees with its
    /// declared entity count.
    #[error("field `{name}` declares {declared} entities but carries {actual} rows")]
    FieldArityMismatch {
        /// Name tag of the offending series.
        name: String,
        /// Entity count from the integer tags.
        declared: usize,
        /// Rows actually stored.
        actual: usize,
    },

    /// The requested field name is not present among the mesh's data series.
    #[error("field `{0}` not found in mesh data")]
    MissingField(String),

    /// A mesh that violates its own invariants was handed to the writer or
    /// the voxelizer (empty tables, dangling node references, ...).
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

impl MeshVoxelError {
    /// Shorthand used throughout the codec for structural failures.
    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        MeshVoxelError::StructuralParse(msg.into())
    }
}
