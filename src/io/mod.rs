//! Mesh container I/O.
//!
//! This module provides trait-based readers and writers for loading and
//! saving a [`Mesh`] together with its field data series, plus path-level
//! conveniences that scope the file handle to the call.

pub mod msh;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::MeshVoxelError;
use crate::mesh::Mesh;

pub use msh::{MshReader, MshWriter};

/// Container encoding, selected by the format header.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Encoding {
    /// Whitespace-separated text records.
    Ascii,
    /// Native-endian fixed-width records.
    Binary,
}

/// Trait for mesh readers that produce a fully validated [`Mesh`].
pub trait MeshReader {
    /// Parse a mesh from a buffered byte stream.
    ///
    /// Either every structural invariant holds and a complete mesh is
    /// returned, or the read fails with a typed error and nothing partial
    /// escapes.
    fn read<R: BufRead>(&self, reader: R) -> Result<Mesh, MeshVoxelError>;
}

/// Trait for mesh writers that serialize a [`Mesh`] in one pass.
pub trait MeshWriter {
    /// Write the mesh in the requested encoding.
    ///
    /// Preconditions are re-validated before the first byte is emitted; the
    /// mesh itself is never mutated.
    fn write<W: Write>(
        &self,
        writer: W,
        mesh: &Mesh,
        encoding: Encoding,
    ) -> Result<(), MeshVoxelError>;
}

/// Read a `.msh` file from disk.
///
/// The file handle lives for the duration of this call only; it is released
/// on every exit path. Provenance (name, path, encoding) is filled from the
/// file.
pub fn read_msh(path: impl AsRef<Path>) -> Result<Mesh, MeshVoxelError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut mesh = MshReader::default().read(BufReader::new(file))?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    mesh.set_source(name, path.to_path_buf());
    log::info!(
        "read {}: {} nodes, {} elements, {} node series, {} element series",
        path.display(),
        mesh.nodes().len(),
        mesh.elements().len(),
        mesh.node_data().len(),
        mesh.element_data().len()
    );
    Ok(mesh)
}

/// Write a mesh to disk in the requested encoding.
///
/// Nothing is created on disk if the mesh fails its write preconditions.
pub fn write_msh(
    mesh: &Mesh,
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<(), MeshVoxelError> {
    let path = path.as_ref();
    mesh.validate_for_write()?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    MshWriter::default().write(&mut writer, mesh, encoding)?;
    writer.flush()?;
    log::info!("wrote {} ({encoding:?})", path.display());
    Ok(())
}
