//! In-memory mesh model: node/element tables plus field data series.
//!
//! A [`Mesh`] is assembled atomically: either every structural invariant
//! holds and a complete mesh comes back, or assembly fails and nothing
//! partial escapes. After assembly the model is read-only except for a small
//! set of tag-only transforms ([`Mesh::shift_surface_tags`]).

pub mod elements;
pub mod field;
pub mod nodes;

pub use elements::{ElementTable, ElementType};
pub use field::{FieldSeries, FieldTarget};
pub use nodes::NodeTable;

use std::path::PathBuf;

use crate::error::MeshVoxelError;

/// Where a mesh came from and how it was encoded.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    /// Base name of the mesh (file stem, by convention).
    pub name: String,
    /// Path the mesh was read from, or will be written to.
    pub source: PathBuf,
    /// Whether the source container used the binary encoding.
    pub binary: bool,
}

/// A volumetric mesh: one node table, one element table, and the field data
/// series attached to nodes and to elements.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    nodes: NodeTable,
    elements: ElementTable,
    node_data: Vec<FieldSeries>,
    element_data: Vec<FieldSeries>,
    provenance: Provenance,
}

impl Mesh {
    /// Assemble a mesh and check cross-table invariants.
    ///
    /// # Errors
    /// - `InvalidMesh` if an element references a node id the node table does
    ///   not contain, or a series targets the wrong table kind.
    pub fn try_assemble(
        nodes: NodeTable,
        elements: ElementTable,
        node_data: Vec<FieldSeries>,
        element_data: Vec<FieldSeries>,
        provenance: Provenance,
    ) -> Result<Self, MeshVoxelError> {
        for idx in 0..elements.len() {
            for &node_id in elements.nodes_of(idx) {
                if nodes.position_of(node_id).is_none() {
                    return Err(MeshVoxelError::InvalidMesh(format!(
                        "element {} references missing node {node_id}",
                        elements.ids()[idx]
                    )));
                }
            }
        }
        for series in &node_data {
            if series.target() != FieldTarget::Node {
                return Err(MeshVoxelError::InvalidMesh(format!(
                    "series `{}` stored as node data but targets elements",
                    series.name()
                )));
            }
        }
        for series in &element_data {
            if series.target() != FieldTarget::Element {
                return Err(MeshVoxelError::InvalidMesh(format!(
                    "series `{}` stored as element data but targets nodes",
                    series.name()
                )));
            }
        }
        Ok(Self {
            nodes,
            elements,
            node_data,
            element_data,
            provenance,
        })
    }

    /// Node table.
    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// Element table.
    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// Node-targeted series, in file order.
    pub fn node_data(&self) -> &[FieldSeries] {
        &self.node_data
    }

    /// Element-targeted series, in file order.
    pub fn element_data(&self) -> &[FieldSeries] {
        &self.element_data
    }

    /// Source/name/encoding provenance.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Fill in path provenance once the source file is known.
    pub(crate) fn set_source(&mut self, name: String, source: PathBuf) {
        self.provenance.name = name;
        self.provenance.source = source;
    }

    /// First element series whose name tag matches.
    pub fn element_data_by_name(&self, name: &str) -> Option<&FieldSeries> {
        self.element_data.iter().find(|s| s.name() == name)
    }

    /// First node series whose name tag matches.
    pub fn node_data_by_name(&self, name: &str) -> Option<&FieldSeries> {
        self.node_data.iter().find(|s| s.name() == name)
    }

    /// Vertex coordinates of the tetrahedron at an element-table position.
    ///
    /// # Errors
    /// `InvalidMesh` if the element is not a tetrahedron. Node references
    /// were validated at assembly, so lookups cannot fail here.
    pub fn tetrahedron_vertices(&self, index: usize) -> Result<[[f64; 3]; 4], MeshVoxelError> {
        if self.elements.types()[index] != ElementType::Tetrahedron {
            return Err(MeshVoxelError::InvalidMesh(format!(
                "element {} is not a tetrahedron",
                self.elements.ids()[index]
            )));
        }
        let ids = &self.elements.node_lists()[index];
        let mut verts = [[0.0; 3]; 4];
        for (corner, &node_id) in verts.iter_mut().zip(ids.iter()) {
            *corner = self.nodes.coord_of(node_id).ok_or_else(|| {
                MeshVoxelError::InvalidMesh(format!("dangling node reference {node_id}"))
            })?;
        }
        Ok(verts)
    }

    /// Move surface triangles into the 1000+ label range.
    ///
    /// Adds 1000 to both tags of every triangle whose region tag is below
    /// 1000, so surfaces and the volumes they bound no longer share labels.
    /// Tag-only mutation; table shapes are untouched.
    pub fn shift_surface_tags(&mut self) {
        self.elements
            .shift_tags_where(1000, |ty, tag| ty == ElementType::Triangle && tag < 1000);
    }

    /// Validate the writer preconditions: non-empty tables plus every
    /// derived-length invariant the tables and series already guard.
    pub fn validate_for_write(&self) -> Result<(), MeshVoxelError> {
        if self.nodes.is_empty() {
            return Err(MeshVoxelError::InvalidMesh("mesh has no nodes".into()));
        }
        if self.elements.is_empty() {
            return Err(MeshVoxelError::InvalidMesh("mesh has no elements".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tet_mesh() -> Mesh {
        let nodes = NodeTable::try_new(
            vec![1, 2, 3, 4],
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        )
        .unwrap();
        let elements = ElementTable::try_new(
            vec![1, 2],
            vec![ElementType::Triangle, ElementType::Tetrahedron],
            vec![2, 2],
            vec![5, 5],
            vec![[1, 2, 3, 0], [1, 2, 3, 4]],
        )
        .unwrap();
        Mesh::try_assemble(nodes, elements, vec![], vec![], Provenance::default()).unwrap()
    }

    #[test]
    fn dangling_node_reference_fails_assembly() {
        let nodes = NodeTable::try_new(vec![1], vec![[0.0; 3]]).unwrap();
        let elements = ElementTable::try_new(
            vec![1],
            vec![ElementType::Triangle],
            vec![2],
            vec![2],
            vec![[1, 2, 3, 0]],
        )
        .unwrap();
        let err =
            Mesh::try_assemble(nodes, elements, vec![], vec![], Provenance::default()).unwrap_err();
        assert!(matches!(err, MeshVoxelError::InvalidMesh(_)));
    }

    #[test]
    fn tetrahedron_vertices_gathers_coordinates() {
        let mesh = unit_tet_mesh();
        let verts = mesh.tetrahedron_vertices(1).unwrap();
        assert_eq!(verts[3], [0.0, 0.0, 1.0]);
        assert!(mesh.tetrahedron_vertices(0).is_err());
    }

    #[test]
    fn surface_shift_touches_only_low_triangle_tags() {
        let mut mesh = unit_tet_mesh();
        mesh.shift_surface_tags();
        assert_eq!(mesh.elements().region_tags(), &[1002, 2]);
        assert_eq!(mesh.elements().entity_tags(), &[1005, 5]);
        // idempotent for already-shifted surfaces
        mesh.shift_surface_tags();
        assert_eq!(mesh.elements().region_tags(), &[1002, 2]);
    }
}
