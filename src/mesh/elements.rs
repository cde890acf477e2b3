//! Element table: typed, tagged connectivity records.

use serde::{Deserialize, Serialize};

use crate::error::MeshVoxelError;

/// Element types the container may carry.
///
/// The numeric codes are the MSH v2.2 type codes. Volumetric work only ever
/// touches triangles and tetrahedra; points and lines are accepted so a
/// conforming file round-trips, nothing more.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ElementType {
    /// 0D point (code 15).
    Point,
    /// 1D line segment (code 1).
    Line,
    /// 2D triangle (code 2).
    Triangle,
    /// 3D tetrahedron (code 4).
    Tetrahedron,
}

impl ElementType {
    /// Decode an MSH type code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            15 => Some(ElementType::Point),
            1 => Some(ElementType::Line),
            2 => Some(ElementType::Triangle),
            4 => Some(ElementType::Tetrahedron),
            _ => None,
        }
    }

    /// MSH type code.
    pub fn code(self) -> i32 {
        match self {
            ElementType::Point => 15,
            ElementType::Line => 1,
            ElementType::Triangle => 2,
            ElementType::Tetrahedron => 4,
        }
    }

    /// Number of nodes an element of this type references.
    pub fn node_count(self) -> usize {
        match self {
            ElementType::Point => 1,
            ElementType::Line => 2,
            ElementType::Triangle => 3,
            ElementType::Tetrahedron => 4,
        }
    }
}

/// Ordered set of element records.
///
/// Column-wise like [`crate::mesh::NodeTable`]: ids, types, the two integer
/// tags (physical region, geometric entity) and a fixed 4-wide node list.
/// Elements with fewer than four nodes pad the tail with zeros, matching the
/// container's storage convention.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    ids: Vec<i32>,
    types: Vec<ElementType>,
    region_tags: Vec<i32>,
    entity_tags: Vec<i32>,
    nodes: Vec<[i32; 4]>,
    compact: bool,
}

impl ElementTable {
    /// Build an element table from parallel columns.
    ///
    /// # Errors
    /// Returns `StructuralParse` if the columns disagree in length.
    pub fn try_new(
        ids: Vec<i32>,
        types: Vec<ElementType>,
        region_tags: Vec<i32>,
        entity_tags: Vec<i32>,
        nodes: Vec<[i32; 4]>,
    ) -> Result<Self, MeshVoxelError> {
        let n = ids.len();
        if types.len() != n || region_tags.len() != n || entity_tags.len() != n || nodes.len() != n
        {
            return Err(MeshVoxelError::parse(format!(
                "element table columns disagree: {n} ids, {} types, {} region tags, {} entity tags, {} node lists",
                types.len(),
                region_tags.len(),
                entity_tags.len(),
                nodes.len()
            )));
        }
        let compact = !ids.is_empty()
            && ids
                .iter()
                .enumerate()
                .all(|(idx, &id)| id as i64 == idx as i64 + 1);
        Ok(Self {
            ids,
            types,
            region_tags,
            entity_tags,
            nodes,
            compact,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the table holds no elements.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when ids are exactly `{1..N}` ascending.
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Fail with [`MeshVoxelError::NonContiguousId`] unless the table is compact.
    pub fn require_compact(&self) -> Result<(), MeshVoxelError> {
        if self.compact {
            Ok(())
        } else {
            Err(MeshVoxelError::NonContiguousId { table: "element" })
        }
    }

    /// Id column.
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Type column.
    pub fn types(&self) -> &[ElementType] {
        &self.types
    }

    /// Physical-region tag column (tag1).
    pub fn region_tags(&self) -> &[i32] {
        &self.region_tags
    }

    /// Geometric-entity tag column (tag2).
    pub fn entity_tags(&self) -> &[i32] {
        &self.entity_tags
    }

    /// Fixed-width node-id column; only the first `node_count()` entries of a
    /// row are meaningful.
    pub fn node_lists(&self) -> &[[i32; 4]] {
        &self.nodes
    }

    /// The meaningful node ids of one element.
    pub fn nodes_of(&self, index: usize) -> &[i32] {
        &self.nodes[index][..self.types[index].node_count()]
    }

    /// How many elements have the given type.
    pub fn count_of(&self, ty: ElementType) -> usize {
        self.types.iter().filter(|&&t| t == ty).count()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.count_of(ElementType::Triangle)
    }

    /// Number of tetrahedra.
    pub fn tetrahedron_count(&self) -> usize {
        self.count_of(ElementType::Tetrahedron)
    }

    /// Add `delta` to both tags of every element matched by the filter.
    ///
    /// Tag-only mutation; table shapes never change.
    pub(crate) fn shift_tags_where(
        &mut self,
        delta: i32,
        mut keep: impl FnMut(ElementType, i32) -> bool,
    ) {
        for idx in 0..self.ids.len() {
            if keep(self.types[idx], self.region_tags[idx]) {
                self.region_tags[idx] += delta;
                self.entity_tags[idx] += delta;
            }
        }
    }
}
