//! Node table: ids and coordinates for every mesh vertex.
//!
//! Ids are 32-bit integers as stored in the container format. A table is
//! *compact* when its id column is exactly `{1..N}` in ascending order, which
//! makes `index = id - 1` a valid lookup. Files written by meshing pipelines
//! are compact in practice; the codec verifies it where the format demands it
//! and lookups fall back to a search when it does not hold.

use crate::error::MeshVoxelError;

/// Ordered set of `(id, coordinate)` node records.
///
/// Stored column-wise: one `Vec` of ids, one of `[x, y, z]` coordinates.
/// Coordinates default to millimeters.
#[derive(Debug, Clone)]
pub struct NodeTable {
    ids: Vec<i32>,
    coords: Vec<[f64; 3]>,
    units: String,
    compact: bool,
}

impl Default for NodeTable {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            coords: Vec::new(),
            units: "mm".to_string(),
            compact: false,
        }
    }
}

impl NodeTable {
    /// Build a node table from parallel id/coordinate columns.
    ///
    /// # Errors
    /// Returns `StructuralParse` if the columns have different lengths.
    pub fn try_new(ids: Vec<i32>, coords: Vec<[f64; 3]>) -> Result<Self, MeshVoxelError> {
        if ids.len() != coords.len() {
            return Err(MeshVoxelError::parse(format!(
                "node table has {} ids but {} coordinates",
                ids.len(),
                coords.len()
            )));
        }
        let compact = is_compact(&ids);
        Ok(Self {
            ids,
            coords,
            units: "mm".to_string(),
            compact,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the table holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Coordinate units, `"mm"` unless overridden.
    pub fn units(&self) -> &str {
        &self.units
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
            Err(MeshVoxelError::NonContiguousId { table: "node" })
        }
    }

    /// Id column.
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Coordinate column.
    pub fn coords(&self) -> &[[f64; 3]] {
        &self.coords
    }

    /// Coordinate of the node at a table position.
    pub fn coord(&self, index: usize) -> [f64; 3] {
        self.coords[index]
    }

    /// Table position of a node id, `None` if absent.
    ///
    /// O(1) for compact tables, O(n) otherwise.
    pub fn position_of(&self, id: i32) -> Option<usize> {
        if self.compact {
            let idx = usize::try_from(id.checked_sub(1)?).ok()?;
            (idx < self.ids.len()).then_some(idx)
        } else {
            self.ids.iter().position(|&n| n == id)
        }
    }

    /// Coordinate of a node id, `None` if absent.
    pub fn coord_of(&self, id: i32) -> Option<[f64; 3]> {
        self.position_of(id).map(|idx| self.coords[idx])
    }

    /// Iterate `(id, coordinate)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, [f64; 3])> + '_ {
        self.ids.iter().copied().zip(self.coords.iter().copied())
    }
}

fn is_compact(ids: &[i32]) -> bool {
    !ids.is_empty()
        && ids
            .iter()
            .enumerate()
            .all(|(idx, &id)| id as i64 == idx as i64 + 1)
}
