//! Spatial bucket index: integer grid cell → candidate element indices.
//!
//! Each element's bounding box is rasterized onto the integer grid; every
//! cell the box overlaps receives the element's index. The voxel scan then
//! tests only a cell's bucket instead of every element, turning the naive
//! `O(elements x voxels)` sweep into `O(elements x mean box volume)` build
//! work plus an `O(bucket len)` probe per voxel.
//!
//! Bucket entries keep insertion order; the scan's first-match rule makes
//! candidate order part of the result.

use hashbrown::HashMap;

use crate::geometry::Aabb;

/// Grid-cell to candidate-list mapping.
#[derive(Debug, Clone, Default)]
pub struct BucketIndex {
    buckets: HashMap<[i64; 3], Vec<u32>>,
}

impl BucketIndex {
    /// Rasterize the given boxes; the i-th box gets candidate index `i`.
    pub fn build(boxes: impl IntoIterator<Item = Aabb>) -> Self {
        let mut buckets: HashMap<[i64; 3], Vec<u32>> = HashMap::new();
        for (candidate, bbox) in boxes.into_iter().enumerate() {
            let (lo, hi) = bbox.grid_bounds();
            for x in lo[0]..=hi[0] {
                for y in lo[1]..=hi[1] {
                    for z in lo[2]..=hi[2] {
                        buckets.entry([x, y, z]).or_default().push(candidate as u32);
                    }
                }
            }
        }
        Self { buckets }
    }

    /// Candidates registered for a cell, in insertion order; empty for cells
    /// no box touched.
    pub fn candidates(&self, cell: [i64; 3]) -> &[u32] {
        self.buckets.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.buckets.len()
    }

    /// True when no box was registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
