//! The voxelizer: region filter, field selection, and the grid scan.
//!
//! The scan is single-threaded by default. With the `parallel` feature it
//! fans the x slabs out over rayon; candidate buckets keep their order and
//! matches are applied slab-by-slab in ascending x, so every voxel's
//! first-match winner (and therefore the output volume) is bit-identical
//! to the serial scan.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::MeshVoxelError;
use crate::geometry::{Aabb, point_in_tetrahedron};
use crate::mesh::{ElementType, Mesh};

use super::{BucketIndex, GridTransform, VoxelVolume};

/// Field names a simulation container is expected to carry.
pub const RECOGNIZED_FIELDS: [&str; 4] = ["E", "normE", "J", "normJ"];

/// Inclusive range of region tags to voxelize.
///
/// Head models label their volumes 1 (white matter) through 5 (scalp);
/// surface triangles live in the 1000+ range and are never voxelized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegionFilter {
    /// Smallest accepted region tag.
    pub min: i32,
    /// Largest accepted region tag.
    pub max: i32,
}

impl RegionFilter {
    /// White matter volume label.
    pub const WHITE_MATTER: i32 = 1;
    /// Gray matter volume label.
    pub const GRAY_MATTER: i32 = 2;
    /// Cerebrospinal fluid volume label.
    pub const CSF: i32 = 3;
    /// Skull volume label.
    pub const SKULL: i32 = 4;
    /// Scalp volume label.
    pub const SCALP: i32 = 5;

    /// Exactly one region.
    pub fn single(tag: i32) -> Self {
        Self { min: tag, max: tag }
    }

    /// An inclusive tag range.
    pub fn range(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Every head-model volume.
    pub fn all() -> Self {
        Self {
            min: 0,
            max: Self::SCALP,
        }
    }

    /// Whether a region tag falls inside the filter.
    pub fn contains(&self, tag: i32) -> bool {
        self.min <= tag && tag <= self.max
    }
}

/// Caller-supplied voxelization parameters; the external CLI layer fills
/// this in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VoxelizeOptions {
    /// Region tags to keep.
    pub region: RegionFilter,
    /// Name tag of the element field to sample.
    pub field: String,
    /// Output block edge length per matched scan point, in voxels.
    pub stride: NonZeroUsize,
}

impl VoxelizeOptions {
    /// Options with the default stride of one voxel.
    pub fn new(region: RegionFilter, field: impl Into<String>) -> Self {
        Self {
            region,
            field: field.into(),
            stride: NonZeroUsize::MIN,
        }
    }
}

/// Resample an element field onto a dense grid.
///
/// Tetrahedra whose region tag falls inside `options.region` are transformed
/// into grid index space, bucketed, and scanned: each grid coordinate takes
/// the field value of the first candidate tetrahedron containing it, leaving
/// the zero background elsewhere. Degenerate tetrahedra never match and are
/// skipped silently.
///
/// # Errors
/// - [`MeshVoxelError::MissingField`] if the field name is not recognized or
///   no element series carries it.
/// - [`MeshVoxelError::InvalidMesh`] if a selected element has no field row.
pub fn voxelize(
    mesh: &Mesh,
    options: &VoxelizeOptions,
    shape: [usize; 3],
    transform: &GridTransform,
) -> Result<VoxelVolume, MeshVoxelError> {
    let field = options.field.as_str();
    if !RECOGNIZED_FIELDS.contains(&field) {
        return Err(MeshVoxelError::MissingField(field.to_string()));
    }
    let series = mesh
        .element_data_by_name(field)
        .ok_or_else(|| MeshVoxelError::MissingField(field.to_string()))?;

    let elements = mesh.elements();
    let selected: Vec<usize> = (0..elements.len())
        .filter(|&idx| {
            elements.types()[idx] == ElementType::Tetrahedron
                && options.region.contains(elements.region_tags()[idx])
        })
        .collect();
    log::info!(
        "voxelizing field `{field}`: {} of {} elements in region [{}, {}]",
        selected.len(),
        elements.len(),
        options.region.min,
        options.region.max
    );

    let mut volume = VoxelVolume::zeros(shape);
    if selected.is_empty() {
        log::warn!("region filter matched no tetrahedra; output stays at background");
        return Ok(volume);
    }

    let mut tets = Vec::with_capacity(selected.len());
    let mut values = Vec::with_capacity(selected.len());
    for &idx in &selected {
        let mut verts = mesh.tetrahedron_vertices(idx)?;
        for v in &mut verts {
            *v = transform.apply(*v);
        }
        tets.push(verts);

        let id = elements.ids()[idx];
        let row = series.row_of(id).ok_or_else(|| {
            MeshVoxelError::InvalidMesh(format!("field `{field}` has no row for element {id}"))
        })?;
        values.push(row[0]);
    }

    let boxes: Vec<Aabb> = tets.iter().map(|t| Aabb::from_points(t)).collect();
    let index = BucketIndex::build(boxes.iter().copied());
    log::debug!("bucket index covers {} cells", index.cell_count());

    let Some(union) = boxes.iter().copied().reduce(|a, b| a.union(&b)) else {
        return Ok(volume);
    };
    let (span_lo, span_hi) = union.grid_bounds();
    let lo = clamp_to_shape(span_lo, shape);
    let hi = [
        clamp_excl(span_hi[0] + 1, shape[0]),
        clamp_excl(span_hi[1] + 1, shape[1]),
        clamp_excl(span_hi[2] + 1, shape[2]),
    ];
    let stride = options.stride.get();

    scan(&mut volume, lo, hi, stride, &index, &tets, &values);
    Ok(volume)
}

#[cfg(not(feature = "parallel"))]
fn scan(
    volume: &mut VoxelVolume,
    lo: [usize; 3],
    hi: [usize; 3],
    stride: usize,
    index: &BucketIndex,
    tets: &[[[f64; 3]; 4]],
    values: &[f64],
) {
    for x in (lo[0]..hi[0]).step_by(stride) {
        for (cell, value) in scan_slab(x, lo, hi, stride, index, tets, values) {
            volume.fill_block(cell, stride, value);
        }
    }
}

#[cfg(feature = "parallel")]
fn scan(
    volume: &mut VoxelVolume,
    lo: [usize; 3],
    hi: [usize; 3],
    stride: usize,
    index: &BucketIndex,
    tets: &[[[f64; 3]; 4]],
    values: &[f64],
) {
    use rayon::prelude::*;

    let xs: Vec<usize> = (lo[0]..hi[0]).step_by(stride).collect();
    let slabs: Vec<Vec<([usize; 3], f64)>> = xs
        .par_iter()
        .map(|&x| scan_slab(x, lo, hi, stride, index, tets, values))
        .collect();
    // applied in ascending x, exactly as the serial scan would
    for slab in slabs {
        for (cell, value) in slab {
            volume.fill_block(cell, stride, value);
        }
    }
}

/// Scan one x slab; returns the matched cells and their field values in
/// scan order.
fn scan_slab(
    x: usize,
    lo: [usize; 3],
    hi: [usize; 3],
    stride: usize,
    index: &BucketIndex,
    tets: &[[[f64; 3]; 4]],
    values: &[f64],
) -> Vec<([usize; 3], f64)> {
    let mut hits = Vec::new();
    for y in (lo[1]..hi[1]).step_by(stride) {
        for z in (lo[2]..hi[2]).step_by(stride) {
            let point = [x as f64, y as f64, z as f64];
            let bucket = index.candidates([x as i64, y as i64, z as i64]);
            for &candidate in bucket {
                if point_in_tetrahedron(point, &tets[candidate as usize]) {
                    hits.push(([x, y, z], values[candidate as usize]));
                    break; // first match wins
                }
            }
        }
    }
    hits
}

fn clamp_to_shape(cell: [i64; 3], shape: [usize; 3]) -> [usize; 3] {
    [
        cell[0].clamp(0, shape[0] as i64) as usize,
        cell[1].clamp(0, shape[1] as i64) as usize,
        cell[2].clamp(0, shape[2] as i64) as usize,
    ]
}

fn clamp_excl(end: i64, extent: usize) -> usize {
    end.clamp(0, extent as i64) as usize
}
