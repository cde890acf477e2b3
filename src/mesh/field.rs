//! Field data series: per-node or per-element values with their tag lines.
//!
//! A series mirrors one `$NodeData`/`$ElementData` block: string tags (the
//! first is the field name), real tags (by convention a single timestamp),
//! integer tags (by convention `[step, component_count, entity_count, ...]`)
//! and the value table itself, stored row-major.

use serde::{Deserialize, Serialize};

use crate::error::MeshVoxelError;

/// Whether a series attaches to nodes or to elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FieldTarget {
    /// Values keyed by node id (`$NodeData`).
    Node,
    /// Values keyed by element id (`$ElementData`).
    Element,
}

/// One data block: tag metadata plus an `entity_count x component_count`
/// value table keyed by entity id.
#[derive(Debug, Clone)]
pub struct FieldSeries {
    target: FieldTarget,
    string_tags: Vec<String>,
    real_tags: Vec<f64>,
    integer_tags: Vec<i32>,
    entity_ids: Vec<i32>,
    values: Vec<f64>,
    components: usize,
    compact: bool,
}

impl FieldSeries {
    /// Assemble a series and check its derived-length invariants.
    ///
    /// `integer_tags[1]` is the component count and `integer_tags[2]` the
    /// entity count; both must agree with the value table.
    pub fn try_new(
        target: FieldTarget,
        string_tags: Vec<String>,
        real_tags: Vec<f64>,
        integer_tags: Vec<i32>,
        entity_ids: Vec<i32>,
        values: Vec<f64>,
    ) -> Result<Self, MeshVoxelError> {
        if integer_tags.len() < 3 {
            return Err(MeshVoxelError::parse(format!(
                "data block needs at least 3 integer tags, found {}",
                integer_tags.len()
            )));
        }
        let components = usize::try_from(integer_tags[1]).map_err(|_| {
            MeshVoxelError::parse(format!("negative component count {}", integer_tags[1]))
        })?;
        let declared = usize::try_from(integer_tags[2]).map_err(|_| {
            MeshVoxelError::parse(format!("negative entity count {}", integer_tags[2]))
        })?;
        if components == 0 {
            return Err(MeshVoxelError::parse("data block with 0 components"));
        }
        let name = string_tags.first().cloned().unwrap_or_default();
        if entity_ids.len() != declared || values.len() != declared * components {
            return Err(MeshVoxelError::FieldArityMismatch {
                name,
                declared,
                actual: if entity_ids.len() != declared {
                    entity_ids.len()
                } else {
                    values.len() / components
                },
            });
        }
        let compact = !entity_ids.is_empty()
            && entity_ids
                .iter()
                .enumerate()
                .all(|(idx, &id)| id as i64 == idx as i64 + 1);
        Ok(Self {
            target,
            string_tags,
            real_tags,
            integer_tags,
            entity_ids,
            values,
            components,
            compact,
        })
    }

    /// Node or element attachment.
    pub fn target(&self) -> FieldTarget {
        self.target
    }

    /// Field name: the first string tag, without surrounding quotes.
    pub fn name(&self) -> &str {
        self.string_tags.first().map(|s| s.as_str()).unwrap_or("")
    }

    /// String tag line.
    pub fn string_tags(&self) -> &[String] {
        &self.string_tags
    }

    /// Real tag line.
    pub fn real_tags(&self) -> &[f64] {
        &self.real_tags
    }

    /// Integer tag line.
    pub fn integer_tags(&self) -> &[i32] {
        &self.integer_tags
    }

    /// Number of value rows.
    pub fn len(&self) -> usize {
        self.entity_ids.len()
    }

    /// True when the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.entity_ids.is_empty()
    }

    /// Values per row.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Entity-id column, in row order.
    pub fn entity_ids(&self) -> &[i32] {
        &self.entity_ids
    }

    /// Flat row-major value storage.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The value row at a table position.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.components;
        &self.values[start..start + self.components]
    }

    /// The value row for an entity id, `None` if absent.
    ///
    /// O(1) when ids are compact, O(n) otherwise.
    pub fn row_of(&self, entity_id: i32) -> Option<&[f64]> {
        let index = if self.compact {
            let idx = usize::try_from(entity_id.checked_sub(1)?).ok()?;
            (idx < self.entity_ids.len()).then_some(idx)?
        } else {
            self.entity_ids.iter().position(|&id| id == entity_id)?
        };
        Some(self.row(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(
        ids: Vec<i32>,
        values: Vec<f64>,
        components: i32,
    ) -> Result<FieldSeries, MeshVoxelError> {
        let count = ids.len() as i32;
        FieldSeries::try_new(
            FieldTarget::Element,
            vec!["normE".to_string()],
            vec![0.0],
            vec![0, components, count],
            ids,
            values,
        )
    }

    #[test]
    fn rows_are_keyed_by_entity_id() {
        let s = series(vec![1, 2, 3], vec![5.0, 6.0, 7.0], 1).unwrap();
        assert_eq!(s.name(), "normE");
        assert_eq!(s.row_of(2), Some(&[6.0][..]));
        assert_eq!(s.row_of(9), None);
    }

    #[test]
    fn vector_rows_have_declared_width() {
        let s = series(vec![1, 2], vec![1.0, 0.0, 0.0, 0.0, 2.0, 0.0], 3).unwrap();
        assert_eq!(s.components(), 3);
        assert_eq!(s.row(1), &[0.0, 2.0, 0.0]);
    }

    #[test]
    fn arity_mismatch_is_typed() {
        let err = series(vec![1, 2, 3], vec![5.0, 6.0], 1).unwrap_err();
        assert!(matches!(
            err,
            MeshVoxelError::FieldArityMismatch { declared: 3, .. }
        ));
    }
}
