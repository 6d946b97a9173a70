//! Per-result-set column directory with positional and name lookup.

use std::fmt;
use std::sync::Arc;

use crate::definition::ColumnDefinition;
use crate::error::{Error, Result};
use crate::metadata::ColumnMetadata;
use crate::names::{self, identifier_compare, ColumnNameSet, NameCompare};

/// Column directory for one result set.
///
/// Built once, after all column definitions for the result have arrived,
/// and never mutated: the row decoder resolves columns by index in O(1) or
/// by name in O(log n) against a name-sorted view prepared here. Safe to
/// share across threads without synchronization.
pub struct RowMetadata {
    /// Columns in declaration order; index i is row position i.
    columns: Box<[ColumnMetadata]>,
    /// Permutation of column indices in name-sorted order.
    sorted: Box<[usize]>,
    /// Names in sorted order, extracted once for the binary search.
    sorted_names: Arc<[String]>,
    names: ColumnNameSet,
    compare: NameCompare,
}

impl RowMetadata {
    /// Build the directory from decoded column definitions.
    ///
    /// Ordinals are assigned from the definition positions. Fails with
    /// [`Error::InvalidResult`] when no columns are given.
    pub fn from_definitions(definitions: Vec<ColumnDefinition>) -> Result<Self> {
        Self::with_comparator(definitions, identifier_compare)
    }

    /// Like [`RowMetadata::from_definitions`] with a substitute comparator.
    pub fn with_comparator(
        definitions: Vec<ColumnDefinition>,
        compare: NameCompare,
    ) -> Result<Self> {
        let columns: Vec<ColumnMetadata> = definitions
            .into_iter()
            .enumerate()
            .map(|(i, def)| ColumnMetadata::from_definition(i, def))
            .collect();

        match columns.len() {
            0 => Err(Error::InvalidResult),
            1 => {
                // A single name is trivially its own sorted form; the name
                // set shares the one allocation for both orders.
                let sorted_names: Arc<[String]> = vec![columns[0].name.clone()].into();
                let names =
                    ColumnNameSet::new(sorted_names.clone(), sorted_names.clone(), compare);

                Ok(Self {
                    columns: columns.into_boxed_slice(),
                    sorted: vec![0].into_boxed_slice(),
                    sorted_names,
                    names,
                    compare,
                })
            }
            n => {
                // Stable sort: equal names keep declaration order, which is
                // what makes duplicate-name lookup deterministic.
                let mut sorted: Vec<usize> = (0..n).collect();
                sorted.sort_by(|&a, &b| compare(&columns[a].name, &columns[b].name));

                let origin_names: Arc<[String]> =
                    columns.iter().map(|c| c.name.clone()).collect();
                let sorted_names: Arc<[String]> =
                    sorted.iter().map(|&i| columns[i].name.clone()).collect();
                let names = ColumnNameSet::new(origin_names, sorted_names.clone(), compare);

                Ok(Self {
                    columns: columns.into_boxed_slice(),
                    sorted: sorted.into_boxed_slice(),
                    sorted_names,
                    names,
                    compare,
                })
            }
        }
    }

    /// Get column metadata by position (0-based).
    pub fn column(&self, index: usize) -> Result<&ColumnMetadata> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnIndexOutOfBounds {
                index,
                count: self.columns.len(),
            })
    }

    /// Get column metadata by name.
    ///
    /// Unquoted names match case-insensitively; a backtick-quoted name
    /// matches case-sensitively. When several columns share the looked-up
    /// name, the one with the lowest ordinal wins.
    pub fn column_by_name(&self, name: &str) -> Result<&ColumnMetadata> {
        let pos = names::search(&self.sorted_names, name, self.compare)
            .ok_or_else(|| Error::column_not_found(name))?;

        Ok(&self.columns[self.sorted[pos]])
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    /// The set-like view over column names.
    pub fn names(&self) -> &ColumnNameSet {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns. Always false for a built directory.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Debug for RowMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMetadata")
            .field("columns", &self.columns)
            .field("sorted_names", &self.sorted_names)
            .finish()
    }
}
