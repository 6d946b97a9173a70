//! Per-column metadata exposed to row decoding and result inspection.

use crate::definition::{
    ColumnDefinition, BINARY_FLAG, NOT_NULL_FLAG, UNSIGNED_FLAG,
};

/// Metadata for one column of a result set.
///
/// Immutable once built. `ordinal` is the zero-based position declared by
/// the server and matches the value position in every decoded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Column display name.
    pub name: String,
    /// Zero-based position in the result set.
    pub ordinal: usize,
    /// Protocol type code of the column value.
    pub type_code: u8,
    /// Collation of the column value (server collation id).
    pub collation_id: u16,
    /// Maximum display length in bytes.
    pub length: u32,
    /// Definition flags.
    pub flags: u16,
    /// Number of decimal digits for numeric types.
    pub decimals: u8,
}

impl ColumnMetadata {
    /// Build metadata from a raw definition at the given position.
    pub fn from_definition(ordinal: usize, def: ColumnDefinition) -> Self {
        Self {
            name: def.name,
            ordinal,
            type_code: def.type_code,
            collation_id: def.collation_id,
            length: def.length,
            flags: def.flags,
            decimals: def.decimals,
        }
    }

    /// Whether NULL values are allowed.
    pub fn is_nullable(&self) -> bool {
        self.flags & NOT_NULL_FLAG == 0
    }

    /// Whether a numeric column is unsigned.
    pub fn is_unsigned(&self) -> bool {
        self.flags & UNSIGNED_FLAG != 0
    }

    /// Whether the column uses a binary collation.
    pub fn is_binary(&self) -> bool {
        self.flags & BINARY_FLAG != 0
    }
}
