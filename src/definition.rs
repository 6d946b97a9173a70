//! Raw column definitions as produced by the wire-protocol decoder.
//!
//! One `ColumnDefinition` is decoded per result column before any row
//! arrives. This crate does not decode the wire format itself; it consumes
//! the finished records and builds the lookup directory from them.

/// Column is declared NOT NULL.
pub const NOT_NULL_FLAG: u16 = 0x0001;
/// Column is part of a primary key.
pub const PRI_KEY_FLAG: u16 = 0x0002;
/// Column is part of a unique key.
pub const UNIQUE_KEY_FLAG: u16 = 0x0004;
/// Column holds a BLOB or TEXT value.
pub const BLOB_FLAG: u16 = 0x0010;
/// Numeric column is unsigned.
pub const UNSIGNED_FLAG: u16 = 0x0020;
/// Numeric column is zero-filled.
pub const ZEROFILL_FLAG: u16 = 0x0040;
/// Column uses a binary collation.
pub const BINARY_FLAG: u16 = 0x0080;
/// Column auto-increments.
pub const AUTO_INCREMENT_FLAG: u16 = 0x0200;
/// Column is a TIMESTAMP.
pub const TIMESTAMP_FLAG: u16 = 0x0400;

/// Raw column definition from a result set header.
///
/// Field layout mirrors the server's ColumnDefinition41 record. `name` is
/// the display name (the alias when the query declares one); `orig_name`
/// is the underlying column name in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Schema (database) the column belongs to.
    pub schema: String,
    /// Table name, aliased if the query aliases it.
    pub table: String,
    /// Physical table name.
    pub orig_table: String,
    /// Column display name.
    pub name: String,
    /// Physical column name.
    pub orig_name: String,
    /// Collation of the column value (server collation id).
    pub collation_id: u16,
    /// Maximum display length in bytes.
    pub length: u32,
    /// Protocol type code of the column value.
    pub type_code: u8,
    /// Definition flags (see the `*_FLAG` constants).
    pub flags: u16,
    /// Number of decimal digits for numeric types.
    pub decimals: u8,
}

impl ColumnDefinition {
    /// Create a definition with minimal info.
    pub fn new(name: impl Into<String>, type_code: u8) -> Self {
        Self {
            schema: String::new(),
            table: String::new(),
            orig_table: String::new(),
            name: name.into(),
            orig_name: String::new(),
            collation_id: 0,
            length: 0,
            type_code,
            flags: 0,
            decimals: 0,
        }
    }

    /// Set the definition flags.
    pub fn with_flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }
}
