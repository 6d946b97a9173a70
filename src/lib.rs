//! Result-set column metadata for a MySQL client.
//!
//! A result set arrives as column definitions followed by rows. This crate
//! builds the per-result directory over those definitions: columns stay in
//! server-declared order for positional access, and a name-sorted view
//! built once at construction serves case-insensitive (MySQL identifier
//! rule) name lookup without rescanning per row.
//!
//! # Example
//!
//! ```
//! use mysql_row_metadata::{ColumnDefinition, RowMetadata};
//!
//! fn main() -> mysql_row_metadata::Result<()> {
//!     let metadata = RowMetadata::from_definitions(vec![
//!         ColumnDefinition::new("id", 3),
//!         ColumnDefinition::new("Value", 253),
//!     ])?;
//!
//!     assert_eq!(metadata.column(0)?.name, "id");
//!     assert_eq!(metadata.column_by_name("VALUE")?.ordinal, 1);
//!     assert!(metadata.names().contains("value"));
//!
//!     Ok(())
//! }
//! ```

pub mod definition;
pub mod error;
pub mod metadata;
pub mod names;
pub mod row_metadata;

// Re-export main types
pub use definition::ColumnDefinition;
pub use error::{Error, Result};
pub use metadata::ColumnMetadata;
pub use names::{identifier_compare, ColumnNameSet, NameCompare};
pub use row_metadata::RowMetadata;
