//! Integration tests for the result-set metadata directory.

use mysql_row_metadata::definition::{NOT_NULL_FLAG, UNSIGNED_FLAG};
use mysql_row_metadata::{ColumnDefinition, Error, RowMetadata};

fn make_result_metadata() -> RowMetadata {
    RowMetadata::from_definitions(vec![
        ColumnDefinition::new("id", 8).with_flags(NOT_NULL_FLAG | UNSIGNED_FLAG),
        ColumnDefinition::new("Value", 253),
        ColumnDefinition::new("created_at", 7).with_flags(NOT_NULL_FLAG),
    ])
    .unwrap()
}

#[test]
fn test_full_lookup_surface() {
    let metadata = make_result_metadata();

    // Positional access follows declaration order.
    let names: Vec<&str> = metadata.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "Value", "created_at"]);
    assert_eq!(metadata.column(0).unwrap().name, "id");
    assert_eq!(metadata.column(2).unwrap().ordinal, 2);

    // Name access is case-insensitive and returns the same column.
    let by_name = metadata.column_by_name("VALUE").unwrap();
    assert_eq!(by_name.ordinal, 1);
    assert_eq!(by_name.name, "Value");

    // Definition flags survive into the metadata.
    assert!(!metadata.column(0).unwrap().is_nullable());
    assert!(metadata.column(0).unwrap().is_unsigned());
    assert!(metadata.column(1).unwrap().is_nullable());
}

#[test]
fn test_lookup_failures_leave_directory_usable() {
    let metadata = make_result_metadata();

    assert!(matches!(
        metadata.column(3),
        Err(Error::ColumnIndexOutOfBounds { index: 3, count: 3 })
    ));
    assert!(matches!(
        metadata.column_by_name("missing"),
        Err(Error::ColumnNotFound { .. })
    ));

    // Failed calls do not poison subsequent lookups.
    assert_eq!(metadata.column(1).unwrap().name, "Value");
    assert_eq!(metadata.column_by_name("id").unwrap().ordinal, 0);
}

#[test]
fn test_error_messages() {
    let metadata = make_result_metadata();

    let err = metadata.column(7).unwrap_err();
    assert_eq!(err.to_string(), "Column index 7 out of bounds (columns: 3)");

    let err = metadata.column_by_name("nonexistent_xyz").unwrap_err();
    assert_eq!(err.to_string(), "Column not found: nonexistent_xyz");

    let err = RowMetadata::from_definitions(Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid result: at least one column is required"
    );
}

#[test]
fn test_name_set_iteration_order() {
    // Duplicate names from a join stay positionally distinct in the view.
    let metadata = RowMetadata::from_definitions(vec![
        ColumnDefinition::new("id", 3),
        ColumnDefinition::new("name", 253),
        ColumnDefinition::new("id", 3),
    ])
    .unwrap();
    let names = metadata.names();

    assert_eq!(names.len(), 3);
    assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["id", "name", "id"]);
    assert!(names.contains("ID"));
    assert!(names.contains("`name`"));
    assert!(!names.contains("`NAME`"));

    // Ambiguous lookup resolves to the first declared column, every time.
    assert_eq!(metadata.column_by_name("id").unwrap().ordinal, 0);
    assert_eq!(metadata.column_by_name("ID").unwrap().ordinal, 0);
}

#[test]
fn test_concurrent_readers_observe_same_directory() {
    let metadata = make_result_metadata();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(metadata.column_by_name("value").unwrap().ordinal, 1);
                    assert_eq!(metadata.column(2).unwrap().name, "created_at");
                    assert!(metadata.names().contains("ID"));
                }
            });
        }
    });
}
