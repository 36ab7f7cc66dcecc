//! Integration tests for the litetable-sqlite crate.

use litetable_core::{CompareOp, Condition, SortOrder, StoreConfig, Value};
use litetable_sqlite::{Store, StoreError};
use tempfile::TempDir;

/// Builds the canonical Users configuration: one table, one seed row.
fn users_config(dir: &TempDir) -> StoreConfig {
    let mut config = StoreConfig::new(dir.path().join("app.db"));
    config.new_table("Users", "id INTEGER PRIMARY KEY, name TEXT");
    config.new_record("Users", "1, 'alice'");
    config
}

#[test]
fn test_first_run_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::initialize(&users_config(&dir)).unwrap();

    // Seeded state: one row, dump shows header and the seeded values.
    let rs = store.select_all("Users").unwrap();
    assert_eq!(rs.len(), 1);
    let dump = rs.render_text();
    assert!(dump.contains("id\tname"));
    assert!(dump.contains("1\talice"));

    // Insert a second user and read the cell back.
    let rs = store
        .insert_row("Users", &[Value::Integer(2), Value::from("bob")])
        .unwrap();
    assert_eq!(rs.len(), 2);
    assert_eq!(
        store.cell("Users", &Value::Integer(2), "name").unwrap(),
        Value::from("bob")
    );
    assert!(
        store
            .cell_matches("Users", &Value::Integer(2), "name", &Value::from("bob"))
            .unwrap()
    );

    // Validated prefix match renders as self-contained fragment text.
    let starts_al = store
        .like_condition(
            "Users",
            "name",
            litetable_core::LikePosition::Prefix,
            false,
            "al",
        )
        .unwrap();
    assert_eq!(starts_al.render(), "name like 'al%'");
    let rs = store
        .select("Users", &[], &starts_al, "id", SortOrder::Ascending)
        .unwrap();
    assert_eq!(rs.len(), 1);
    assert_eq!(rs.rows[0][1], Value::from("alice"));

    // Deleting an absent primary key fails and deletes nothing.
    let err = store.delete_row("Users", &Value::Integer(999)).unwrap_err();
    assert!(matches!(err, StoreError::ValueNotFound { .. }));
    assert_eq!(store.select_all("Users").unwrap().len(), 2);

    // The connection never lingers between operations.
    assert!(!store.is_open());
}

#[test]
fn test_cache_tracks_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::initialize(&users_config(&dir)).unwrap();

    store
        .insert_rows(
            "Users",
            &[
                vec![Value::Integer(2), Value::from("bob")],
                vec![Value::Integer(3), Value::from("carol")],
            ],
        )
        .unwrap();
    let cached = store.last_result().unwrap().clone();
    assert_eq!(&cached, store.select_all("Users").unwrap());

    store.delete_row("Users", &Value::Integer(2)).unwrap();
    let cached = store.last_result().unwrap().clone();
    assert_eq!(cached.len(), 2);
    assert_eq!(&cached, store.select_all("Users").unwrap());
}

#[test]
fn test_combined_conditions_keep_grouping_explicit() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::initialize(&users_config(&dir)).unwrap();
    store
        .insert_rows(
            "Users",
            &[
                vec![Value::Integer(2), Value::from("bob")],
                vec![Value::Integer(3), Value::from("albert")],
            ],
        )
        .unwrap();

    let high_id = store
        .compare_condition("Users", "id", CompareOp::GreaterEqual, Value::Integer(3))
        .unwrap();
    let starts_al = store
        .like_condition(
            "Users",
            "name",
            litetable_core::LikePosition::Prefix,
            false,
            "al",
        )
        .unwrap();
    let either = Condition::any(vec![high_id, starts_al]).unwrap();
    assert_eq!(either.render(), "(id >= 3 or name like 'al%')");

    let rs = store
        .select("Users", &["name"], &either, "name", SortOrder::Ascending)
        .unwrap();
    assert_eq!(
        rs.rows,
        vec![vec![Value::from("albert")], vec![Value::from("alice")]]
    );
}

#[test]
fn test_lexically_numeric_text_stays_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = StoreConfig::new(dir.path().join("app.db"));
    config.new_table("Codes", "id INTEGER PRIMARY KEY, zip TEXT");
    let mut store = Store::initialize(&config).unwrap();

    // Bound as text, the leading zero survives storage and readback.
    store
        .insert_row("Codes", &[Value::Integer(1), Value::from("02134")])
        .unwrap();
    assert_eq!(
        store.cell("Codes", &Value::Integer(1), "zip").unwrap(),
        Value::from("02134")
    );
}

#[test]
fn test_update_paths() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::initialize(&users_config(&dir)).unwrap();
    store
        .insert_row("Users", &[Value::Integer(2), Value::from("bob")])
        .unwrap();

    store
        .update_field_eq(
            "Users",
            "name",
            &Value::from("alicia"),
            "id",
            &Value::Integer(1),
        )
        .unwrap();
    assert_eq!(
        store.cell("Users", &Value::Integer(1), "name").unwrap(),
        Value::from("alicia")
    );

    let everyone = store
        .compare_condition("Users", "id", CompareOp::GreaterEqual, Value::Integer(1))
        .unwrap();
    let rs = store
        .update_field("Users", "name", &Value::from("renamed"), &everyone)
        .unwrap();
    assert_eq!(rs.len(), 2);
    assert!(rs.rows.iter().all(|r| r[1] == Value::from("renamed")));
}

#[test]
fn test_schema_validation_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::initialize(&users_config(&dir)).unwrap();

    assert!(matches!(
        store.insert_row("Missing", &[Value::Integer(1)]),
        Err(StoreError::TableNotFound(_))
    ));
    assert!(matches!(
        store.cell("Users", &Value::Integer(1), "missing"),
        Err(StoreError::FieldNotFound { .. })
    ));
    assert!(matches!(
        store.create_table("Users", "id INTEGER PRIMARY KEY"),
        Err(StoreError::TableExists(_))
    ));
    assert!(matches!(
        store.create_table("Notes", "body TEXT"),
        Err(StoreError::NoPrimaryKey(_))
    ));

    // None of the failures touched the data.
    assert_eq!(store.select_all("Users").unwrap().len(), 1);
    assert_eq!(store.tables().unwrap(), vec!["Users"]);
}

#[test]
fn test_attach_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config = users_config(&dir);
    drop(Store::initialize(&config).unwrap());

    let mut store = Store::attach(&config.database_path).unwrap();
    assert_eq!(store.select_all("Users").unwrap().len(), 1);

    assert!(matches!(
        Store::attach(dir.path().join("absent.db")),
        Err(StoreError::DatabaseMissing(_))
    ));
}
