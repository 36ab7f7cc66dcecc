//! Database initialization from a declarative configuration.
//!
//! [`Store::initialize`] creates the database file on first run (zero
//! tables): every declared table is created before any seed row is
//! inserted, and each created table's dump is then logged. On later runs
//! the schema and data are left alone and only the dumps of the existing
//! tables are logged. [`Store::attach`] is the non-creating counterpart
//! for databases that must already exist.

use std::path::PathBuf;

use litetable_core::StoreConfig;
use tracing::info;

use crate::error::{Result, StoreError};
use crate::inspect;
use crate::store::{self, Store};

impl Store {
    /// Attaches to an existing database file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DatabaseMissing`] if there is no file at
    /// `path`; use [`Store::initialize`] to create one.
    pub fn attach(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::DatabaseMissing(path));
        }
        Ok(Store::new(path))
    }

    /// Creates or opens the database at the configured path.
    ///
    /// A database with zero tables gets the full first-run treatment:
    /// every table in `config` is created, then every seed row inserted,
    /// then each table's contents logged. A database that already has
    /// tables is only logged, never touched.
    ///
    /// The connection is released before returning, on success and
    /// failure alike.
    pub fn initialize(config: &StoreConfig) -> Result<Self> {
        let mut handle = Store::new(config.database_path.clone());
        handle.run(|conn| {
            let existing = inspect::table_names(conn)?;
            if existing.is_empty() {
                info!(path = %config.database_path.display(), "initializing new database");
                for spec in &config.tables {
                    store::create_table_on(conn, &spec.table, &spec.definition)?;
                }
                for seed in &config.seeds {
                    store::insert_raw(conn, &seed.table, &seed.values)?;
                }
                for spec in &config.tables {
                    let rs = store::fetch_all(conn, &spec.table)?;
                    info!("\n{}", rs.render_text());
                }
            } else {
                info!(path = %config.database_path.display(), "database already populated");
                for name in &existing {
                    let rs = store::fetch_all(conn, name)?;
                    info!("\n{}", rs.render_text());
                }
            }
            Ok(())
        })?;
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use litetable_core::Value;

    fn sample_config(dir: &tempfile::TempDir) -> StoreConfig {
        let mut config = StoreConfig::new(dir.path().join("test.db"));
        config.new_table("Users", "id INTEGER PRIMARY KEY, name TEXT");
        config.new_table("Orders", "id INTEGER PRIMARY KEY, user_id INTEGER");
        config.new_record("Users", "1, 'alice'");
        config
    }

    #[test]
    fn test_initialize_creates_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::initialize(&sample_config(&dir)).unwrap();
        assert!(!store.is_open());

        let mut tables = store.tables().unwrap();
        tables.sort();
        assert_eq!(tables, vec!["Orders", "Users"]);

        let rs = store.select_all("Users").unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.rows[0], vec![Value::Integer(1), Value::from("alice")]);
    }

    #[test]
    fn test_initialize_is_idempotent_on_populated_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(&dir);
        let mut store = Store::initialize(&config).unwrap();
        store
            .insert_row("Users", &[Value::Integer(2), Value::from("bob")])
            .unwrap();
        drop(store);

        // A second run must not recreate or reseed.
        let mut store = Store::initialize(&config).unwrap();
        assert_eq!(store.select_all("Users").unwrap().len(), 2);
    }

    #[test]
    fn test_initialize_tables_before_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StoreConfig::new(dir.path().join("test.db"));
        // Seed declared for the later of the two tables still lands.
        config.new_table("A", "id INTEGER PRIMARY KEY");
        config.new_table("B", "id INTEGER PRIMARY KEY");
        config.new_record("B", "7");
        let mut store = Store::initialize(&config).unwrap();
        assert_eq!(store.select_all("B").unwrap().len(), 1);
    }

    #[test]
    fn test_initialize_rejects_table_without_primary_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StoreConfig::new(dir.path().join("test.db"));
        config.new_table("Notes", "body TEXT");
        let err = Store::initialize(&config).unwrap_err();
        assert!(matches!(err, StoreError::NoPrimaryKey(_)));
    }

    #[test]
    fn test_attach_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.db");
        let err = Store::attach(&missing).unwrap_err();
        assert!(matches!(err, StoreError::DatabaseMissing(_)));

        Store::initialize(&StoreConfig::new(dir.path().join("test.db"))).unwrap();
        let store = Store::attach(dir.path().join("test.db")).unwrap();
        assert!(!store.is_open());
    }
}
