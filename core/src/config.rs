//! Declarative schema and seed configuration for store initialization.
//!
//! A [`StoreConfig`] names the database file and declares, in order, the
//! tables to create and the rows to seed on first run. Definition and seed
//! text are raw SQL fragments passed through to the store unparsed; table
//! creation strictly precedes row insertion.
//!
//! # Example YAML
//!
//! ```yaml
//! database_path: ./appdata.db
//! tables:
//!   - table: Users
//!     definition: "id INTEGER PRIMARY KEY, name TEXT"
//! seeds:
//!   - table: Users
//!     values: "1, 'alice'"
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// One table to create: name plus the raw column-definition text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name.
    pub table: String,
    /// Raw column definition fragment, e.g. `id INTEGER PRIMARY KEY, name TEXT`.
    pub definition: String,
}

/// One row to seed: table name plus the raw values text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    /// Table to insert into.
    pub table: String,
    /// Raw values fragment, e.g. `1, 'alice'`.
    pub values: String,
}

/// Declarative initialization input: database path, tables, and seed rows.
///
/// # Examples
///
/// ```
/// use litetable_core::StoreConfig;
///
/// let mut config = StoreConfig::new("./test.db");
/// config.new_table("Users", "id INTEGER PRIMARY KEY, name TEXT");
/// config.new_record("Users", "1, 'alice'");
/// assert_eq!(config.tables.len(), 1);
/// assert_eq!(config.seeds.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Tables to create on first run, in declared order.
    #[serde(default)]
    pub tables: Vec<TableSpec>,
    /// Rows to seed after all tables exist, in declared order.
    #[serde(default)]
    pub seeds: Vec<SeedSpec>,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./appdata.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            tables: Vec::new(),
            seeds: Vec::new(),
        }
    }
}

impl StoreConfig {
    /// Creates an empty configuration for the given database path.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            tables: Vec::new(),
            seeds: Vec::new(),
        }
    }

    /// Declares a table to create.
    pub fn new_table(&mut self, table: impl Into<String>, definition: impl Into<String>) {
        self.tables.push(TableSpec {
            table: table.into(),
            definition: definition.into(),
        });
    }

    /// Declares a row to seed.
    pub fn new_record(&mut self, table: impl Into<String>, values: impl Into<String>) {
        self.seeds.push(SeedSpec {
            table: table.into(),
            values: values.into(),
        });
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read, or
    /// [`ConfigError::YamlError`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be written, or
    /// [`ConfigError::YamlError`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
