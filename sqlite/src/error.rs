//! Error types for store operations.
//!
//! Provides a unified error type covering connection lifecycle, validation,
//! statement execution, and condition construction failures. Every fallible
//! operation returns a structured [`Result`] per call; validation variants
//! each name exactly one failing check.

use std::path::PathBuf;

use litetable_core::ConditionError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected a statement; carries the native diagnostic.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The database connection could not be opened.
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// Attaching to a database file that does not exist.
    #[error("no database file at {0}")]
    DatabaseMissing(PathBuf),

    /// Referenced table is not in the live schema.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// Creating a table that already exists.
    #[error("table already exists: {0}")]
    TableExists(String),

    /// Referenced column is not in the table's metadata.
    #[error("no column '{field}' in table {table}")]
    FieldNotFound { table: String, field: String },

    /// The table declares no primary-key column (or a creation definition
    /// lacks a PRIMARY KEY marker).
    #[error("table {0} declares no primary key")]
    NoPrimaryKey(String),

    /// A required condition or primary-key value is absent from the column.
    #[error("no row in {table} where {field} = {value}")]
    ValueNotFound {
        table: String,
        field: String,
        value: String,
    },

    /// Wrong operand count for a list-operand condition operator.
    #[error("malformed condition: {0}")]
    Condition(#[from] ConditionError),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
