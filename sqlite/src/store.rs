//! The SQLite-backed store: connection lifecycle plus validated CRUD.
//!
//! A [`Store`] owns the database path and at most one open
//! [`Connection`]. Every operation follows the same shape: acquire the
//! connection (opening lazily), validate identifiers against the live
//! schema, execute with operand values bound as parameters, refresh the
//! cached [`ResultSet`] when the table changed, and release the connection
//! on every exit path. Identifiers are interpolated into statement text
//! only after validation, and always double-quoted.
//!
//! Multi-row insert and delete are not transactional: a failure partway
//! leaves earlier rows committed. `delete_rows` narrows that window by
//! validating every key before deleting any.

use std::path::{Path, PathBuf};

use litetable_core::{Condition, ResultSet, SortOrder, Value};
use rusqlite::Connection;
use tracing::debug;

use crate::convert::{from_sql_ref, placeholders, quote_ident, to_sql_value};
use crate::error::{Result, StoreError};
use crate::inspect;

/// A validated CRUD handle over one local SQLite database file.
///
/// # Examples
///
/// ```no_run
/// use litetable_sqlite::Store;
/// use litetable_core::Value;
///
/// let mut store = Store::new("./appdata.db");
/// store.create_table("Users", "id INTEGER PRIMARY KEY, name TEXT")?;
/// store.insert_row("Users", &[Value::Integer(1), Value::from("alice")])?;
/// assert_eq!(store.select_all("Users")?.len(), 1);
/// # Ok::<(), litetable_sqlite::StoreError>(())
/// ```
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    conn: Option<Connection>,
    last_result: Option<ResultSet>,
}

impl Store {
    /// Creates a handle for the database file at `path`.
    ///
    /// Nothing is opened yet; the file is created on the first operation
    /// if it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
            last_result: None,
        }
    }

    /// The database file path this store operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a connection is currently held open.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Opens the connection eagerly. Operations open lazily on their own;
    /// this exists for callers that want the open failure up front.
    pub fn open(&mut self) -> Result<()> {
        if self.conn.is_none() {
            debug!(path = %self.path.display(), "opening database");
            let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;
            self.conn = Some(conn);
        }
        Ok(())
    }

    /// Drops the connection if open.
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Runs one operation against the connection, releasing it afterward
    /// whether the operation succeeded or failed.
    pub(crate) fn run<T>(&mut self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!(path = %self.path.display(), "opening database");
                Connection::open(&self.path).map_err(|source| StoreError::Open {
                    path: self.path.clone(),
                    source,
                })?
            }
        };
        let outcome = f(&conn);
        drop(conn);
        outcome
    }

    /// Creates a table from raw column-definition text.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::TableExists`] if the name is taken, or
    /// [`StoreError::NoPrimaryKey`] if the definition text carries no
    /// `PRIMARY KEY` marker (case-insensitive scan). The schema is left
    /// untouched on failure.
    pub fn create_table(&mut self, table: &str, definition: &str) -> Result<()> {
        self.run(|conn| create_table_on(conn, table, definition))
    }

    /// Inserts one row, binding each value as a parameter.
    ///
    /// Validates only table existence; column count and type mismatches
    /// surface as [`StoreError::Database`]. Refreshes the cached snapshot
    /// on success.
    pub fn insert_row(&mut self, table: &str, values: &[Value]) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            let sql = format!(
                "INSERT INTO {} VALUES ({})",
                quote_ident(table),
                placeholders(values.len())
            );
            let params: Vec<rusqlite::types::Value> = values.iter().map(to_sql_value).collect();
            conn.execute(&sql, rusqlite::params_from_iter(params))?;
            debug!(table, "inserted row");
            fetch_all(conn, table)
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Inserts rows one statement at a time.
    ///
    /// The first failing row aborts the remainder; rows inserted before it
    /// stay committed.
    pub fn insert_rows(&mut self, table: &str, rows: &[Vec<Value>]) -> Result<&ResultSet> {
        for row in rows {
            self.insert_row(table, row)?;
        }
        self.select_all(table)
    }

    /// Deletes the single row whose primary key equals `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NoPrimaryKey`] if the table declares none,
    /// or [`StoreError::ValueNotFound`] if no row carries `key`; nothing is
    /// deleted in either case.
    pub fn delete_row(&mut self, table: &str, key: &Value) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            let pk = inspect::require_primary_key(conn, table)?;
            inspect::require_field_value(conn, table, &pk, key)?;
            let sql = format!(
                "DELETE FROM {} WHERE {} = ?1",
                quote_ident(table),
                quote_ident(&pk)
            );
            conn.execute(&sql, [to_sql_value(key)])?;
            debug!(table, "deleted row");
            fetch_all(conn, table)
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Deletes the rows whose primary keys appear in `keys`.
    ///
    /// Every key is validated before any row is deleted, so one missing
    /// key means nothing is deleted.
    pub fn delete_rows(&mut self, table: &str, keys: &[Value]) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            let pk = inspect::require_primary_key(conn, table)?;
            for key in keys {
                inspect::require_field_value(conn, table, &pk, key)?;
            }
            let sql = format!(
                "DELETE FROM {} WHERE {} = ?1",
                quote_ident(table),
                quote_ident(&pk)
            );
            {
                let mut stmt = conn.prepare(&sql)?;
                for key in keys {
                    stmt.execute([to_sql_value(key)])?;
                }
            }
            debug!(table, count = keys.len(), "deleted rows");
            fetch_all(conn, table)
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Selects every row of the table; also the post-mutation refresh.
    pub fn select_all(&mut self, table: &str) -> Result<&ResultSet> {
        let rs = self.run(|conn| fetch_all(conn, table))?;
        Ok(self.last_result.insert(rs))
    }

    /// Selects `fields` (all columns when empty) under `condition`, sorted
    /// by `sort_field`.
    ///
    /// Each requested field and the sort field are validated against the
    /// live schema; the condition renders as a self-contained fragment with
    /// its literals already escaped.
    pub fn select(
        &mut self,
        table: &str,
        fields: &[&str],
        condition: &Condition,
        sort_field: &str,
        order: SortOrder,
    ) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            for field in fields {
                inspect::require_field(conn, table, field)?;
            }
            inspect::require_field(conn, table, sort_field)?;

            let all_columns = inspect::column_info(conn, table)?;
            let (projection, columns) = if fields.is_empty() {
                ("*".to_string(), all_columns)
            } else {
                let projection = fields
                    .iter()
                    .map(|f| quote_ident(f))
                    .collect::<Vec<_>>()
                    .join(", ");
                let columns = fields
                    .iter()
                    .filter_map(|f| all_columns.iter().find(|c| c.name == *f).cloned())
                    .collect();
                (projection, columns)
            };

            let sql = format!(
                "SELECT {projection} FROM {} WHERE {} ORDER BY {} {}",
                quote_ident(table),
                condition.render(),
                quote_ident(sort_field),
                order.as_sql()
            );
            debug!(table, %sql, "select");
            let rows = query_rows(conn, &sql)?;
            Ok(ResultSet {
                table: table.to_string(),
                columns,
                rows,
            })
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Sets `field` on every row where `cond_field` equals `cond_value`.
    ///
    /// Validates both fields and requires `cond_value` to be present in
    /// `cond_field`; both the new and the condition value are bound as
    /// parameters.
    pub fn update_field_eq(
        &mut self,
        table: &str,
        field: &str,
        value: &Value,
        cond_field: &str,
        cond_value: &Value,
    ) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            inspect::require_field_value(conn, table, cond_field, cond_value)?;
            let sql = format!(
                "UPDATE {} SET {} = ?1 WHERE {} = ?2",
                quote_ident(table),
                quote_ident(field),
                quote_ident(cond_field)
            );
            conn.execute(&sql, [to_sql_value(value), to_sql_value(cond_value)])?;
            debug!(table, field, "updated field");
            fetch_all(conn, table)
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Sets `field` on every row matching `condition`.
    ///
    /// Only the update field is validated; the condition renders verbatim
    /// (its own fields were validated when it was built).
    pub fn update_field(
        &mut self,
        table: &str,
        field: &str,
        value: &Value,
        condition: &Condition,
    ) -> Result<&ResultSet> {
        let rs = self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            let sql = format!(
                "UPDATE {} SET {} = ?1 WHERE {}",
                quote_ident(table),
                quote_ident(field),
                condition.render()
            );
            conn.execute(&sql, [to_sql_value(value)])?;
            debug!(table, field, "updated field");
            fetch_all(conn, table)
        })?;
        Ok(self.last_result.insert(rs))
    }

    /// Reads the single cell at (`key` row, `field` column).
    ///
    /// # Errors
    ///
    /// The full validation chain applies: table, primary key, field, then
    /// key presence; a missing key is [`StoreError::ValueNotFound`] rather
    /// than a null result.
    pub fn cell(&mut self, table: &str, key: &Value, field: &str) -> Result<Value> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            let pk = inspect::require_primary_key(conn, table)?;
            inspect::require_field(conn, table, field)?;
            inspect::require_field_value(conn, table, &pk, key)?;
            let sql = format!(
                "SELECT {} FROM {} WHERE {} = ?1",
                quote_ident(field),
                quote_ident(table),
                quote_ident(&pk)
            );
            let mut stmt = conn.prepare(&sql)?;
            let value = stmt.query_row([to_sql_value(key)], |row| Ok(from_sql_ref(row.get_ref(0)?)))?;
            Ok(value)
        })
    }

    /// Whether the cell at (`key` row, `field` column) equals `expected`
    /// under SQLite's native value equality.
    pub fn cell_matches(
        &mut self,
        table: &str,
        key: &Value,
        field: &str,
        expected: &Value,
    ) -> Result<bool> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            let pk = inspect::require_primary_key(conn, table)?;
            inspect::require_field(conn, table, field)?;
            inspect::require_field_value(conn, table, &pk, key)?;
            let sql = format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1 AND {} = ?2)",
                quote_ident(table),
                quote_ident(&pk),
                quote_ident(field)
            );
            let mut stmt = conn.prepare(&sql)?;
            let found: i64 =
                stmt.query_row([to_sql_value(key), to_sql_value(expected)], |row| row.get(0))?;
            Ok(found > 0)
        })
    }

    /// Lists the live table names.
    pub fn tables(&mut self) -> Result<Vec<String>> {
        self.run(inspect::table_names)
    }

    /// The snapshot captured by the most recent select or mutation refresh.
    pub fn last_result(&self) -> Option<&ResultSet> {
        self.last_result.as_ref()
    }
}

/// Creates a table on an already-held connection.
pub(crate) fn create_table_on(conn: &Connection, table: &str, definition: &str) -> Result<()> {
    if inspect::table_exists(conn, table)? {
        return Err(StoreError::TableExists(table.to_string()));
    }
    if !definition.to_uppercase().contains("PRIMARY KEY") {
        return Err(StoreError::NoPrimaryKey(table.to_string()));
    }
    let sql = format!("CREATE TABLE {} ({definition})", quote_ident(table));
    conn.execute(&sql, [])?;
    debug!(table, "created table");
    Ok(())
}

/// Inserts one row from raw values text (a configured seed fragment).
pub(crate) fn insert_raw(conn: &Connection, table: &str, values: &str) -> Result<()> {
    inspect::require_table(conn, table)?;
    let sql = format!("INSERT INTO {} VALUES ({values})", quote_ident(table));
    conn.execute(&sql, [])?;
    Ok(())
}

/// Captures a full snapshot of the table: column metadata plus all rows.
pub(crate) fn fetch_all(conn: &Connection, table: &str) -> Result<ResultSet> {
    inspect::require_table(conn, table)?;
    let columns = inspect::column_info(conn, table)?;
    let sql = format!("SELECT * FROM {}", quote_ident(table));
    let rows = query_rows(conn, &sql)?;
    Ok(ResultSet {
        table: table.to_string(),
        columns,
        rows,
    })
}

fn query_rows(conn: &Connection, sql: &str) -> Result<Vec<Vec<Value>>> {
    let mut stmt = conn.prepare(sql)?;
    let count = stmt.column_count();
    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(from_sql_ref(row.get_ref(i)?));
            }
            Ok(values)
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}
