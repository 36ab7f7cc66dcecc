//! Live schema inspection.
//!
//! Everything here queries the store's current metadata on every call;
//! nothing is cached. Table existence comes from `sqlite_master`, column
//! metadata from the `pragma_table_info` table-valued function (which takes
//! the table name as a bound parameter, keeping identifier interpolation out
//! of the probe itself). Value-existence probes are linear in row count,
//! which is acceptable for the local low-scale datasets this crate targets.

use litetable_core::{ColumnInfo, Value, sql_literal};
use rusqlite::Connection;

use crate::convert::{quote_ident, to_sql_value};
use crate::error::{Result, StoreError};

/// Lists the live table names, excluding SQLite's internal tables.
pub fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names)
}

/// Returns `true` iff `table` appears in the live schema.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
    let count: i64 = stmt.query_row([table], |row| row.get(0))?;
    Ok(count > 0)
}

/// Fails with [`StoreError::TableNotFound`] unless the table exists.
pub(crate) fn require_table(conn: &Connection, table: &str) -> Result<()> {
    if table_exists(conn, table)? {
        Ok(())
    } else {
        Err(StoreError::TableNotFound(table.to_string()))
    }
}

/// Reads the table's column metadata: name, declared type, primary-key flag.
pub fn column_info(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare("SELECT name, type, pk FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                decl_type: row.get(1)?,
                primary_key: row.get::<_, i64>(2)? > 0,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Returns whether any column name exactly matches `field` (case-sensitive).
///
/// Errors only if the metadata query itself cannot execute.
pub fn field_exists(conn: &Connection, table: &str, field: &str) -> Result<bool> {
    Ok(column_info(conn, table)?.iter().any(|c| c.name == field))
}

/// Fails with [`StoreError::FieldNotFound`] unless the column exists.
pub(crate) fn require_field(conn: &Connection, table: &str, field: &str) -> Result<()> {
    if field_exists(conn, table, field)? {
        Ok(())
    } else {
        Err(StoreError::FieldNotFound {
            table: table.to_string(),
            field: field.to_string(),
        })
    }
}

/// Returns the name of the primary-key column, or `None` if the table
/// declares none.
pub fn primary_key_name(conn: &Connection, table: &str) -> Result<Option<String>> {
    Ok(column_info(conn, table)?
        .into_iter()
        .find(|c| c.primary_key)
        .map(|c| c.name))
}

/// Fails with [`StoreError::NoPrimaryKey`] unless a primary key is declared.
pub(crate) fn require_primary_key(conn: &Connection, table: &str) -> Result<String> {
    primary_key_name(conn, table)?.ok_or_else(|| StoreError::NoPrimaryKey(table.to_string()))
}

/// Returns whether any stored value in `table.field` equals `value` under
/// SQLite's native value-equality semantics.
///
/// Validates field existence first and propagates its failure.
pub fn field_value_exists(
    conn: &Connection,
    table: &str,
    field: &str,
    value: &Value,
) -> Result<bool> {
    require_field(conn, table, field)?;
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
        quote_ident(table),
        quote_ident(field)
    );
    let mut stmt = conn.prepare(&sql)?;
    let found: i64 = stmt.query_row([to_sql_value(value)], |row| row.get(0))?;
    Ok(found > 0)
}

/// Fails with [`StoreError::ValueNotFound`] unless the value is present.
pub(crate) fn require_field_value(
    conn: &Connection,
    table: &str,
    field: &str,
    value: &Value,
) -> Result<()> {
    if field_value_exists(conn, table, field, value)? {
        Ok(())
    } else {
        Err(StoreError::ValueNotFound {
            table: table.to_string(),
            field: field.to_string(),
            value: sql_literal(value),
        })
    }
}
