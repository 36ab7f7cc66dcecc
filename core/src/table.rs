//! Cached tabular query results.
//!
//! A [`ResultSet`] is the snapshot the engine keeps of its most recent
//! select (or post-mutation refresh). It is replaced wholesale on each
//! refresh and read-only to consumers; it reflects the table only as of the
//! moment it was captured.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Metadata for one column of a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Declared SQL type text (opaque, e.g. `INTEGER`).
    pub decl_type: String,
    /// Whether this column is the table's primary key.
    pub primary_key: bool,
}

/// Snapshot of a query outcome: column metadata plus rows of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResultSet {
    /// Table the snapshot was taken from.
    pub table: String,
    /// Ordered column metadata.
    pub columns: Vec<ColumnInfo>,
    /// Row values, in column order.
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ordered column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Renders a tab-separated diagnostic dump: a name banner, the header
    /// row, a separator, then one line per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use litetable_core::{ColumnInfo, ResultSet, Value};
    ///
    /// let rs = ResultSet {
    ///     table: "Users".into(),
    ///     columns: vec![
    ///         ColumnInfo { name: "id".into(), decl_type: "INTEGER".into(), primary_key: true },
    ///         ColumnInfo { name: "name".into(), decl_type: "TEXT".into(), primary_key: false },
    ///     ],
    ///     rows: vec![vec![Value::Integer(1), Value::Text("alice".into())]],
    /// };
    /// let dump = rs.render_text();
    /// assert!(dump.contains("id\tname"));
    /// assert!(dump.contains("1\talice"));
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("-------------- {} --------------\n", self.table));
        let header: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        out.push_str(&header.join("\t"));
        out.push('\n');
        out.push_str("-------------------------------------\n");
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(Value::display_text).collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out.push_str("-------------------------------------");
        out
    }
}
