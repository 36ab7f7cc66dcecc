//! Conversion of typed values into SQL literal text.
//!
//! Literal rendering is used wherever a predicate must stay a self-contained
//! text fragment (condition rendering, diagnostics). Statement operands that
//! the engine controls directly are parameter-bound instead and never pass
//! through here.
//!
//! Rendering rules:
//!
//! - `Null` renders as the empty string,
//! - `Integer` / `Real` render as bare numerals,
//! - `Text` renders single-quoted with embedded quotes doubled.
//!
//! Classification is by variant, so `Text("02134")` renders `'02134'`.

use crate::value::Value;

/// Escapes text for embedding inside a single-quoted SQL literal.
pub fn escape_text(text: &str) -> String {
    text.replace('\'', "''")
}

/// Renders a single value as an SQL literal.
///
/// # Examples
///
/// ```
/// use litetable_core::{sql_literal, Value};
///
/// assert_eq!(sql_literal(&Value::Integer(250)), "250");
/// assert_eq!(sql_literal(&Value::Real(38.9)), "38.9");
/// assert_eq!(sql_literal(&Value::Text("test233".into())), "'test233'");
/// assert_eq!(sql_literal(&Value::Null), "");
/// ```
pub fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => format!("'{}'", escape_text(t)),
    }
}

/// Renders a sequence of values as a comma-joined literal list.
///
/// An empty slice yields the empty string.
pub fn sql_literals(values: &[Value]) -> String {
    values
        .iter()
        .map(sql_literal)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders each row of values as one comma-joined literal string.
///
/// Row order is preserved; one output string per input row.
pub fn sql_literal_rows(rows: &[Vec<Value>]) -> Vec<String> {
    rows.iter().map(|row| sql_literals(row)).collect()
}
