//! Conversions between core values and SQLite rows.
//!
//! Values cross the statement boundary as bound parameters, never as
//! interpolated literal text. Identifiers (table and column names) are the
//! only raw-text interpolation in this crate, and only after they have been
//! validated against the live schema; [`quote_ident`] double-quotes them on
//! top of that.

use litetable_core::Value;
use rusqlite::types::ValueRef;

/// Converts a core value into the owned rusqlite parameter type.
pub(crate) fn to_sql_value(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Integer(i) => rusqlite::types::Value::Integer(*i),
        Value::Real(r) => rusqlite::types::Value::Real(*r),
        Value::Text(t) => rusqlite::types::Value::Text(t.clone()),
    }
}

/// Converts a fetched SQLite cell back into a core value.
///
/// Blobs have no core representation and come back as [`Value::Null`];
/// the store never writes them.
pub(crate) fn from_sql_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(_) => Value::Null,
    }
}

/// Double-quotes an identifier for interpolation into statement text.
///
/// Callers must have validated the name against the live schema first.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Builds a `?,?,…` placeholder list for `count` bound parameters.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sql_value() {
        assert_eq!(
            to_sql_value(&Value::Integer(5)),
            rusqlite::types::Value::Integer(5)
        );
        assert_eq!(to_sql_value(&Value::Null), rusqlite::types::Value::Null);
        assert_eq!(
            to_sql_value(&Value::Text("x".into())),
            rusqlite::types::Value::Text("x".into())
        );
    }

    #[test]
    fn test_from_sql_ref() {
        assert_eq!(from_sql_ref(ValueRef::Integer(3)), Value::Integer(3));
        assert_eq!(from_sql_ref(ValueRef::Real(0.5)), Value::Real(0.5));
        assert_eq!(from_sql_ref(ValueRef::Null), Value::Null);
        assert_eq!(
            from_sql_ref(ValueRef::Text(b"hi")),
            Value::Text("hi".into())
        );
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("Users"), "\"Users\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(0), "");
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?,?,?");
    }
}
