//! Typed scalar values exchanged with the store.
//!
//! [`Value`] is the dynamically-typed scalar used for row contents, condition
//! operands, and primary-key lookups. Classification into numeric vs. text is
//! carried by the variant itself, never re-derived by parsing the textual
//! form: a `Text("02134")` stays text (and renders quoted as SQL), while an
//! `Integer(2134)` renders bare.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically-typed scalar stored in or compared against a table cell.
///
/// # Examples
///
/// ```
/// use litetable_core::Value;
///
/// let id = Value::from(42);
/// let name = Value::from("alice");
/// assert!(id.is_numeric());
/// assert!(!name.is_numeric());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// Absent / invalid value (the default).
    #[default]
    Null,
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Real(f64),
    /// Text, kept quoted in SQL even when it looks numeric.
    Text(String),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for [`Value::Integer`] and [`Value::Real`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    /// Returns the integer content, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text content, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Plain textual form without any SQL quoting, as used in table dumps.
    ///
    /// `Null` renders as the empty string.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Text(t) => t.clone(),
        }
    }

    /// Infers a value from untyped input text.
    ///
    /// Intended for boundaries where the caller's native type is unknown
    /// (e.g. command-line arguments): integer parse first, then float,
    /// otherwise text. Typed callers should construct variants directly so
    /// that lexically-numeric text such as a zip code stays text.
    ///
    /// # Examples
    ///
    /// ```
    /// use litetable_core::Value;
    ///
    /// assert_eq!(Value::infer("42"), Value::Integer(42));
    /// assert_eq!(Value::infer("3.5"), Value::Real(3.5));
    /// assert_eq!(Value::infer("bob"), Value::Text("bob".into()));
    /// ```
    pub fn infer(text: &str) -> Self {
        if let Ok(i) = text.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(r) = text.parse::<f64>() {
            return Value::Real(r);
        }
        Value::Text(text.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(t: &str) -> Self {
        Value::Text(t.to_string())
    }
}

impl From<String> for Value {
    fn from(t: String) -> Self {
        Value::Text(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
