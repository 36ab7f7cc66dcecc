//! Structured WHERE-clause predicates.
//!
//! A [`Condition`] is a tree rather than flat text: leaf nodes reference a
//! single field, and the [`All`](Condition::All) / [`Any`](Condition::Any)
//! combinators render as explicitly parenthesized `and` / `or` groups, so
//! mixing the two never depends on the store's operator precedence.
//!
//! Leaf construction is pure; validating field names against a live schema
//! is the storage layer's job.
//!
//! # Examples
//!
//! ```
//! use litetable_core::{CompareOp, Condition, Value};
//!
//! let adult = Condition::compare("age", CompareOp::GreaterEqual, Value::Integer(18));
//! let named = Condition::like_prefix("name", "al");
//! let both = Condition::all(vec![adult, named]).unwrap();
//! assert_eq!(both.render(), "(age >= 18 and name like 'al%')");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{escape_text, sql_literal, sql_literals};
use crate::value::Value;

/// Binary comparison operators for leaf conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
}

impl CompareOp {
    /// The SQL symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Less => "<",
            CompareOp::LessEqual => "<=",
        }
    }
}

/// Where the wildcard goes in a `like` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikePosition {
    /// Match values starting with the text: `like 'v%'`.
    Prefix,
    /// Match values ending with the text: `like '%v'`.
    Suffix,
}

/// Sort direction for ordered selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// `ORDER BY … ASC` (the default).
    #[default]
    Ascending,
    /// `ORDER BY … DESC`.
    Descending,
}

impl SortOrder {
    /// The SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Errors raised by list-operand condition constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    /// `between` takes exactly two operands (low, high).
    #[error("between requires exactly 2 values, got {0}")]
    BetweenArity(usize),

    /// `in` takes at least one operand.
    #[error("in requires at least one value")]
    EmptyIn,

    /// An `and` / `or` group must contain at least one condition.
    #[error("empty condition group")]
    EmptyGroup,
}

/// A composable WHERE-clause predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `field <op> value`.
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    /// `field between low and high` (inclusive bounds).
    Between {
        field: String,
        low: Value,
        high: Value,
    },
    /// `field in (v1,v2,…)`.
    In { field: String, values: Vec<Value> },
    /// `field [not] like 'v%'` or `field [not] like '%v'`.
    ///
    /// The pattern text is always treated as raw text (quotes escaped),
    /// never numeric-formatted.
    Like {
        field: String,
        position: LikePosition,
        negated: bool,
        text: String,
    },
    /// All sub-conditions hold: parenthesized `and` group.
    All(Vec<Condition>),
    /// Any sub-condition holds: parenthesized `or` group.
    Any(Vec<Condition>),
}

impl Condition {
    /// Builds a single comparison condition.
    pub fn compare(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Condition::Compare {
            field: field.into(),
            op,
            value,
        }
    }

    /// Builds a closed-range condition from a list of exactly two operands.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::BetweenArity`] unless `values` has exactly
    /// two elements.
    pub fn between(
        field: impl Into<String>,
        values: &[Value],
    ) -> Result<Self, ConditionError> {
        match values {
            [low, high] => Ok(Condition::Between {
                field: field.into(),
                low: low.clone(),
                high: high.clone(),
            }),
            _ => Err(ConditionError::BetweenArity(values.len())),
        }
    }

    /// Builds a set-membership condition over one or more operands.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::EmptyIn`] for an empty operand list.
    pub fn within(
        field: impl Into<String>,
        values: &[Value],
    ) -> Result<Self, ConditionError> {
        if values.is_empty() {
            return Err(ConditionError::EmptyIn);
        }
        Ok(Condition::In {
            field: field.into(),
            values: values.to_vec(),
        })
    }

    /// Matches values starting with `text`.
    pub fn like_prefix(field: impl Into<String>, text: impl Into<String>) -> Self {
        Condition::Like {
            field: field.into(),
            position: LikePosition::Prefix,
            negated: false,
            text: text.into(),
        }
    }

    /// Matches values ending with `text`.
    pub fn like_suffix(field: impl Into<String>, text: impl Into<String>) -> Self {
        Condition::Like {
            field: field.into(),
            position: LikePosition::Suffix,
            negated: false,
            text: text.into(),
        }
    }

    /// Negated form of [`like_prefix`](Self::like_prefix).
    pub fn not_like_prefix(field: impl Into<String>, text: impl Into<String>) -> Self {
        Condition::Like {
            field: field.into(),
            position: LikePosition::Prefix,
            negated: true,
            text: text.into(),
        }
    }

    /// Negated form of [`like_suffix`](Self::like_suffix).
    pub fn not_like_suffix(field: impl Into<String>, text: impl Into<String>) -> Self {
        Condition::Like {
            field: field.into(),
            position: LikePosition::Suffix,
            negated: true,
            text: text.into(),
        }
    }

    /// Joins conditions with `and`, parenthesizing the group.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::EmptyGroup`] for an empty list.
    pub fn all(conditions: Vec<Condition>) -> Result<Self, ConditionError> {
        if conditions.is_empty() {
            return Err(ConditionError::EmptyGroup);
        }
        Ok(Condition::All(conditions))
    }

    /// Joins conditions with `or`, parenthesizing the group.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::EmptyGroup`] for an empty list.
    pub fn any(conditions: Vec<Condition>) -> Result<Self, ConditionError> {
        if conditions.is_empty() {
            return Err(ConditionError::EmptyGroup);
        }
        Ok(Condition::Any(conditions))
    }

    /// Renders the condition as a self-contained SQL text fragment.
    ///
    /// Leaf operands render through [`sql_literal`]; `like` pattern text is
    /// inlined raw with quotes escaped. Groups of more than one condition
    /// render parenthesized; single-element groups render as their sole
    /// child.
    pub fn render(&self) -> String {
        match self {
            Condition::Compare { field, op, value } => {
                format!("{field} {} {}", op.symbol(), sql_literal(value))
            }
            Condition::Between { field, low, high } => {
                format!(
                    "{field} between {} and {}",
                    sql_literal(low),
                    sql_literal(high)
                )
            }
            Condition::In { field, values } => {
                format!("{field} in ({})", sql_literals(values))
            }
            Condition::Like {
                field,
                position,
                negated,
                text,
            } => {
                let keyword = if *negated { "not like" } else { "like" };
                let pattern = match position {
                    LikePosition::Prefix => format!("'{}%'", escape_text(text)),
                    LikePosition::Suffix => format!("'%{}'", escape_text(text)),
                };
                format!("{field} {keyword} {pattern}")
            }
            Condition::All(conditions) => Self::render_group(conditions, " and "),
            Condition::Any(conditions) => Self::render_group(conditions, " or "),
        }
    }

    fn render_group(conditions: &[Condition], separator: &str) -> String {
        let parts: Vec<String> = conditions.iter().map(Condition::render).collect();
        match parts.as_slice() {
            [single] => single.clone(),
            _ => format!("({})", parts.join(separator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_renders_symbol_and_literal() {
        let c = Condition::compare("age", CompareOp::GreaterEqual, Value::Integer(18));
        assert_eq!(c.render(), "age >= 18");

        let c = Condition::compare("name", CompareOp::Equal, Value::Text("alice".into()));
        assert_eq!(c.render(), "name = 'alice'");
    }

    #[test]
    fn test_between_requires_exactly_two() {
        let ok = Condition::between("age", &[Value::Integer(18), Value::Integer(30)]);
        assert_eq!(ok.unwrap().render(), "age between 18 and 30");

        assert_eq!(
            Condition::between("age", &[Value::Integer(1)]),
            Err(ConditionError::BetweenArity(1))
        );
        assert_eq!(
            Condition::between(
                "age",
                &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]
            ),
            Err(ConditionError::BetweenArity(3))
        );
    }

    #[test]
    fn test_in_requires_nonempty() {
        let c = Condition::within("id", &[Value::Integer(1), Value::Integer(2)]).unwrap();
        assert_eq!(c.render(), "id in (1,2)");
        assert_eq!(Condition::within("id", &[]), Err(ConditionError::EmptyIn));
    }

    #[test]
    fn test_like_is_never_numeric_formatted() {
        // Pattern text is inlined raw even when lexically numeric.
        assert_eq!(
            Condition::like_prefix("zip", "021").render(),
            "zip like '021%'"
        );
        assert_eq!(
            Condition::like_suffix("name", "ce").render(),
            "name like '%ce'"
        );
        assert_eq!(
            Condition::not_like_prefix("name", "al").render(),
            "name not like 'al%'"
        );
        assert_eq!(
            Condition::not_like_suffix("name", "ce").render(),
            "name not like '%ce'"
        );
    }

    #[test]
    fn test_like_escapes_quotes() {
        assert_eq!(
            Condition::like_prefix("name", "o'br").render(),
            "name like 'o''br%'"
        );
    }

    #[test]
    fn test_groups_are_parenthesized() {
        let a = Condition::compare("a", CompareOp::Equal, Value::Integer(1));
        let b = Condition::compare("b", CompareOp::Equal, Value::Integer(2));
        let c = Condition::compare("c", CompareOp::Equal, Value::Integer(3));

        let both = Condition::all(vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(both.render(), "(a = 1 and b = 2)");

        let either = Condition::any(vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(either.render(), "(a = 1 or b = 2)");

        // Nesting keeps precedence explicit.
        let mixed = Condition::any(vec![both, c]).unwrap();
        assert_eq!(mixed.render(), "((a = 1 and b = 2) or c = 3)");
    }

    #[test]
    fn test_single_element_group_renders_child() {
        let a = Condition::compare("a", CompareOp::Equal, Value::Integer(1));
        let group = Condition::all(vec![a]).unwrap();
        assert_eq!(group.render(), "a = 1");
    }

    #[test]
    fn test_empty_group_rejected() {
        assert_eq!(Condition::all(vec![]), Err(ConditionError::EmptyGroup));
        assert_eq!(Condition::any(vec![]), Err(ConditionError::EmptyGroup));
    }
}
