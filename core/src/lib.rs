//! Core types for the litetable SQLite access helper.
//!
//! This crate defines the storage-independent building blocks:
//!
//! - [`Value`] — dynamically-typed scalar (null, integer, real, text),
//!   classified by variant rather than by reparsing its text form.
//! - [`sql_literal`] / [`sql_literals`] / [`sql_literal_rows`] — value to
//!   SQL literal rendering with quote escaping.
//! - [`Condition`] — structured WHERE-clause predicate tree with explicitly
//!   parenthesized `and` / `or` groups.
//! - [`ResultSet`] — cached tabular snapshot with a tab-separated
//!   diagnostic dump.
//! - [`StoreConfig`] — declarative schema/seed configuration with YAML
//!   load/save.
//!
//! The storage layer itself lives in `litetable-sqlite`; nothing here
//! touches a database.
//!
//! # Example
//!
//! ```
//! use litetable_core::{CompareOp, Condition, Value, sql_literal};
//!
//! assert_eq!(sql_literal(&Value::from("alice")), "'alice'");
//!
//! let cond = Condition::all(vec![
//!     Condition::compare("age", CompareOp::Greater, Value::Integer(18)),
//!     Condition::like_prefix("name", "al"),
//! ])
//! .unwrap();
//! assert_eq!(cond.render(), "(age > 18 and name like 'al%')");
//! ```

mod condition;
mod config;
mod format;
mod table;
mod value;

pub use condition::{CompareOp, Condition, ConditionError, LikePosition, SortOrder};
pub use config::{ConfigError, SeedSpec, StoreConfig, TableSpec};
pub use format::{escape_text, sql_literal, sql_literal_rows, sql_literals};
pub use table::{ColumnInfo, ResultSet};
pub use value::Value;
