//! Schema-validated condition construction.
//!
//! The pure [`Condition`] constructors in `litetable-core` accept any field
//! name; these `Store` methods are the validated front door. Each one opens
//! the connection, checks the table and then the field against the live
//! schema, builds the node, and releases the connection again. Combining
//! nodes with [`Condition::all`] / [`Condition::any`] needs no schema and
//! stays on the core type.

use litetable_core::{CompareOp, Condition, LikePosition, Value};

use crate::error::Result;
use crate::inspect;
use crate::store::Store;

impl Store {
    /// Builds a validated `field <op> value` comparison.
    pub fn compare_condition(
        &mut self,
        table: &str,
        field: &str,
        op: CompareOp,
        value: Value,
    ) -> Result<Condition> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            Ok(Condition::compare(field, op, value))
        })
    }

    /// Builds a validated `field [not] like` prefix/suffix match.
    ///
    /// The pattern text is treated as raw text regardless of its shape.
    pub fn like_condition(
        &mut self,
        table: &str,
        field: &str,
        position: LikePosition,
        negated: bool,
        text: &str,
    ) -> Result<Condition> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            Ok(match (position, negated) {
                (LikePosition::Prefix, false) => Condition::like_prefix(field, text),
                (LikePosition::Suffix, false) => Condition::like_suffix(field, text),
                (LikePosition::Prefix, true) => Condition::not_like_prefix(field, text),
                (LikePosition::Suffix, true) => Condition::not_like_suffix(field, text),
            })
        })
    }

    /// Builds a validated `field between low and high` condition.
    ///
    /// # Errors
    ///
    /// Besides the schema checks, fails unless `values` has exactly two
    /// elements.
    pub fn range_condition(
        &mut self,
        table: &str,
        field: &str,
        values: &[Value],
    ) -> Result<Condition> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            Ok(Condition::between(field, values)?)
        })
    }

    /// Builds a validated `field in (…)` condition.
    ///
    /// # Errors
    ///
    /// Besides the schema checks, fails on an empty operand list.
    pub fn set_condition(
        &mut self,
        table: &str,
        field: &str,
        values: &[Value],
    ) -> Result<Condition> {
        self.run(|conn| {
            inspect::require_table(conn, table)?;
            inspect::require_field(conn, table, field)?;
            Ok(Condition::within(field, values)?)
        })
    }
}
