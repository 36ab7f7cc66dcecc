//! SQLite storage engine for litetable.
//!
//! This crate provides [`Store`], a validated CRUD handle over one local
//! SQLite database file. Every operation checks the referenced tables and
//! fields against the live schema before touching data, binds operand
//! values as statement parameters, refreshes a cached
//! [`ResultSet`](litetable_core::ResultSet) after mutations, and releases
//! the connection on every exit path.
//!
//! # Architecture
//!
//! - **`inspect`** — live schema queries (tables, columns, primary keys,
//!   value presence)
//! - **`store`** — connection lifecycle and the CRUD operations
//! - **`builder`** — schema-validated condition construction on `Store`
//! - **`init`** — first-run creation and seeding from a
//!   [`StoreConfig`](litetable_core::StoreConfig)
//!
//! # Quick start
//!
//! ```no_run
//! use litetable_core::{CompareOp, SortOrder, StoreConfig, Value};
//! use litetable_sqlite::Store;
//!
//! let mut config = StoreConfig::new("./appdata.db");
//! config.new_table("Users", "id INTEGER PRIMARY KEY, name TEXT");
//! config.new_record("Users", "1, 'alice'");
//!
//! let mut store = Store::initialize(&config)?;
//! store.insert_row("Users", &[Value::Integer(2), Value::from("bob")])?;
//!
//! let adults = store.compare_condition("Users", "id", CompareOp::Greater, Value::Integer(1))?;
//! let rs = store.select("Users", &["name"], &adults, "id", SortOrder::Ascending)?;
//! assert_eq!(rs.len(), 1);
//! # Ok::<(), litetable_sqlite::StoreError>(())
//! ```

mod builder;
mod convert;
mod error;
mod init;
mod store;

pub mod inspect;

pub use error::{Result, StoreError};
pub use store::Store;
