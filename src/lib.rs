//! Immutable, named-field result rows.
//!
//! A [`Row`] is a fixed tuple of [`Value`]s that can be read by position
//! (negative indices count from the end) or by field name. Rows produced
//! together share one [`Schema`], so the field names are stored once per
//! query rather than once per row.
//!
//! ```
//! use db_row::{Schema, Value};
//!
//! let schema = Schema::new(["id", "name"]);
//! let alice = schema.row([Value::from(1), Value::from("Alice")])?;
//! let bob = schema.row([Value::from(2), Value::from("Bob")])?;
//!
//! assert_eq!(alice.get_by_name("name")?, &Value::from("Alice"));
//! assert_eq!(bob.get_by_index(-2)?, &Value::Int64(2));
//! assert!(alice.schema().ptr_eq(bob.schema()));
//! # Ok::<(), db_row::RowError>(())
//! ```

pub(crate) mod common;
pub(crate) mod core;
pub(crate) mod db;

pub use crate::common::error::{ErrorKind, Result, RowError};
pub use crate::core::types::Value;
pub use crate::db::{row::Row, schema::Schema};
