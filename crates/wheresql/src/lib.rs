//! # wheresql
//!
//! A fluent, dialect-aware SQL WHERE clause builder.
//!
//! ## Features
//!
//! - **Expression tree**: conditions and nested groups joined by `AND` / `OR`
//! - **Fail fast**: misplaced connectives and incomplete conditions are rejected at the call
//! - **Dialect quoting**: identifiers and string literals quoted for MySQL, PostgreSQL or SQLite
//! - **No binding**: values are emitted as given (placeholders, `NULL`, or already-escaped text)
//!
//! ## Usage
//!
//! ```ignore
//! use wheresql::{Dialect, WhereSql};
//!
//! let mut where_sql = WhereSql::create(Dialect::MySql);
//! where_sql
//!     .root()
//!     .group()
//!         .cond().col("u_password").eq().val(":pwd").end()?
//!         .op("AND")?
//!         .cond().col("u_mail").eq().val(":mail").end()?
//!     .end()
//!     .op("OR")?
//!     .cond().col("u_guid").eq().val("NULL").end()?
//!     .op("OR")?
//!     .cond().col("u_guid").eq().val_string("XYZ").end()?;
//!
//! let sql = format!("SELECT * FROM users{}", where_sql.to_sql());
//! // SELECT * FROM users WHERE ( `u_password` = :pwd AND `u_mail` = :mail )
//! //     OR `u_guid` = NULL OR `u_guid` = "XYZ"
//! # Ok::<(), wheresql::WhereError>(())
//! ```

pub mod condition;
pub mod dialect;
pub mod error;
pub mod where_sql;

#[cfg(feature = "tracing")]
mod tracing_hook;

pub mod prelude;

pub use condition::{ColumnKind, ColumnRef, Operator, ValueKind, ValueRef, WhereCondition};
pub use dialect::Dialect;
pub use error::{ConnectivePosition, WhereError, WhereResult};
pub use where_sql::{
    ConditionBuilder, ConditionId, Connective, GroupBuilder, GroupId, Part, WhereSql,
};

#[cfg(feature = "tracing")]
pub use tracing_hook::TracingSqlHook;
