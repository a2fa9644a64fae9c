//! Convenient imports for typical `wheresql` usage.
//!
//! ```ignore
//! use wheresql::prelude::*;
//! ```

pub use crate::{
    ColumnKind, Connective, Dialect, Operator, ValueKind, WhereError, WhereResult, WhereSql,
};

#[cfg(feature = "tracing")]
pub use crate::TracingSqlHook;
