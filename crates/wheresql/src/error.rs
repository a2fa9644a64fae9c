//! Error types for wheresql

use crate::where_sql::Connective;
use std::fmt;
use thiserror::Error;

/// Result type alias for wheresql operations
pub type WhereResult<T> = Result<T, WhereError>;

/// Where a rejected connective would have landed inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivePosition {
    /// The group has no parts yet.
    Leading,
    /// The previous part is already a connective.
    AfterConnective,
}

impl fmt::Display for ConnectivePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivePosition::Leading => f.write_str("at the start of a group"),
            ConnectivePosition::AfterConnective => f.write_str("directly after another connective"),
        }
    }
}

/// Error types for building WHERE clauses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhereError {
    /// `op()` was called with something other than AND/OR
    #[error("Invalid connective '{0}': a connective can only be \"AND\" or \"OR\"")]
    InvalidConnective(String),

    /// `op()` was called where no connective may be placed
    #[error("Misplaced connective: {connective} can not be placed {position}")]
    MisplacedConnective {
        connective: Connective,
        position: ConnectivePosition,
    },

    /// `end()` was called on a condition without column and/or value
    #[error("Incomplete condition: missing {missing}")]
    IncompleteCondition { missing: &'static str },

    /// Dialect name could not be parsed
    #[error("Unknown dialect '{0}', expected one of: mysql, pgsql, sqlite")]
    UnknownDialect(String),
}

impl WhereError {
    /// Create an invalid connective error
    pub fn invalid_connective(name: impl Into<String>) -> Self {
        Self::InvalidConnective(name.into())
    }

    /// Create a misplaced connective error
    pub fn misplaced_connective(connective: Connective, position: ConnectivePosition) -> Self {
        Self::MisplacedConnective {
            connective,
            position,
        }
    }

    /// Check if this is an invalid connective error
    pub fn is_invalid_connective(&self) -> bool {
        matches!(self, Self::InvalidConnective(_))
    }

    /// Check if this is a misplaced connective error
    pub fn is_misplaced_connective(&self) -> bool {
        matches!(self, Self::MisplacedConnective { .. })
    }

    /// Check if this is an incomplete condition error
    pub fn is_incomplete_condition(&self) -> bool {
        matches!(self, Self::IncompleteCondition { .. })
    }
}
