//! SQL dialects and their quoting rules.
//!
//! A [`Dialect`] only decides which characters wrap identifiers and string
//! literals. Text is quoted verbatim: embedded quote characters are not doubled,
//! callers pass already-escaped text.
//!
//! | Dialect  | Identifier | String |
//! |----------|------------|--------|
//! | `mysql`  | `` `a` ``  | `"a"`  |
//! | `pgsql`  | `"a"`      | `'a'`  |
//! | `sqlite` | `"a"`      | `'a'`  |
//!
//! # Example
//! ```ignore
//! use wheresql::Dialect;
//!
//! let dialect: Dialect = "pgsql".parse()?;
//! assert_eq!(dialect.identifier_quotes(), ('"', '"'));
//! # Ok::<(), wheresql::WhereError>(())
//! ```

use crate::error::WhereError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target database dialect.
///
/// Serializes as its canonical name. Deserializes through [`FromStr`], so config
/// values accept the same aliases and casing as `"...".parse()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL / MariaDB.
    #[default]
    MySql,
    /// PostgreSQL.
    PgSql,
    /// SQLite.
    Sqlite,
}

impl Dialect {
    /// All supported dialects.
    pub const KNOWN: [Dialect; 3] = [Dialect::MySql, Dialect::PgSql, Dialect::Sqlite];

    /// Canonical lowercase name (`mysql`, `pgsql`, `sqlite`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PgSql => "pgsql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Opening and closing characters wrapping an identifier.
    pub fn identifier_quotes(&self) -> (char, char) {
        match self {
            Dialect::MySql => ('`', '`'),
            Dialect::PgSql | Dialect::Sqlite => ('"', '"'),
        }
    }

    /// Character wrapping a string literal.
    pub fn string_quote(&self) -> char {
        match self {
            Dialect::MySql => '"',
            Dialect::PgSql | Dialect::Sqlite => '\'',
        }
    }

    /// Append `name` wrapped in identifier quotes.
    pub fn write_identifier(&self, name: &str, out: &mut String) {
        let (open, close) = self.identifier_quotes();
        out.reserve(name.len() + 2);
        out.push(open);
        out.push_str(name);
        out.push(close);
    }

    /// Append `value` wrapped in string quotes.
    pub fn write_string(&self, value: &str, out: &mut String) {
        let quote = self.string_quote();
        out.reserve(value.len() + 2);
        out.push(quote);
        out.push_str(value);
        out.push(quote);
    }

    /// Quote an identifier.
    pub fn quote_identifier(&self, name: &str) -> String {
        let mut out = String::new();
        self.write_identifier(name, &mut out);
        out
    }

    /// Quote a string literal.
    pub fn quote_string(&self, value: &str) -> String {
        let mut out = String::new();
        self.write_string(value, &mut out);
        out
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = WhereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "pgsql" | "postgres" | "postgresql" => Ok(Dialect::PgSql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(WhereError::UnknownDialect(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
