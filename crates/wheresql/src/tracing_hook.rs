use crate::dialect::Dialect;
use std::borrow::Cow;
use tracing::Level;

/// Logs every clause rendered by [`WhereSql::to_sql`] on the `wheresql.sql` target.
///
/// Each event carries the root `dialect`, the number of top-level `parts` and the
/// rendered `sql`, cut to a preview length.
///
/// ```ignore
/// use tracing::Level;
/// use wheresql::{Dialect, TracingSqlHook, WhereSql};
///
/// let hook = TracingSqlHook::new().at(Level::INFO).preview(Some(80)).skip_empty();
/// let where_sql = WhereSql::create(Dialect::PgSql).with_tracing(hook);
/// ```
///
/// [`WhereSql::to_sql`]: crate::WhereSql::to_sql
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSqlHook {
    level: Level,
    preview: Option<usize>,
    skip_empty: bool,
}

impl Default for TracingSqlHook {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            preview: Some(200),
            skip_empty: false,
        }
    }
}

impl TracingSqlHook {
    /// `DEBUG` events, SQL cut after 200 bytes, empty clauses logged.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Bytes of SQL kept in the event; `None` logs the whole clause.
    pub fn preview(mut self, len: Option<usize>) -> Self {
        self.preview = len;
        self
    }

    /// Do not log clauses that render as `""` (no conditions at all).
    pub fn skip_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }

    pub(crate) fn emit(&self, dialect: Dialect, parts: usize, sql: &str) {
        if self.skip_empty && sql.is_empty() {
            return;
        }
        let sql = preview(sql, self.preview);

        macro_rules! clause_event {
            ($event:ident) => {
                tracing::$event!(
                    target: "wheresql.sql",
                    dialect = %dialect,
                    parts,
                    sql = %sql,
                )
            };
        }

        match self.level {
            Level::ERROR => clause_event!(error),
            Level::WARN => clause_event!(warn),
            Level::INFO => clause_event!(info),
            Level::DEBUG => clause_event!(debug),
            Level::TRACE => clause_event!(trace),
        }
    }
}

/// Cut `sql` to at most `limit` bytes on a char boundary, marking the cut with `...`.
fn preview(sql: &str, limit: Option<usize>) -> Cow<'_, str> {
    match limit {
        Some(limit) if sql.len() > limit => {
            let cut = (0..=limit)
                .rev()
                .find(|&i| sql.is_char_boundary(i))
                .unwrap_or(0);
            Cow::Owned(format!("{}...", &sql[..cut]))
        }
        _ => Cow::Borrowed(sql),
    }
}
