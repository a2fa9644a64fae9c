//! WHERE clause expression tree.
//!
//! A [`WhereSql`] owns every group and condition of one WHERE clause. Groups and
//! conditions refer to each other through [`GroupId`] / [`ConditionId`] indices, so a
//! child can name its parent without owning it.
//!
//! Building happens through two handle types borrowed from the tree:
//!
//! - [`GroupBuilder`]: `cond()`, `group()`, `op()`, `end()`
//! - [`ConditionBuilder`]: `col()`, operator setters, `val()`, `end()`
//!
//! ## Output
//!
//! - root group: `""` when empty, otherwise ` WHERE <parts>`
//! - nested group: `""` when empty, otherwise ` ( <parts> )`
//!
//! # Example
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
//!     .cond().col("u_guid").eq().val("NULL").end()?;
//!
//! assert_eq!(
//!     where_sql.to_sql(),
//!     " WHERE ( `u_password` = :pwd AND `u_mail` = :mail ) OR `u_guid` = NULL"
//! );
//! # Ok::<(), wheresql::WhereError>(())
//! ```

mod condition_builder;
mod group_builder;

#[cfg(test)]
mod tests;

pub use condition_builder::ConditionBuilder;
pub use group_builder::GroupBuilder;

use crate::condition::WhereCondition;
use crate::dialect::Dialect;
use crate::error::WhereError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "tracing")]
use crate::tracing_hook::TracingSqlHook;

/// Index of a group inside its [`WhereSql`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    /// The root group of every tree.
    pub const ROOT: GroupId = GroupId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Index of a condition inside its [`WhereSql`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConditionId(usize);

impl ConditionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Boolean keyword joining two sibling parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl Connective {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Connective {
    type Err = WhereError;

    /// Case-insensitive; surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Connective::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Connective::Or)
        } else {
            Err(WhereError::invalid_connective(s))
        }
    }
}

/// One element of a group, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Condition(ConditionId),
    Group(GroupId),
    Connective(Connective),
}

impl Part {
    pub fn is_connective(&self) -> bool {
        matches!(self, Part::Connective(_))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GroupNode {
    pub(crate) parent: Option<GroupId>,
    pub(crate) dialect: Dialect,
    pub(crate) parts: Vec<Part>,
}

impl GroupNode {
    fn new(parent: Option<GroupId>, dialect: Dialect) -> Self {
        Self {
            parent,
            dialect,
            parts: Vec::new(),
        }
    }
}

/// A WHERE clause: the arena owning all groups and conditions.
#[derive(Debug, Clone)]
pub struct WhereSql {
    pub(crate) groups: Vec<GroupNode>,
    pub(crate) conditions: Vec<WhereCondition>,
    #[cfg(feature = "tracing")]
    tracing: Option<TracingSqlHook>,
}

impl WhereSql {
    /// Create an empty WHERE clause for the given dialect.
    pub fn create(dialect: Dialect) -> Self {
        Self {
            groups: vec![GroupNode::new(None, dialect)],
            conditions: Vec::new(),
            #[cfg(feature = "tracing")]
            tracing: None,
        }
    }

    /// Create an empty WHERE clause for the default dialect (MySQL).
    pub fn new() -> Self {
        Self::create(Dialect::default())
    }

    /// Log every [`to_sql`](Self::to_sql) call through the given hook.
    #[cfg(feature = "tracing")]
    pub fn with_tracing(mut self, hook: TracingSqlHook) -> Self {
        self.tracing = Some(hook);
        self
    }

    /// Builder handle for the root group.
    pub fn root(&mut self) -> GroupBuilder<'_> {
        GroupBuilder::new(self, GroupId::ROOT)
    }

    /// Builder handle for an existing group, to keep adding parts after a chain ended.
    pub fn open_group(&mut self, id: GroupId) -> Option<GroupBuilder<'_>> {
        if id.0 < self.groups.len() {
            Some(GroupBuilder::new(self, id))
        } else {
            None
        }
    }

    /// Builder handle for an existing condition.
    pub fn open_condition(&mut self, id: ConditionId) -> Option<ConditionBuilder<'_>> {
        if id.0 < self.conditions.len() {
            Some(ConditionBuilder::new(self, id))
        } else {
            None
        }
    }

    /// Dialect of the root group.
    pub fn dialect(&self) -> Dialect {
        self.groups[GroupId::ROOT.0].dialect
    }

    /// Number of top-level parts of the root group.
    pub fn count_parts(&self) -> usize {
        self.groups[GroupId::ROOT.0].parts.len()
    }

    /// Dialect of a group.
    pub fn group_dialect(&self, id: GroupId) -> Option<Dialect> {
        self.groups.get(id.0).map(|g| g.dialect)
    }

    /// Parent of a group; `None` for the root and for unknown ids.
    pub fn parent(&self, id: GroupId) -> Option<GroupId> {
        self.groups.get(id.0).and_then(|g| g.parent)
    }

    /// Parts of a group, in rendering order.
    pub fn parts(&self, id: GroupId) -> &[Part] {
        self.groups
            .get(id.0)
            .map(|g| g.parts.as_slice())
            .unwrap_or(&[])
    }

    pub fn condition(&self, id: ConditionId) -> Option<&WhereCondition> {
        self.conditions.get(id.0)
    }

    /// Render the whole clause.
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        self.write_group(GroupId::ROOT, &mut sql);

        #[cfg(feature = "tracing")]
        if let Some(hook) = &self.tracing {
            hook.emit(self.dialect(), self.count_parts(), &sql);
        }

        sql
    }

    /// Render a single group (parenthesized unless it is the root).
    pub fn render_group(&self, id: GroupId) -> Option<String> {
        if id.0 >= self.groups.len() {
            return None;
        }
        let mut sql = String::new();
        self.write_group(id, &mut sql);
        Some(sql)
    }

    pub(crate) fn node(&self, id: GroupId) -> &GroupNode {
        &self.groups[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: GroupId) -> &mut GroupNode {
        &mut self.groups[id.0]
    }

    pub(crate) fn push_condition(&mut self, owner: GroupId) -> ConditionId {
        let id = ConditionId(self.conditions.len());
        self.conditions.push(WhereCondition::new(owner));
        self.node_mut(owner).parts.push(Part::Condition(id));
        id
    }

    pub(crate) fn push_group(&mut self, parent: GroupId, dialect: Dialect) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(GroupNode::new(Some(parent), dialect));
        self.node_mut(parent).parts.push(Part::Group(id));
        id
    }

    pub(crate) fn write_group(&self, id: GroupId, out: &mut String) {
        let node = self.node(id);
        if node.parts.is_empty() {
            return;
        }

        let nested = node.parent.is_some();
        out.push_str(if nested { " (" } else { " WHERE" });

        let mut part_sql = String::new();
        for part in &node.parts {
            part_sql.clear();
            match part {
                Part::Condition(cid) => {
                    self.conditions[cid.0].write_sql(node.dialect, &mut part_sql)
                }
                Part::Group(gid) => self.write_group(*gid, &mut part_sql),
                Part::Connective(c) => part_sql.push_str(c.as_sql()),
            }
            out.push(' ');
            out.push_str(part_sql.trim());
        }

        if nested {
            out.push_str(" )");
        }
    }
}

impl Default for WhereSql {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WhereSql {
    /// Same text as [`WhereSql::to_sql`], without the tracing hook.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sql = String::new();
        self.write_group(GroupId::ROOT, &mut sql);
        f.write_str(&sql)
    }
}
