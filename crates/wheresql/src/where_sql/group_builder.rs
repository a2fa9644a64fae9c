use super::{ConditionBuilder, Connective, GroupId, Part, WhereSql};
use crate::dialect::Dialect;
use crate::error::{ConnectivePosition, WhereError, WhereResult};
use std::fmt;

/// Fluent handle on one group of a [`WhereSql`].
///
/// Every method consumes the handle and returns the next one in the chain, so
/// a whole clause can be written as a single expression:
///
/// ```ignore
/// let mut where_sql = WhereSql::create(Dialect::PgSql);
/// where_sql
///     .root()
///     .cond().col("a").eq().val("1").end()?
///     .op_and()?
///     .cond().col("b").is_value().val("NULL").end()?;
/// ```
pub struct GroupBuilder<'a> {
    tree: &'a mut WhereSql,
    id: GroupId,
}

impl<'a> GroupBuilder<'a> {
    pub(crate) fn new(tree: &'a mut WhereSql, id: GroupId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn dialect(&self) -> Dialect {
        self.tree.node(self.id).dialect
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.tree.node(self.id).parent
    }

    /// A group with a parent renders parenthesized.
    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    pub fn is_root(&self) -> bool {
        !self.has_parent()
    }

    /// Number of top-level parts (conditions, groups and connectives).
    pub fn count_parts(&self) -> usize {
        self.tree.node(self.id).parts.len()
    }

    pub fn parts(&self) -> &[Part] {
        &self.tree.node(self.id).parts
    }

    /// Append a new, empty condition and continue with it.
    pub fn cond(self) -> ConditionBuilder<'a> {
        let id = self.tree.push_condition(self.id);
        ConditionBuilder::new(self.tree, id)
    }

    /// Append a nested group with this group's dialect and continue with it.
    pub fn group(self) -> GroupBuilder<'a> {
        let dialect = self.dialect();
        self.group_with_dialect(dialect)
    }

    /// Append a nested group with its own dialect and continue with it.
    pub fn group_with_dialect(self, dialect: Dialect) -> GroupBuilder<'a> {
        let id = self.tree.push_group(self.id, dialect);
        GroupBuilder::new(self.tree, id)
    }

    /// Append `AND` or `OR` (case-insensitive).
    ///
    /// Fails with [`WhereError::InvalidConnective`] for any other keyword and with
    /// [`WhereError::MisplacedConnective`] when the group is empty or already ends
    /// with a connective.
    pub fn op(self, name: &str) -> WhereResult<Self> {
        match name.parse::<Connective>() {
            Ok(connective) => self.op_with(connective),
            Err(err) => Err(self.rejected(err)),
        }
    }

    /// Append a typed connective.
    pub fn op_with(self, connective: Connective) -> WhereResult<Self> {
        let position = match self.parts().last() {
            None => Some(ConnectivePosition::Leading),
            Some(part) if part.is_connective() => Some(ConnectivePosition::AfterConnective),
            Some(_) => None,
        };
        if let Some(position) = position {
            let err = WhereError::misplaced_connective(connective, position);
            return Err(self.rejected(err));
        }

        self.tree
            .node_mut(self.id)
            .parts
            .push(Part::Connective(connective));
        Ok(self)
    }

    pub fn op_and(self) -> WhereResult<Self> {
        self.op_with(Connective::And)
    }

    pub fn op_or(self) -> WhereResult<Self> {
        self.op_with(Connective::Or)
    }

    /// Close this group: returns the parent, or this group again at the root.
    pub fn end(self) -> GroupBuilder<'a> {
        match self.parent() {
            Some(parent) => GroupBuilder::new(self.tree, parent),
            None => self,
        }
    }

    /// Render this group only.
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        self.tree.write_group(self.id, &mut sql);
        sql
    }

    fn rejected(&self, err: WhereError) -> WhereError {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "wheresql.build",
            group = self.id.index(),
            parts = self.count_parts(),
            error = %err,
            "connective rejected"
        );
        err
    }
}

impl fmt::Debug for GroupBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBuilder")
            .field("id", &self.id)
            .field("dialect", &self.dialect())
            .field("parts", &self.parts())
            .finish()
    }
}

impl fmt::Display for GroupBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
