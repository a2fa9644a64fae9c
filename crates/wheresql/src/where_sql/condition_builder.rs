use super::{ConditionId, GroupBuilder, WhereSql};
use crate::condition::{ColumnKind, Operator, ValueKind, WhereCondition};
use crate::dialect::Dialect;
use crate::error::{WhereError, WhereResult};
use std::fmt;

/// Fluent handle on one condition of a [`WhereSql`].
///
/// Setters overwrite earlier values (last write wins). [`end`](Self::end) checks
/// that column and value are set and returns to the owning group.
pub struct ConditionBuilder<'a> {
    tree: &'a mut WhereSql,
    id: ConditionId,
}

impl<'a> ConditionBuilder<'a> {
    pub(crate) fn new(tree: &'a mut WhereSql, id: ConditionId) -> Self {
        Self { tree, id }
    }

    fn inner(&self) -> &WhereCondition {
        &self.tree.conditions[self.id.0]
    }

    fn inner_mut(&mut self) -> &mut WhereCondition {
        &mut self.tree.conditions[self.id.0]
    }

    pub fn id(&self) -> ConditionId {
        self.id
    }

    /// The condition as built so far.
    pub fn condition(&self) -> &WhereCondition {
        self.inner()
    }

    /// Dialect of the owning group.
    pub fn dialect(&self) -> Dialect {
        self.tree.node(self.inner().owner()).dialect
    }

    // ==================== Column ====================

    /// Set a plain column name (identifier-quoted on render).
    pub fn col(self, name: impl Into<String>) -> Self {
        self.col_with(name, ColumnKind::Name)
    }

    /// Set a raw SQL column expression (emitted verbatim).
    pub fn col_sql(self, sql: impl Into<String>) -> Self {
        self.col_with(sql, ColumnKind::Sql)
    }

    pub fn col_with(mut self, column: impl Into<String>, kind: ColumnKind) -> Self {
        self.inner_mut().set_column(column.into(), kind);
        self
    }

    // ==================== Operators ====================

    pub fn operator(mut self, operator: Operator) -> Self {
        self.inner_mut().set_operator(operator);
        self
    }

    /// `=`
    pub fn eq(self) -> Self {
        self.operator(Operator::Eq)
    }

    /// `!=`
    pub fn neq(self) -> Self {
        self.operator(Operator::Neq)
    }

    /// `<`
    pub fn lt(self) -> Self {
        self.operator(Operator::Lt)
    }

    /// `>`
    pub fn gt(self) -> Self {
        self.operator(Operator::Gt)
    }

    /// `<=`
    pub fn lteq(self) -> Self {
        self.operator(Operator::Lte)
    }

    /// `>=`
    pub fn gteq(self) -> Self {
        self.operator(Operator::Gte)
    }

    /// `IS`
    pub fn is_value(self) -> Self {
        self.operator(Operator::Is)
    }

    /// `IS NOT`
    pub fn is_not(self) -> Self {
        self.operator(Operator::IsNot)
    }

    /// `IN`
    pub fn in_value(self) -> Self {
        self.operator(Operator::In)
    }

    /// `NOT IN`
    pub fn not_in_value(self) -> Self {
        self.operator(Operator::NotIn)
    }

    // ==================== Value ====================

    /// Set a raw SQL value such as a placeholder (`:pwd`) or `NULL`.
    pub fn val(self, value: impl Into<String>) -> Self {
        self.val_with(value, ValueKind::Sql)
    }

    /// Set a string literal (string-quoted on render, not escaped).
    pub fn val_string(self, value: impl Into<String>) -> Self {
        self.val_with(value, ValueKind::String)
    }

    pub fn val_with(mut self, value: impl Into<String>, kind: ValueKind) -> Self {
        self.inner_mut().set_value(value.into(), kind);
        self
    }

    // ==================== Finish ====================

    /// Column and value are both set. The operator is optional.
    pub fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }

    /// Finish the condition and return to the owning group.
    ///
    /// Fails with [`WhereError::IncompleteCondition`] if column or value is missing.
    /// The condition stays in the tree either way.
    pub fn end(self) -> WhereResult<GroupBuilder<'a>> {
        if let Some(missing) = self.inner().missing() {
            let err = WhereError::IncompleteCondition { missing };
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "wheresql.build",
                condition = self.id.index(),
                group = self.inner().owner().index(),
                error = %err,
                "condition rejected"
            );
            return Err(err);
        }
        let owner = self.inner().owner();
        Ok(GroupBuilder::new(self.tree, owner))
    }

    /// Render this condition; empty if it is not valid.
    pub fn to_sql(&self) -> String {
        self.inner().to_sql(self.dialect())
    }
}

impl fmt::Debug for ConditionBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionBuilder")
            .field("id", &self.id)
            .field("condition", self.inner())
            .finish()
    }
}

impl fmt::Display for ConditionBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
