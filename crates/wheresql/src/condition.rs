//! Single `column operator value` conditions.
//!
//! This module provides [`Operator`] and the [`WhereCondition`] leaf that a
//! [`ConditionBuilder`](crate::ConditionBuilder) fills in. A condition is rendered
//! against the [`Dialect`] of the group that owns it.

use crate::dialect::Dialect;
use crate::where_sql::GroupId;
use std::fmt;

/// Comparison operator of a condition.
///
/// # Example
/// ```ignore
/// use wheresql::Operator;
///
/// assert_eq!(Operator::Eq.as_sql(), "=");
/// assert_eq!(Operator::IsNot.as_sql(), "IS NOT");
/// assert_eq!(Operator::Unset.as_sql(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Equal: column = value
    Eq,
    /// Not equal: column != value
    Neq,
    /// Less than: column < value
    Lt,
    /// Greater than: column > value
    Gt,
    /// Less than or equal: column <= value
    Lte,
    /// Greater than or equal: column >= value
    Gte,
    /// column IS value
    Is,
    /// column IS NOT value
    IsNot,
    /// column IN value
    In,
    /// column NOT IN value
    NotIn,
    /// No operator chosen yet; renders as an empty slot.
    #[default]
    Unset,
}

impl Operator {
    /// SQL keyword of the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Unset => "",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// How the column text of a condition is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnKind {
    /// A plain column name, wrapped in the dialect's identifier quotes.
    #[default]
    Name,
    /// Raw SQL, emitted verbatim (e.g. `LOWER(u_mail)`).
    Sql,
}

/// How the value text of a condition is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// Raw SQL, emitted verbatim (e.g. `:pwd`, `NULL`, `(1, 2)`).
    #[default]
    Sql,
    /// A string literal, wrapped in the dialect's string quote.
    String,
}

/// Column part of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub text: String,
    pub kind: ColumnKind,
}

impl ColumnRef {
    fn write_sql(&self, dialect: Dialect, out: &mut String) {
        match self.kind {
            ColumnKind::Name => dialect.write_identifier(&self.text, out),
            ColumnKind::Sql => out.push_str(&self.text),
        }
    }
}

/// Value part of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRef {
    pub text: String,
    pub kind: ValueKind,
}

impl ValueRef {
    fn write_sql(&self, dialect: Dialect, out: &mut String) {
        match self.kind {
            ValueKind::Sql => out.push_str(&self.text),
            ValueKind::String => dialect.write_string(&self.text, out),
        }
    }
}

/// A single WHERE condition stored in a [`WhereSql`](crate::WhereSql) tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereCondition {
    column: Option<ColumnRef>,
    operator: Operator,
    value: Option<ValueRef>,
    owner: GroupId,
}

impl WhereCondition {
    pub(crate) fn new(owner: GroupId) -> Self {
        Self {
            column: None,
            operator: Operator::Unset,
            value: None,
            owner,
        }
    }

    pub(crate) fn set_column(&mut self, text: String, kind: ColumnKind) {
        self.column = Some(ColumnRef { text, kind });
    }

    pub(crate) fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    pub(crate) fn set_value(&mut self, text: String, kind: ValueKind) {
        self.value = Some(ValueRef { text, kind });
    }

    pub fn column(&self) -> Option<&ColumnRef> {
        self.column.as_ref()
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> Option<&ValueRef> {
        self.value.as_ref()
    }

    /// The group this condition belongs to.
    pub fn owner(&self) -> GroupId {
        self.owner
    }

    /// A condition is valid once both column and value are set.
    ///
    /// The operator is not required: an unset operator renders as an empty slot.
    pub fn is_valid(&self) -> bool {
        self.column.is_some() && self.value.is_some()
    }

    /// Name the parts still missing, or `None` if the condition is valid.
    pub(crate) fn missing(&self) -> Option<&'static str> {
        match (&self.column, &self.value) {
            (None, None) => Some("column and value"),
            (None, Some(_)) => Some("column"),
            (Some(_), None) => Some("value"),
            (Some(_), Some(_)) => None,
        }
    }

    /// Render as ` <column> <operator> <value>`.
    ///
    /// Invalid conditions render as an empty string.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut out = String::new();
        self.write_sql(dialect, &mut out);
        out
    }

    pub(crate) fn write_sql(&self, dialect: Dialect, out: &mut String) {
        let (Some(column), Some(value)) = (&self.column, &self.value) else {
            return;
        };
        out.push(' ');
        column.write_sql(dialect, out);
        out.push(' ');
        out.push_str(self.operator.as_sql());
        out.push(' ');
        value.write_sql(dialect, out);
    }
}
