use super::*;
use crate::condition::{ColumnKind, Operator, ValueKind};
use crate::error::{ConnectivePosition, WhereResult};

#[test]
fn test_empty_root_renders_nothing() {
    let w = WhereSql::create(Dialect::PgSql);
    assert_eq!(w.count_parts(), 0);
    assert_eq!(w.to_sql(), "");
}

#[test]
fn test_single_condition_per_dialect() -> WhereResult<()> {
    let expected = [
        (Dialect::MySql, " WHERE `name` = \"alice\""),
        (Dialect::PgSql, " WHERE \"name\" = 'alice'"),
        (Dialect::Sqlite, " WHERE \"name\" = 'alice'"),
    ];
    for (dialect, sql) in expected {
        let mut w = WhereSql::create(dialect);
        w.root().cond().col("name").eq().val_string("alice").end()?;
        assert_eq!(w.to_sql(), sql);
    }
    Ok(())
}

#[test]
fn test_raw_column_and_raw_value_are_verbatim() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::MySql);
    w.root()
        .cond()
        .col_sql("LOWER(u_mail)")
        .eq()
        .val(":mail")
        .end()?;
    assert_eq!(w.to_sql(), " WHERE LOWER(u_mail) = :mail");
    Ok(())
}

#[test]
fn test_round_trip_quoted_values() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let root = w.root().cond().col("a").eq().val_string("1").end()?;
    let root = root.op_and()?;
    root.cond().col("b").is_value().val_string("NULL").end()?;
    assert_eq!(w.to_sql(), r#" WHERE "a" = '1' AND "b" IS 'NULL'"#);
    Ok(())
}

#[test]
fn test_round_trip_raw_values() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let root = w.root().cond().col("a").eq().val("1").end()?;
    let root = root.op_and()?;
    root.cond().col("b").is_value().val("NULL").end()?;
    assert_eq!(w.to_sql(), r#" WHERE "a" = 1 AND "b" IS NULL"#);
    Ok(())
}

#[test]
fn test_nested_group_then_or() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::MySql);
    let login = w.root().group();
    let login = login.cond().col("u_password").eq().val(":pwd").end()?;
    let login = login.op("AND")?;
    let login = login.cond().col("u_mail").eq().val(":mail").end()?;
    let root = login.end().op("OR")?;
    let root = root.cond().col("u_guid").eq().val("NULL").end()?;
    let root = root.op("OR")?;
    root.cond().col("u_guid").eq().val_string("XYZ").end()?;

    let sql = w.to_sql();
    let expected = concat!(
        " WHERE ( `u_password` = :pwd AND `u_mail` = :mail )",
        " OR `u_guid` = NULL OR `u_guid` = \"XYZ\""
    );
    assert_eq!(sql, expected);
    assert_eq!(sql.matches('(').count(), 1);
    assert_eq!(sql.matches(')').count(), 1);
    Ok(())
}

#[test]
fn test_deeply_nested_groups() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::Sqlite);
    let outer = w.root().group();
    let outer = outer.cond().col("a").gt().val("1").end()?.op_or()?;
    let inner = outer.group();
    let inner = inner.cond().col("b").lt().val("2").end()?.op_and()?;
    let inner = inner.cond().col("c").neq().val("3").end()?;
    let root = inner.end().end().op_and()?;
    root.cond().col("d").gteq().val("4").end()?;
    assert_eq!(
        w.to_sql(),
        r#" WHERE ( "a" > 1 OR ( "b" < 2 AND "c" != 3 ) ) AND "d" >= 4"#
    );
    Ok(())
}

#[test]
fn test_op_on_empty_group_is_misplaced() {
    let mut w = WhereSql::create(Dialect::PgSql);
    let err = w.root().op("AND").unwrap_err();
    assert_eq!(
        err,
        WhereError::misplaced_connective(Connective::And, ConnectivePosition::Leading)
    );
    assert_eq!(w.count_parts(), 0);

    let err = w.root().group().op_or().unwrap_err();
    assert!(err.is_misplaced_connective());
}

#[test]
fn test_two_ops_in_a_row_are_misplaced() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let root = w.root().cond().col("a").eq().val("1").end()?;
    let err = root.op_and()?.op_or().unwrap_err();
    assert_eq!(
        err,
        WhereError::misplaced_connective(Connective::Or, ConnectivePosition::AfterConnective)
    );
    // The first connective stays; the rejected one is not appended.
    assert_eq!(w.count_parts(), 2);
    Ok(())
}

#[test]
fn test_op_is_case_insensitive() -> WhereResult<()> {
    let mut rendered = Vec::new();
    for name in ["and", "AND", "And"] {
        let mut w = WhereSql::create(Dialect::MySql);
        let root = w.root().cond().col("a").eq().val("1").end()?;
        root.op(name)?.cond().col("b").eq().val("2").end()?;
        rendered.push(w.to_sql());
    }
    assert_eq!(rendered, [" WHERE `a` = 1 AND `b` = 2"; 3]);

    let mut w = WhereSql::create(Dialect::MySql);
    let root = w.root().cond().col("a").eq().val("1").end()?;
    root.op("oR")?.cond().col("b").eq().val("2").end()?;
    assert_eq!(w.to_sql(), " WHERE `a` = 1 OR `b` = 2");
    Ok(())
}

#[test]
fn test_op_rejects_unknown_keyword() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::MySql);
    let root = w.root().cond().col("a").eq().val("1").end()?;
    let err = root.op("XOR").unwrap_err();
    assert_eq!(err, WhereError::InvalidConnective("XOR".to_string()));

    let err = w.root().op(" AND ").unwrap_err();
    assert!(err.is_invalid_connective());
    assert_eq!(w.count_parts(), 1);
    Ok(())
}

#[test]
fn test_invalid_keyword_wins_over_placement() {
    // On an empty group the keyword is checked first.
    let mut w = WhereSql::create(Dialect::MySql);
    let err = w.root().op("NOR").unwrap_err();
    assert!(err.is_invalid_connective());
}

#[test]
fn test_op_after_group_is_allowed() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let child = w.root().group().cond().col("a").eq().val("1").end()?;
    let root = child.end().op_with(Connective::Or)?;
    assert_eq!(
        root.parts(),
        &[Part::Group(GroupId(1)), Part::Connective(Connective::Or)]
    );
    Ok(())
}

#[test]
fn test_incomplete_condition() {
    let mut w = WhereSql::create(Dialect::PgSql);
    let cond = w.root().cond().col("a").eq();
    assert!(!cond.is_valid());
    assert_eq!(cond.to_sql(), "");
    let err = cond.end().unwrap_err();
    assert_eq!(err, WhereError::IncompleteCondition { missing: "value" });

    let err = w.root().cond().val("1").end().unwrap_err();
    assert_eq!(err, WhereError::IncompleteCondition { missing: "column" });

    let err = w.root().cond().end().unwrap_err();
    assert_eq!(
        err,
        WhereError::IncompleteCondition {
            missing: "column and value"
        }
    );
}

#[test]
fn test_incomplete_condition_stays_in_tree() {
    let mut w = WhereSql::create(Dialect::PgSql);
    assert!(w.root().cond().col("a").end().is_err());
    // The invalid condition renders empty but still occupies a part slot.
    assert_eq!(w.count_parts(), 1);
    assert_eq!(w.to_sql(), " WHERE ");

    let id = ConditionId(0);
    let group = w.open_condition(id).unwrap().val("1").end().unwrap();
    assert_eq!(group.id(), GroupId::ROOT);
    assert_eq!(w.to_sql(), r#" WHERE "a"  1"#);
}

#[test]
fn test_unset_operator_renders_blank_slot() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let cond = w.root().cond().col("a").val("1");
    assert!(cond.is_valid());
    assert_eq!(cond.condition().operator(), Operator::Unset);
    cond.end()?;
    assert_eq!(w.to_sql(), r#" WHERE "a"  1"#);
    Ok(())
}

#[test]
fn test_every_operator() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::Sqlite);
    let g = w.root();
    let g = g.cond().col("c").eq().val("1").end()?.op_and()?;
    let g = g.cond().col("c").neq().val("1").end()?.op_and()?;
    let g = g.cond().col("c").lt().val("1").end()?.op_and()?;
    let g = g.cond().col("c").gt().val("1").end()?.op_and()?;
    let g = g.cond().col("c").lteq().val("1").end()?.op_and()?;
    let g = g.cond().col("c").gteq().val("1").end()?.op_and()?;
    let g = g.cond().col("c").is_value().val("NULL").end()?.op_and()?;
    let g = g.cond().col("c").is_not().val("NULL").end()?.op_and()?;
    let g = g.cond().col("c").in_value().val("(1, 2)").end()?.op_and()?;
    g.cond().col("c").not_in_value().val("(3)").end()?;
    assert_eq!(
        w.to_sql(),
        concat!(
            r#" WHERE "c" = 1 AND "c" != 1 AND "c" < 1 AND "c" > 1 AND "c" <= 1"#,
            r#" AND "c" >= 1 AND "c" IS NULL AND "c" IS NOT NULL"#,
            r#" AND "c" IN (1, 2) AND "c" NOT IN (3)"#
        )
    );
    Ok(())
}

#[test]
fn test_setters_last_write_wins() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::MySql);
    w.root()
        .cond()
        .col("first")
        .col_with("second", ColumnKind::Name)
        .eq()
        .gt()
        .neq()
        .val_string("x")
        .val_with("y", ValueKind::Sql)
        .end()?;
    assert_eq!(w.to_sql(), " WHERE `second` != y");
    Ok(())
}

#[test]
fn test_end_on_root_returns_same_group() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let root = w.root().cond().col("a").eq().val("1").end()?;
    let id = root.id();
    let again = root.end().end();
    assert_eq!(again.id(), id);
    assert_eq!(again.id(), GroupId::ROOT);
    assert!(again.is_root());
    assert_eq!(again.count_parts(), 1);
    Ok(())
}

#[test]
fn test_end_on_nested_group_returns_parent() {
    let mut w = WhereSql::create(Dialect::PgSql);
    let child = w.root().group();
    assert!(child.has_parent());
    assert_eq!(child.parent(), Some(GroupId::ROOT));
    let parent = child.end();
    assert_eq!(parent.id(), GroupId::ROOT);
}

#[test]
fn test_count_parts_is_not_recursive() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let child = w.root().group();
    let child = child.cond().col("a").eq().val("1").end()?.op_and()?;
    let child = child.cond().col("b").eq().val("2").end()?;
    assert_eq!(child.count_parts(), 3);
    let child_id = child.id();
    child.end().op_or()?.cond().col("c").eq().val("3").end()?;

    assert_eq!(w.count_parts(), 3);
    assert_eq!(w.parts(child_id).len(), 3);
    Ok(())
}

#[test]
fn test_child_inherits_dialect() {
    let mut w = WhereSql::create(Dialect::Sqlite);
    let child = w.root().group().group();
    assert_eq!(child.dialect(), Dialect::Sqlite);
}

#[test]
fn test_child_dialect_override() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let root = w.root().cond().col("a").eq().val_string("x").end()?;
    let child = root.op_and()?.group_with_dialect(Dialect::MySql);
    child.cond().col("b").eq().val_string("y").end()?;
    assert_eq!(w.group_dialect(GroupId(1)), Some(Dialect::MySql));
    assert_eq!(w.to_sql(), r#" WHERE "a" = 'x' AND ( `b` = "y" )"#);
    Ok(())
}

#[test]
fn test_empty_nested_group_renders_nothing() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::MySql);
    let group = w.root().group();
    assert_eq!(group.to_sql(), "");
    let root = group.end().op_and()?;
    root.cond().col("a").eq().val("1").end()?;
    // Guarding against empty groups is left to the caller.
    assert_eq!(w.to_sql(), " WHERE  AND `a` = 1");
    Ok(())
}

#[test]
fn test_group_renders_parenthesized() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let group = w.root().group().cond().col("a").eq().val("1").end()?;
    assert_eq!(group.to_sql(), r#" ( "a" = 1 )"#);
    assert_eq!(group.to_string(), group.to_sql());
    let rendered = w.render_group(GroupId(1));
    assert_eq!(rendered.as_deref(), Some(r#" ( "a" = 1 )"#));
    assert_eq!(w.render_group(GroupId(7)), None);
    Ok(())
}

#[test]
fn test_open_group_continues_building() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    let child = w.root().group().cond().col("a").eq().val("1").end()?;
    let child_id = child.id();

    let child = w.open_group(child_id).unwrap().op_or()?;
    child.cond().col("b").eq().val("2").end()?;
    assert_eq!(w.to_sql(), r#" WHERE ( "a" = 1 OR "b" = 2 )"#);
    assert!(w.open_group(GroupId(9)).is_none());
    Ok(())
}

#[test]
fn test_condition_lookup_and_owner() -> WhereResult<()> {
    let mut w = WhereSql::create(Dialect::PgSql);
    w.root().group().cond().col("a").eq().val_string("1").end()?;
    let condition = w.condition(ConditionId(0)).unwrap();
    assert_eq!(condition.owner(), GroupId(1));
    assert_eq!(condition.value().map(|v| v.kind), Some(ValueKind::String));
    assert_eq!(condition.to_sql(Dialect::PgSql), r#" "a" = '1'"#);
    assert_eq!(w.parent(GroupId(1)), Some(GroupId::ROOT));
    assert_eq!(w.parent(GroupId::ROOT), None);
    Ok(())
}

#[test]
fn test_display_matches_to_sql() -> WhereResult<()> {
    let mut w = WhereSql::new();
    w.root().cond().col("a").eq().val("1").end()?;
    assert_eq!(w.dialect(), Dialect::MySql);
    assert_eq!(w.to_string(), w.to_sql());
    let sql = format!("SELECT * FROM t{w}");
    assert_eq!(sql, "SELECT * FROM t WHERE `a` = 1");
    Ok(())
}

#[test]
fn test_connective_parse() {
    assert_eq!("and".parse::<Connective>().unwrap(), Connective::And);
    assert_eq!("OR".parse::<Connective>().unwrap(), Connective::Or);
    assert!("".parse::<Connective>().is_err());
    assert_eq!(Connective::default(), Connective::And);
}
