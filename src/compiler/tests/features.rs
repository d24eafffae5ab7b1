//! Windows, locks, upserts, literal encoding and the map shorthand.

use chrono::TimeZone;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ast::*;
use crate::dialect::{self, DialectOptions};
use crate::error::Error;

use super::{from, prepared, sql, with_options};

#[test]
fn test_distinct() {
    let mut stmt = from("items");
    stmt.distinct = Some(ColumnList::default());
    stmt.select = ColumnList::new([col("kind").unwrap()]);
    assert_eq!(sql(stmt).unwrap(), r#"SELECT DISTINCT "kind" FROM "items""#);
}

#[test]
fn test_distinct_on() {
    let mut stmt = from("items");
    stmt.distinct = Some(ColumnList::new([col("kind").unwrap()]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT DISTINCT ON ("kind") * FROM "items""#
    );
}

#[test]
fn test_window_function_named() {
    let mut stmt = from("items");
    let row_number: Expr = FuncExpr::new("ROW_NUMBER", []).over_named("w").into();
    stmt.select = ColumnList::new([row_number.alias("rn")]);
    stmt.windows = vec![
        WindowExpr::named("w")
            .partition_by([col("kind").unwrap()])
            .order_by([col("id").unwrap().desc().into()]),
    ];
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT ROW_NUMBER() OVER "w" AS "rn" FROM "items" WINDOW "w" AS (PARTITION BY "kind" ORDER BY "id" DESC)"#
    );
}

#[test]
fn test_window_function_inline() {
    let mut stmt = from("items");
    stmt.select = ColumnList::new([
        FuncExpr::new("RANK", [])
            .over(WindowExpr::default().partition_by([col("kind").unwrap()]))
            .into(),
    ]);
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT RANK() OVER (PARTITION BY "kind") FROM "items""#
    );
}

#[test]
fn test_window_inherits_parent() {
    let mut stmt = from("items");
    stmt.select = ColumnList::new([
        FuncExpr::new("RANK", [])
            .over(WindowExpr::default().inherit("w").order_by([col("id").unwrap().asc().into()]))
            .into(),
    ]);
    stmt.windows = vec![WindowExpr::named("w").partition_by([col("kind").unwrap()])];
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT RANK() OVER ("w" ORDER BY "id" ASC) FROM "items" WINDOW "w" AS (PARTITION BY "kind")"#
    );
}

#[test]
fn test_window_clause_entry_requires_name() {
    let mut stmt = from("items");
    stmt.windows = vec![WindowExpr::default().partition_by([col("kind").unwrap()])];
    assert_eq!(sql(stmt), Err(Error::MissingWindowName));
}

#[test]
fn test_window_unsupported() {
    let mut options = DialectOptions::default();
    options.supports_window = false;
    let mut stmt = from("items");
    stmt.select = ColumnList::new([FuncExpr::new("RANK", []).over_named("w").into()]);
    let result = with_options(options).compile(&stmt.into(), false);
    assert_eq!(result, Err(Error::WindowNotSupported));
}

#[test]
fn test_lock_for_update() {
    let mut stmt = from("items");
    stmt.lock = Some(LockExpr::new(LockStrength::Update));
    assert_eq!(sql(stmt).unwrap(), r#"SELECT * FROM "items" FOR UPDATE"#);
}

#[test]
fn test_lock_skip_locked() {
    let mut stmt = from("items");
    stmt.lock = Some(LockExpr::new(LockStrength::Update).wait(LockWait::SkipLocked));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" FOR UPDATE SKIP LOCKED"#
    );
}

#[test]
fn test_lock_share_of_nowait() {
    let mut stmt = from("items");
    let mut lock = LockExpr::new(LockStrength::Share).wait(LockWait::NoWait);
    lock.of = Some(ColumnList::new([col("items").unwrap()]));
    stmt.lock = Some(lock);
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" FOR SHARE OF "items" NOWAIT"#
    );
}

#[test]
fn test_conflict_do_nothing() {
    let stmt = InsertClauses {
        into: Some(col("items").unwrap()),
        cols: Some(ColumnList::new([col("a").unwrap()])),
        vals: vec![vec![1.into()]],
        conflict: Some(ConflictExpr::DoNothing),
        ..InsertClauses::default()
    };
    assert_eq!(
        sql(stmt).unwrap(),
        r#"INSERT INTO "items" ("a") VALUES (1) ON CONFLICT DO NOTHING"#
    );
}

#[test]
fn test_conflict_do_update() {
    let stmt = InsertClauses {
        into: Some(col("items").unwrap()),
        cols: Some(ColumnList::new([col("a").unwrap()])),
        vals: vec![vec![1.into()]],
        conflict: Some(ConflictExpr::DoUpdate {
            target: Some("a".to_string()),
            set: vec![AssignExpr::new(Ident::new("a"), 2)],
            filter: None,
        }),
        ..InsertClauses::default()
    };
    assert_eq!(
        sql(stmt).unwrap(),
        r#"INSERT INTO "items" ("a") VALUES (1) ON CONFLICT (a) DO UPDATE SET "a" = 2"#
    );
}

#[test]
fn test_conflict_do_update_where() {
    let stmt = InsertClauses {
        into: Some(col("items").unwrap()),
        cols: Some(ColumnList::new([col("a").unwrap()])),
        vals: vec![vec![1.into()]],
        conflict: Some(ConflictExpr::DoUpdate {
            target: Some("a".to_string()),
            set: vec![AssignExpr::new(Ident::new("a"), 2)],
            filter: Some(ExprList::and([col("a").unwrap().lt(2)])),
        }),
        ..InsertClauses::default()
    };
    assert_eq!(
        sql(stmt).unwrap(),
        r#"INSERT INTO "items" ("a") VALUES (1) ON CONFLICT (a) DO UPDATE SET "a" = 2 WHERE ("a" < 2)"#
    );
}

#[test]
fn test_conflict_update_requires_assignments() {
    let stmt = InsertClauses {
        into: Some(col("items").unwrap()),
        cols: Some(ColumnList::new([col("a").unwrap()])),
        vals: vec![vec![1.into()]],
        conflict: Some(ConflictExpr::DoUpdate {
            target: None,
            set: vec![],
            filter: None,
        }),
        ..InsertClauses::default()
    };
    assert_eq!(sql(stmt), Err(Error::MissingConflictUpdateValues));
}

#[test]
fn test_conflict_update_where_unsupported() {
    let stmt = InsertClauses {
        into: Some(col("items").unwrap()),
        cols: Some(ColumnList::new([col("a").unwrap()])),
        vals: vec![vec![1.into()]],
        conflict: Some(ConflictExpr::DoUpdate {
            target: Some("a".to_string()),
            set: vec![AssignExpr::new(Ident::new("a"), 2)],
            filter: Some(ExprList::and([col("a").unwrap().lt(2)])),
        }),
        ..InsertClauses::default()
    };
    let result = with_options(dialect::mysql::options()).compile(&stmt.into(), false);
    assert_eq!(result, Err(Error::UpsertWhereNotSupported));
}

#[test]
fn test_cte_unsupported() {
    let mut options = DialectOptions::default();
    options.supports_with = false;
    let mut stmt = from("t");
    stmt.with = vec![CteExpr::new("t", from("items").into())];
    let result = with_options(options).compile(&stmt.into(), false);
    assert_eq!(result, Err(Error::CteNotSupported));
}

#[test]
fn test_recursive_cte_unsupported() {
    let mut options = DialectOptions::default();
    options.supports_with_recursive = false;
    let mut stmt = from("t");
    stmt.with = vec![CteExpr::recursive("t", from("items").into())];
    let result = with_options(options).compile(&stmt.into(), false);
    assert_eq!(result, Err(Error::RecursiveCteNotSupported));
}

#[test]
fn test_timestamp_literal() {
    let t = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("at").unwrap().gte(t)]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("at" >= '2024-01-02T03:04:05.000000+00:00')"#
    );
}

#[test]
fn test_uuid_literal() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("id").unwrap().eq(Uuid::nil())]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("id" = '00000000-0000-0000-0000-000000000000')"#
    );
}

#[test]
fn test_decimal_literal() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([
        col("price").unwrap().lte(Decimal::new(1050, 2)),
    ]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("price" <= 10.50)"#
    );
}

#[test]
fn test_float_literal() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("ratio").unwrap().gt(1.5)]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("ratio" > 1.5)"#
    );
}

#[test]
fn test_non_finite_float_fails() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("ratio").unwrap().gt(f64::NAN)]));
    assert_eq!(
        sql(stmt),
        Err(Error::UnencodableValue("NaN".to_string()))
    );
}

#[test]
fn test_bytes_encoded_as_string_not_collection() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([
        col("tag").unwrap().eq(Value::bytes("abc")),
    ]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("tag" = 'abc')"#
    );
}

#[test]
fn test_regex_steers_like_onto_regexp() {
    let re = regex::Regex::new("^a").unwrap();
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("name").unwrap().like(&re)]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("name" ~ '^a')"#
    );
}

#[test]
fn test_regex_not_ilike() {
    let re = regex::Regex::new("^a").unwrap();
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("name").unwrap().not_ilike(&re)]));
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("name" !~* '^a')"#
    );
}

#[test]
fn test_mysql_regexp_operator() {
    let re = regex::Regex::new("^a").unwrap();
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([col("name").unwrap().like(&re)]));
    let out = with_options(dialect::mysql::options())
        .compile(&stmt.into(), false)
        .unwrap();
    assert_eq!(out.sql, "SELECT * FROM `items` WHERE (`name` REGEXP '^a')");
}

#[test]
fn test_operator_inversion_is_involutive() {
    let ops = [
        BoolOp::Eq,
        BoolOp::Neq,
        BoolOp::Is,
        BoolOp::IsNot,
        BoolOp::Gt,
        BoolOp::Gte,
        BoolOp::Lt,
        BoolOp::Lte,
        BoolOp::In,
        BoolOp::NotIn,
        BoolOp::Like,
        BoolOp::NotLike,
        BoolOp::ILike,
        BoolOp::NotILike,
        BoolOp::RegexpLike,
        BoolOp::RegexpNotLike,
        BoolOp::RegexpILike,
        BoolOp::RegexpNotILike,
    ];
    for op in ops {
        assert_eq!(op.invert().invert(), op);
    }
    assert_eq!(RangeOp::Between.invert().invert(), RangeOp::Between);
}

#[test]
fn test_ex_between_bag() {
    let mut stmt = from("items");
    let ex = Ex::new().set(
        "id",
        ExValue::ops([(ExOp::Between, Value::list([1, 10]))]),
    );
    stmt.where_clause = Some(ex.to_expressions().unwrap());
    assert_eq!(
        sql(stmt).unwrap(),
        r#"SELECT * FROM "items" WHERE ("id" BETWEEN 1 AND 10)"#
    );
}

#[test]
fn test_ex_between_requires_two_values() {
    let ex = Ex::new().set("id", ExValue::ops([(ExOp::Between, Value::list([1]))]));
    assert_eq!(ex.to_expressions(), Err(Error::InvalidRangeValue(1)));
}

#[test]
fn test_prepared_literal_structural_equivalence() {
    let mut stmt = from("items");
    stmt.where_clause = Some(ExprList::and([
        col("a").unwrap().eq(1),
        col("b").unwrap().eq("x"),
    ]));
    let stmt: Statement = stmt.into();
    let literal = sql_of(&stmt);
    let out = prepared(clauses(&stmt)).unwrap();
    // Substituting the arguments back into the placeholders reproduces the
    // literal-mode text.
    let mut rebuilt = out.sql.clone();
    for arg in &out.args {
        let text = match arg {
            Value::Int(n) => n.to_string(),
            Value::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        };
        rebuilt = rebuilt.replacen('?', &text, 1);
    }
    assert_eq!(rebuilt, literal);
}

fn sql_of(stmt: &Statement) -> String {
    super::compiler().compile(stmt, false).unwrap().sql
}

fn clauses(stmt: &Statement) -> SelectClauses {
    match stmt {
        Statement::Select(c) => c.clone(),
        _ => unreachable!(),
    }
}
