//! Integration tests for the qb module.

use crate::dest::Slot;
use crate::error::OrmError;
use crate::qb::{select, Column, Table, Where};
use crate::value::Value;

fn user_columns() -> Vec<Column> {
    vec![
        Column::new("u", "id").unwrap(),
        Column::aliased("u", "name", "uname").unwrap(),
    ]
}

fn users_table() -> Vec<Table> {
    vec![Table::new("dbo", "Users", "u").unwrap()]
}

#[test]
fn test_select_without_wheres() {
    let query = select("user_list")
        .columns(user_columns())
        .froms(users_table());

    let sql = query.build().unwrap();
    assert_eq!(
        sql,
        "--user_list\nSELECT u.id, u.name AS uname\nFROM dbo.Users u"
    );
    assert!(!sql.contains("WHERE"));
}

#[test]
fn test_select_with_join() {
    let query = select("orders_for_user")
        .columns(user_columns())
        .froms(vec![
            Table::new("dbo", "Users", "u").unwrap(),
            Table::joined("dbo", "Orders", "o", "u.id = o.user_id").unwrap(),
        ]);

    let sql = query.build().unwrap();
    let lines: Vec<&str> = sql.lines().collect();
    assert_eq!(lines[2], "FROM dbo.Users u");
    assert_eq!(lines[3], "JOIN dbo.Orders o ON u.id = o.user_id");
}

#[test]
fn test_select_with_where_args() {
    let query = select("user_by_id")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.id = ?", vec![Value::from(42)]).unwrap()
        ]);

    let sql = query.build().unwrap();
    assert!(sql.ends_with("WHERE u.id = ?"));
    assert_eq!(query.args().unwrap(), vec![Value::Int(42)]);
}

#[test]
fn test_where_clauses_render_in_insertion_order() {
    let query = select("filtered_users")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.status = ?", vec![Value::from("active")]).unwrap(),
            Where::and("u.age > ?", vec![Value::from(18)]).unwrap(),
            Where::or("u.role = ?", vec![Value::from("admin")]).unwrap(),
        ]);

    let sql = query.build().unwrap();
    assert!(sql.contains("WHERE u.status = ?\nAND u.age > ?\nOR u.role = ?"));

    let args = query.args().unwrap();
    assert_eq!(
        args,
        vec![
            Value::from("active"),
            Value::Int(18),
            Value::from("admin"),
        ]
    );
}

#[test]
fn test_build_is_idempotent() {
    let query = select("user_by_id")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.id = ?", vec![Value::from(42)]).unwrap()
        ]);

    assert_eq!(query.build().unwrap(), query.build().unwrap());
    assert_eq!(query.args().unwrap(), query.args().unwrap());
}

#[test]
fn test_build_rejects_empty_select_list() {
    let query = select("broken").froms(users_table());
    assert!(matches!(
        query.build().unwrap_err(),
        OrmError::SelectListEmpty
    ));
}

#[test]
fn test_build_rejects_empty_from_clause() {
    let query = select("broken").columns(user_columns());
    assert!(matches!(
        query.build().unwrap_err(),
        OrmError::FromClauseEmpty
    ));
}

#[test]
fn test_build_rejects_second_table_without_join() {
    let query = select("broken").columns(user_columns()).froms(vec![
        Table::new("dbo", "Users", "u").unwrap(),
        Table::new("dbo", "Orders", "o").unwrap(),
    ]);

    match query.build().unwrap_err() {
        OrmError::MissingJoin { table } => assert_eq!(table, "dbo.Orders"),
        other => panic!("expected missing join error, got {other:?}"),
    }
}

#[test]
fn test_build_rejects_arg_count_mismatch() {
    // One placeholder, zero arguments.
    let query = select("broken")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![Where::new("u.id = ?", vec![]).unwrap()]);

    assert!(matches!(
        query.build().unwrap_err(),
        OrmError::ArgCountMismatch {
            placeholders: 1,
            args: 0
        }
    ));

    // Zero placeholders, one argument.
    let query = select("broken")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.deleted_at IS NULL", vec![Value::from(1)]).unwrap()
        ]);

    assert!(matches!(
        query.build().unwrap_err(),
        OrmError::ArgCountMismatch {
            placeholders: 0,
            args: 1
        }
    ));
}

#[test]
fn test_arg_parity_counts_across_clauses() {
    let query = select("multi_clause")
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.id IN (?, ?)", vec![Value::from(1), Value::from(2)]).unwrap(),
            Where::and("u.age > ?", vec![Value::from(18)]).unwrap(),
        ]);

    assert!(query.build().is_ok());
    assert_eq!(query.args().unwrap().len(), 3);
}

#[test]
fn test_build_rejects_dest_count_mismatch() {
    let id = Slot::<i64>::new();
    let query = select("broken")
        .columns(user_columns())
        .froms(users_table())
        .dests(vec![id.bind()]);

    assert!(matches!(
        query.build().unwrap_err(),
        OrmError::DestCountMismatch {
            columns: 2,
            dests: 1
        }
    ));
}

#[test]
fn test_build_accepts_matching_dests() {
    let id = Slot::<i64>::new();
    let name = Slot::<String>::new();
    let query = select("user_lookup")
        .columns(user_columns())
        .froms(users_table())
        .dests(vec![id.bind(), name.bind()]);

    assert!(query.build().is_ok());
    assert_eq!(query.dest().unwrap().len(), 2);
}

#[test]
fn test_empty_fragment_list_is_rejected() {
    let query = select("broken").columns(vec![]);
    assert!(matches!(query.build().unwrap_err(), OrmError::EmptyInput));
}

#[test]
fn test_first_error_poisons_later_calls() {
    // The draft records the EmptyInput and ignores the later valid calls,
    // so no partial state leaks into the outputs.
    let query = select("broken")
        .columns(vec![])
        .columns(user_columns())
        .froms(users_table())
        .wheres(vec![
            Where::new("u.id = ?", vec![Value::from(1)]).unwrap()
        ]);

    assert!(matches!(query.build().unwrap_err(), OrmError::EmptyInput));
    assert!(matches!(query.args().unwrap_err(), OrmError::EmptyInput));
    assert!(matches!(query.dest().unwrap_err(), OrmError::EmptyInput));
}

#[test]
fn test_args_on_draft_without_wheres() {
    let query = select("user_list")
        .columns(user_columns())
        .froms(users_table());

    assert!(matches!(query.args().unwrap_err(), OrmError::WheresEmpty));
}

#[test]
fn test_dest_on_draft_without_dests() {
    let query = select("user_list")
        .columns(user_columns())
        .froms(users_table());

    assert!(matches!(query.dest().unwrap_err(), OrmError::DestsEmpty));
}

#[test]
fn test_fragments_accumulate_across_calls() {
    let query = select("user_list")
        .columns(vec![Column::new("u", "id").unwrap()])
        .columns(vec![Column::new("u", "name").unwrap()])
        .froms(users_table());

    let sql = query.build().unwrap();
    assert!(sql.contains("SELECT u.id, u.name"));
}

#[test]
fn test_tag_renders_as_leading_comment() {
    let query = select("daily_report")
        .columns(user_columns())
        .froms(users_table());

    let sql = query.build().unwrap();
    assert!(sql.starts_with("--daily_report\n"));
    assert_eq!(query.tag(), "daily_report");
}
