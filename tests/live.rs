// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

//! Tests against a running server. Set `LIBPQ_TEST_CONNINFO` to enable them, e.g.
//! `LIBPQ_TEST_CONNINFO="host=localhost dbname=postgres user=postgres"`.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use libpq::Connection;
use libpq::FromText;
use libpq::Oid;
use libpq::PqError;
use libpq::QueryResult;
use uuid::Uuid;

fn connect() -> Option<Connection> {
    let conninfo = std::env::var("LIBPQ_TEST_CONNINFO").ok()?;
    Some(Connection::connect(&conninfo).unwrap())
}

#[test]
fn test_command_and_tuples() {
    let Some(conn) = connect() else { return };

    let result = conn
        .execute(
            "create temporary table people (id int4, name varchar, active bool, seen timestamp, token uuid)",
            &[],
        )
        .unwrap();
    assert!(matches!(result, QueryResult::Ok));

    let seen = NaiveDate::from_ymd_opt(2019, 6, 28)
        .unwrap()
        .and_hms_milli_opt(9, 30, 0, 250)
        .unwrap();
    let token = Uuid::parse_str("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11").unwrap();
    conn.execute(
        "insert into people values ($1, $2, $3, $4, $5)",
        &[&1i32, &"chris", &true, &seen, &token],
    )
    .unwrap();
    let no_token: Option<Uuid> = None;
    conn.execute(
        "insert into people values ($1, $2, $3, $4, $5)",
        &[&2i32, &"florian", &false, &seen, &no_token],
    )
    .unwrap();

    let result = conn
        .execute("select * from people order by id", &[])
        .unwrap();
    let tuples = result.tuples().unwrap();
    assert_eq!(tuples.len(), 2);
    assert_eq!(tuples.num_fields(), 5);
    assert_eq!(
        tuples.column_names().unwrap(),
        vec!["id", "name", "active", "seen", "token"]
    );
    assert_eq!(tuples.oid(0).unwrap(), Oid::Int4);
    assert_eq!(tuples.oid(4).unwrap(), Oid::Uuid);
    assert_eq!(tuples.column_index("seen"), Some(3));
    assert_eq!(tuples.column_index("missing"), None);

    let first = tuples.get(0).unwrap();
    assert_eq!(first.get::<i32>("id").unwrap(), Some(1));
    assert_eq!(first.get::<String>("name").unwrap().as_deref(), Some("chris"));
    assert_eq!(first.get::<bool>("active").unwrap(), Some(true));
    assert_eq!(first.get::<NaiveDateTime>("seen").unwrap(), Some(seen));
    assert_eq!(first.get::<Uuid>("token").unwrap(), Some(token));
    assert_eq!(first.get::<i32>("missing").unwrap(), None);

    let second = tuples.get(1).unwrap();
    assert!(second.is_null(4).unwrap());
    assert_eq!(second.get::<Uuid>("token").unwrap(), None);
    assert_eq!(second.info(4).unwrap().value, None);
    assert_eq!(second.to_json().unwrap()["active"], serde_json::json!(false));

    assert!(tuples.get(2).is_none());
    assert!(matches!(
        tuples.value(0, 9),
        Err(PqError::ColumnOutOfRange { column: 9, columns: 5 })
    ));

    let ids: Vec<i32> = tuples
        .iter()
        .map(|row| i32::from_text(row.value(0).unwrap()).unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_single_column_display_shows_first_row() {
    let Some(conn) = connect() else { return };

    let result = conn.execute("select 'x'::text as letter", &[]).unwrap();
    let tuples = result.into_tuples().unwrap();
    assert_eq!(tuples.to_string(), r#"[("letter", text, "x")]"#);
}

#[test]
fn test_query_error() {
    let Some(conn) = connect() else { return };

    match conn.execute("select * from table_that_does_not_exist", &[]) {
        Err(PqError::QueryFailed { status, message }) => {
            assert!(!status.is_ok());
            assert!(message.contains("table_that_does_not_exist"));
        }
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }

    // The connection stays usable after a failed statement.
    let result = conn.execute("select $1::int8 * 2", &[&21i64]).unwrap();
    assert_eq!(result.tuples().unwrap().value(0, 0).unwrap(), "42");
}

#[test]
fn test_escape_identifier_and_close() {
    let Some(mut conn) = connect() else { return };

    assert_eq!(conn.escape_identifier("users").unwrap(), "\"users\"");
    assert_eq!(conn.escape_identifier("we\"ird").unwrap(), "\"we\"\"ird\"");
    assert!(conn.server_version().unwrap() >= 90000);

    conn.close();
    conn.close();
    assert!(matches!(
        conn.execute("select 1", &[]),
        Err(PqError::ConnectionClosed)
    ));
}
