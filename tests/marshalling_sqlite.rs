use sqlite_bridge::prelude::*;

fn memory() -> Result<Connection, SqliteBridgeError> {
    Connection::open(":memory:")
}

fn cell(text: &str) -> Cell {
    Some(text.to_string())
}

#[test]
fn null_and_value_positional() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let rows = db.execute("SELECT NULL AS a, 'x' AS b", OutputMode::Positional)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.as_slice()[0], Row::Positional(vec![None, cell("x")]));
    Ok(())
}

#[test]
fn null_and_value_keyed() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let rows = db.execute("SELECT NULL AS a, 'x' AS b", OutputMode::Keyed)?;
    let row = &rows.as_slice()[0];
    assert_eq!(row.get("a"), Some(&None));
    assert_eq!(row.get("b"), Some(&cell("x")));
    Ok(())
}

#[test]
fn insert_then_select_in_one_batch() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    db.execute("CREATE TABLE t (n INTEGER)", OutputMode::Positional)?;
    let rows = db.execute(
        "INSERT INTO t VALUES (1), (2), (3); SELECT n FROM t ORDER BY n;",
        OutputMode::Positional,
    )?;
    let values: Vec<_> = rows.iter().map(|r| r.text_at(0)).collect();
    assert_eq!(values, vec![Some("1"), Some("2"), Some("3")]);
    Ok(())
}

#[test]
fn rows_from_every_select_are_concatenated() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let rows = db.execute(
        "SELECT 'first'; CREATE TABLE t (a); SELECT 'second' UNION ALL SELECT 'third';",
        OutputMode::Positional,
    )?;
    let values: Vec<_> = rows.iter().map(|r| r.text_at(0)).collect();
    assert_eq!(values, vec![Some("first"), Some("second"), Some("third")]);
    Ok(())
}

#[test]
fn statements_without_rows_return_empty_set() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let rows = db.execute(
        "CREATE TABLE t (a); INSERT INTO t VALUES (1); DELETE FROM t;",
        OutputMode::Keyed,
    )?;
    assert!(rows.is_empty());
    assert_eq!(rows.mode(), OutputMode::Keyed);
    Ok(())
}

#[test]
fn keyed_round_trip_of_inserted_null() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    db.execute("CREATE TABLE t (first TEXT, second TEXT)", OutputMode::Positional)?;
    db.execute("INSERT INTO t VALUES ('a', NULL)", OutputMode::Positional)?;
    let rows = db.execute("SELECT * FROM t", OutputMode::Keyed)?;
    let row = rows.first().expect("one row");
    assert_eq!(row.get("first"), Some(&cell("a")));
    assert_eq!(row.get("second"), Some(&None));
    Ok(())
}

#[test]
fn duplicate_column_names_keep_last_value_when_keyed() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let keyed = db.execute("SELECT 1 AS v, 2 AS v", OutputMode::Keyed)?;
    assert_eq!(keyed.as_slice()[0].len(), 1);
    assert_eq!(keyed.as_slice()[0].get("v"), Some(&cell("2")));

    let positional = db.execute("SELECT 1 AS v, 2 AS v", OutputMode::Positional)?;
    assert_eq!(positional.as_slice()[0], Row::Positional(vec![cell("1"), cell("2")]));
    Ok(())
}

#[test]
fn values_are_rendered_as_text() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let rows = db.execute(
        "SELECT 42, -7, 1.5, 3.0, '', x'6869'",
        OutputMode::Positional,
    )?;
    assert_eq!(
        rows.as_slice()[0],
        Row::Positional(vec![
            cell("42"),
            cell("-7"),
            cell("1.5"),
            cell("3.0"),
            cell(""),
            cell("hi"),
        ])
    );
    Ok(())
}

#[test]
fn update_is_visible_to_later_select() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    db.execute(
        "CREATE TABLE sketchup_test (hash TEXT PRIMARY KEY NOT NULL, content TEXT NOT NULL);",
        OutputMode::Positional,
    )?;
    db.execute(
        "INSERT INTO sketchup_test VALUES ('oguzhan', 'koral');",
        OutputMode::Positional,
    )?;
    let data = db.execute(
        "SELECT content FROM sketchup_test WHERE hash = 'oguzhan'",
        OutputMode::Positional,
    )?;
    assert_eq!(data.as_slice(), vec![Row::Positional(vec![cell("koral")])]);

    db.execute(
        "UPDATE sketchup_test SET content = 'updated_koral' WHERE hash = 'oguzhan'",
        OutputMode::Positional,
    )?;
    let data = db.execute(
        "SELECT content FROM sketchup_test WHERE hash = 'oguzhan'",
        OutputMode::Positional,
    )?;
    assert_eq!(data.as_slice(), vec![Row::Positional(vec![cell("updated_koral")])]);
    db.close();
    Ok(())
}

#[test]
fn keyed_rows_serialize_in_column_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut db = memory()?;
    let rows = db.execute("SELECT 'z' AS zeta, NULL AS alpha", OutputMode::Keyed)?;
    assert_eq!(serde_json::to_string(&rows)?, r#"[{"zeta":"z","alpha":null}]"#);
    Ok(())
}

#[test]
fn reals_render_like_engine_cast() -> Result<(), SqliteBridgeError> {
    let mut db = memory()?;
    let literals = [
        "1e20",
        "1e-7",
        "123456789012345678.0",
        "1e15",
        "-0.0",
        "0.1",
        "3.0",
        "1.5e-5",
        "-2.5e100",
        "100.0",
        "0.1 + 0.2",
    ];
    for lit in literals {
        let rows = db.execute(
            &format!("SELECT {lit}, CAST({lit} AS TEXT)"),
            OutputMode::Positional,
        )?;
        let row = rows.first().expect("one row");
        assert_eq!(row.text_at(0), row.text_at(1), "literal {lit}");
    }
    Ok(())
}
