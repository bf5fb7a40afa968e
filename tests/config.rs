use mdgen::types::{ AutoIndex, Cell, Error, Table };
use pretty_assertions::assert_eq;

#[test]
fn builds_a_table_from_json() {
    let table = Table::from_json(r##"{
        "headers": ["Version", "Released", "Breaking"],
        "alignments": ["Left", "Center", "Right"],
        "rows": [
            ["1.0.0", "2024-01-15", false],
            ["1.1.0", "2024-06-02", true]
        ],
        "autoIndex": { "label": "#", "start": 1 }
    }"##).unwrap();

    assert_eq!(table.render().unwrap(), [
        "| # | Version |  Released  | Breaking |",
        "|--:|:--------|:----------:|---------:|",
        "| 1 | 1.0.0   | 2024-01-15 |    false |",
        "| 2 | 1.1.0   | 2024-06-02 |     true |",
        "",
    ].join("\n"));
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let table = Table::from_json("{}").unwrap();

    assert_eq!(table, Table::new());
    assert_eq!(table.min_cell_length(), 1);
    assert_eq!(table.render().unwrap(), "");
}

#[test]
fn partial_auto_index_uses_defaults() {
    let table = Table::from_json(r#"{ "autoIndex": { "start": 5 }, "rows": [[null], [1.5]] }"#).unwrap();

    assert_eq!(table.auto_index(), Some(&AutoIndex::new("#", 5)));
    assert_eq!(table.rows(), &[vec![Cell::Empty], vec![Cell::Float(1.5)]]);
    assert_eq!(table.render().unwrap(), [
        "| # |",
        "|--:|:----|",
        "| 5 |     |",
        "| 6 | 1.5 |",
        "",
    ].join("\n"));
}

#[test]
fn min_cell_length_from_json() {
    let table = Table::from_json(r#"{ "minCellLength": 4, "rows": [["a", 1]] }"#).unwrap();

    assert_eq!(table.render().unwrap(), "| a    | 1    |\n");
}

#[test]
fn unknown_alignment_in_json_fails_at_render() {
    let table = Table::from_json(r#"{ "headers": ["a"], "alignments": ["Middle"] }"#).unwrap();

    match table.render() {
        Err(Error::InvalidAlignment { column, value }) => {
            assert_eq!(column, 0);
            assert_eq!(value, "Middle");
        }
        other => panic!("expected InvalidAlignment, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_an_error() {
    let error = Table::from_json(r#"{ "headers": "not a list" }"#).unwrap_err();

    assert!(matches!(error, Error::Json(_)));
    assert!(error.to_string().starts_with("invalid table definition"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn json_values_render_as_given() {
    let table = Table::from_json(r#"{ "rows": [["2024-1-5", "2024-01-05 ", 18446744073709551615, -3]] }"#).unwrap();

    assert_eq!(table.rows(), &[vec![
        Cell::Text("2024-1-5".to_string()),
        Cell::Text("2024-01-05 ".to_string()),
        Cell::Unsigned(u64::MAX),
        Cell::Integer(-3),
    ]]);
    assert_eq!(table.render().unwrap(), "| 2024-1-5 | 2024-01-05  | 18446744073709551615 | -3 |\n");
}
