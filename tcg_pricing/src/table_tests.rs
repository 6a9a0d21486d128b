//! Unit tests for the in-memory table.

use super::*;
use serde::Deserialize;

fn sample() -> Table {
    Table::from_reader(
        "Product Name,Set Name,Number\nLightning Bolt,Magic 2010,146\nCounterspell,Alpha,54\n"
            .as_bytes(),
    )
    .unwrap()
}

#[test]
fn reads_headers_and_records() {
    let table = sample();

    assert_eq!(table.len(), 2);
    assert_eq!(table.column_index("Set Name"), Some(1));
    assert_eq!(table.column_index("Rarity"), None);
    assert_eq!(&table.records()[1][0], "Counterspell");
}

#[test]
fn trims_headers_but_not_cells() {
    let table = Table::from_reader(" Name , Set \n  Bolt ,M10\n".as_bytes()).unwrap();

    assert_eq!(table.column_index("Name"), Some(0));
    assert_eq!(table.column_index("Set"), Some(1));
    assert_eq!(&table.records()[0][0], "  Bolt ");
}

#[test]
fn pads_short_records() {
    let table = Table::from_reader("a,b,c\n1\n1,2,3\n".as_bytes()).unwrap();

    assert_eq!(table.records()[0].len(), 3);
    assert_eq!(&table.records()[0][2], "");
}

#[test]
fn rejects_records_longer_than_header() {
    let err = Table::from_reader("a,b\n1,2\n1,2,3\n".as_bytes()).unwrap_err();

    match err {
        PricingError::RaggedRow {
            line,
            expected,
            found,
        } => {
            assert_eq!(line, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn require_column_names_table_and_column() {
    let err = sample()
        .require_column(TableKind::Prices, "Condition")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "price file is missing required column 'Condition'"
    );
}

#[test]
fn require_columns_passes_when_all_present() {
    assert!(sample()
        .require_columns(TableKind::Inventory, &["Product Name", "Number"])
        .is_ok());
}

#[test]
fn reads_cells_and_columns_by_name() {
    let table = sample();
    let record = &table.records()[0];

    assert_eq!(table.cell(record, "Number"), Some("146"));
    assert_eq!(table.cell(record, "Rarity"), None);

    let names: Vec<&str> = table.column_values("Product Name").unwrap().collect();
    assert_eq!(names, vec!["Lightning Bolt", "Counterspell"]);
}

#[test]
fn deserializes_typed_rows() {
    #[derive(Deserialize)]
    struct Row {
        #[serde(rename = "Product Name")]
        name: String,
        #[serde(rename = "Rarity", default)]
        rarity: Option<String>,
    }

    let table = sample();
    let row: Row = table.deserialize_record(&table.records()[0]).unwrap();

    assert_eq!(row.name, "Lightning Bolt");
    assert_eq!(row.rarity, None);
}

#[test]
fn writes_header_then_records() {
    let mut out = Vec::new();
    sample().to_writer(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Product Name,Set Name,Number\nLightning Bolt,Magic 2010,146\nCounterspell,Alpha,54\n"
    );
}

#[test]
fn writes_header_for_empty_table() {
    let mut out = Vec::new();
    Table::new(["a", "b"]).to_writer(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a,b\n");
}
