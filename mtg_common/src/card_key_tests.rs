//! Unit tests for card identity normalization.

use super::*;

#[test]
fn folds_case_and_whitespace() {
    let key = CardKey::new("  Lightning Bolt ", "Magic 2010\t", " 146 ", "Near Mint");

    assert_eq!(key.name, "lightning bolt");
    assert_eq!(key.set_name, "magic 2010");
    assert_eq!(key.number, "146");
    assert_eq!(key.condition, "near mint");
}

#[test]
fn keeps_collector_number_verbatim() {
    assert_eq!(CardKey::new("a", "b", " 007 ", "c").number, "007");
    assert_eq!(CardKey::new("a", "b", "123a", "c").number, "123a");
    assert_eq!(CardKey::new("a", "b", "ABC", "c").number, "ABC");
    assert_ne!(
        CardKey::new("a", "b", "007", "c"),
        CardKey::new("a", "b", "7", "c")
    );
}

#[test]
fn differently_formatted_rows_produce_equal_keys() {
    let inventory = CardKey::new("BOLT", " m10", "1", "near mint foil ");
    let price = CardKey::new("Bolt", "M10", "1", "Near Mint Foil");

    assert_eq!(inventory, price);
}

#[test]
fn foil_and_non_foil_conditions_differ() {
    assert_ne!(
        CardKey::new("Bolt", "M10", "1", "Near Mint"),
        CardKey::new("Bolt", "M10", "1", "Near Mint Foil")
    );
}

#[test]
fn lowercases_non_ascii_names() {
    let key = CardKey::new("Æther Vial", "DARKSTEEL", "91", "NEAR MINT");
    assert_eq!(key.name, "æther vial");
}

#[test]
fn from_fields_accepts_empty_cells() {
    let key = CardKey::from_fields(Some(""), Some("M10"), Some(""), Some("Near Mint")).unwrap();
    assert_eq!(key.name, "");
    assert_eq!(key.number, "");
}

#[test]
fn from_fields_reports_missing_field() {
    let err = CardKey::from_fields(Some("Bolt"), Some("M10"), None, Some("Near Mint"))
        .unwrap_err();
    assert_eq!(err, KeyError::MissingField("number"));
    assert_eq!(err.to_string(), "missing value for identity field 'number'");
}

#[test]
fn display_shows_all_parts() {
    let key = CardKey::new("Bolt", "M10", "1", "Near Mint");
    assert_eq!(key.to_string(), "bolt [m10] #1 (near mint)");
}
