//! Inventory exports and the quantity lookup built from them.
//!
//! Each supported export layout is mapped into an [`InventoryEntry`] first, so
//! the lookup itself does not care which tool produced the file.

use std::collections::HashMap;

use csv::StringRecord;
use log::{debug, info, warn};
use mtg_common::{condition_for_foil_flag, CardKey, KeyError};
use serde::Deserialize;

use crate::error::{Result, TableKind};
use crate::field_parsers::parse_quantity;
use crate::models::InventoryFormat;
use crate::table::Table;

/// Row of a Manabox collection export
#[derive(Debug, Deserialize, Clone)]
pub struct ManaboxRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Set name")]
    pub set_name: Option<String>,
    #[serde(rename = "Collector number")]
    pub collector_number: String,
    #[serde(rename = "Foil")]
    pub foil: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<String>,
}

/// Row of a TCGPlayer inventory export
#[derive(Debug, Deserialize, Clone)]
pub struct TcgplayerRow {
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Set Name")]
    pub set_name: Option<String>,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Condition")]
    pub condition: Option<String>,
    #[serde(rename = "Total Quantity", default)]
    pub total_quantity: Option<String>,
}

/// Format-independent view of one inventory row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub key: CardKey,
    pub quantity: i64,
}

impl TryFrom<ManaboxRow> for InventoryEntry {
    type Error = KeyError;

    fn try_from(row: ManaboxRow) -> std::result::Result<Self, Self::Error> {
        let condition = condition_for_foil_flag(row.foil.as_deref().unwrap_or_default());
        let key = CardKey::from_fields(
            row.name.as_deref(),
            row.set_name.as_deref(),
            Some(&row.collector_number),
            Some(condition),
        )?;
        Ok(Self {
            key,
            quantity: parse_quantity(row.quantity.as_deref()),
        })
    }
}

impl TryFrom<TcgplayerRow> for InventoryEntry {
    type Error = KeyError;

    fn try_from(row: TcgplayerRow) -> std::result::Result<Self, Self::Error> {
        let key = CardKey::from_fields(
            row.product_name.as_deref(),
            row.set_name.as_deref(),
            Some(&row.number),
            row.condition.as_deref(),
        )?;
        Ok(Self {
            key,
            quantity: parse_quantity(row.total_quantity.as_deref()),
        })
    }
}

/// Maps one inventory record of the given format to an entry
fn parse_entry(
    table: &Table,
    record: &StringRecord,
    format: InventoryFormat,
) -> std::result::Result<InventoryEntry, String> {
    match format {
        InventoryFormat::Manabox => {
            let row: ManaboxRow = table
                .deserialize_record(record)
                .map_err(|e| e.to_string())?;
            InventoryEntry::try_from(row).map_err(|e| e.to_string())
        }
        InventoryFormat::Tcgplayer => {
            let row: TcgplayerRow = table
                .deserialize_record(record)
                .map_err(|e| e.to_string())?;
            InventoryEntry::try_from(row).map_err(|e| e.to_string())
        }
    }
}

/// On-hand quantity per card identity, built once per run
#[derive(Debug, Clone, Default)]
pub struct InventoryLookup {
    quantities: HashMap<CardKey, i64>,
    rows: usize,
    skipped: usize,
}

impl InventoryLookup {
    /// Builds the lookup from an inventory export.
    ///
    /// When several rows share a key the last one wins; quantities are not summed.
    ///
    /// # Errors
    /// Fails if an identity column of the chosen format is missing.
    pub fn build(table: &Table, format: InventoryFormat) -> Result<Self> {
        table.require_columns(TableKind::Inventory, format.required_columns())?;
        if table.column_index(format.quantity_column()).is_none() {
            warn!(
                "Inventory has no '{}' column, every card counts as out of stock",
                format.quantity_column()
            );
        }

        let mut lookup = Self {
            rows: table.len(),
            ..Default::default()
        };
        for (index, record) in table.records().iter().enumerate() {
            match parse_entry(table, record, format) {
                Ok(entry) => lookup.insert(entry),
                Err(reason) => {
                    // +2: header row and 1-based lines
                    warn!("Inventory line {}: skipped, {reason}", index + 2);
                    lookup.skipped += 1;
                }
            }
        }

        info!(
            "Built {} inventory lookup: {} cards from {} rows ({} skipped)",
            format.as_str(),
            lookup.len(),
            lookup.rows,
            lookup.skipped
        );
        Ok(lookup)
    }

    /// Records an entry, replacing any earlier quantity for the same card
    pub fn insert(&mut self, entry: InventoryEntry) {
        if let Some(previous) = self.quantities.insert(entry.key.clone(), entry.quantity) {
            debug!(
                "Duplicate inventory entry for {}: {} replaced by {}",
                entry.key, previous, entry.quantity
            );
        }
    }

    /// Quantity on hand for a card, 0 if it is not in the inventory
    pub fn quantity(&self, key: &CardKey) -> i64 {
        self.quantities.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct cards
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Inventory rows read, including skipped ones
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Inventory rows left out because their identity was incomplete
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
