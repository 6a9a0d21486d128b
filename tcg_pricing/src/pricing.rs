//! Price list repricing: matches price rows against the inventory lookup and
//! writes quantity and adjusted price into the rows that are in stock.

use std::fmt;

use csv::StringRecord;
use log::{debug, info, warn};
use mtg_common::CardKey;
use serde::Deserialize;

use crate::error::{Result, TableKind};
use crate::field_parsers::{format_price, parse_price, round_to_cents};
use crate::inventory::InventoryLookup;
use crate::models::{
    PricingConfig, ADD_TO_QUANTITY, CONDITION, MARKETPLACE_PRICE, NUMBER, PRODUCT_NAME, SET_NAME,
};
use crate::table::Table;

/// Identity columns of a TCGplayer price export row
#[derive(Debug, Deserialize, Clone)]
pub struct PriceRowKey {
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Set Name")]
    pub set_name: Option<String>,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Condition")]
    pub condition: Option<String>,
}

impl PriceRowKey {
    pub fn card_key(&self) -> std::result::Result<CardKey, mtg_common::KeyError> {
        CardKey::from_fields(
            self.product_name.as_deref(),
            self.set_name.as_deref(),
            Some(&self.number),
            self.condition.as_deref(),
        )
    }
}

/// Counters describing one pricing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingReport {
    /// Rows in the inventory file
    pub inventory_rows: usize,
    /// Inventory rows skipped for an incomplete identity
    pub inventory_skipped: usize,
    /// Distinct cards in the inventory lookup
    pub inventory_cards: usize,
    /// Rows in the price file
    pub price_rows: usize,
    /// Price rows skipped for an incomplete identity
    pub price_rows_skipped: usize,
    /// Price rows dropped because nothing is in stock
    pub out_of_stock: usize,
    /// Emitted rows whose price cell was unusable and counted as 0.0
    pub price_fallbacks: usize,
    /// Rows written to the listing
    pub listed: usize,
}

impl fmt::Display for PricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} price rows listed ({} out of stock, {} skipped); \
             inventory: {} cards from {} rows ({} skipped); {} prices defaulted to 0.00",
            self.listed,
            self.price_rows,
            self.out_of_stock,
            self.price_rows_skipped,
            self.inventory_cards,
            self.inventory_rows,
            self.inventory_skipped,
            self.price_fallbacks
        )
    }
}

/// Result of a pricing run: the upload-ready table and its counters
#[derive(Debug, Clone)]
pub struct PricedListing {
    pub table: Table,
    pub report: PricingReport,
}

/// Final listing price: floored base price with markup, rounded to cents
pub fn listing_price(raw_price: f64, config: &PricingConfig) -> f64 {
    let floored = raw_price.max(config.floor);
    round_to_cents(floored * config.markup_factor())
}

/// Reprices a TCGplayer price export against an inventory export.
///
/// Rows are emitted in price-file order. Only rows with a positive on-hand
/// quantity are kept; each gets `Add to Quantity` and `TCG Marketplace Price`
/// set, every other column is copied unchanged. Missing output columns are
/// appended to the header.
///
/// # Errors
/// Fails on invalid settings or when either table lacks an identity column.
/// Bad individual cells never fail the run.
pub fn transform(
    inventory: &Table,
    prices: &Table,
    config: &PricingConfig,
) -> Result<PricedListing> {
    config.validate()?;
    prices.require_columns(TableKind::Prices, &[PRODUCT_NAME, SET_NAME, NUMBER, CONDITION])?;

    let lookup = InventoryLookup::build(inventory, config.inventory_format)?;

    let price_column = config.price_source.column();
    let price_idx = prices.column_index(price_column);
    if price_idx.is_none() {
        warn!("Price file has no '{price_column}' column, pricing everything at the floor");
    }

    let mut headers = prices.headers().clone();
    let quantity_idx = column_or_append(&mut headers, ADD_TO_QUANTITY);
    let marketplace_idx = column_or_append(&mut headers, MARKETPLACE_PRICE);
    let mut output = Table::new(&headers);

    let mut report = PricingReport {
        inventory_rows: lookup.rows(),
        inventory_skipped: lookup.skipped(),
        inventory_cards: lookup.len(),
        price_rows: prices.len(),
        ..Default::default()
    };

    for (index, record) in prices.records().iter().enumerate() {
        let line_num = index + 2;
        let key = match prices
            .deserialize_record::<PriceRowKey>(record)
            .map_err(|e| e.to_string())
            .and_then(|row| row.card_key().map_err(|e| e.to_string()))
        {
            Ok(key) => key,
            Err(reason) => {
                warn!("Price line {line_num}: skipped, {reason}");
                report.price_rows_skipped += 1;
                continue;
            }
        };

        let quantity = lookup.quantity(&key);
        if quantity <= 0 {
            report.out_of_stock += 1;
            continue;
        }

        let raw_cell = price_idx.and_then(|idx| record.get(idx));
        let raw_price = parse_price(raw_cell).unwrap_or_else(|| {
            debug!(
                "Price line {line_num}: '{}' is not a price, using 0.00",
                raw_cell.unwrap_or_default()
            );
            report.price_fallbacks += 1;
            0.0
        });
        let price = listing_price(raw_price, config);

        debug!("Listing {key}: {quantity} @ {}", format_price(price));
        output.push_record(with_listing(
            record,
            headers.len(),
            (quantity_idx, quantity.to_string()),
            (marketplace_idx, format_price(price)),
        ));
    }

    report.listed = output.len();
    info!("{report}");
    Ok(PricedListing {
        table: output,
        report,
    })
}

fn column_or_append(headers: &mut StringRecord, name: &str) -> usize {
    match headers.iter().position(|header| header == name) {
        Some(idx) => idx,
        None => {
            headers.push_field(name);
            headers.len() - 1
        }
    }
}

/// Copies a record to the output width, overwriting the two listing cells
fn with_listing(
    record: &StringRecord,
    width: usize,
    quantity: (usize, String),
    price: (usize, String),
) -> StringRecord {
    (0..width)
        .map(|idx| {
            if idx == quantity.0 {
                quantity.1.as_str()
            } else if idx == price.0 {
                price.1.as_str()
            } else {
                record.get(idx).unwrap_or_default()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "pricing_tests.rs"]
mod tests;
