//! TCG Pricing - MTG listing pricer
//!
//! Matches a card inventory export (Manabox or TCGPlayer) against a TCGplayer
//! price export and produces a priced upload file containing only the cards
//! that are in stock.

pub mod error;
pub mod field_parsers;
pub mod inventory;
pub mod io;
pub mod models;
pub mod pricing;
pub mod table;

pub use error::{PricingError, Result, TableKind};
pub use inventory::{InventoryEntry, InventoryLookup};
pub use io::{default_output_path, read_table, write_table};
pub use models::{InventoryFormat, PriceSource, PricingConfig};
pub use pricing::{listing_price, transform, PricedListing, PricingReport};
pub use table::Table;
