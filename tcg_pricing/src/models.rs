use clap::ValueEnum;

use crate::error::{PricingError, Result};

/// Column receiving the matched on-hand quantity
pub const ADD_TO_QUANTITY: &str = "Add to Quantity";

/// Column receiving the adjusted listing price
pub const MARKETPLACE_PRICE: &str = "TCG Marketplace Price";

/// Identity columns shared by TCGplayer price and inventory exports
pub const PRODUCT_NAME: &str = "Product Name";
pub const SET_NAME: &str = "Set Name";
pub const NUMBER: &str = "Number";
pub const CONDITION: &str = "Condition";

/// Supported inventory export layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InventoryFormat {
    /// Manabox collection export: foil flag instead of a condition column
    #[default]
    Manabox,
    /// TCGPlayer inventory export: condition already labelled
    Tcgplayer,
}

impl InventoryFormat {
    /// Returns the display name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryFormat::Manabox => "Manabox",
            InventoryFormat::Tcgplayer => "TCGPlayer",
        }
    }

    /// Columns that must be present for rows to be matched at all
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            InventoryFormat::Manabox => &["Name", "Set name", "Collector number", "Foil"],
            InventoryFormat::Tcgplayer => &[PRODUCT_NAME, SET_NAME, NUMBER, CONDITION],
        }
    }

    /// Column holding the on-hand quantity. Optional; absent means 0.
    pub fn quantity_column(&self) -> &'static str {
        match self {
            InventoryFormat::Manabox => "Quantity",
            InventoryFormat::Tcgplayer => "Total Quantity",
        }
    }
}

/// Price column used as the base price before floor and markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PriceSource {
    #[default]
    Low,
    Market,
}

impl PriceSource {
    /// Returns the price export column this source reads
    pub fn column(&self) -> &'static str {
        match self {
            PriceSource::Low => "TCG Low Price",
            PriceSource::Market => "TCG Market Price",
        }
    }
}

/// Settings for one pricing run.
///
/// Built once from the command line and never mutated while a run is in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingConfig {
    /// Minimum base price before markup
    pub floor: f64,
    pub price_source: PriceSource,
    /// Markup in percent, e.g. `10.0` for +10 %
    pub markup_percent: f64,
    pub inventory_format: InventoryFormat,
}

impl PricingConfig {
    /// Rejects settings that would produce negative or undefined prices
    pub fn validate(&self) -> Result<()> {
        if !self.floor.is_finite() || self.floor < 0.0 {
            return Err(PricingError::InvalidConfig(format!(
                "price floor must be a non-negative number, got {}",
                self.floor
            )));
        }
        if !self.markup_percent.is_finite() || self.markup_percent <= -100.0 {
            return Err(PricingError::InvalidConfig(format!(
                "markup must be greater than -100%, got {}",
                self.markup_percent
            )));
        }
        Ok(())
    }

    /// Multiplier applied to the floored price
    pub fn markup_factor(&self) -> f64 {
        1.0 + self.markup_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.price_source, PriceSource::Low);
        assert_eq!(config.inventory_format, InventoryFormat::Manabox);
        assert_eq!(config.markup_factor(), 1.0);
    }

    #[test]
    fn rejects_negative_floor() {
        let config = PricingConfig {
            floor: -0.01,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PricingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let floor = PricingConfig {
            floor: f64::NAN,
            ..Default::default()
        };
        let markup = PricingConfig {
            markup_percent: f64::INFINITY,
            ..Default::default()
        };
        assert!(floor.validate().is_err());
        assert!(markup.validate().is_err());
    }

    #[test]
    fn rejects_markup_that_zeroes_prices() {
        let config = PricingConfig {
            markup_percent: -100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let discount = PricingConfig {
            markup_percent: -25.0,
            ..Default::default()
        };
        assert!(discount.validate().is_ok());
        assert!((discount.markup_factor() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn price_sources_map_to_export_columns() {
        assert_eq!(PriceSource::Low.column(), "TCG Low Price");
        assert_eq!(PriceSource::Market.column(), "TCG Market Price");
    }

    #[test]
    fn quantity_columns_differ_per_format() {
        assert_eq!(InventoryFormat::Manabox.quantity_column(), "Quantity");
        assert_eq!(InventoryFormat::Tcgplayer.quantity_column(), "Total Quantity");
        assert_eq!(InventoryFormat::Tcgplayer.as_str(), "TCGPlayer");
    }
}
