//! TCG Pricing - MTG listing pricer
//!
//! Reads an inventory export and a TCGplayer price export, reprices the cards
//! that are in stock and writes the result as a CSV ready for upload.

use clap::Parser;
use std::path::PathBuf;
use tcg_pricing::{
    default_output_path, read_table, transform, write_table, InventoryFormat, PriceSource,
    PricingConfig,
};

/// Build a TCGplayer upload file from an inventory export and a price export
#[derive(Parser, Debug)]
#[command(name = "tcg_pricing")]
#[command(version, about, long_about = None)]
struct Args {
    /// Inventory export (CSV)
    #[arg(short, long)]
    inventory: PathBuf,

    /// TCGplayer price export (CSV)
    #[arg(short, long)]
    prices: PathBuf,

    /// Where to write the priced listing (default: <prices>_priced.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layout of the inventory export
    #[arg(short, long, value_enum, default_value_t = InventoryFormat::Manabox)]
    format: InventoryFormat,

    /// Price column used as the base price
    #[arg(long, value_enum, default_value_t = PriceSource::Low)]
    price_source: PriceSource,

    /// Markup in percent applied after the floor
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    markup: f64,

    /// Minimum base price
    #[arg(long, default_value_t = 0.0)]
    floor: f64,

    /// Overwrite the output file if it exists
    #[arg(long, default_value_t = false)]
    force: bool,
}

impl Args {
    fn config(&self) -> PricingConfig {
        PricingConfig {
            floor: self.floor,
            price_source: self.price_source,
            markup_percent: self.markup,
            inventory_format: self.format,
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug or RUST_LOG=tcg_pricing=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("Pricing failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> tcg_pricing::Result<()> {
    let config = args.config();
    config.validate()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.prices));

    log::info!(
        "Pricing {} against {} ({} inventory, {}, floor {:.2}, markup {}%)",
        args.prices.display(),
        args.inventory.display(),
        config.inventory_format.as_str(),
        config.price_source.column(),
        config.floor,
        config.markup_percent
    );

    let inventory = read_table(&args.inventory)?;
    let prices = read_table(&args.prices)?;
    let listing = transform(&inventory, &prices, &config)?;

    write_table(&output, &listing.table, args.force)?;
    println!(
        "Wrote {} listings to {}",
        listing.table.len(),
        output.display()
    );
    println!("{}", listing.report);
    Ok(())
}
