use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use crate::error::{PricingError, Result};
use crate::table::Table;

/// Reads a CSV export from disk
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = Table::from_reader(file)?;
    info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Writes a table to disk as CSV.
///
/// An existing file is only replaced when `overwrite` is set.
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table, overwrite: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Err(PricingError::OutputExists(path.to_path_buf()));
    }

    let file = File::create(path)?;
    table.to_writer(BufWriter::new(file))?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Default output location: `<prices stem>_priced.csv` next to the price file
pub fn default_output_path<P: AsRef<Path>>(prices_path: P) -> std::path::PathBuf {
    let prices_path = prices_path.as_ref();
    let stem = prices_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "prices".to_string());
    prices_path.with_file_name(format!("{stem}_priced.csv"))
}
