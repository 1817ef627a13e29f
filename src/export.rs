use crate::error::BfResult;
use crate::scorer::BlockContribution;
use std::io::Write;
use std::path::Path;

/// Writes the per-block breakdown as CSV with a header row.
pub fn write_breakdown_csv<W: Write>(writer: W, rows: &[BlockContribution]) -> BfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_breakdown_csv<P: AsRef<Path>>(path: P, rows: &[BlockContribution]) -> BfResult<()> {
    let file = std::fs::File::create(path)?;
    write_breakdown_csv(file, rows)
}
