use crate::error::Result;
use crate::transforms::CompositionReport;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Saves a composition report as pretty-printed JSON.
///
/// The layout is `{ name: { symbol: fraction } }`, which is what the
/// charting side consumes. A `.gz` path is gzip-compressed.
/// # Errors
/// * if opening or writing to the file fails
/// * if JSON serialization fails
pub fn save_report(report: &CompositionReport, out_filename: &Path) -> Result<()> {
    let file: Box<dyn Write> = if out_filename.extension().unwrap_or_default() == "gz" {
        Box::new(GzEncoder::new(File::create(out_filename)?, Compression::best()))
    } else {
        Box::new(File::create(out_filename)?)
    };
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}
