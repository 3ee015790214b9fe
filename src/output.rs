//! Rendering of fuzz results

use crate::domain::idna;
use crate::error::Result;
use crate::types::{FuzzReport, FuzzResult, OutputFormat};
use std::io::Write;

/// CSV header row
pub const CSV_HEADERS: [&str; 4] = ["strategy", "domain", "permutation", "idna"];

/// Write `report` to `writer` in the requested format
pub fn write_report<W: Write>(report: &FuzzReport, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(&report.results, writer),
        OutputFormat::Csv => write_csv(&report.results, writer),
        OutputFormat::Json => write_json(report, writer),
    }
}

/// One permutation per line
pub fn write_plain<W: Write>(results: &[FuzzResult], mut writer: W) -> Result<()> {
    for permutation in results.iter().flat_map(|r| &r.permutations) {
        writeln!(writer, "{}", permutation)?;
    }
    writer.flush()?;
    Ok(())
}

/// Quoted CSV; the IDNA column is left blank when encoding fails
pub fn write_csv<W: Write>(results: &[FuzzResult], writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(CSV_HEADERS)?;
    for result in results {
        for permutation in &result.permutations {
            let ascii = idna::to_ascii_or_blank(permutation);
            csv.write_record([
                result.strategy_name.as_str(),
                result.original_label.as_str(),
                permutation.as_str(),
                ascii.as_str(),
            ])?;
        }
    }
    csv.flush()?;
    Ok(())
}

/// Pretty-printed JSON report
pub fn write_json<W: Write>(report: &FuzzReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}
