use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;
use tracing::info;

use crate::reader::ByteReader;
use crate::{report, scanner, Args};

/// Run one scan: open the input, tally URLs, write the report.
pub fn run(args: &Args) -> Result<()> {
    let total_start = Instant::now();
    info!(action = "start", component = "analysis", input = ?args.input, output = ?args.output, top = args.top, "Starting URL scan");

    let reader = ByteReader::open(&args.input)?;

    let scan_start = Instant::now();
    let stats = scanner::scan(reader);
    info!(
        action = "complete",
        component = "scan",
        total_urls = stats.total_urls,
        unique_domains = stats.domains.len(),
        unique_paths = stats.paths.len(),
        duration_ms = scan_start.elapsed().as_millis(),
        "Scan completed"
    );

    let output = File::create(&args.output)
        .with_context(|| format!("Cannot open output file {:?}", args.output))?;
    let mut writer = BufWriter::new(output);
    report::write_report(&mut writer, &stats, args.top)
        .with_context(|| format!("Cannot write report to {:?}", args.output))?;
    writer
        .flush()
        .with_context(|| format!("Cannot write report to {:?}", args.output))?;

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_start.elapsed().as_millis(),
        "Analysis completed"
    );
    Ok(())
}
