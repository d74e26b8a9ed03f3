use std::io::{self, Write};

use crate::rank;
use crate::stats::UrlStats;

/// Render the summary report: a totals line, then the top-`n` domains and
/// paths as `<count> <token>` lines under their headers.
pub fn write_report<W: Write>(out: &mut W, stats: &UrlStats, n: usize) -> io::Result<()> {
    writeln!(
        out,
        "total urls {}, domains {}, paths {}",
        stats.total_urls,
        stats.domains.len(),
        stats.paths.len()
    )?;
    writeln!(out)?;

    writeln!(out, "top domains")?;
    for (count, domain) in rank::top_n(&stats.domains, n) {
        writeln!(out, "{} {}", count, domain)?;
    }
    writeln!(out)?;

    writeln!(out, "top paths")?;
    for (count, path) in rank::top_n(&stats.paths, n) {
        writeln!(out, "{} {}", count, path)?;
    }

    Ok(())
}
