use std::io::Write;

use anyhow::Context;
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::draws::{ingest_raw, write_draws};

use crate::args::IngestArgs;

pub fn run<W: Write>(args: &IngestArgs, config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    let (store, summary) = ingest_raw(&args.raw, config)
        .with_context(|| format!("cleaning {}", args.raw.display()))?;
    write_draws(&store, &config.input_path, &config.columns)
        .with_context(|| format!("writing {}", config.input_path.display()))?;

    writeln!(out, "Rows read: {}", summary.rows_read)?;
    writeln!(out, "Duplicate rows dropped: {}", summary.duplicates_dropped)?;
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        writeln!(out, "Draws: {} ({first} to {last})", summary.draws)?;
    } else {
        writeln!(out, "Draws: 0")?;
    }
    writeln!(out, "Cleaned data saved to {}", config.input_path.display())?;
    Ok(())
}
