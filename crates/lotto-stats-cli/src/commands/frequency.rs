use std::io::Write;

use lotto_stats_core::analysis::frequency_report;
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::export::write_frequency_table;

use super::load_store;
use crate::args::FrequencyArgs;
use crate::render;

pub fn run<W: Write>(args: &FrequencyArgs, config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let report = frequency_report(&store);

    writeln!(out, "Main Number Frequencies (Descending Order):")?;
    writeln!(out, "{}", render::frequency_table(&report.main))?;
    writeln!(out, "\nBonus Number Frequencies (Descending Order):")?;
    if report.bonus.is_empty() {
        writeln!(out, "No bonus numbers recorded.")?;
    } else {
        writeln!(out, "{}", render::frequency_table(&report.bonus))?;
    }
    writeln!(out, "\nCombined (Main + Bonus) Number Frequencies (Descending Order):")?;
    writeln!(out, "{}", render::frequency_table(&report.combined))?;

    let artifacts = &config.artifacts;
    write_frequency_table(&report.main, &config.artifact_path(&artifacts.main_frequencies))?;
    write_frequency_table(&report.bonus, &config.artifact_path(&artifacts.bonus_frequencies))?;
    if args.combined {
        write_frequency_table(
            &report.combined,
            &config.artifact_path(&artifacts.combined_frequencies),
        )?;
    }
    writeln!(out, "\nFrequency tables saved to {}", config.output_dir.display())?;
    Ok(())
}
