use std::io::Write;

use anyhow::Context;
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::export::write_membership;
use lotto_stats_core::models::{evaluate_baseline, score_next_draw};
use lotto_stats_core::MAIN_NUMBERS;

use super::load_store;
use crate::render;

pub fn export<W: Write>(config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let path = config.artifact_path(&config.artifacts.ml_ready);
    write_membership(&store, &path)?;
    writeln!(out, "ML-ready data saved to {}", path.display())?;
    Ok(())
}

pub fn baseline<W: Write>(config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let options = &config.baseline;

    let report = evaluate_baseline(&store, options).context("evaluating per-number baseline")?;
    writeln!(out, "{}", render::baseline_table(&report))?;
    writeln!(out)?;
    for line in render::baseline_summary(&report) {
        writeln!(out, "{line}")?;
    }

    let scores = score_next_draw(&store, options).context("scoring the next draw")?;
    writeln!(out, "\nMost likely numbers for the next draw:")?;
    writeln!(out, "{}", render::score_table(&scores[..MAIN_NUMBERS.min(scores.len())]))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{BaselineArgs, Command};
    use crate::commands::testing::{config_in, run_script};
    use crate::exit::{status_for_error, ExitStatus};

    #[test]
    fn test_export() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let text = run_script(&Command::MlExport, &config, "").unwrap();
        assert!(text.starts_with("ML-ready data saved to"));
        let table = std::fs::read_to_string(dir.path().join("out").join("lottomax_ml_ready.csv"))
            .unwrap();
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_baseline_needs_enough_draws() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let err = run_script(&Command::Baseline(BaselineArgs::default()), &config, "").unwrap_err();
        assert_eq!(status_for_error(&err), ExitStatus::Validation);
    }

    #[test]
    fn test_baseline_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.baseline.test_size = 1;
        let text = run_script(&Command::Baseline(BaselineArgs::default()), &config, "").unwrap();
        assert!(text.contains("num_50"));
        assert!(text.contains("Average accuracy across all numbers:"));
        assert!(text.contains("Most likely numbers for the next draw:"));
    }
}
