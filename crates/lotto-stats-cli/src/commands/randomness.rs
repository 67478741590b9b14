use std::io::{BufRead, Write};

use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::tests::{run_test, RandomnessTest};

use super::load_store;
use crate::args::RandomnessArgs;
use crate::menu::Menu;
use crate::render;

const MENU: Menu<'static> = Menu {
    title: "Choose a randomness test:",
    options: &[
        "Chi-square test",
        "Runs test (high/low)",
        "Serial correlation test",
        "Entropy test",
    ],
};

/// Print one test's report; a test that cannot run on this data is reported
/// and does not end the session
fn report<W: Write>(
    test: RandomnessTest,
    numbers: &[u8],
    config: &AnalysisConfig,
    out: &mut W,
) -> std::io::Result<()> {
    match run_test(test, numbers, &config.randomness) {
        Ok(outcome) => {
            for line in render::outcome_lines(&outcome) {
                writeln!(out, "{line}")?;
            }
        }
        Err(err) => {
            tracing::warn!(test = test.name(), error = %err, "randomness test failed");
            writeln!(out, "{}: {err}", test.name())?;
        }
    }
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    args: &RandomnessArgs,
    config: &AnalysisConfig,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let numbers = store.flattened_main();

    if let Some(choice) = args.test {
        for (i, test) in choice.tests().into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            report(test, &numbers, config, out)?;
        }
        return Ok(());
    }

    MENU.run(input, out, |choice, _, out| {
        report(RandomnessTest::ALL[choice - 1], &numbers, config, out)?;
        Ok(())
    })
}
