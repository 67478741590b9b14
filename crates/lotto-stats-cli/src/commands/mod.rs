//! One module per subcommand. Handlers take the reader and writer they talk
//! to so menus and prompts can be driven from tests.

mod add_draw;
mod cooccurrence;
mod frequency;
mod ingest;
mod ml;
mod randomness;

use std::io::{BufRead, Write};

use anyhow::Context;
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::draws::{load_draws, DrawStore};

use crate::args::{Cli, Command};

/// Run the selected subcommand against stdin/stdout
pub fn dispatch(cli: &Cli, config: &AnalysisConfig) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    execute(&cli.command, config, &mut input, &mut output)
}

pub fn execute<R: BufRead, W: Write>(
    command: &Command,
    config: &AnalysisConfig,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Ingest(args) => ingest::run(args, config, output),
        Command::AddDraw(args) => add_draw::run(args, config, input, output),
        Command::Frequency(args) => frequency::run(args, config, output),
        Command::Cooccurrence(args) => cooccurrence::run(args, config, input, output),
        Command::Randomness(args) => randomness::run(args, config, input, output),
        Command::MlExport => ml::export(config, output),
        Command::Baseline(_) => ml::baseline(config, output),
    }
}

fn load_store(config: &AnalysisConfig) -> anyhow::Result<DrawStore> {
    load_draws(config)
        .with_context(|| format!("loading draws from {}", config.input_path.display()))
}
