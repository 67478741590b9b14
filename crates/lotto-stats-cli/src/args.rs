use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lotto_stats_core::config::ConfigOverrides;
use lotto_stats_core::tests::RandomnessTest;

#[derive(Parser, Debug)]
#[command(
    name = "lotto-stats",
    version,
    about = "Frequency, co-occurrence and randomness analysis of lottery draw history"
)]
pub struct Cli {
    /// Config file (defaults to ./lotto.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Cleaned draw table; overrides config and LOTTO_INPUT
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,
    /// Directory receiving every artifact; overrides config and LOTTO_OUTPUT_DIR
    #[arg(long = "output-dir", global = true)]
    pub output_dir: Option<PathBuf>,
    /// Debug logging unless LOTTO_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clean a raw CSV or spreadsheet export into the draw table
    Ingest(IngestArgs),
    /// Validate and append one new draw
    AddDraw(AddDrawArgs),
    /// Main, bonus and combined number frequencies
    Frequency(FrequencyArgs),
    /// Pair and triplet co-occurrence, with per-number lookups
    Cooccurrence(CooccurrenceArgs),
    /// Randomness tests over the drawn main numbers
    Randomness(RandomnessArgs),
    /// Write the ML-ready membership table
    MlExport,
    /// Per-number logistic baseline and next-draw scores
    Baseline(BaselineArgs),
}

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Raw draw history: CSV, or a workbook (.xlsx, .xls, .ods)
    pub raw: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct AddDrawArgs {
    /// Draw date (YYYY-MM-DD); prompted when omitted
    #[arg(long)]
    pub date: Option<String>,
    /// Seven comma separated main numbers; prompted when omitted
    #[arg(long)]
    pub numbers: Option<String>,
    /// Bonus number; prompted when omitted
    #[arg(long)]
    pub bonus: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct FrequencyArgs {
    /// Also write the combined table
    #[arg(long)]
    pub combined: bool,
}

#[derive(Args, Debug)]
pub struct CooccurrenceArgs {
    /// Answer one lookup for this number and exit
    #[arg(long)]
    pub number: Option<u32>,
    /// List every pair and triplet instead of the best match
    #[arg(long, requires = "number")]
    pub all: bool,
    /// Rows of each ranked table to print
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Args, Debug, Default)]
pub struct RandomnessArgs {
    /// Run once and exit instead of opening the menu
    #[arg(long, value_enum)]
    pub test: Option<TestChoice>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestChoice {
    ChiSquare,
    Runs,
    Serial,
    Entropy,
    All,
}

impl TestChoice {
    pub fn tests(self) -> Vec<RandomnessTest> {
        match self {
            TestChoice::ChiSquare => vec![RandomnessTest::ChiSquare],
            TestChoice::Runs => vec![RandomnessTest::Runs],
            TestChoice::Serial => vec![RandomnessTest::SerialCorrelation],
            TestChoice::Entropy => vec![RandomnessTest::Entropy],
            TestChoice::All => RandomnessTest::ALL.to_vec(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct BaselineArgs {
    /// Previous draws used as features
    #[arg(long)]
    pub lags: Option<usize>,
    /// Trailing rows held out for evaluation
    #[arg(long = "test-size")]
    pub test_size: Option<usize>,
}

impl Cli {
    /// Flag values that take precedence over file and environment settings
    pub fn overrides(&self) -> ConfigOverrides {
        let (n_lags, test_size) = match &self.command {
            Command::Baseline(args) => (args.lags, args.test_size),
            _ => (None, None),
        };
        ConfigOverrides {
            input_path: self.input.clone(),
            output_dir: self.output_dir.clone(),
            n_lags,
            test_size,
        }
    }
}
