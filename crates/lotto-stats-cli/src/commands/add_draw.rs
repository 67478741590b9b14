use std::io::{BufRead, Write};

use anyhow::Context;
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::draws::{parse_date, parse_entry, write_draws, DrawStore};
use lotto_stats_core::StatsError;

use super::load_store;
use crate::args::AddDrawArgs;
use crate::menu::prompt_line;

fn show_last_draw<W: Write>(store: &DrawStore, out: &mut W) -> std::io::Result<()> {
    let Some(last) = store.last() else {
        return writeln!(out, "No draw data found.");
    };
    writeln!(out, "\nLast draw date: {}", last.date())?;
    writeln!(out, "Numbers: {:?}", last.main_numbers())?;
    match last.bonus() {
        Some(bonus) => writeln!(out, "Bonus: {bonus}\n"),
        None => writeln!(out, "Bonus: none\n"),
    }
}

/// Flag value when given, otherwise a prompted line (empty at end of input)
fn field<R: BufRead, W: Write>(
    given: &Option<String>,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<String> {
    match given {
        Some(value) => Ok(value.clone()),
        None => Ok(prompt_line(input, out, prompt)?.unwrap_or_default()),
    }
}

pub fn run<R: BufRead, W: Write>(
    args: &AddDrawArgs,
    config: &AnalysisConfig,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut store = load_store(config)?;
    show_last_draw(&store, out)?;

    let date_text = field(
        &args.date,
        "Enter draw date (YYYY-MM-DD) or press Enter to exit: ",
        input,
        out,
    )?;
    // Fail before asking for the numbers when the date is already recorded
    if let Ok(date) = parse_date(date_text.trim()) {
        if store.contains_date(date) {
            return Err(StatsError::DuplicateDate(date.to_string()).into());
        }
    }
    let numbers_text = field(
        &args.numbers,
        "Enter 7 main numbers separated by commas (e.g. 5,12,23,34,41,44,49) or press Enter to exit: ",
        input,
        out,
    )?;
    let bonus_text = field(
        &args.bonus,
        "Enter bonus number (1-50) or press Enter to exit: ",
        input,
        out,
    )?;

    let draw = parse_entry(&date_text, &numbers_text, &bonus_text)?;
    let date = draw.date();
    store.append(draw)?;
    write_draws(&store, &config.input_path, &config.columns)
        .with_context(|| format!("writing {}", config.input_path.display()))?;

    tracing::info!(%date, draws = store.len(), "added draw");
    writeln!(out, "Draw for {date} added successfully.")?;
    Ok(())
}
