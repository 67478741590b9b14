use std::fmt::Display;
use std::io::{BufRead, Write};

use lotto_stats_core::analysis::{build_cooccurrence, CooccurrenceTables};
use lotto_stats_core::config::AnalysisConfig;
use lotto_stats_core::export::{write_pairs, write_triplets};

use super::load_store;
use crate::args::CooccurrenceArgs;
use crate::menu::{parse_lookup, prompt_line, Menu};
use crate::render;

const MENU: Menu<'static> = Menu {
    title: "Choose an option:",
    options: &[
        "Find best pair and triplet for a number",
        "Show all pairs and triplets for a number",
    ],
};

fn best_match<W: Write>(
    tables: &CooccurrenceTables,
    number: u32,
    label: impl Display,
    out: &mut W,
) -> std::io::Result<()> {
    let best = tables.best_match(number);
    match best.pair {
        Some(p) => writeln!(
            out,
            "\nMost frequent pair with {label}: ({}, {}) - {} times",
            p.num1, p.num2, p.count
        )?,
        None => writeln!(out, "\nNo pairs found with {label}.")?,
    }
    match best.triplet {
        Some(t) => writeln!(
            out,
            "Most frequent triplet with {label}: ({}, {}, {}) - {} times",
            t.num1, t.num2, t.num3, t.count
        )?,
        None => writeln!(out, "No triplets found with {label}.")?,
    }
    Ok(())
}

fn list_all<W: Write>(
    tables: &CooccurrenceTables,
    number: u32,
    label: impl Display,
    out: &mut W,
) -> std::io::Result<()> {
    let all = tables.list_all(number);
    if all.pairs.is_empty() {
        writeln!(out, "\nNo pairs found with {label}.")?;
    } else {
        writeln!(out, "\nAll pairs with {label} (sorted by frequency):")?;
        writeln!(out, "{}", render::pair_table(&all.pairs))?;
    }
    if all.triplets.is_empty() {
        writeln!(out, "\nNo triplets found with {label}.")?;
    } else {
        writeln!(out, "\nAll triplets with {label} (sorted by frequency):")?;
        writeln!(out, "{}", render::triplet_table(&all.triplets))?;
    }
    Ok(())
}

pub fn run<R: BufRead, W: Write>(
    args: &CooccurrenceArgs,
    config: &AnalysisConfig,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let tables = build_cooccurrence(&store);

    write_pairs(tables.pairs(), &config.artifact_path(&config.artifacts.pairs))?;
    write_triplets(tables.triplets(), &config.artifact_path(&config.artifacts.triplets))?;

    let top = args.top;
    writeln!(out, "Top {top} pairs:")?;
    writeln!(out, "{}", render::pair_table(&tables.pairs()[..top.min(tables.pairs().len())]))?;
    writeln!(out, "\nTop {top} triplets:")?;
    writeln!(
        out,
        "{}",
        render::triplet_table(&tables.triplets()[..top.min(tables.triplets().len())])
    )?;
    writeln!(
        out,
        "\nPair and triplet frequency tables saved to {}",
        config.output_dir.display()
    )?;

    if let Some(number) = args.number {
        if args.all {
            list_all(&tables, number, number, out)?;
        } else {
            best_match(&tables, number, number, out)?;
        }
        return Ok(());
    }

    MENU.run(input, out, |choice, input, out| {
        let Some(line) = prompt_line(input, out, "Enter a number: ")? else {
            return Ok(());
        };
        match parse_lookup(&line) {
            Some(lookup) if choice == 1 => {
                best_match(&tables, lookup.number, &lookup.label, out)?
            }
            Some(lookup) => list_all(&tables, lookup.number, &lookup.label, out)?,
            None => writeln!(out, "Please enter a valid integer.")?,
        }
        Ok(())
    })
}
