//! CSV artifact writers
//!
//! Every writer creates the parent directory, writes the header even for an
//! empty table, and overwrites any existing file.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::draws::DrawStore;
use crate::errors::StatsResult;
use crate::models::membership_matrix;
use crate::types::{FrequencyTable, PairCount, TripletCount, NUMBER_COUNT};

fn create_writer(path: &Path) -> StatsResult<csv::Writer<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    // Headers are written by hand so empty tables still carry them
    Ok(csv::WriterBuilder::new().has_headers(false).from_path(path)?)
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> StatsResult<()> {
    let mut wtr = create_writer(path)?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    tracing::info!(rows = rows.len(), path = %path.display(), "wrote artifact");
    Ok(())
}

/// `number,count` rows in ranked order
pub fn write_frequency_table(table: &FrequencyTable, path: &Path) -> StatsResult<()> {
    write_rows(path, &["number", "count"], table.rows())
}

/// `num1,num2,count` rows in ranked order
pub fn write_pairs(pairs: &[PairCount], path: &Path) -> StatsResult<()> {
    write_rows(path, &["num1", "num2", "count"], pairs)
}

/// `num1,num2,num3,count` rows in ranked order
pub fn write_triplets(triplets: &[TripletCount], path: &Path) -> StatsResult<()> {
    write_rows(path, &["num1", "num2", "num3", "count"], triplets)
}

/// ML-ready table: `num_1..num_50` membership flags, then `draw_date, bonus`
pub fn write_membership(store: &DrawStore, path: &Path) -> StatsResult<()> {
    let mut wtr = create_writer(path)?;

    let mut header: Vec<String> = (1..=NUMBER_COUNT).map(|n| format!("num_{n}")).collect();
    header.push("draw_date".to_string());
    header.push("bonus".to_string());
    wtr.write_record(&header)?;

    for (draw, flags) in store.iter().zip(membership_matrix(store)) {
        let mut row: Vec<String> = flags.iter().map(|f| f.to_string()).collect();
        row.push(draw.date().format("%Y-%m-%d").to_string());
        row.push(draw.bonus().map(|b| b.to_string()).unwrap_or_default());
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    tracing::info!(rows = store.len(), path = %path.display(), "wrote ML-ready table");
    Ok(())
}
