//! Raw draw history stored in a spreadsheet workbook

use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};

use super::io::ColumnIndex;
use super::Draw;
use crate::config::ColumnLayout;
use crate::errors::{StatsError, StatsResult};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether `path` names a workbook rather than delimited text
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| WORKBOOK_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Cell text as the CSV reader would have seen it.
///
/// Date cells become `YYYY-MM-DD`; numeric cells use their shortest form so
/// `7.0` reads as `7`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Read draws from the first worksheet of a workbook.
///
/// The first row holds the headers and is resolved exactly like a CSV
/// header; fully blank rows are skipped.
pub fn read_workbook_draws(path: &Path, layout: &ColumnLayout) -> StatsResult<Vec<Draw>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        StatsError::InsufficientDataMsg(format!("workbook {} has no worksheets", path.display()))
    })??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or(StatsError::EmptyInput { field: "worksheet" })?
        .iter()
        .map(cell_text)
        .collect();
    let columns = ColumnIndex::resolve(header.iter().map(String::as_str), layout)?;

    let mut draws = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        draws.push(columns.draw(|i| cells.get(i).map(String::as_str).unwrap_or(""))?);
    }
    tracing::debug!(rows = draws.len(), path = %path.display(), "read workbook rows");
    Ok(draws)
}
