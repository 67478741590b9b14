//! Reading and writing the cleaned draw table

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Draw, DrawStore};
use crate::config::{AnalysisConfig, ColumnLayout};
use crate::errors::{StatsError, StatsResult};
use crate::types::MAIN_NUMBERS;

/// Column positions resolved against a header row
pub(super) struct ColumnIndex {
    date: usize,
    main: [usize; MAIN_NUMBERS],
    bonus: Option<usize>,
}

impl ColumnIndex {
    /// Match headers case-insensitively after trimming. The bonus column
    /// is optional; every other column is required.
    pub(super) fn resolve<'h>(
        headers: impl IntoIterator<Item = &'h str>,
        layout: &ColumnLayout,
    ) -> StatsResult<Self> {
        let normalized: Vec<String> = headers.into_iter().map(normalize_header).collect();
        let find = |name: &str| {
            let wanted = normalize_header(name);
            normalized.iter().position(|h| *h == wanted)
        };

        let date = find(&layout.date).ok_or_else(|| StatsError::MissingColumn(layout.date.clone()))?;
        let mut main = [0usize; MAIN_NUMBERS];
        for (slot, name) in main.iter_mut().zip(&layout.main) {
            *slot = find(name).ok_or_else(|| StatsError::MissingColumn(name.clone()))?;
        }
        let bonus = find(&layout.bonus);

        Ok(Self { date, main, bonus })
    }

    /// Build one draw from a row, `cell(i)` giving the text of column `i`
    pub(super) fn draw<'a>(&self, cell: impl Fn(usize) -> &'a str) -> StatsResult<Draw> {
        let date = parse_date(cell(self.date))?;
        let mut main = [0u8; MAIN_NUMBERS];
        for (slot, &idx) in main.iter_mut().zip(&self.main) {
            *slot = parse_cell_number(cell(idx), date)?;
        }
        let bonus = match self.bonus.map(&cell) {
            Some(text) if !text.trim().is_empty() => Some(parse_cell_number(text, date)?),
            _ => None,
        };
        Draw::new(date, main, bonus)
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Parse a draw date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and `YYYY/MM/DD`.
pub fn parse_date(text: &str) -> StatsResult<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .map_err(|_| StatsError::InvalidDate(text.to_string()))
}

/// Parse a numeric cell. Integral floats such as `"12.0"` are accepted.
fn parse_cell_number(text: &str, date: NaiveDate) -> StatsResult<u8> {
    let text = text.trim();
    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(_) => match text.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 && f.is_finite() => f as i64,
            _ => return Err(StatsError::InvalidNumber(text.to_string())),
        },
    };
    u8::try_from(value).map_err(|_| StatsError::InvalidDraw {
        date: date.to_string(),
        message: format!("number {value} out of range"),
    })
}

/// Read draws from any CSV source using `layout` to locate columns.
///
/// Rows are returned in file order and validated individually; ordering
/// and date uniqueness are enforced by [`DrawStore::new`].
pub fn read_draws<R: Read>(reader: R, layout: &ColumnLayout) -> StatsResult<Vec<Draw>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = ColumnIndex::resolve(rdr.headers()?.iter(), layout)?;

    let mut draws = Vec::new();
    for record in rdr.records() {
        let record = record?;
        draws.push(columns.draw(|i| record.get(i).unwrap_or(""))?);
    }
    Ok(draws)
}

/// Load the cleaned draw table named by the configuration
pub fn load_draws(config: &AnalysisConfig) -> StatsResult<DrawStore> {
    let path = &config.input_path;
    let file = File::open(path).map_err(|e| {
        StatsError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open draw table {}: {e}", path.display()),
        ))
    })?;
    let store = DrawStore::new(read_draws(file, &config.columns)?)?;
    tracing::info!(draws = store.len(), path = %path.display(), "loaded draw table");
    Ok(store)
}

/// Write the store in the canonical `date, n1..n7, bonus` layout
pub fn write_draws(store: &DrawStore, path: &Path, layout: &ColumnLayout) -> StatsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(MAIN_NUMBERS + 2);
    header.push(layout.date.as_str());
    header.extend(layout.main.iter().map(String::as_str));
    header.push(layout.bonus.as_str());
    wtr.write_record(&header)?;

    for draw in store {
        let mut row = Vec::with_capacity(MAIN_NUMBERS + 2);
        row.push(draw.date().format("%Y-%m-%d").to_string());
        row.extend(draw.main_numbers().iter().map(|n| n.to_string()));
        row.push(draw.bonus().map(|b| b.to_string()).unwrap_or_default());
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    tracing::info!(draws = store.len(), path = %path.display(), "wrote draw table");
    Ok(())
}
