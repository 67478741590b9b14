//! Draw records and the validated, date-ordered draw store

mod entry;
mod ingest;
mod io;
mod spreadsheet;

pub use entry::{parse_entry, parse_numbers};
pub use ingest::{ingest_raw, IngestSummary};
pub use io::{load_draws, parse_date, read_draws, write_draws};
pub use spreadsheet::{is_workbook, read_workbook_draws};

use chrono::NaiveDate;

use crate::errors::{StatsError, StatsResult};
use crate::types::{in_range, MAIN_NUMBERS, NUMBER_MAX, NUMBER_MIN};

/// One historical draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    date: NaiveDate,
    main_numbers: [u8; MAIN_NUMBERS],
    bonus: Option<u8>,
}

impl Draw {
    /// Validate and build a draw.
    ///
    /// Main numbers must lie in 1..=50 and be pairwise distinct; the bonus,
    /// when present, must lie in 1..=50 and may repeat a main number.
    pub fn new(
        date: NaiveDate,
        main_numbers: [u8; MAIN_NUMBERS],
        bonus: Option<u8>,
    ) -> StatsResult<Self> {
        let invalid = |message: String| StatsError::InvalidDraw {
            date: date.to_string(),
            message,
        };

        for &n in &main_numbers {
            if !in_range(n) {
                return Err(invalid(format!(
                    "main number {n} outside {NUMBER_MIN}..={NUMBER_MAX}"
                )));
            }
        }
        let mut sorted = main_numbers;
        sorted.sort_unstable();
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(invalid(format!("main number {} appears twice", w[0])));
        }
        if let Some(b) = bonus {
            if !in_range(b) {
                return Err(invalid(format!(
                    "bonus number {b} outside {NUMBER_MIN}..={NUMBER_MAX}"
                )));
            }
            if main_numbers.contains(&b) {
                tracing::debug!(%date, bonus = b, "bonus number repeats a main number");
            }
        }

        Ok(Self {
            date,
            main_numbers,
            bonus,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Main numbers in their recorded order
    pub fn main_numbers(&self) -> &[u8; MAIN_NUMBERS] {
        &self.main_numbers
    }

    /// Main numbers sorted ascending
    pub fn sorted_main(&self) -> [u8; MAIN_NUMBERS] {
        let mut sorted = self.main_numbers;
        sorted.sort_unstable();
        sorted
    }

    pub fn bonus(&self) -> Option<u8> {
        self.bonus
    }
}

/// Historical draws ordered by date ascending with unique dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStore {
    draws: Vec<Draw>,
}

impl DrawStore {
    /// Sort by date, drop exact duplicate rows, reject conflicting dates
    pub fn new(mut draws: Vec<Draw>) -> StatsResult<Self> {
        draws.sort_by_key(|d| d.date);
        let before = draws.len();
        draws.dedup();
        if draws.len() != before {
            tracing::debug!(dropped = before - draws.len(), "dropped duplicate draw rows");
        }
        if let Some(w) = draws.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(StatsError::DuplicateDate(w[0].date.to_string()));
        }
        Ok(Self { draws })
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Draw> {
        self.draws.iter()
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Most recent draw
    pub fn last(&self) -> Option<&Draw> {
        self.draws.last()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.draws.binary_search_by_key(&date, |d| d.date).is_ok()
    }

    /// Insert a new draw, keeping date order
    pub fn append(&mut self, draw: Draw) -> StatsResult<()> {
        match self.draws.binary_search_by_key(&draw.date, |d| d.date) {
            Ok(_) => Err(StatsError::DuplicateDate(draw.date.to_string())),
            Err(pos) => {
                self.draws.insert(pos, draw);
                Ok(())
            }
        }
    }

    /// All main numbers, draw by draw, in recorded order
    pub fn flattened_main(&self) -> Vec<u8> {
        self.draws
            .iter()
            .flat_map(|d| d.main_numbers.iter().copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a DrawStore {
    type Item = &'a Draw;
    type IntoIter = std::slice::Iter<'a, Draw>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}
