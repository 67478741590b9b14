//! Cleaning a raw draw-history export into the canonical draw table

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use super::{is_workbook, read_draws, read_workbook_draws, DrawStore};
use crate::config::AnalysisConfig;
use crate::errors::StatsResult;

/// What the cleaning pass did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows_read: usize,
    pub duplicates_dropped: usize,
    pub draws: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Read a raw draw history and clean it.
///
/// Workbooks (`.xlsx`, `.xls`, `.ods`, ...) are read from their first
/// worksheet; any other file is read as CSV. Headers are matched after trimming and lowercasing, the bonus column may
/// be absent, rows are sorted by date and exact duplicates dropped. The
/// caller decides where the cleaned store is written.
pub fn ingest_raw(raw_path: &Path, config: &AnalysisConfig) -> StatsResult<(DrawStore, IngestSummary)> {
    let rows = if is_workbook(raw_path) {
        read_workbook_draws(raw_path, &config.columns)?
    } else {
        read_draws(File::open(raw_path)?, &config.columns)?
    };
    let rows_read = rows.len();
    let store = DrawStore::new(rows)?;

    let summary = IngestSummary {
        rows_read,
        duplicates_dropped: rows_read - store.len(),
        draws: store.len(),
        first_date: store.draws().first().map(|d| d.date()),
        last_date: store.last().map(|d| d.date()),
    };
    tracing::info!(
        raw = %raw_path.display(),
        rows = summary.rows_read,
        dropped = summary.duplicates_dropped,
        "cleaned raw draw table"
    );
    Ok((store, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatsError;
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
    use std::io::Write;

    fn raw_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_ingest_normalizes_and_dedups() {
        let raw = raw_file(
            " Draw_Date ,N1,N2,N3,N4,N5,N6,N7,Bonus\n\
             2024-01-09 00:00:00,10,20,30,40,41,42,43,5\n\
             2024-01-02 00:00:00,1,2,3,4,5,6,7,9\n\
             2024-01-09 00:00:00,10,20,30,40,41,42,43,5\n",
        );
        let (store, summary) = ingest_raw(raw.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.duplicates_dropped, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2024, 1, 9));
    }

    #[test]
    fn test_ingest_without_bonus_column() {
        let raw = raw_file("draw_date,n1,n2,n3,n4,n5,n6,n7\n2024-01-02,1,2,3,4,5,6,7\n");
        let (store, _) = ingest_raw(raw.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(store.draws()[0].bonus(), None);
    }

    fn raw_workbook(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("history.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");

        let header = ["Draw_Date", "N1", "N2", "N3", "N4", "N5", "N6", "N7", "Bonus"];
        for (col, name) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        let rows: [(&str, [f64; 7], Option<f64>); 3] = [
            ("2024-01-09", [10.0, 20.0, 30.0, 40.0, 41.0, 42.0, 43.0], None),
            ("2024-01-02", [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], Some(9.0)),
            ("2024-01-09", [10.0, 20.0, 30.0, 40.0, 41.0, 42.0, 43.0], None),
        ];
        for (i, (date, numbers, bonus)) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            if i == 1 {
                let date = ExcelDateTime::from_ymd(2024, 1, 2).unwrap();
                sheet
                    .write_datetime_with_format(row, 0, &date, &date_format)
                    .unwrap();
            } else {
                sheet.write_string(row, 0, *date).unwrap();
            }
            for (j, n) in numbers.iter().enumerate() {
                sheet.write_number(row, j as u16 + 1, *n).unwrap();
            }
            if let Some(b) = bonus {
                sheet.write_number(row, 8, *b).unwrap();
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_ingest_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = raw_workbook(dir.path());
        let (store, summary) = ingest_raw(&path, &AnalysisConfig::default()).unwrap();

        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.duplicates_dropped, 1);
        assert_eq!(store.len(), 2);
        let first = &store.draws()[0];
        assert_eq!(first.date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(first.main_numbers(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(first.bonus(), Some(9));
        assert_eq!(store.draws()[1].bonus(), None);
    }

    #[test]
    fn test_workbook_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in ["draw_date", "n1", "n2"].iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        workbook.save(&path).unwrap();

        let result = ingest_raw(&path, &AnalysisConfig::default());
        assert!(matches!(result, Err(StatsError::MissingColumn(c)) if c == "n3"));
    }

    #[test]
    fn test_ingest_missing_required_column() {
        let raw = raw_file("date,n1,n2,n3,n4,n5,n6,n7\n2024-01-02,1,2,3,4,5,6,7\n");
        let result = ingest_raw(raw.path(), &AnalysisConfig::default());
        assert!(matches!(result, Err(StatsError::MissingColumn(c)) if c == "draw_date"));
    }
}
