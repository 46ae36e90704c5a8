//! CSV box-score loading
//!
//! Expected columns: `player`, `date`, `or`, `dr`, `rebs`; `opp` and `mins`
//! are read when present. Empty cells become `None`.

use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::game_log::{GameLogEntry, IndexedGameLogs};

/// Upper bound for a single-game rebound count
const MAX_COUNT: u32 = 100;

/// Date formats accepted in the `date` column
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"];

/// Box-score loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read CSV: {0}")]
    Polars(#[from] PolarsError),

    #[error("Invalid date {value:?} on row {row}")]
    InvalidDate { row: usize, value: String },

    #[error("Missing date on row {row}")]
    MissingDate { row: usize },

    #[error("Invalid count {value:?} in column `{column}` on row {row}")]
    InvalidCount {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl IndexedGameLogs {
    /// Load and index all box-score rows from CSV
    pub fn load<P: AsRef<Path>>(csv_path: P) -> Result<Self, LoadError> {
        let csv_path = csv_path.as_ref();
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(csv_path.to_path_buf()))?
            .finish()?;

        debug!("Read {} box-score rows from {:?}", df.height(), csv_path);

        let logs = Self::from_entries(dataframe_to_entries(&df)?);
        info!("Indexed game logs for {} athletes", logs.len());
        Ok(logs)
    }
}

/// Convert DataFrame rows to (athlete, entry) pairs
fn dataframe_to_entries(df: &DataFrame) -> Result<Vec<(String, GameLogEntry)>, LoadError> {
    let player_col = string_column(df, "player")?;
    let date_col = string_column(df, "date")?;
    let or_col = string_column(df, "or")?;
    let dr_col = string_column(df, "dr")?;
    let rebs_col = string_column(df, "rebs")?;
    let opp_col = df.column("opp").ok().map(|_| string_column(df, "opp")).transpose()?;
    let mins_col = df.column("mins").ok().map(|_| float_column(df, "mins")).transpose()?;

    let mut entries = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for i in 0..df.height() {
        let Some(player) = player_col.get(i).map(str::trim).filter(|p| !p.is_empty()) else {
            skipped += 1;
            continue;
        };

        let raw_date = date_col.get(i).ok_or(LoadError::MissingDate { row: i })?;
        let date = parse_date(raw_date).ok_or_else(|| LoadError::InvalidDate {
            row: i,
            value: raw_date.to_string(),
        })?;

        let entry = GameLogEntry {
            date,
            or: parse_count(or_col.get(i), i, "or")?,
            dr: parse_count(dr_col.get(i), i, "dr")?,
            rebs: parse_count(rebs_col.get(i), i, "rebs")?,
            opponent: opp_col
                .as_ref()
                .and_then(|c| c.get(i))
                .map(|s| s.to_string()),
            minutes: mins_col.as_ref().and_then(|c| c.get(i)),
        };
        entries.push((player.to_string(), entry));
    }

    if skipped > 0 {
        warn!("Skipped {} rows without a player name", skipped);
    }

    Ok(entries)
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked, PolarsError> {
    Ok(df.column(name)?.cast(&DataType::String)?.str()?.clone())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, PolarsError> {
    Ok(df.column(name)?.cast(&DataType::Float64)?.f64()?.clone())
}

/// Count cell to a value; only empty cells are `None`
///
/// Accepts whole numbers written as floats ("4.0") in `0..=MAX_COUNT`.
fn parse_count(
    raw: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Option<u32>, LoadError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let invalid = || LoadError::InvalidCount {
        row,
        column,
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_COUNT as f64 {
        return Err(invalid());
    }
    Ok(Some(value as u32))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    // Timestamps like "2024-01-15 00:00:00" keep only the date part
    let raw = raw.split_whitespace().next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameLogSource;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_groups_by_player() {
        let file = write_csv(
            "player,date,opp,mins,or,dr,rebs\n\
             Big Man,2024-01-03,BOS,31.5,4,7,11\n\
             Big Man,2024-01-01,NYK,28.0,3,6,9\n\
             Wing,2024-01-02,MIA,35.2,1,4,5\n\
             Big Man,2024-01-05,LAL,33.1,5,8,13\n",
        );

        let logs = IndexedGameLogs::load(file.path()).unwrap();
        assert_eq!(logs.len(), 2);

        let big = logs.get_log("Big Man").unwrap();
        assert_eq!(big.len(), 3);
        assert_eq!(big[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(big[0].or, Some(3));
        assert_eq!(big[0].opponent.as_deref(), Some("NYK"));
        assert_eq!(big[2].rebs, Some(13));
        assert!((big[1].minutes.unwrap() - 31.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_cells_are_none() {
        let file = write_csv(
            "player,date,or,dr,rebs\n\
             Center,2024-02-01,,6,\n\
             Center,2024-02-02,2,,8\n",
        );

        let logs = IndexedGameLogs::load(file.path()).unwrap();
        let center = logs.get_log("Center").unwrap();

        assert_eq!(center[0].or, None);
        assert_eq!(center[0].dr, Some(6));
        assert_eq!(center[0].rebs, None);
        assert_eq!(center[1].dr, None);
        assert_eq!(center[0].opponent, None);
        assert_eq!(center[0].minutes, None);
    }

    #[test]
    fn test_compact_dates() {
        let file = write_csv("player,date,or,dr,rebs\nCenter,20240115,1,2,3\n");
        let logs = IndexedGameLogs::load(file.path()).unwrap();
        assert_eq!(
            logs.get_log("Center").unwrap()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_invalid_date_is_error() {
        let file = write_csv("player,date,or,dr,rebs\nCenter,yesterday,1,2,3\n");
        assert!(matches!(
            IndexedGameLogs::load(file.path()),
            Err(LoadError::InvalidDate { row: 0, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(IndexedGameLogs::load("does/not/exist.csv").is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let want = NaiveDate::from_ymd_opt(2023, 11, 7);
        assert_eq!(parse_date("2023-11-07"), want);
        assert_eq!(parse_date("20231107"), want);
        assert_eq!(parse_date("11/07/2023"), want);
        assert_eq!(parse_date("2023-11-07 00:00:00"), want);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("4"), 0, "or").unwrap(), Some(4));
        assert_eq!(parse_count(Some("4.0"), 0, "or").unwrap(), Some(4));
        assert_eq!(parse_count(Some(" "), 0, "or").unwrap(), None);
        assert_eq!(parse_count(None, 0, "or").unwrap(), None);
        assert!(parse_count(Some("NaN"), 0, "or").is_err());
        assert!(parse_count(Some("lots"), 0, "or").is_err());
    }

    #[test]
    fn test_fractional_count_is_error() {
        let file = write_csv("player,date,or,dr,rebs\nCenter,2024-01-01,2.5,4,6\n");
        match IndexedGameLogs::load(file.path()) {
            Err(LoadError::InvalidCount { row, column, value }) => {
                assert_eq!(row, 0);
                assert_eq!(column, "or");
                assert_eq!(value, "2.5");
            }
            other => panic!("expected InvalidCount, got {:?}", other.map(|l| l.len())),
        }
    }

    #[test]
    fn test_negative_count_is_error() {
        let file = write_csv(
            "player,date,or,dr,rebs\n\
             Center,2024-01-01,1,4,5\n\
             Center,2024-01-02,2,3,-3\n",
        );
        assert!(matches!(
            IndexedGameLogs::load(file.path()),
            Err(LoadError::InvalidCount { row: 1, column: "rebs", .. })
        ));
    }

    #[test]
    fn test_oversized_count_is_error() {
        let file = write_csv("player,date,or,dr,rebs\nCenter,2024-01-01,2,1e12,6\n");
        assert!(matches!(
            IndexedGameLogs::load(file.path()),
            Err(LoadError::InvalidCount { row: 0, column: "dr", .. })
        ));
    }
}
