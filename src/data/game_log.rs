//! Historical game logs and the per-athlete repository

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One historical game for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub date: NaiveDate,
    pub or: Option<u32>,   // Offensive rebounds
    pub dr: Option<u32>,   // Defensive rebounds
    pub rebs: Option<u32>, // Total rebounds
    pub opponent: Option<String>,
    pub minutes: Option<f64>,
}

impl GameLogEntry {
    pub fn new(date: NaiveDate, or: Option<u32>, dr: Option<u32>, rebs: Option<u32>) -> Self {
        Self {
            date,
            or,
            dr,
            rebs,
            opponent: None,
            minutes: None,
        }
    }
}

/// Read-only access to per-athlete game logs
///
/// Owned by the data layer and injected into the engine.
pub trait GameLogSource {
    /// Game log for an athlete, ordered by date
    fn get_log(&self, athlete: &str) -> Option<&[GameLogEntry]>;

    /// All athlete names, sorted
    fn athletes(&self) -> Vec<&str>;
}

/// Game logs indexed by athlete name with O(1) lookups
#[derive(Debug, Clone, Default)]
pub struct IndexedGameLogs {
    /// athlete -> games, sorted by date ascending
    logs: HashMap<String, Vec<GameLogEntry>>,
}

impl IndexedGameLogs {
    /// Group (athlete, entry) pairs and sort each log by date
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, GameLogEntry)>,
        S: Into<String>,
    {
        let mut logs: HashMap<String, Vec<GameLogEntry>> = HashMap::new();
        for (athlete, entry) in entries {
            logs.entry(athlete.into()).or_default().push(entry);
        }

        for games in logs.values_mut() {
            games.sort_by_key(|g| g.date);
        }

        Self { logs }
    }

    /// Iterate over all athletes and their logs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GameLogEntry])> {
        self.logs.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of athletes
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl GameLogSource for IndexedGameLogs {
    fn get_log(&self, athlete: &str) -> Option<&[GameLogEntry]> {
        self.logs.get(athlete).map(Vec::as_slice)
    }

    fn athletes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.logs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
