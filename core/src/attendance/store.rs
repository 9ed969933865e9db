use chrono::{DateTime, Utc};
use hashbrown::HashMap;

use super::AttendanceRecord;

/// Named string-valued entries, the only persistence surface the crate
/// needs. A browser host backs this with local storage; tests use
/// [`MemoryStore`].
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub mod store_keys {
    pub const LAST_PLAYED: &str = "geulja:attendance:last-played";
    pub const DAILY_COUNT: &str = "geulja:attendance:daily-count";
    pub const STREAK: &str = "geulja:attendance:streak";
    pub const ABSENCE: &str = "geulja:attendance:absence";
    pub const GOAL_MET: &str = "geulja:attendance:goal-met";
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

impl AttendanceRecord {
    /// Loads the persisted record. Missing or corrupt entries default to
    /// zero/false/absent; corruption is never fatal.
    pub fn load(store: &impl StateStore) -> Self {
        Self {
            last_played: store.get(store_keys::LAST_PLAYED).and_then(|raw| parse_instant(&raw)),
            daily_play_count: load_counter(store, store_keys::DAILY_COUNT),
            attendance_streak: load_counter(store, store_keys::STREAK),
            absence_count: load_counter(store, store_keys::ABSENCE),
            daily_goal_met_today: store.get(store_keys::GOAL_MET).is_some_and(|raw| raw == "true"),
        }
    }

    pub fn persist(&self, store: &mut impl StateStore) {
        if let Some(last) = self.last_played {
            store.set(store_keys::LAST_PLAYED, &last.to_rfc3339());
        }
        store.set(store_keys::DAILY_COUNT, &self.daily_play_count.to_string());
        store.set(store_keys::STREAK, &self.attendance_streak.to_string());
        store.set(store_keys::ABSENCE, &self.absence_count.to_string());
        store.set(
            store_keys::GOAL_MET,
            if self.daily_goal_met_today {
                "true"
            } else {
                "false"
            },
        );
    }
}

fn load_counter(store: &impl StateStore, key: &str) -> u32 {
    let Some(raw) = store.get(key) else {
        return 0;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("Corrupt counter {key}={raw:?}, defaulting to 0");
            0
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(err) => {
            log::warn!("Corrupt last-played instant {raw:?}: {err}");
            None
        }
    }
}
