use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use store::*;

mod store;

/// Tunable attendance rules. `voucher_days` is a display threshold only; the
/// reward itself lives outside this crate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreakPolicy {
    /// Solved puzzles per calendar day for the day to qualify.
    pub daily_target: u32,
    /// Consecutive non-qualifying days tolerated before the streak resets.
    pub grace_days: u32,
    /// Streak length at which the external reward unlocks.
    pub voucher_days: u32,
}

impl StreakPolicy {
    pub const fn new(daily_target: u32, grace_days: u32, voucher_days: u32) -> Self {
        Self {
            daily_target,
            grace_days,
            voucher_days,
        }
    }

    pub const fn voucher_days_remaining(&self, streak: u32) -> u32 {
        self.voucher_days.saturating_sub(streak)
    }
}

impl Default for StreakPolicy {
    fn default() -> Self {
        Self::new(10, 3, 30)
    }
}

/// Persisted attendance counters. Mutated only by the tracker; all counters
/// stay non-negative and `daily_goal_met_today` implies the daily count
/// reached the target.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Instant of the last reconciliation; day granularity is what matters.
    pub last_played: Option<DateTime<Utc>>,
    /// Puzzles solved since the current calendar day started.
    pub daily_play_count: u32,
    /// Consecutive qualifying days.
    pub attendance_streak: u32,
    /// Calendar days with insufficient play since the last qualifying day.
    pub absence_count: u32,
    pub daily_goal_met_today: bool,
}

impl AttendanceRecord {
    /// Rolls the record forward to `now`. Crossing one or more midnights
    /// charges the gap as absence (unless the quota was already met), forfeits
    /// the streak once the grace window is exhausted, and opens a fresh daily
    /// quota. Same-day calls only refresh `last_played`.
    pub fn reconcile_at(&mut self, now: DateTime<Utc>, policy: &StreakPolicy) {
        if let Some(last) = self.last_played {
            let diff_days = (now.date_naive() - last.date_naive()).num_days();
            if diff_days > 0 {
                self.apply_absences(diff_days as u32, policy);
            }
        }
        self.last_played = Some(now);
    }

    fn apply_absences(&mut self, gap_days: u32, policy: &StreakPolicy) {
        if self.daily_play_count < policy.daily_target {
            self.absence_count = self.absence_count.saturating_add(gap_days);
        }

        if self.absence_count > policy.grace_days {
            self.attendance_streak = 0;
            self.absence_count = 0;
        }

        self.daily_play_count = 0;
        self.daily_goal_met_today = false;
    }

    /// Registers one fully-solved puzzle. The first time the daily quota is
    /// met the streak advances and any accumulated absence is forgiven;
    /// further completions that day only raise the counter.
    pub fn record_completion(&mut self, policy: &StreakPolicy) {
        self.daily_play_count = self.daily_play_count.saturating_add(1);

        if self.daily_play_count >= policy.daily_target && !self.daily_goal_met_today {
            self.daily_goal_met_today = true;
            self.attendance_streak = self.attendance_streak.saturating_add(1);
            self.absence_count = 0;
        }
    }
}

/// Owns the persisted record: loads it once, applies transitions, and writes
/// back after every operation.
#[derive(Clone, Debug)]
pub struct AttendanceTracker<S: StateStore> {
    store: S,
    policy: StreakPolicy,
    record: AttendanceRecord,
}

impl<S: StateStore> AttendanceTracker<S> {
    pub fn new(store: S, policy: StreakPolicy) -> Self {
        let record = AttendanceRecord::load(&store);
        Self {
            store,
            policy,
            record,
        }
    }

    pub fn policy(&self) -> &StreakPolicy {
        &self.policy
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reconcile(&mut self, now: DateTime<Utc>) -> &AttendanceRecord {
        self.record.reconcile_at(now, &self.policy);
        self.record.persist(&mut self.store);
        &self.record
    }

    pub fn record_completion(&mut self) -> &AttendanceRecord {
        self.record.record_completion(&self.policy);
        self.record.persist(&mut self.store);
        &self.record
    }
}
