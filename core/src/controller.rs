use chrono::{DateTime, Utc};

use crate::*;

/// What a submitted selection meant to the running session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The selection matched nothing; expected input, not an error.
    TryAgain,
    WordFound { remaining: usize },
    /// All target words found; the completion is already persisted.
    PuzzleSolved { record: AttendanceRecord },
}

/// Wires selection input to the current puzzle and the attendance tracker.
/// Attendance is reconciled before any play is accepted, and a solved puzzle
/// is recorded before the solve event is returned.
pub struct SessionController<S: StateStore> {
    config: PuzzleConfig,
    fill: FillAlphabet,
    pool: Vec<String>,
    tracker: AttendanceTracker<S>,
    session: Option<PuzzleSession>,
}

impl<S: StateStore> SessionController<S> {
    pub fn new(
        config: PuzzleConfig,
        fill: FillAlphabet,
        pool: Vec<String>,
        store: S,
        policy: StreakPolicy,
    ) -> Self {
        Self {
            config,
            fill,
            pool,
            tracker: AttendanceTracker::new(store, policy),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    pub fn tracker(&self) -> &AttendanceTracker<S> {
        &self.tracker
    }

    pub fn record(&self) -> &AttendanceRecord {
        self.tracker.record()
    }

    /// Reconciles attendance and deals the first puzzle. Selections are
    /// rejected until this has run.
    pub fn start_session(&mut self, now: DateTime<Utc>, seed: u64) -> Result<&PuzzleSession> {
        self.tracker.reconcile(now);
        self.deal(seed)
    }

    /// Replaces the current puzzle with a freshly generated one. The host
    /// decides when, typically after its post-solve delay; nothing is
    /// scheduled here.
    pub fn next_puzzle(&mut self, seed: u64) -> Result<&PuzzleSession> {
        if self.session.is_none() {
            return Err(PuzzleError::SessionNotStarted);
        }
        self.deal(seed)
    }

    pub fn submit_selection(&mut self, cells: &[Coord2]) -> Result<SessionEvent> {
        let session = self
            .session
            .as_mut()
            .ok_or(PuzzleError::SessionNotStarted)?;

        Ok(match session.select(cells)? {
            SelectOutcome::NoMatch => SessionEvent::TryAgain,
            SelectOutcome::Found => SessionEvent::WordFound {
                remaining: session.remaining_count(),
            },
            SelectOutcome::Solved => SessionEvent::PuzzleSolved {
                record: self.tracker.record_completion().clone(),
            },
        })
    }

    fn deal(&mut self, seed: u64) -> Result<&PuzzleSession> {
        let puzzle =
            RandomPuzzleGenerator::new(seed, self.fill).generate(self.config, &self.pool)?;
        Ok(self.session.insert(PuzzleSession::new(puzzle)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 9, 0, 0).unwrap()
    }

    fn controller() -> SessionController<MemoryStore> {
        let pool = ["하늘", "바다", "친구"]
            .iter()
            .map(|&word| word.to_owned())
            .collect();
        SessionController::new(
            PuzzleConfig::new(7, 7, 2),
            FillAlphabet::Hangul,
            pool,
            MemoryStore::new(),
            StreakPolicy::new(2, 3, 30),
        )
    }

    /// Drives the current puzzle to completion by selecting each placement's
    /// own cells, returning the final event.
    fn solve_current(controller: &mut SessionController<MemoryStore>) -> SessionEvent {
        let placements = controller.session().unwrap().puzzle().placements().to_vec();
        let mut last = SessionEvent::TryAgain;
        for placement in placements {
            last = controller.submit_selection(&placement.cells()).unwrap();
        }
        last
    }

    #[test]
    fn selections_are_rejected_before_the_session_starts() {
        let mut controller = controller();
        assert_eq!(
            controller.submit_selection(&[(0, 0)]),
            Err(PuzzleError::SessionNotStarted)
        );
        assert_eq!(
            controller.next_puzzle(1).map(drop),
            Err(PuzzleError::SessionNotStarted)
        );
    }

    #[test]
    fn start_session_reconciles_and_deals_a_puzzle() {
        let mut controller = controller();

        let session = controller.start_session(day(1), 11).unwrap();
        assert_eq!(session.puzzle().word_count(), 2);

        assert_eq!(controller.record().last_played, Some(day(1)));
        assert_eq!(controller.record().daily_play_count, 0);
    }

    #[test]
    fn mismatched_selection_maps_to_try_again() {
        let mut controller = controller();
        controller.start_session(day(1), 11).unwrap();

        // A single cell can never spell a two-syllable word.
        let event = controller.submit_selection(&[(0, 0)]).unwrap();
        assert_eq!(event, SessionEvent::TryAgain);
    }

    #[test]
    fn solving_a_puzzle_records_the_completion() {
        let mut controller = controller();
        controller.start_session(day(1), 11).unwrap();

        let event = solve_current(&mut controller);

        let SessionEvent::PuzzleSolved { record } = event else {
            panic!("expected a solve, got {event:?}");
        };
        assert_eq!(record.daily_play_count, 1);
        assert!(!record.daily_goal_met_today);
        assert!(controller.session().unwrap().is_solved());
    }

    #[test]
    fn meeting_the_daily_target_across_puzzles_advances_the_streak() {
        let mut controller = controller();
        controller.start_session(day(1), 21).unwrap();

        solve_current(&mut controller);
        controller.next_puzzle(22).unwrap();
        let event = solve_current(&mut controller);

        let SessionEvent::PuzzleSolved { record } = event else {
            panic!("expected a solve, got {event:?}");
        };
        assert_eq!(record.daily_play_count, 2);
        assert!(record.daily_goal_met_today);
        assert_eq!(record.attendance_streak, 1);
    }

    #[test]
    fn next_puzzle_reshuffles_the_board() {
        let mut controller = controller();
        controller.start_session(day(1), 1).unwrap();
        let first = controller.session().unwrap().puzzle().clone();

        controller.next_puzzle(2).unwrap();
        let second = controller.session().unwrap().puzzle().clone();

        assert_ne!(first.grid(), second.grid());
        assert!(!controller.session().unwrap().is_solved());
    }

    #[test]
    fn completions_survive_in_the_backing_store() {
        let mut controller = controller();
        controller.start_session(day(1), 5).unwrap();
        solve_current(&mut controller);

        let reloaded = AttendanceRecord::load(controller.tracker().store());
        assert_eq!(reloaded.daily_play_count, 1);
    }
}
