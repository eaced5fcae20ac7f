//! Application state: owns the quiz core and drives the tap/result loop

use crate::game::{GuessResult, QuizState};
use crate::stats::LifetimeStats;
use crate::storage::Storage;

/// Where the player is within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to tap flag 1, 2 or 3
    Guessing,
    /// Result banner on screen, waiting for continue
    Showing { result: GuessResult, guessed: usize },
    /// All attempts spent; offering a restart
    GameOver,
}

/// Main application state.
///
/// Owns the `QuizState` and exposes one method per key the game reacts to.
/// The opening round is drawn on construction.
pub struct App {
    /// Quiz core (round, score, attempts, over flag)
    pub quiz: QuizState,
    /// Current phase of the tap/result loop
    pub phase: Phase,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Cached lifetime stats for the game-over screen
    pub lifetime: Option<LifetimeStats>,
    /// Session log; `None` when the data directory is unusable
    storage: Option<Storage>,
}

impl App {
    /// Create the app. Stats are optional: the game runs without storage.
    pub fn new(storage: Option<Storage>) -> Self {
        let lifetime = storage.as_ref().and_then(|s| s.lifetime_stats().ok());
        App {
            quiz: QuizState::new(),
            phase: Phase::Guessing,
            should_quit: false,
            lifetime,
            storage,
        }
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a 1/2/3 key. Ignored outside the guessing phase.
    pub fn on_flag_key(&mut self, index: usize) {
        if self.phase != Phase::Guessing {
            return;
        }
        if let Some(result) = self.quiz.submit_guess(index) {
            self.phase = Phase::Showing {
                result,
                guessed: index,
            };
        }
    }

    /// Handle Enter/Space: dismiss the result banner, or restart after
    /// game over. The result banner leads to a new round unless the
    /// session just ended.
    pub fn on_continue(&mut self) {
        match self.phase {
            Phase::Showing { .. } => {
                if self.quiz.is_over() {
                    self.finish_session();
                    self.phase = Phase::GameOver;
                } else {
                    self.quiz.new_round();
                    self.phase = Phase::Guessing;
                }
            }
            Phase::GameOver => {
                self.quiz.reset_session();
                self.phase = Phase::Guessing;
            }
            Phase::Guessing => {}
        }
    }

    /// Record the finished session and refresh the cached lifetime stats.
    fn finish_session(&mut self) {
        if let Some(storage) = &self.storage {
            // A failed write costs the stats entry, never the game
            let _ = storage.record_session(self.quiz.score(), self.quiz.attempts());
            self.lifetime = storage.lifetime_stats().ok();
        }
    }
}
