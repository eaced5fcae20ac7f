//! Lifetime statistics aggregated from the stored session log

/// Aggregates over every completed session on this device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifetimeStats {
    /// Completed sessions
    pub sessions_played: u32,
    /// Correct guesses across all sessions
    pub total_score: u32,
    /// Best single-session score
    pub best_score: u32,
    /// Guesses taken across all sessions
    pub total_guesses: u32,
}

impl LifetimeStats {
    /// Fold one completed session into the aggregates.
    pub fn record(&mut self, score: u32, attempts: u32) {
        self.sessions_played += 1;
        self.total_score += score;
        self.total_guesses += attempts;
        if score > self.best_score {
            self.best_score = score;
        }
    }

    /// Average score per session.
    pub fn average_score(&self) -> f64 {
        if self.sessions_played == 0 {
            0.0
        } else {
            f64::from(self.total_score) / f64::from(self.sessions_played)
        }
    }

    /// Fraction of all guesses that were correct, in [0, 1].
    pub fn accuracy(&self) -> f64 {
        if self.total_guesses == 0 {
            0.0
        } else {
            f64::from(self.total_score) / f64::from(self.total_guesses)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = LifetimeStats::default();
        assert_eq!(stats.sessions_played, 0);
        assert_eq!(stats.average_score(), 0.0);
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn test_record_accumulates_sessions() {
        let mut stats = LifetimeStats::default();
        stats.record(5, 8);
        stats.record(7, 8);

        assert_eq!(stats.sessions_played, 2);
        assert_eq!(stats.total_score, 12);
        assert_eq!(stats.best_score, 7);
        assert_eq!(stats.total_guesses, 16);
    }

    #[test]
    fn test_average_and_accuracy() {
        let mut stats = LifetimeStats::default();
        stats.record(4, 8);
        stats.record(8, 8);

        assert_eq!(stats.average_score(), 6.0);
        assert_eq!(stats.accuracy(), 0.75);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut stats = LifetimeStats::default();
        stats.record(6, 8);
        stats.record(2, 8);
        assert_eq!(stats.best_score, 6);
    }
}
