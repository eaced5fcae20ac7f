//! Quiz logic: rounds, guesses, session scoring

pub mod catalog;

use rand::prelude::*;

/// Number of flag options shown per round.
pub const OPTIONS_PER_ROUND: usize = 3;

/// Guesses allowed before the session ends.
pub const MAX_ATTEMPTS: u32 = 8;

/// One round: three candidate countries and which of them is the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    options: Vec<&'static str>,
    correct_index: usize,
}

impl Round {
    /// Draw a round using a specific RNG (for testing/seeding).
    ///
    /// Shuffles the catalog, keeps the first three entries as options, and
    /// picks the correct one uniformly among them.
    pub fn draw_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut pool: Vec<&'static str> = catalog::COUNTRIES.to_vec();
        pool.shuffle(rng);
        pool.truncate(OPTIONS_PER_ROUND);
        let correct_index = rng.random_range(0..OPTIONS_PER_ROUND);
        Round {
            options: pool,
            correct_index,
        }
    }

    /// The three countries on offer, in display order.
    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    /// Index of the correct option, always in range.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Name of the correct country (the prompt text).
    pub fn correct_country(&self) -> &'static str {
        self.options[self.correct_index]
    }
}

/// Outcome of a single guess, handed to the presentation layer for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub correct: bool,
    /// The answer for this round, shown when the guess was wrong.
    pub correct_country: &'static str,
}

/// The quiz core: the current round plus the running session counters.
///
/// Owned by the presentation layer as an explicit mutable state object.
/// All updates go through methods that return result values; nothing is
/// observed implicitly.
pub struct QuizState {
    round: Round,
    score: u32,
    attempts: u32,
    is_over: bool,
}

impl QuizState {
    /// Start a fresh session with the opening round already drawn.
    pub fn new() -> Self {
        Self::new_with_rng(&mut rand::rng())
    }

    /// Start a fresh session using a specific RNG (for testing/seeding).
    pub fn new_with_rng<R: Rng>(rng: &mut R) -> Self {
        QuizState {
            round: Round::draw_with_rng(rng),
            score: 0,
            attempts: 0,
            is_over: false,
        }
    }

    /// Replace the current round with a newly drawn one.
    pub fn new_round(&mut self) {
        self.new_round_with_rng(&mut rand::rng());
    }

    /// Replace the current round using a specific RNG.
    pub fn new_round_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.round = Round::draw_with_rng(rng);
    }

    /// Judge the tapped option against the current round.
    ///
    /// Returns `None` when the session is already over (the guess is
    /// ignored). Otherwise increments `attempts`, increments `score` on a
    /// match, and ends the session once the attempt cap is reached.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..OPTIONS_PER_ROUND`. The caller binds
    /// exactly three targets to the options, so an out-of-range index is a
    /// caller bug, not a runtime condition.
    pub fn submit_guess(&mut self, index: usize) -> Option<GuessResult> {
        assert!(
            index < OPTIONS_PER_ROUND,
            "guess index {} out of range",
            index
        );
        if self.is_over {
            return None;
        }

        let correct = index == self.round.correct_index;
        if correct {
            self.score += 1;
        }
        self.attempts += 1;
        if self.attempts == MAX_ATTEMPTS {
            self.is_over = true;
        }

        Some(GuessResult {
            correct,
            correct_country: self.round.correct_country(),
        })
    }

    /// Zero the counters, reopen the session, and draw a new round.
    pub fn reset_session(&mut self) {
        self.reset_session_with_rng(&mut rand::rng());
    }

    /// Reset using a specific RNG.
    pub fn reset_session_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.attempts = 0;
        self.is_over = false;
        self.new_round_with_rng(rng);
    }

    /// The round currently on screen.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Correct guesses this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Guesses taken this session, capped at `MAX_ATTEMPTS`.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the session has spent all its attempts.
    pub fn is_over(&self) -> bool {
        self.is_over
    }
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_has_three_distinct_options() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let round = Round::draw_with_rng(&mut rng);
            assert_eq!(round.options().len(), OPTIONS_PER_ROUND);

            let mut unique = round.options().to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), OPTIONS_PER_ROUND);

            assert!(round.correct_index() < OPTIONS_PER_ROUND);
        }
    }

    #[test]
    fn test_round_options_come_from_catalog() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let round = Round::draw_with_rng(&mut rng);
            for option in round.options() {
                assert!(catalog::COUNTRIES.contains(option));
            }
        }
    }

    #[test]
    fn test_seeded_rounds_are_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let round1 = Round::draw_with_rng(&mut rng1);
        let round2 = Round::draw_with_rng(&mut rng2);

        assert_eq!(round1, round2);
    }

    #[test]
    fn test_session_ends_after_eight_guesses() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = QuizState::new_with_rng(&mut rng);

        for n in 1..=MAX_ATTEMPTS {
            assert!(!quiz.is_over());
            assert!(quiz.submit_guess(0).is_some());
            assert_eq!(quiz.attempts(), n);
            if !quiz.is_over() {
                quiz.new_round_with_rng(&mut rng);
            }
        }

        assert!(quiz.is_over());
        assert_eq!(quiz.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_guess_ignored_when_session_over() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut quiz = QuizState::new_with_rng(&mut rng);
        for _ in 0..MAX_ATTEMPTS {
            quiz.submit_guess(0);
        }
        assert!(quiz.is_over());

        let score = quiz.score();
        assert!(quiz.submit_guess(1).is_none());
        assert_eq!(quiz.score(), score);
        assert_eq!(quiz.attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_reset_clears_session() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut quiz = QuizState::new_with_rng(&mut rng);
        for _ in 0..MAX_ATTEMPTS {
            quiz.submit_guess(quiz.round().correct_index());
        }
        assert!(quiz.is_over());

        quiz.reset_session_with_rng(&mut rng);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.attempts(), 0);
        assert!(!quiz.is_over());
    }

    #[test]
    fn test_all_correct_guesses_score_eight() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut quiz = QuizState::new_with_rng(&mut rng);

        for _ in 0..MAX_ATTEMPTS {
            let result = quiz
                .submit_guess(quiz.round().correct_index())
                .expect("session not over yet");
            assert!(result.correct);
            if !quiz.is_over() {
                quiz.new_round_with_rng(&mut rng);
            }
        }

        assert_eq!(quiz.score(), MAX_ATTEMPTS);
        assert_eq!(quiz.attempts(), MAX_ATTEMPTS);
        assert!(quiz.is_over());
    }

    #[test]
    fn test_wrong_guess_names_the_answer() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut quiz = QuizState::new_with_rng(&mut rng);

        let wrong = (quiz.round().correct_index() + 1) % OPTIONS_PER_ROUND;
        let expected = quiz.round().correct_country();

        let result = quiz.submit_guess(wrong).expect("fresh session");
        assert!(!result.correct);
        assert_eq!(result.correct_country, expected);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.attempts(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_guess_panics() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut quiz = QuizState::new_with_rng(&mut rng);
        quiz.submit_guess(OPTIONS_PER_ROUND);
    }
}
