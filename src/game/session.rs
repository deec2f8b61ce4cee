//! Session controller
//!
//! Drives the whole play-through: owns the current round, the rounds-won
//! count, the accumulated penalty and the wall clock. All transitions happen
//! synchronously in response to a key; the host's periodic redraw only
//! re-reads `elapsed_seconds` and never touches guess state, so timer ticks
//! and key events cannot interfere.
//!
//! Time is passed in explicitly (`Instant` parameters) so the controller
//! never reads the clock itself; that keeps every transition deterministic
//! under test.

use super::config::GameConfig;
use super::keyboard::keyboard_knowledge;
use super::round::{Outcome, Round, SubmitResult};
use super::target::TargetSource;
use crate::core::Clue;
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A single input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An alphabetic key, `a`-`z` (case-insensitive)
    Letter(char),
    /// Backspace
    Delete,
    /// Enter: submit a guess, start the game, or advance to the next round
    Submit,
}

/// Host-supplied gating flags
///
/// While the overlay (about screen) is up all input is ignored. Before the
/// game has started only the submit key is meaningful, and it requests game
/// start rather than submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGate {
    pub started: bool,
    pub overlay: bool,
}

/// What the session did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dropped by a gate or a terminal state
    Ignored,
    /// Submit pressed before the game started; the host should start the
    /// clock and flip its started flag
    StartRequested,
    /// The key was applied to round or session state
    Handled,
}

/// Cross-round game state
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    dictionary: Dictionary,
    targets: TargetSource,
    round: Round,
    rounds_won: usize,
    penalty: Duration,
    started_at: Option<Instant>,
    final_elapsed: Option<f64>,
    hint: String,
}

impl Session {
    /// Create a session and draw the first target
    #[must_use]
    pub fn new(config: GameConfig, dictionary: Dictionary, mut targets: TargetSource) -> Self {
        let round = Round::new(targets.pick());
        Self {
            config,
            dictionary,
            targets,
            round,
            rounds_won: 0,
            penalty: Duration::ZERO,
            started_at: None,
            final_elapsed: None,
            hint: "Make your first guess!".to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The round currently being played
    #[inline]
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current hint or message line, possibly empty
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn rounds_won(&self) -> usize {
        self.rounds_won
    }

    /// Penalty accumulated so far
    #[inline]
    #[must_use]
    pub fn penalty(&self) -> Duration {
        self.penalty
    }

    /// The reproducibility seed, if one was supplied
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.targets.seed()
    }

    /// Whether every round has been won
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rounds_won == self.config.total_rounds
    }

    /// Whether a forfeit is currently allowed
    #[must_use]
    pub fn can_give_up(&self) -> bool {
        self.round.outcome() == Outcome::Playing && !self.round.rows().is_empty()
    }

    /// Best known clue per letter over the current round's locked-in rows
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<char, Clue> {
        keyboard_knowledge(self.round.rows())
    }

    /// Start the wall clock; later calls are no-ops
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Displayed score in seconds: wall time since start plus penalties
    ///
    /// 0.0 before the clock starts. Frozen at its final value once the last
    /// round is won, no matter how often it keeps being polled.
    #[must_use]
    pub fn elapsed_seconds(&self, now: Instant) -> f64 {
        if let Some(frozen) = self.final_elapsed {
            return frozen;
        }
        let Some(start) = self.started_at else {
            return 0.0;
        };
        (now.saturating_duration_since(start) + self.penalty).as_secs_f64()
    }

    /// Apply one input event
    ///
    /// `now` is only consulted when a winning submission completes the
    /// session and the clock freezes.
    pub fn handle_key(&mut self, key: Key, now: Instant, gate: InputGate) -> KeyOutcome {
        if gate.overlay {
            return KeyOutcome::Ignored;
        }
        if !gate.started {
            return match key {
                Key::Submit => KeyOutcome::StartRequested,
                _ => KeyOutcome::Ignored,
            };
        }

        if self.round.outcome() != Outcome::Playing {
            // Advancement consumes the same submit key
            if key == Key::Submit && !self.is_complete() {
                self.next_round();
                return KeyOutcome::Handled;
            }
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(c) if c.is_ascii_alphabetic() => {
                self.round.push_letter(c.to_ascii_lowercase());
                self.hint.clear();
                KeyOutcome::Handled
            }
            Key::Letter(_) => KeyOutcome::Ignored,
            Key::Delete => {
                self.round.delete_letter();
                self.hint.clear();
                KeyOutcome::Handled
            }
            Key::Submit => {
                self.submit_pending(now);
                KeyOutcome::Handled
            }
        }
    }

    /// Forfeit the current round: reveals the target, forces a loss and
    /// schedules one penalty
    ///
    /// No effect before the first locked-in guess or once the round is
    /// terminal.
    pub fn give_up(&mut self) {
        if self.round.give_up() {
            self.penalty += self.config.penalty_per_guess;
            self.hint = format!(
                "The answer was {}. (Enter to play again)",
                self.round.target().text().to_uppercase()
            );
        }
    }

    fn submit_pending(&mut self, now: Instant) {
        let Some(result) = self.round.submit(&self.dictionary, self.config.max_guesses) else {
            return;
        };

        match result {
            SubmitResult::TooShort => self.hint = "Too short".to_string(),
            SubmitResult::NotInDictionary => self.hint = "Not a valid word".to_string(),
            SubmitResult::Won => {
                self.rounds_won += 1;
                if self.is_complete() {
                    self.hint = "You won!".to_string();
                    // Session done: freeze the displayed score
                    self.final_elapsed = Some(self.elapsed_seconds(now));
                } else {
                    self.hint = "You won! (Enter to play next word)".to_string();
                }
            }
            SubmitResult::Lost => {
                self.penalty += self.config.penalty_per_guess;
                self.hint = format!(
                    "You lost! The answer was {}. (Enter to play next word)",
                    self.round.target().text().to_uppercase()
                );
            }
            SubmitResult::Miss => {
                self.penalty += self.config.penalty_per_guess;
                self.hint.clear();
            }
        }
    }

    fn next_round(&mut self) {
        self.round = Round::new(self.targets.pick());
        self.hint.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const PLAY: InputGate = InputGate {
        started: true,
        overlay: false,
    };

    /// Session whose every target is "crate"
    fn session() -> Session {
        let accepted = words_from_slice(&["crate", "slate", "trace", "brace", "irate"], 5);
        let pool = words_from_slice(&["crate"], 5);
        Session::new(
            GameConfig::default(),
            Dictionary::new(&accepted),
            TargetSource::new(pool),
        )
    }

    fn type_and_submit(s: &mut Session, word: &str, now: Instant) {
        for c in word.chars() {
            s.handle_key(Key::Letter(c), now, PLAY);
        }
        s.handle_key(Key::Submit, now, PLAY);
    }

    fn win_round(s: &mut Session, now: Instant) {
        type_and_submit(s, "crate", now);
    }

    #[test]
    fn initial_state() {
        let s = session();
        assert_eq!(s.rounds_won(), 0);
        assert_eq!(s.penalty(), Duration::ZERO);
        assert_eq!(s.hint(), "Make your first guess!");
        assert!(!s.is_complete());
        assert_eq!(s.round().outcome(), Outcome::Playing);
    }

    #[test]
    fn clock_reads_zero_before_start() {
        let s = session();
        assert_eq!(s.elapsed_seconds(Instant::now()), 0.0);
    }

    #[test]
    fn elapsed_is_wall_time_plus_penalty() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);

        assert_eq!(s.elapsed_seconds(t0), 0.0);
        assert_eq!(s.elapsed_seconds(t0 + Duration::from_secs(5)), 5.0);

        type_and_submit(&mut s, "slate", t0);
        assert_eq!(s.elapsed_seconds(t0 + Duration::from_secs(5)), 8.0);
    }

    #[test]
    fn elapsed_never_negative() {
        let mut s = session();
        let t0 = Instant::now() + Duration::from_secs(60);
        s.start(t0);
        // A `now` before the start instant clamps to zero wall time
        assert_eq!(s.elapsed_seconds(Instant::now()), 0.0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);
        s.start(t0 + Duration::from_secs(10));
        assert_eq!(s.elapsed_seconds(t0 + Duration::from_secs(5)), 5.0);
    }

    #[test]
    fn penalty_grows_per_wrong_guess_independent_of_time() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);

        for k in 1..=3u32 {
            type_and_submit(&mut s, "slate", t0);
            assert_eq!(s.penalty(), Duration::from_secs(3) * k);
        }
    }

    #[test]
    fn overlay_swallows_all_input() {
        let mut s = session();
        let gate = InputGate {
            started: true,
            overlay: true,
        };
        let now = Instant::now();

        assert_eq!(s.handle_key(Key::Letter('c'), now, gate), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Submit, now, gate), KeyOutcome::Ignored);
        assert_eq!(s.round().pending(), "");
    }

    #[test]
    fn before_start_only_submit_matters() {
        let mut s = session();
        let gate = InputGate {
            started: false,
            overlay: false,
        };
        let now = Instant::now();

        assert_eq!(s.handle_key(Key::Letter('c'), now, gate), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Delete, now, gate), KeyOutcome::Ignored);
        assert_eq!(s.handle_key(Key::Submit, now, gate), KeyOutcome::StartRequested);
        assert_eq!(s.round().pending(), "");
    }

    #[test]
    fn letters_clear_the_hint() {
        let mut s = session();
        assert_eq!(s.hint(), "Make your first guess!");
        s.handle_key(Key::Letter('c'), Instant::now(), PLAY);
        assert_eq!(s.hint(), "");
    }

    #[test]
    fn uppercase_letters_are_normalized() {
        let mut s = session();
        s.handle_key(Key::Letter('C'), Instant::now(), PLAY);
        assert_eq!(s.round().pending(), "c");
    }

    #[test]
    fn rejection_hints() {
        let mut s = session();
        let now = Instant::now();

        type_and_submit(&mut s, "sla", now);
        assert_eq!(s.hint(), "Too short");

        s.handle_key(Key::Delete, now, PLAY);
        s.handle_key(Key::Delete, now, PLAY);
        s.handle_key(Key::Delete, now, PLAY);
        type_and_submit(&mut s, "zzzzz", now);
        assert_eq!(s.hint(), "Not a valid word");
        assert_eq!(s.penalty(), Duration::ZERO);
    }

    #[test]
    fn miss_clears_the_hint() {
        let mut s = session();
        type_and_submit(&mut s, "slate", Instant::now());
        assert_eq!(s.hint(), "");
    }

    #[test]
    fn win_hint_mentions_next_word_until_the_last_round() {
        let mut s = session();
        let now = Instant::now();
        s.start(now);

        win_round(&mut s, now);
        assert_eq!(s.hint(), "You won! (Enter to play next word)");
        assert_eq!(s.rounds_won(), 1);
    }

    #[test]
    fn loss_reveals_the_target() {
        let mut s = session();
        let now = Instant::now();
        for _ in 0..6 {
            type_and_submit(&mut s, "slate", now);
        }
        assert_eq!(s.round().outcome(), Outcome::Lost);
        assert_eq!(
            s.hint(),
            "You lost! The answer was CRATE. (Enter to play next word)"
        );
        // Six wrong guesses, six penalties
        assert_eq!(s.penalty(), Duration::from_secs(18));
    }

    #[test]
    fn submit_advances_a_terminal_round() {
        let mut s = session();
        let now = Instant::now();
        win_round(&mut s, now);

        assert_eq!(s.handle_key(Key::Submit, now, PLAY), KeyOutcome::Handled);
        assert_eq!(s.round().outcome(), Outcome::Playing);
        assert!(s.round().rows().is_empty());
        assert_eq!(s.hint(), "");
        assert_eq!(s.rounds_won(), 1);
    }

    #[test]
    fn letters_ignored_while_terminal() {
        let mut s = session();
        let now = Instant::now();
        win_round(&mut s, now);

        assert_eq!(s.handle_key(Key::Letter('s'), now, PLAY), KeyOutcome::Ignored);
        assert_eq!(s.round().pending(), "");
    }

    #[test]
    fn session_completes_after_all_rounds_won() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);

        for i in 0..7 {
            win_round(&mut s, t0);
            assert_eq!(s.rounds_won(), i + 1);
            if i < 6 {
                s.handle_key(Key::Submit, t0, PLAY);
            }
        }

        assert!(s.is_complete());
        assert_eq!(s.hint(), "You won!");
        // No further advancement
        assert_eq!(s.handle_key(Key::Submit, t0, PLAY), KeyOutcome::Ignored);
        assert_eq!(s.round().outcome(), Outcome::Won);
    }

    #[test]
    fn rounds_won_is_bounded_by_total() {
        let mut s = session();
        let now = Instant::now();
        for _ in 0..7 {
            win_round(&mut s, now);
            s.handle_key(Key::Submit, now, PLAY);
        }
        assert_eq!(s.rounds_won(), 7);
    }

    #[test]
    fn clock_freezes_at_completion() {
        let mut s = session();
        let t0 = Instant::now();
        s.start(t0);

        for _ in 0..6 {
            win_round(&mut s, t0);
            s.handle_key(Key::Submit, t0, PLAY);
        }
        // Final win at t0 + 10s
        win_round(&mut s, t0 + Duration::from_secs(10));

        let final_time = s.elapsed_seconds(t0 + Duration::from_secs(10));
        assert_eq!(final_time, 10.0);
        // Keeps being polled, stays frozen
        assert_eq!(s.elapsed_seconds(t0 + Duration::from_secs(500)), 10.0);
    }

    #[test]
    fn lost_round_does_not_count_toward_completion() {
        let mut s = session();
        let now = Instant::now();
        for _ in 0..6 {
            type_and_submit(&mut s, "slate", now);
        }
        assert_eq!(s.rounds_won(), 0);

        // Advance past the loss and win the replacement round
        s.handle_key(Key::Submit, now, PLAY);
        win_round(&mut s, now);
        assert_eq!(s.rounds_won(), 1);
    }

    #[test]
    fn give_up_forces_a_loss_with_penalty() {
        let mut s = session();
        let now = Instant::now();

        // Not allowed before any guess
        s.give_up();
        assert_eq!(s.round().outcome(), Outcome::Playing);
        assert!(!s.can_give_up());

        type_and_submit(&mut s, "slate", now);
        assert!(s.can_give_up());
        s.give_up();

        assert_eq!(s.round().outcome(), Outcome::Lost);
        assert_eq!(s.hint(), "The answer was CRATE. (Enter to play again)");
        // One for the miss, one for the forfeit
        assert_eq!(s.penalty(), Duration::from_secs(6));
    }

    #[test]
    fn keyboard_reflects_current_round_only() {
        let mut s = session();
        let now = Instant::now();

        type_and_submit(&mut s, "slate", now);
        let info = s.keyboard();
        assert_eq!(info.get(&'a'), Some(&Clue::Correct));
        assert_eq!(info.get(&'s'), Some(&Clue::Absent));

        // Knowledge resets with the round
        win_round(&mut s, now);
        s.handle_key(Key::Submit, now, PLAY);
        assert!(s.keyboard().is_empty());
    }

    #[test]
    fn seed_is_surfaced() {
        let pool = words_from_slice(&["crate"], 5);
        let accepted = words_from_slice(&["crate"], 5);
        let s = Session::new(
            GameConfig::default(),
            Dictionary::new(&accepted),
            TargetSource::seeded(pool, 1234),
        );
        assert_eq!(s.seed(), Some(1234));
    }

    #[test]
    fn seeded_sessions_share_target_sequences() {
        let accepted = words_from_slice(&["crate", "slate", "trace", "brace", "irate"], 5);
        let pool = accepted.clone();
        let now = Instant::now();

        let mut targets_a = Vec::new();
        let mut targets_b = Vec::new();
        for targets in [&mut targets_a, &mut targets_b] {
            let mut s = Session::new(
                GameConfig::default(),
                Dictionary::new(&accepted),
                TargetSource::seeded(pool.clone(), 77),
            );
            for _ in 0..5 {
                let target = s.round().target().clone();
                targets.push(target.clone());
                type_and_submit(&mut s, target.text(), now);
                s.handle_key(Key::Submit, now, PLAY);
            }
        }

        assert_eq!(targets_a, targets_b);
    }
}
