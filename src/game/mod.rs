//! Game state: round and session machinery
//!
//! Everything that mutates during play lives here. The round state machine
//! owns one word's worth of guesses; the session controller owns the clock,
//! the penalty tally and advancement across the seven rounds.

mod config;
mod keyboard;
mod round;
mod session;
mod target;

pub use config::GameConfig;
pub use keyboard::keyboard_knowledge;
pub use round::{Outcome, Round, SubmitResult};
pub use session::{InputGate, Key, KeyOutcome, Session};
pub use target::TargetSource;
