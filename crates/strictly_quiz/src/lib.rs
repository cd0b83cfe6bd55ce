//! Strictly Quiz - timed arithmetic quiz logic
//!
//! Pure game logic with no terminal, clock or database attached:
//!
//! - **Problems**: random `a op b =` problems with exact integer answers
//! - **Evaluator**: checks a typed answer against a problem's display text
//! - **Session**: the Home → Playing → Ended state machine, driven by
//!   external `tick()` calls and keystroke-level `submit_input()` calls
//! - **Store**: the injected best-score persistence port
//!
//! # Example
//!
//! ```
//! use strictly_quiz::{GameSession, GameState, MemoryBestScore, RandomProblems};
//!
//! let mut session = GameSession::new(RandomProblems::seeded(7), MemoryBestScore::default());
//! session.start();
//! assert_eq!(session.game_state(), GameState::Playing);
//! assert_eq!(session.state().time_remaining(), 120);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod evaluator;
mod operator;
mod problem;
mod session;
mod store;

pub use evaluator::{ParseFailure, Verdict, evaluate, parse_expression};
pub use operator::Operator;
pub use problem::{NARROW_RANGE, Problem, ProblemSource, RandomProblems, WIDE_RANGE};
pub use session::{GameSession, GameState, ROUND_SECONDS, SessionState, StateObserver};
pub use store::{BestScoreStore, MemoryBestScore, StoreError};
