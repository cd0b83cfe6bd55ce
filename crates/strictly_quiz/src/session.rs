//! Timed quiz session: the Home → Playing → Ended state machine.
//!
//! The session owns no clock. An external driver calls [`GameSession::tick`]
//! once per elapsed second while a round is playing, and forwards every edit
//! of the answer field through [`GameSession::submit_input`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{BestScoreStore, Problem, ProblemSource, Verdict, evaluate};

/// Length of one round in seconds.
pub const ROUND_SECONDS: u32 = 120;

/// Lifecycle of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Before the first round.
    #[default]
    Home,
    /// A round is running.
    Playing,
    /// The timer ran out.
    Ended,
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    score: u32,
    time_remaining: u32,
    current_problem: Option<Problem>,
    pending_input: String,
    best_score: u32,
}

impl SessionState {
    fn new(best_score: u32) -> Self {
        Self {
            score: 0,
            time_remaining: ROUND_SECONDS,
            current_problem: None,
            pending_input: String::new(),
            best_score,
        }
    }

    /// Correct answers in the current round.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left in the current round.
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Problem on screen. `None` only before the first round starts.
    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_problem.as_ref()
    }

    /// Answer text as last submitted.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Highest score seen by the store.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

/// Receives the session state after every mutating call.
pub trait StateObserver {
    /// Called with the new state once the mutation is complete.
    fn on_state_changed(&mut self, state: &SessionState, game_state: GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(&SessionState, GameState),
{
    fn on_state_changed(&mut self, state: &SessionState, game_state: GameState) {
        self(state, game_state)
    }
}

/// One running game: score, timer, current problem and best score.
///
/// All operations are total. Calls that make no sense in the current
/// [`GameState`] are ignored.
pub struct GameSession<P, S> {
    problems: P,
    store: S,
    state: SessionState,
    game_state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<P, S> std::fmt::Debug for GameSession<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("game_state", &self.game_state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<P: ProblemSource, S: BestScoreStore> GameSession<P, S> {
    /// Creates a session on the home screen, loading the best score.
    ///
    /// A store that fails to load is treated as empty.
    #[instrument(skip_all)]
    pub fn new(problems: P, store: S) -> Self {
        let best_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!(error = %e, "Failed to load best score, starting from 0");
                0
            }
        };
        info!(best_score, "Game session created");
        Self {
            problems,
            store,
            state: SessionState::new(best_score),
            game_state: GameState::Home,
            observers: Vec::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current lifecycle state.
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers an observer notified after every mutating call.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Starts a round from the home or game-over screen.
    ///
    /// Ignored while a round is already playing; use [`restart`](Self::restart)
    /// to abandon one.
    #[instrument(skip(self), fields(game_state = ?self.game_state))]
    pub fn start(&mut self) {
        if self.game_state == GameState::Playing {
            debug!("Round already playing, ignoring start");
            return;
        }
        self.begin_round();
    }

    /// Starts a fresh round from any state.
    #[instrument(skip(self), fields(game_state = ?self.game_state))]
    pub fn restart(&mut self) {
        self.begin_round();
    }

    /// Advances the timer by one second.
    ///
    /// The round ends on the tick that brings the timer to zero.
    #[instrument(skip(self), fields(time_remaining = self.state.time_remaining))]
    pub fn tick(&mut self) {
        if self.game_state != GameState::Playing {
            return;
        }

        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            self.game_state = GameState::Ended;
            info!(score = self.state.score, "Round over");
            self.record_best_score();
        }
        self.notify();
    }

    /// Takes the answer field's current text and checks it.
    ///
    /// Returns the verdict when the text is a complete integer. A correct
    /// answer scores a point, clears the input and draws the next problem.
    /// Anything else leaves the round untouched so the player can keep typing.
    #[instrument(skip(self, text))]
    pub fn submit_input(&mut self, text: impl Into<String>) -> Option<Verdict> {
        if self.game_state != GameState::Playing {
            debug!("Not playing, ignoring input");
            return None;
        }

        self.state.pending_input = text.into();
        let verdict = match &self.state.current_problem {
            Some(problem) => match evaluate(problem, &self.state.pending_input) {
                Ok(verdict) => Some(verdict),
                Err(failure) => {
                    debug!(%failure, "No verdict yet");
                    None
                }
            },
            None => None,
        };

        if let Some(Verdict::Correct) = verdict {
            self.state.score += 1;
            self.state.pending_input.clear();
            self.state.current_problem = Some(self.problems.next_problem());
            debug!(score = self.state.score, "Correct answer");
        }
        self.notify();
        verdict
    }

    /// Raises the best score to the current score if it is higher.
    ///
    /// Returns true when the best score changed.
    #[instrument(skip(self))]
    pub fn update_best_score(&mut self) -> bool {
        let changed = self.record_best_score();
        if changed {
            self.notify();
        }
        changed
    }

    fn begin_round(&mut self) {
        self.state.score = 0;
        self.state.time_remaining = ROUND_SECONDS;
        self.state.pending_input.clear();
        self.state.current_problem = Some(self.problems.next_problem());
        self.game_state = GameState::Playing;
        info!(best_score = self.state.best_score, "Round started");
        self.notify();
    }

    fn record_best_score(&mut self) -> bool {
        if self.state.score <= self.state.best_score {
            return false;
        }

        let previous = self.state.best_score;
        self.state.best_score = self.state.score;
        info!(previous, best_score = self.state.best_score, "New best score");
        if let Err(e) = self.store.save(self.state.best_score) {
            warn!(error = %e, "Failed to persist best score");
        }
        true
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_state_changed(&self.state, self.game_state);
        }
    }
}
