//! Application state: the quiz session plus the view model it feeds.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use strictly_quiz::{
    BestScoreStore, GameSession, GameState, ProblemSource, ROUND_SECONDS, SessionState,
};
use tracing::{debug, instrument};

use super::input::{Command, command_for};

/// Snapshot of what the screen shows, refreshed by the session observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Lifecycle state.
    pub game_state: GameState,
    /// Score in the current round.
    pub score: u32,
    /// Seconds left.
    pub time_remaining: u32,
    /// Best score across rounds.
    pub best_score: u32,
    /// Problem text, empty before the first round.
    pub problem: String,
    /// Answer field contents.
    pub answer: String,
}

impl Hud {
    fn capture(state: &SessionState, game_state: GameState) -> Self {
        Self {
            game_state,
            score: state.score(),
            time_remaining: state.time_remaining(),
            best_score: state.best_score(),
            problem: state
                .current_problem()
                .map(|p| p.display_text().to_string())
                .unwrap_or_default(),
            answer: state.pending_input().to_string(),
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            game_state: GameState::Home,
            score: 0,
            time_remaining: ROUND_SECONDS,
            best_score: 0,
            problem: String::new(),
            answer: String::new(),
        }
    }
}

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// A new round began; the tick clock should restart.
    RoundStarted,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App<P, S> {
    session: GameSession<P, S>,
    hud: Rc<RefCell<Hud>>,
}

impl<P: ProblemSource, S: BestScoreStore> App<P, S> {
    /// Wraps a session and subscribes the view model to it.
    #[instrument(skip_all)]
    pub fn new(mut session: GameSession<P, S>) -> Self {
        let hud = Rc::new(RefCell::new(Hud::capture(
            session.state(),
            session.game_state(),
        )));
        let sink = Rc::clone(&hud);
        session.subscribe(move |state: &SessionState, game_state: GameState| {
            *sink.borrow_mut() = Hud::capture(state, game_state);
        });
        Self { session, hud }
    }

    /// Current view model.
    pub fn hud(&self) -> Hud {
        self.hud.borrow().clone()
    }

    /// Forwards one elapsed second to the session.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let Some(command) = command_for(self.session.game_state(), key) else {
            return Flow::Continue;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => Flow::Quit,
            Command::Start => {
                self.session.start();
                Flow::RoundStarted
            }
            Command::Restart => {
                self.session.restart();
                Flow::RoundStarted
            }
            Command::Type(c) => {
                let mut text = self.session.state().pending_input().to_string();
                text.push(c);
                self.session.submit_input(text);
                Flow::Continue
            }
            Command::Backspace => {
                let mut text = self.session.state().pending_input().to_string();
                text.pop();
                self.session.submit_input(text);
                Flow::Continue
            }
        }
    }
}
