//! Terminal UI for the arithmetic quiz.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, Hud};
pub use input::{Command, command_for};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_quiz::{BestScoreStore, GameSession, ProblemSource};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{error, info, instrument};

/// Runs the quiz in the terminal until the player quits.
pub async fn run_tui<P, S>(session: GameSession<P, S>) -> Result<()>
where
    P: ProblemSource,
    S: BestScoreStore,
{
    info!("Starting Strictly Arithmetic TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(session)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, then waits for either a key press or the next second.
#[instrument(skip_all)]
async fn run_loop<B, P, S>(terminal: &mut Terminal<B>, mut app: App<P, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
    P: ProblemSource,
    S: BestScoreStore,
{
    let mut events = EventStream::new();
    let mut clock = interval(Duration::from_secs(1));
    // A stalled terminal resumes counting down instead of catching up.
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    clock.reset();

    loop {
        let hud = app.hud();
        terminal.draw(|f| ui::draw(f, &hud))?;

        tokio::select! {
            _ = clock.tick() => app.tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                    match app.handle_key(key) {
                        Flow::Quit => {
                            info!("User quit");
                            return Ok(());
                        }
                        Flow::RoundStarted => clock.reset(),
                        Flow::Continue => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
