use anyhow::{bail, Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use rand::Rng;
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

use crate::config::{ConfigError, GameConfig};
use crate::game::{GameState, GameStatus, TickReport};
use crate::input::{command_for, Command};
use crate::render::{TerminalView, View};
use crate::scheduler::Ticker;

/// Whether the event loop should keep going after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// One running game: its state, its random source and its timer.
pub struct Session<R> {
    state: GameState,
    rng: R,
    ticker: Ticker,
}

impl<R: Rng> Session<R> {
    pub fn start(config: &GameConfig, mut rng: R, now: Instant) -> Result<Self, ConfigError> {
        let board = config.board()?;
        let state = GameState::base(board, &mut rng)?;
        info!(
            "Starting a {}x{} game, one tick every {:?}",
            board.width(),
            board.height(),
            config.tick_interval
        );

        Ok(Self::resume(state, rng, config.tick_interval, now))
    }

    /// Runs an already built state, e.g. a position set up by hand.
    pub fn resume(state: GameState, rng: R, tick_interval: Duration, now: Instant) -> Self {
        Self {
            state,
            rng,
            ticker: Ticker::start(tick_interval, now),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    /// Time input polling may wait before `advance` has work to do.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match command_for(key) {
            Command::Steer(code) => {
                if self.is_running() {
                    self.state.steer(code);
                }
                Control::Continue
            }
            Command::Quit => {
                self.teardown();
                Control::Quit
            }
            Command::Ignore => Control::Continue,
        }
    }

    /// Runs the tick that is due at `now`, if any, and shows the result.
    /// The timer is released on the tick that ends the game, and that final
    /// frame is still presented.
    pub fn advance(
        &mut self,
        now: Instant,
        view: &mut impl View,
    ) -> io::Result<Option<TickReport>> {
        if !self.ticker.poll(now) {
            return Ok(None);
        }

        let report = self.state.tick(&mut self.rng);
        if report.status.is_terminal() && self.ticker.cancel() {
            debug!("Ticker cancelled after {:?}", report.status);
        }

        view.present(&self.state)?;
        Ok(Some(report))
    }

    /// Stops the timer if the game is still running.
    pub fn teardown(&mut self) {
        if self.ticker.cancel() {
            info!("Game abandoned with length {}", self.state.snake.len());
        }
    }
}

/// Plays a session on the terminal until it ends or the player quits.
pub fn run<R: Rng>(mut session: Session<R>) -> Result<GameStatus> {
    let (columns, rows) = terminal::size().context("Failed to query terminal size")?;
    let board = session.state().board;
    // wall on both sides plus the status line
    if i32::from(columns) < board.width() + 2 || i32::from(rows) < board.height() + 3 {
        bail!(
            "terminal is {}x{} but a {}x{} board needs at least {}x{}",
            columns,
            rows,
            board.width(),
            board.height(),
            board.width() + 2,
            board.height() + 3
        );
    }

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut view = TerminalView::new(stdout());
    let result = execute!(stdout(), EnterAlternateScreen, Hide)
        .context("Failed to prepare terminal")
        .and_then(|_| play(&mut session, &mut view));

    restore_terminal()?;

    let status = result?;
    info!(
        "Game finished as {:?} with length {}",
        status,
        session.state().snake.len()
    );
    Ok(status)
}

fn play<R: Rng>(session: &mut Session<R>, view: &mut TerminalView<Stdout>) -> Result<GameStatus> {
    view.present(session.state()).context("Failed to draw board")?;

    while session.is_running() {
        let timeout = session.time_until_tick(Instant::now()).unwrap_or_default();
        if event::poll(timeout).context("Failed to poll input")? {
            if let Some(key) = read_key_press()? {
                if session.handle_key(key) == Control::Quit {
                    return Ok(session.state().status);
                }
            }
        }

        session
            .advance(Instant::now(), view)
            .context("Failed to draw board")?;
    }

    // Leave the final frame up until the player acknowledges it.
    while read_key_press()?.is_none() {}
    Ok(session.state().status)
}

fn read_key_press() -> Result<Option<KeyEvent>> {
    match event::read().context("Failed to read input")? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stdout(), Show, LeaveAlternateScreen).context("Failed to restore terminal")?;
    Ok(())
}
