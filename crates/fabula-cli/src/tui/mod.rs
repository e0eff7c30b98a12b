//! Full-screen terminal player: setup, teardown, and the tick/event loop.

mod player;

pub use player::PlayerConfig;

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use fabula_core::Story;
use player::Player;

/// Play a story in the alternate screen until it ends or the user quits.
pub fn run(story: &Story, config: PlayerConfig) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let tick = Duration::from_millis(config.tick_ms.max(1));
    let mut player = Player::new(story, config);

    let result = run_loop(&mut terminal, &mut player, tick);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Tick the player, redraw, and feed it key events.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    player: &mut Player<'_>,
    tick: Duration,
) -> Result<(), String> {
    loop {
        player.tick();

        terminal
            .draw(|frame| player.draw(frame))
            .map_err(|e| format!("draw error: {e}"))?;

        if event::poll(tick).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
                && player.handle_key(key)
            {
                return Ok(());
            }
        }
    }
}
