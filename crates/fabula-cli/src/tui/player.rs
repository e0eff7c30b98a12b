//! Player state: the typewriter reveal, the input line, and engine driving.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use fabula_core::Story;
use fabula_engine::{Execution, Status, Surface, SurfaceEvent};

/// Typewriter and timing configuration for the player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Characters revealed per tick.
    pub chars_per_tick: usize,
    /// Milliseconds per tick.
    pub tick_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            chars_per_tick: 2,
            tick_ms: 25,
        }
    }
}

impl PlayerConfig {
    /// Set the reveal speed (at least one character per tick).
    pub fn with_speed(mut self, chars_per_tick: usize) -> Self {
        self.chars_per_tick = chars_per_tick.max(1);
        self
    }

    /// Set the tick interval in milliseconds (at least 1).
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }
}

/// Surface that queues engine side effects for the typewriter to consume.
#[derive(Default)]
struct EventQueue {
    pending: VecDeque<SurfaceEvent>,
}

impl Surface for EventQueue {
    fn display_text(&mut self, line: &str) {
        self.pending.push_back(SurfaceEvent::Text(line.to_string()));
    }

    fn clear_screen(&mut self) {
        self.pending.push_back(SurfaceEvent::Clear);
    }
}

/// A line being revealed character by character.
struct Reveal {
    line: String,
    chars: usize,
}

/// What the input line is doing, mirroring the engine status once the
/// typewriter has caught up with its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Revealing,
    Input,
    Pause,
    Finished,
}

/// Full-screen player state for one run of a story.
pub struct Player<'story> {
    execution: Execution<'story>,
    queue: EventQueue,
    output: Vec<String>,
    current: Option<Reveal>,
    input: String,
    config: PlayerConfig,
}

impl<'story> Player<'story> {
    /// Create a player at the start of the story.
    pub fn new(story: &'story Story, config: PlayerConfig) -> Self {
        Self {
            execution: Execution::new(story),
            queue: EventQueue::default(),
            output: Vec::new(),
            current: None,
            input: String::new(),
            config,
        }
    }

    fn mode(&self) -> Mode {
        if self.current.is_some() || !self.queue.pending.is_empty() {
            return Mode::Revealing;
        }
        match self.execution.status() {
            Status::Running => Mode::Revealing,
            Status::AwaitingInput(_) => Mode::Input,
            Status::AwaitingKeypress => Mode::Pause,
            Status::Terminated => Mode::Finished,
        }
    }

    /// Advance one animation frame: grow the current reveal, pull the next
    /// queued event, or drive the engine until it suspends again.
    pub fn tick(&mut self) {
        if let Some(mut reveal) = self.current.take() {
            reveal.chars += self.config.chars_per_tick;
            if reveal.chars >= reveal.line.chars().count() {
                self.output.push(reveal.line);
            } else {
                self.current = Some(reveal);
            }
            return;
        }

        if let Some(event) = self.queue.pending.pop_front() {
            match event {
                SurfaceEvent::Text(line) => self.current = Some(Reveal { line, chars: 0 }),
                SurfaceEvent::Clear => self.output.clear(),
            }
            return;
        }

        if self.execution.status() == &Status::Running {
            self.execution.advance(&mut self.queue);
        }
    }

    /// Handle one key press. Returns `true` when the player should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        if key.code == KeyCode::Esc {
            return true;
        }

        match self.mode() {
            Mode::Input => match key.code {
                KeyCode::Enter => {
                    let value = std::mem::take(&mut self.input);
                    self.execution.supply_input(value).ok();
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            },
            Mode::Pause => {
                self.execution.acknowledge_keypress().ok();
            }
            Mode::Finished => return true,
            Mode::Revealing => {
                // A keypress while text is unrolling finishes the line at once
                if let Some(reveal) = &mut self.current {
                    reveal.chars = reveal.line.chars().count();
                }
            }
        }

        false
    }

    /// Draw the output panel and the input line.
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Output
                Constraint::Length(3), // Input
            ])
            .split(frame.area());

        let mut lines: Vec<Line> = self
            .output
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        if let Some(reveal) = &self.current {
            let shown: String = reveal.line.chars().take(reveal.chars).collect();
            lines.push(Line::from(shown));
        }

        // Pin the view to the newest wrapped line
        let inner_width = chunks[0].width.saturating_sub(2) as usize;
        let total_wrapped: u16 = lines
            .iter()
            .map(|l| {
                let len = l.width();
                if inner_width == 0 {
                    1
                } else {
                    len.max(1).div_ceil(inner_width) as u16
                }
            })
            .sum();
        let visible_height = chunks[0].height.saturating_sub(2);
        let scroll = total_wrapped.saturating_sub(visible_height);

        let output = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Story ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(output, chunks[0]);

        let mode = self.mode();
        let (title, border) = match mode {
            Mode::Revealing => ("", Style::default().fg(Color::DarkGray)),
            Mode::Input => (" your answer ", Style::default().fg(Color::Yellow)),
            Mode::Pause => (" press any key ", Style::default().fg(Color::Green)),
            Mode::Finished => (" the end, press any key ", Style::default().fg(Color::Cyan)),
        };

        let input_text = if mode == Mode::Input {
            format!("> {}", self.input)
        } else {
            String::new()
        };
        let input = Paragraph::new(input_text).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(input, chunks[1]);

        if mode == Mode::Input {
            let cursor_x = chunks[1].x + 1 + 2 + self.input.chars().count() as u16;
            let cursor_y = chunks[1].y + 1;
            if cursor_x < chunks[1].x + chunks[1].width - 1 {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}
