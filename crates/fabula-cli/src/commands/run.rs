//! Run a story in plain line mode: display on stdout, input from stdin.
//!
//! Prompts go to stderr so piped stdout carries only story output. When
//! stdout is not a terminal a clear prints a form feed instead of wiping
//! the screen, so the piped transcript keeps every line. At end of stdin
//! an input resolves to the empty string and a pause falls through, so a
//! short piped script still reaches the end of the story.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use fabula_engine::{Execution, Status, Surface};

/// Surface that writes story output to stdout.
struct LineSurface;

impl Surface for LineSurface {
    fn display_text(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear_screen(&mut self) {
        let mut stdout = io::stdout();
        if stdout.is_terminal() {
            crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)).ok();
        } else {
            // Piped output keeps the full transcript; a form feed marks
            // where the screen would have cleared
            println!("\u{c}");
        }
    }
}

/// Drive a story to termination against the current terminal.
pub fn run(path: &Path) -> Result<(), String> {
    let story = super::load_story(path)?;

    let mut surface = LineSurface;
    let mut execution = Execution::new(&story);
    let stdin = io::stdin();

    loop {
        match execution.advance(&mut surface).clone() {
            Status::AwaitingInput(name) => {
                eprint!("{name}> ");
                io::stderr().flush().ok();
                let value = read_line(&stdin)?;
                execution.supply_input(value).map_err(|e| e.to_string())?;
            }
            Status::AwaitingKeypress => {
                eprint!("[press enter]");
                io::stderr().flush().ok();
                read_line(&stdin)?;
                execution
                    .acknowledge_keypress()
                    .map_err(|e| e.to_string())?;
            }
            Status::Terminated => return Ok(()),
            Status::Running => unreachable!("advance only returns at a rest point"),
        }
    }
}

/// Read one line from stdin without its trailing newline; EOF reads as "".
fn read_line(stdin: &io::Stdin) -> Result<String, String> {
    let mut value = String::new();
    stdin
        .lock()
        .read_line(&mut value)
        .map_err(|e| format!("cannot read input: {e}"))?;
    while value.ends_with('\n') || value.ends_with('\r') {
        value.pop();
    }
    Ok(value)
}
