//! The execution state machine.

use std::fmt;

use fabula_core::{Instruction, Story, VariableStore};

use crate::error::{EngineError, EngineResult};
use crate::surface::Surface;

/// Run status of an execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Instructions are executing; [`Execution::advance`] will make progress.
    Running,
    /// Suspended on an `+INPUT:` directive for the named variable.
    AwaitingInput(String),
    /// Suspended on a `+PAUSE` directive.
    AwaitingKeypress,
    /// The cursor reached the end of the story. Absorbing: every resume
    /// operation on a terminated run is an [`EngineError::InvalidState`].
    Terminated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Running => write!(f, "running"),
            Status::AwaitingInput(name) => write!(f, "awaiting input for \"{name}\""),
            Status::AwaitingKeypress => write!(f, "awaiting keypress"),
            Status::Terminated => write!(f, "terminated"),
        }
    }
}

/// One run of a story: cursor, variable store, and status.
///
/// The story is borrowed read-only; the execution owns everything that
/// changes during a run, so independent runs of the same story cannot
/// observe each other. Typical driving loop:
///
/// ```
/// use fabula_core::{Instruction, Story};
/// use fabula_engine::{Execution, Status, Transcript};
///
/// let story = Story::new(vec![Instruction::Input("hero".to_string())]);
/// let mut surface = Transcript::new();
/// let mut run = Execution::new(&story);
/// loop {
///     match run.advance(&mut surface).clone() {
///         Status::AwaitingInput(_) => run.supply_input("Rin").unwrap(),
///         Status::AwaitingKeypress => run.acknowledge_keypress().unwrap(),
///         Status::Terminated => break,
///         Status::Running => unreachable!("advance only returns at a rest point"),
///     }
/// }
/// assert_eq!(run.variables().get("hero"), Some("Rin"));
/// ```
#[derive(Debug)]
pub struct Execution<'story> {
    story: &'story Story,
    cursor: usize,
    variables: VariableStore,
    status: Status,
}

impl<'story> Execution<'story> {
    /// Start a run at the first instruction with an empty variable store.
    pub fn new(story: &'story Story) -> Self {
        Self {
            story,
            cursor: 0,
            variables: VariableStore::new(),
            status: Status::Running,
        }
    }

    /// Current status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Current cursor: an index in `0..=len`, where `len` means terminated.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read-only view of the variables captured so far.
    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Whether the run has reached the end of the story.
    pub fn is_terminated(&self) -> bool {
        self.status == Status::Terminated
    }

    /// Execute instructions until the run suspends or terminates.
    ///
    /// Text and clear instructions emit their side effect on `surface` and
    /// move on; an `+INPUT:` or `+PAUSE` sets the corresponding awaiting
    /// status and returns with the cursor still on the suspending
    /// instruction — it only moves past it when the matching resume
    /// operation is called. Calling `advance` while suspended or terminated
    /// changes nothing and returns the current status.
    pub fn advance(&mut self, surface: &mut dyn Surface) -> &Status {
        while self.status == Status::Running {
            match self.story.get(self.cursor) {
                None => {
                    self.status = Status::Terminated;
                }
                Some(Instruction::Text(segments)) => {
                    surface.display_text(&self.variables.render(segments));
                    self.cursor += 1;
                }
                Some(Instruction::Clear) => {
                    surface.clear_screen();
                    self.cursor += 1;
                }
                Some(Instruction::Input(name)) => {
                    self.status = Status::AwaitingInput(name.clone());
                }
                Some(Instruction::Pause) => {
                    self.status = Status::AwaitingKeypress;
                }
            }
        }
        &self.status
    }

    /// Resume an [`Status::AwaitingInput`] run with the user's text.
    ///
    /// Stores the value under the awaited name (overwriting any prior
    /// value), steps past the `+INPUT:` instruction, and puts the run back
    /// in [`Status::Running`]; call [`Execution::advance`] to continue. In
    /// any other status this fails without touching cursor or variables.
    pub fn supply_input(&mut self, value: impl Into<String>) -> EngineResult<()> {
        match &self.status {
            Status::AwaitingInput(name) => {
                let name = name.clone();
                self.variables.set(name, value.into());
                self.cursor += 1;
                self.status = Status::Running;
                Ok(())
            }
            other => Err(EngineError::InvalidState {
                operation: "supply input",
                status: other.clone(),
            }),
        }
    }

    /// Resume an [`Status::AwaitingKeypress`] run after the user pressed a
    /// key.
    ///
    /// Steps past the `+PAUSE` instruction and puts the run back in
    /// [`Status::Running`]. In any other status this fails without touching
    /// cursor or variables.
    pub fn acknowledge_keypress(&mut self) -> EngineResult<()> {
        match &self.status {
            Status::AwaitingKeypress => {
                self.cursor += 1;
                self.status = Status::Running;
                Ok(())
            }
            other => Err(EngineError::InvalidState {
                operation: "acknowledge keypress",
                status: other.clone(),
            }),
        }
    }
}
