//! The display surface the engine emits side effects to.

/// Where resolved story output goes.
///
/// Implemented by the terminal driver, the TUI player, and the recording
/// [`Transcript`] used in tests. Both operations are synchronous and must
/// not block on user interaction — waiting is modeled by the engine
/// suspending, not by the surface.
pub trait Surface {
    /// Render one resolved line of narrative text.
    fn display_text(&mut self, line: &str);

    /// Clear previously rendered output.
    fn clear_screen(&mut self);
}

/// One recorded surface side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A resolved text line was displayed.
    Text(String),
    /// The screen was cleared.
    Clear,
}

/// A surface that records every side effect, in order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    events: Vec<SurfaceEvent>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in emission order.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Only the displayed text lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Text(line) => Some(line.as_str()),
                SurfaceEvent::Clear => None,
            })
            .collect()
    }

    /// How many clear events were recorded.
    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Clear))
            .count()
    }
}

impl Surface for Transcript {
    fn display_text(&mut self, line: &str) {
        self.events.push(SurfaceEvent::Text(line.to_string()));
    }

    fn clear_screen(&mut self) {
        self.events.push(SurfaceEvent::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.display_text("one");
        transcript.clear_screen();
        transcript.display_text("two");

        assert_eq!(
            transcript.events(),
            &[
                SurfaceEvent::Text("one".to_string()),
                SurfaceEvent::Clear,
                SurfaceEvent::Text("two".to_string()),
            ]
        );
        assert_eq!(transcript.lines(), vec!["one", "two"]);
        assert_eq!(transcript.clear_count(), 1);
    }
}
