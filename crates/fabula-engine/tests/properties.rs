//! End-to-end properties over parse-then-execute.

use fabula_engine::{Execution, Status, Transcript};
use proptest::prelude::*;

proptest! {
    /// Sources made only of narrative lines (no `+` directives, no `$`
    /// markers) display exactly one line per source line, verbatim, with no
    /// clears and no suspension.
    #[test]
    fn narrative_only_sources_display_verbatim(
        lines in proptest::collection::vec("[a-zA-Z0-9 .,!?']{0,40}", 0..16)
    ) {
        // One terminator per line, so a blank final line survives parsing
        let source: String = lines.iter().map(|line| format!("{line}\n")).collect();
        let story = fabula_script::parse(&source).unwrap();

        let mut transcript = Transcript::new();
        let mut run = Execution::new(&story);
        prop_assert_eq!(run.advance(&mut transcript), &Status::Terminated);

        prop_assert_eq!(transcript.lines(), lines);
        prop_assert_eq!(transcript.clear_count(), 0);
    }

    /// Whatever value is supplied for an input is what a later `$name`
    /// marker renders, byte for byte.
    #[test]
    fn supplied_input_round_trips_through_interpolation(value in "[a-zA-Z0-9 .,!?']{0,40}") {
        let story = fabula_script::parse("+INPUT: answer\nYou said: $answer").unwrap();

        let mut transcript = Transcript::new();
        let mut run = Execution::new(&story);
        prop_assert_eq!(
            run.advance(&mut transcript),
            &Status::AwaitingInput("answer".to_string())
        );
        run.supply_input(value.clone()).unwrap();
        prop_assert_eq!(run.advance(&mut transcript), &Status::Terminated);

        prop_assert_eq!(transcript.lines(), vec![format!("You said: {value}")]);
    }
}

#[test]
fn blank_final_line_displays_as_blank() {
    // "a\n\n" is two source lines, the second blank; only an unterminated
    // last line would be dropped
    let story = fabula_script::parse("a\n\n").unwrap();

    let mut transcript = Transcript::new();
    let mut run = Execution::new(&story);
    assert_eq!(run.advance(&mut transcript), &Status::Terminated);
    assert_eq!(transcript.lines(), vec!["a", ""]);
}
