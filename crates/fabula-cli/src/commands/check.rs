use std::path::Path;

use fabula_core::Instruction;
use fabula_script::diagnostics::render_diagnostics;

/// Parse a story file, print lint warnings, and print a short summary.
pub fn run(path: &Path) -> Result<(), String> {
    let source = super::read_source(path)?;
    let story = super::parse_source(&source, path)?;

    let warnings = fabula_script::lint(&source);
    if !warnings.is_empty() {
        let filename = path.display().to_string();
        eprint!("{}", render_diagnostics(&source, &filename, &warnings));
    }

    let inputs = story
        .iter()
        .filter(|i| matches!(i, Instruction::Input(_)))
        .count();
    let pauses = story
        .iter()
        .filter(|i| matches!(i, Instruction::Pause))
        .count();

    println!("  {} parsed cleanly.", path.display());
    println!(
        "  {} instructions, {} input{}, {} pause{}, {} warning{}",
        story.len(),
        inputs,
        if inputs == 1 { "" } else { "s" },
        pauses,
        if pauses == 1 { "" } else { "s" },
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" },
    );

    Ok(())
}
