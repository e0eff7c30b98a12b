use std::fmt::Write as _;
use std::path::Path;

use fabula_core::Story;

/// Export the parsed instruction list as `json` or `text`.
pub fn run(path: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let story = super::load_story(path)?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&story)
            .map_err(|e| format!("cannot serialize story: {e}"))?,
        "text" => listing(&story),
        other => return Err(format!("unknown format: {other} (expected json or text)")),
    };

    match output {
        Some(out) => std::fs::write(out, rendered + "\n")
            .map_err(|e| format!("cannot write {}: {e}", out.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Numbered, source-form listing of the instruction sequence.
fn listing(story: &Story) -> String {
    let mut out = String::new();
    for (index, instruction) in story.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{index:>4}  {instruction}");
    }
    out
}
