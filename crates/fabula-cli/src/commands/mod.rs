pub mod check;
pub mod export;
pub mod run;

use std::path::Path;

use fabula_core::Story;
use fabula_script::diagnostics::render_parse_errors;

/// Read and parse a story file, printing diagnostics to stderr on failure.
pub fn load_story(path: &Path) -> Result<Story, String> {
    let source = read_source(path)?;
    parse_source(&source, path)
}

/// Read a story file into memory.
pub fn read_source(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

/// Parse already-read source, printing diagnostics to stderr on failure.
pub fn parse_source(source: &str, path: &Path) -> Result<Story, String> {
    match fabula_script::parse(source) {
        Ok(story) => Ok(story),
        Err(errors) => {
            let filename = path.display().to_string();
            eprint!("{}", render_parse_errors(source, &filename, &errors));
            let count = errors.len();
            eprintln!(
                "  {count} error{}",
                if count == 1 { "" } else { "s" },
            );
            Err("story failed to parse".into())
        }
    }
}
