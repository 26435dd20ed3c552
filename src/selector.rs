//! Numbered picker for search results.
//!
//! Selection is fail-fast: a single line is read and anything that isn't a
//! number in `[1, N]` is an error, with no prompt to try again.

use std::io::{BufRead, Write};

use crate::error::{GhStarError, Result};
use crate::models::RepositoryRef;

/// Format one candidate as `[i] owner/name - description (N stars)`.
pub fn format_entry(index: usize, repo: &RepositoryRef) -> String {
    format!(
        "[{}] {} - {} ({} stars)",
        index,
        repo.full_name,
        repo.description.as_deref().unwrap_or("No description"),
        repo.stars.unwrap_or(0)
    )
}

/// Write the numbered list, padded by a blank line on each side.
pub fn render<W: Write>(results: &[RepositoryRef], out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (i, repo) in results.iter().enumerate() {
        writeln!(out, "{}", format_entry(i + 1, repo))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Parse a 1-based choice against a list of `count` entries.
pub fn parse_choice(line: &str, count: usize) -> Result<usize> {
    let trimmed = line.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| GhStarError::InvalidSelection(format!("'{}' is not a number", trimmed)))?;

    if choice == 0 || choice > count {
        return Err(GhStarError::InvalidSelection(format!(
            "{} is outside the range 1-{}",
            choice, count
        )));
    }
    Ok(choice)
}

/// Show `results`, read one line from `input` and return the chosen entry.
pub fn select<R: BufRead, W: Write>(
    results: &[RepositoryRef],
    input: &mut R,
    out: &mut W,
) -> Result<RepositoryRef> {
    render(results, out)?;
    write!(out, "Select a repository [1-{}]: ", results.len())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GhStarError::InvalidSelection("no input received".to_string()));
    }

    let choice = parse_choice(&line, results.len())?;
    Ok(results[choice - 1].clone())
}
