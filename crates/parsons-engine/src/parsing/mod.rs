pub mod dedent;
pub mod indent;
pub mod markers;

use std::collections::HashMap;

use crate::error::{Advisory, PuzzleError};
use crate::models::Statement;

pub use dedent::dedent;
pub use indent::IndentStep;
pub use markers::{Markers, strip_markers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub statements: Vec<Statement>,
    pub advisories: Vec<Advisory>,
}

/// Turn puzzle source into canonical statements.
///
/// Blank lines are dropped but still counted, so `line_number` always points
/// at the authored line. Fails with [`PuzzleError::EmptyPuzzle`] when nothing
/// is left.
pub fn parse(raw: &str, indent_step: usize) -> Result<ParsedSource, PuzzleError> {
    let step = IndentStep::new(indent_step);
    let mut statements = Vec::new();
    let mut advisories = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (idx, line) in raw.lines().enumerate() {
        let line_number = idx + 1;
        let (body, markers) = strip_markers(line);
        let text = body.trim();
        if text.is_empty() {
            continue;
        }

        let indent_spaces = step.measure(body);

        if let Some(&first_line_number) = first_seen.get(text) {
            let advisory = Advisory::DuplicateStatement {
                line_number,
                first_line_number,
                text: text.to_string(),
            };
            log::warn!("{advisory}");
            advisories.push(advisory);
        } else {
            first_seen.insert(text.to_string(), line_number);
        }

        if markers.column == Some(0) {
            let advisory = Advisory::invalid(format!("column marker on line {line_number}"), 0, 1);
            log::warn!("{advisory}");
            advisories.push(advisory);
        }

        statements.push(Statement {
            line_number,
            indent_spaces,
            indent_level: indent_spaces / step.width(),
            text: text.to_string(),
            locked: markers.locked,
            column: markers.column.map_or(0, |n| n.saturating_sub(1)),
        });
    }

    if statements.is_empty() {
        return Err(PuzzleError::EmptyPuzzle);
    }

    Ok(ParsedSource {
        statements,
        advisories,
    })
}

#[cfg(test)]
mod tests;
