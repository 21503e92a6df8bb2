use serde::{Deserialize, Serialize};

use super::CheckMode;

/// Per-statement outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStatus {
    Correct,
    WrongPosition,
    WrongIndent,
    WrongColumn,
    /// Canonical statement absent from the arrangement
    Missing,
}

impl LineStatus {
    pub fn is_correct(&self) -> bool {
        matches!(self, LineStatus::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    pub line_number: usize,
    pub status: LineStatus,
    /// Mismatches seen on this line that the active check mode does not grade
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<LineStatus>,
}

/// A candidate that cannot have come from an honest UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InvariantViolation {
    #[error("line {line_number} is not part of this puzzle")]
    UnknownLine { line_number: usize },
    #[error("line {line_number} was placed more than once")]
    DuplicatePlacement { line_number: usize },
    #[error("line {line_number} was placed in column {column} but the puzzle has {columns}")]
    ColumnOutOfRange {
        line_number: usize,
        column: usize,
        columns: usize,
    },
    /// `slot` counts the submitted lines canonically before it in its column
    #[error("locked line {line_number} was moved out of slot {slot}")]
    LockedLineMoved { line_number: usize, slot: usize },
    #[error("arrangement could not be read: {reason}")]
    MalformedArrangement { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub passed: bool,
    pub check_mode: CheckMode,
    /// Reports in submission order, followed by missing statements in canonical order
    pub lines: Vec<LineReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<InvariantViolation>,
}

impl VerificationResult {
    pub(crate) fn graded(check_mode: CheckMode, lines: Vec<LineReport>) -> Self {
        let passed = lines.iter().all(|line| line.status.is_correct());
        Self {
            passed,
            check_mode,
            lines,
            violation: None,
        }
    }

    pub(crate) fn rejected(check_mode: CheckMode, violation: InvariantViolation) -> Self {
        Self {
            passed: false,
            check_mode,
            lines: Vec::new(),
            violation: Some(violation),
        }
    }

    pub fn status_of(&self, line_number: usize) -> Option<LineStatus> {
        self.lines
            .iter()
            .find(|line| line.line_number == line_number)
            .map(|line| line.status)
    }

    pub fn failing_lines(&self) -> impl Iterator<Item = &LineReport> {
        self.lines.iter().filter(|line| !line.status.is_correct())
    }
}
