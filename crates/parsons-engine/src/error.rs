use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle source contains no statements")]
    EmptyPuzzle,
}

/// Non-fatal findings reported to the puzzle author at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Advisory {
    #[error("line {line_number} repeats line {first_line_number} ({text:?}); learners cannot tell them apart")]
    DuplicateStatement {
        line_number: usize,
        first_line_number: usize,
        text: String,
    },
    #[error("invalid {setting} {given:?}, using {applied:?}")]
    InvalidConfiguration {
        setting: String,
        given: String,
        applied: String,
    },
}

impl Advisory {
    pub(crate) fn invalid(
        setting: impl Into<String>,
        given: impl ToString,
        applied: impl ToString,
    ) -> Self {
        Advisory::InvalidConfiguration {
            setting: setting.into(),
            given: given.to_string(),
            applied: applied.to_string(),
        }
    }
}
