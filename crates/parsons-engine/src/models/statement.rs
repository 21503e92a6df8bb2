use serde::{Deserialize, Serialize};

/// One non-blank line of puzzle source.
///
/// `line_number` is the identity key: it is assigned once by the parser and
/// every later comparison goes through it, never through `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// 1-based position in the source, blank lines included
    pub line_number: usize,
    /// Leading whitespace width after tab expansion
    pub indent_spaces: usize,
    /// `indent_spaces / indent_step`
    pub indent_level: usize,
    /// Trimmed content with annotation markers removed
    pub text: String,
    pub locked: bool,
    /// 0-based canonical target column
    pub column: usize,
}

impl Statement {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            indent_spaces: 0,
            indent_level: 0,
            text: text.into(),
            locked: false,
            column: 0,
        }
    }
}
