use serde::Serialize;

use super::{Arrangement, CheckMode, Placement, Statement, VerificationResult};
use crate::columns::ColumnSpec;
use crate::identity::WidgetId;

/// Canonical, immutable description of one puzzle instance.
///
/// Built by [`crate::build_puzzle`]; rebuilding from the same source and
/// options yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleDefinition {
    widget_id: WidgetId,
    statements: Vec<Statement>,
    columns: Vec<ColumnSpec>,
    indent_step: usize,
    check_mode: CheckMode,
    scramble_seed: u64,
}

impl PuzzleDefinition {
    pub(crate) fn new(
        widget_id: WidgetId,
        statements: Vec<Statement>,
        columns: Vec<ColumnSpec>,
        indent_step: usize,
        check_mode: CheckMode,
        scramble_seed: u64,
    ) -> Self {
        Self {
            widget_id,
            statements,
            columns,
            indent_step,
            check_mode,
            scramble_seed,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    /// Statements in canonical order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_specs(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn column_labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    pub fn check_mode(&self) -> CheckMode {
        self.check_mode
    }

    pub fn scramble_seed(&self) -> u64 {
        self.scramble_seed
    }

    /// Copy of this definition graded under another policy
    pub fn with_check_mode(&self, check_mode: CheckMode) -> Self {
        Self {
            check_mode,
            ..self.clone()
        }
    }

    pub fn statement(&self, line_number: usize) -> Option<&Statement> {
        self.statements
            .binary_search_by_key(&line_number, |s| s.line_number)
            .ok()
            .map(|idx| &self.statements[idx])
    }

    /// The correct answer, as the "show solution" control would lay it out
    pub fn solution(&self) -> Arrangement {
        self.statements
            .iter()
            .map(|s| Placement::new(s.line_number, s.column, s.indent_level))
            .collect()
    }

    pub fn verify(&self, arrangement: &Arrangement) -> VerificationResult {
        crate::verify::verify(self, arrangement)
    }
}
