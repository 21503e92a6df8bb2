use serde::{Deserialize, Serialize};

use crate::columns::ColumnSpec;
use crate::identity::WidgetId;
use crate::models::{CheckMode, Statement};

/// Everything the rendering collaborator needs to draw one puzzle and to
/// submit arrangements back for checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub widget_id: WidgetId,
    pub title: String,
    pub language: String,
    /// Canonical order
    pub statements: Vec<Statement>,
    /// Line numbers in display order. Absent when the client scrambles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation_order: Option<Vec<usize>>,
    pub shuffle_on_client: bool,
    pub check_mode: CheckMode,
    pub indent_step: usize,
    pub columns: Vec<ColumnSpec>,
    /// Seed actually used, for reproducing the scramble client-side
    pub seed: u64,
}
