use serde::{Deserialize, Serialize};

/// Layout metadata for one target drop zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub index: usize,
    pub label: String,
}

/// Build `count` column specs, taking labels positionally. Missing or blank
/// labels fall back to "Column N"; surplus labels are ignored.
pub fn assign_columns(count: usize, labels: &[String]) -> Vec<ColumnSpec> {
    (0..count.max(1))
        .map(|index| {
            let label = labels
                .get(index)
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map_or_else(|| default_label(index), str::to_string);
            ColumnSpec { index, label }
        })
        .collect()
}

fn default_label(index: usize) -> String {
    format!("Column {}", index + 1)
}
