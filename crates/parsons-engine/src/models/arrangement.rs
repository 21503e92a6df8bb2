use serde::{Deserialize, Serialize};

/// Where the learner put one statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub line_number: usize,
    #[serde(default)]
    pub column: usize,
    pub indent_level: usize,
}

impl Placement {
    pub fn new(line_number: usize, column: usize, indent_level: usize) -> Self {
        Self {
            line_number,
            column,
            indent_level,
        }
    }
}

/// A candidate solution, in the order the learner arranged it.
///
/// Multi-column puzzles may be flattened in any column order; only the
/// relative order of placements sharing a column matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    placements: Vec<Placement>,
}

impl Arrangement {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Swap two entries, handy for building near-miss candidates
    pub fn swap(&mut self, a: usize, b: usize) {
        self.placements.swap(a, b);
    }

    pub fn placement_mut(&mut self, index: usize) -> Option<&mut Placement> {
        self.placements.get_mut(index)
    }
}

impl FromIterator<Placement> for Arrangement {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arrangement_json_is_a_plain_list() {
        let arrangement = Arrangement::new(vec![Placement::new(3, 1, 2)]);
        let json = serde_json::to_string(&arrangement).unwrap();
        assert_eq!(json, r#"[{"line_number":3,"column":1,"indent_level":2}]"#);
    }

    #[test]
    fn test_column_defaults_to_first() {
        let arrangement: Arrangement =
            serde_json::from_str(r#"[{"line_number":1,"indent_level":0}]"#).unwrap();
        assert_eq!(arrangement.placements(), &[Placement::new(1, 0, 0)]);
    }
}
