use crate::{CheckMode, PuzzleDefinition, PuzzleOptions, build_puzzle};

/// Build a definition from source with the given policy and indent step
pub fn definition(raw: &str, check_mode: CheckMode, indent_step: i64) -> PuzzleDefinition {
    let options = PuzzleOptions {
        check_mode: Some(check_mode.to_string()),
        indent_step: Some(indent_step),
        ..Default::default()
    };
    build_puzzle(raw, &options).unwrap().into_definition()
}

/// Build a multi-column strict definition
pub fn definition_with_columns(raw: &str, columns: i64) -> PuzzleDefinition {
    let options = PuzzleOptions {
        columns: Some(columns),
        ..Default::default()
    };
    build_puzzle(raw, &options).unwrap().into_definition()
}
