//! Parser tests.
//!
//! Fixture sources (.txt) and their YAML snapshots (.snap) live side by side
//! in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::error::{Advisory, PuzzleError};
use crate::parsing::parse;

#[test]
fn fixture_ruby_sum() {
    assert_fixture("ruby_sum", 2);
}

fn assert_fixture(name: &str, indent_step: usize) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();

    let parsed = parse(&source, indent_step).unwrap();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, parsed.statements);
    });
}

#[test]
fn test_levels_follow_indent_step() {
    let parsed = parse("a\n  b\nc", 2).unwrap();
    let levels: Vec<_> = parsed.statements.iter().map(|s| s.indent_level).collect();
    assert_eq!(levels, vec![0, 1, 0]);
}

#[test]
fn test_blank_lines_are_dropped_but_counted() {
    let parsed = parse("first\n\n   \nsecond", 4).unwrap();
    let numbers: Vec<_> = parsed.statements.iter().map(|s| s.line_number).collect();
    assert_eq!(numbers, vec![1, 4]);
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("   \n\t\n")]
#[case(":lock:")]
fn test_empty_sources_are_rejected(#[case] source: &str) {
    assert_eq!(parse(source, 4), Err(PuzzleError::EmptyPuzzle));
}

#[test]
fn test_text_is_trimmed() {
    let parsed = parse("    return x   ", 4).unwrap();
    let statement = &parsed.statements[0];
    assert_eq!(statement.text, "return x");
    assert_eq!(statement.indent_spaces, 4);
    assert_eq!(statement.indent_level, 1);
}

#[test]
fn test_mixed_tab_and_space_sources_measure_consistently() {
    let parsed = parse("if x:\n\tfoo()\n    bar()", 4).unwrap();
    assert_eq!(parsed.statements[1].indent_spaces, 4);
    assert_eq!(parsed.statements[2].indent_spaces, 4);
    assert_eq!(parsed.statements[1].indent_level, 1);
}

#[test]
fn test_lock_marker_is_stripped_from_text() {
    let parsed = parse("x = 1\n    y = 2    :lock:", 4).unwrap();
    let locked = &parsed.statements[1];
    assert!(locked.locked);
    assert_eq!(locked.text, "y = 2");
    assert_eq!(locked.indent_level, 1);
    assert!(!parsed.statements[0].locked);
}

#[test]
fn test_column_marker_is_zero_based() {
    let parsed = parse("a :column=2:\nb :column=1:\nc", 4).unwrap();
    let columns: Vec<_> = parsed.statements.iter().map(|s| s.column).collect();
    assert_eq!(columns, vec![1, 0, 0]);
}

#[test]
fn test_column_zero_marker_is_reported() {
    let parsed = parse("a :column=0:\nb", 4).unwrap();
    assert_eq!(parsed.statements[0].column, 0);
    assert_eq!(
        parsed.advisories,
        vec![Advisory::invalid("column marker on line 1", 0, 1)]
    );
}

#[test]
fn test_duplicate_text_raises_advisory() {
    let parsed = parse("print(1)\nprint(1)", 4).unwrap();

    assert_eq!(parsed.statements.len(), 2);
    assert_eq!(
        parsed.advisories,
        vec![Advisory::DuplicateStatement {
            line_number: 2,
            first_line_number: 1,
            text: "print(1)".to_string(),
        }]
    );
}

#[test]
fn test_duplicates_ignore_indentation() {
    // Same text at different depths is still ambiguous to the learner
    let parsed = parse("pass\n    pass\n        pass", 4).unwrap();
    assert_eq!(parsed.advisories.len(), 2);
}

#[test]
fn test_line_numbers_strictly_increase() {
    let parsed = parse("a\n\nb\nc\n\n\nd", 4).unwrap();
    assert!(
        parsed
            .statements
            .windows(2)
            .all(|w| w[0].line_number < w[1].line_number)
    );
}
