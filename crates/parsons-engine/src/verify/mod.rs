//! Grading a learner's arrangement against the canonical order.
//!
//! A submission first has to be admissible: every line known, none placed
//! twice, columns in range and locked lines still in their slots. A
//! submission that fails admission is rejected as a whole. Otherwise each
//! line is checked for position, indent and column mismatches, in that
//! priority, and the active [`CheckMode`] decides which of them count.
//!
//! Position and locked slots are judged per column, against that column's
//! share of the canonical order among the statements actually submitted.
//!
//! Statements are matched by `line_number` only, so duplicate text can never
//! turn a wrong answer into a right one or the reverse.

mod position;

use std::collections::HashMap;

use crate::models::{
    Arrangement, CheckMode, InvariantViolation, LineReport, LineStatus, PuzzleDefinition,
    VerificationResult,
};

/// Grade `arrangement` under the definition's check mode
pub fn verify(definition: &PuzzleDefinition, arrangement: &Arrangement) -> VerificationResult {
    let check_mode = definition.check_mode();
    match admit(definition, arrangement) {
        Ok(canonical_indices) => grade(definition, arrangement, &canonical_indices),
        Err(violation) => {
            log::warn!("{}: rejected submission: {violation}", definition.widget_id());
            VerificationResult::rejected(check_mode, violation)
        }
    }
}

/// Grade an arrangement received as JSON from a client.
///
/// Anything that does not decode is reported as a failed check.
pub fn verify_submission(definition: &PuzzleDefinition, json: &str) -> VerificationResult {
    match serde_json::from_str::<Arrangement>(json) {
        Ok(arrangement) => verify(definition, &arrangement),
        Err(e) => {
            let violation = InvariantViolation::MalformedArrangement {
                reason: e.to_string(),
            };
            log::warn!("{}: rejected submission: {violation}", definition.widget_id());
            VerificationResult::rejected(definition.check_mode(), violation)
        }
    }
}

/// Check the submission is one an honest UI could have produced, returning
/// the canonical index of every placement.
fn admit(
    definition: &PuzzleDefinition,
    arrangement: &Arrangement,
) -> Result<Vec<usize>, InvariantViolation> {
    let statements = definition.statements();
    let index_of: HashMap<usize, usize> = statements
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.line_number, idx))
        .collect();

    let mut seen = vec![false; statements.len()];
    let mut canonical_indices = Vec::with_capacity(arrangement.len());

    for placement in arrangement.placements() {
        let line_number = placement.line_number;
        let Some(&idx) = index_of.get(&line_number) else {
            return Err(InvariantViolation::UnknownLine { line_number });
        };
        if seen[idx] {
            return Err(InvariantViolation::DuplicatePlacement { line_number });
        }
        seen[idx] = true;

        if placement.column >= definition.column_count() {
            return Err(InvariantViolation::ColumnOutOfRange {
                line_number,
                column: placement.column,
                columns: definition.column_count(),
            });
        }
        canonical_indices.push(idx);
    }

    // Slot of each placement within its own column
    let placements = arrangement.placements();
    let mut filled = vec![0usize; definition.column_count()];
    let mut column_slot = Vec::with_capacity(placements.len());
    let mut submitted_at = vec![None; statements.len()];
    for (pos, (placement, &idx)) in placements.iter().zip(&canonical_indices).enumerate() {
        column_slot.push(filled[placement.column]);
        filled[placement.column] += 1;
        submitted_at[idx] = Some(pos);
    }

    // A locked line's slot counts only the submitted statements that
    // canonically precede it in its column
    let mut preceding = vec![0usize; definition.column_count()];
    for (idx, statement) in statements.iter().enumerate() {
        let column = statement.column.min(definition.column_count() - 1);
        if statement.locked {
            let slot = preceding[column];
            let in_slot = submitted_at[idx]
                .is_some_and(|pos| placements[pos].column == column && column_slot[pos] == slot);
            if !in_slot {
                return Err(InvariantViolation::LockedLineMoved {
                    line_number: statement.line_number,
                    slot,
                });
            }
        }
        if submitted_at[idx].is_some() {
            preceding[column] += 1;
        }
    }

    Ok(canonical_indices)
}

fn grade(
    definition: &PuzzleDefinition,
    arrangement: &Arrangement,
    canonical_indices: &[usize],
) -> VerificationResult {
    let statements = definition.statements();
    let check_mode = definition.check_mode();

    let mut present = vec![false; statements.len()];
    for &idx in canonical_indices {
        present[idx] = true;
    }
    let columns: Vec<usize> = arrangement.placements().iter().map(|p| p.column).collect();
    let positions = position::in_position(canonical_indices, &columns);

    let mut lines = Vec::with_capacity(statements.len());
    for ((placement, &idx), in_position) in arrangement
        .placements()
        .iter()
        .zip(canonical_indices)
        .zip(positions)
    {
        let statement = &statements[idx];

        if statement.locked {
            // Admission already pinned it to its slot
            lines.push(LineReport {
                line_number: statement.line_number,
                status: LineStatus::Correct,
                notes: Vec::new(),
            });
            continue;
        }

        let mut mismatches = Vec::new();
        if !in_position {
            mismatches.push(LineStatus::WrongPosition);
        }
        if placement.indent_level != statement.indent_level {
            mismatches.push(LineStatus::WrongIndent);
        }
        if placement.column != statement.column {
            mismatches.push(LineStatus::WrongColumn);
        }

        lines.push(classify(statement.line_number, check_mode, mismatches));
    }

    for (statement, _) in statements.iter().zip(&present).filter(|(_, p)| !**p) {
        lines.push(LineReport {
            line_number: statement.line_number,
            status: LineStatus::Missing,
            notes: Vec::new(),
        });
    }

    VerificationResult::graded(check_mode, lines)
}

fn is_graded(check_mode: CheckMode, mismatch: LineStatus) -> bool {
    match check_mode {
        CheckMode::Strict => true,
        CheckMode::OrderOnly => mismatch == LineStatus::WrongPosition,
        CheckMode::IndentOnly => mismatch == LineStatus::WrongIndent,
    }
}

/// Pick the first graded mismatch as the status; keep ungraded ones as notes
fn classify(line_number: usize, check_mode: CheckMode, mismatches: Vec<LineStatus>) -> LineReport {
    let (graded, notes): (Vec<_>, Vec<_>) = mismatches
        .into_iter()
        .partition(|m| is_graded(check_mode, *m));
    LineReport {
        line_number,
        status: graded.first().copied().unwrap_or(LineStatus::Correct),
        notes,
    }
}
