/// Decide which submitted statements sit in order.
///
/// Each column is judged on its own: the statements a learner stacked in one
/// column are compared with that column's share of the canonical order. Within
/// a column, the statements forming the longest run in canonical order are in
/// position and everything else is out of position, so moving one line to the
/// front or to the back flags that line alone.
///
/// `canonical` holds the canonical index of each placement and `columns` the
/// column it was dropped into; the result is indexed the same way.
pub(crate) fn in_position(canonical: &[usize], columns: &[usize]) -> Vec<bool> {
    let mut by_column: Vec<Vec<usize>> = Vec::new();
    for (slot, &column) in columns.iter().enumerate() {
        if by_column.len() <= column {
            by_column.resize_with(column + 1, Vec::new);
        }
        by_column[column].push(slot);
    }

    let mut result = vec![false; canonical.len()];
    for slots in by_column {
        let order: Vec<usize> = slots.iter().map(|&slot| canonical[slot]).collect();
        for (slot, kept) in slots.into_iter().zip(longest_increasing(&order)) {
            result[slot] = kept;
        }
    }
    result
}

/// Mark the members of a longest strictly increasing subsequence.
///
/// Patience sorting, O(n log n). Among equally long runs the one ending on
/// the earliest possible values is kept.
fn longest_increasing(values: &[usize]) -> Vec<bool> {
    // tails[k]: position of the smallest tail of any run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; values.len()];

    for (pos, &value) in values.iter().enumerate() {
        let len = tails.partition_point(|&t| values[t] < value);
        previous[pos] = len.checked_sub(1).map(|k| tails[k]);
        if len == tails.len() {
            tails.push(pos);
        } else {
            tails[len] = pos;
        }
    }

    let mut kept = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(pos) = cursor {
        kept[pos] = true;
        cursor = previous[pos];
    }
    kept
}
