use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::models::Statement;

/// Presentation-only permutation of `statements`.
///
/// Each call seeds its own generator from `seed`, so the output depends on
/// nothing but the arguments and concurrent calls cannot disturb each other.
/// Locked statements are shuffled like the rest.
pub fn scramble(statements: &[Statement], seed: u64) -> Vec<Statement> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order = statements.to_vec();
    // Fisher-Yates
    order.shuffle(&mut rng);
    log::trace!("scrambled {} statements with seed {seed}", order.len());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Statement;

    fn statements(n: usize) -> Vec<Statement> {
        (1..=n).map(|i| Statement::new(i, format!("line {i}"))).collect()
    }

    fn line_numbers(statements: &[Statement]) -> Vec<usize> {
        statements.iter().map(|s| s.line_number).collect()
    }

    #[test]
    fn test_same_seed_same_order() {
        let input = statements(12);
        let first = scramble(&input, 42);
        for _ in 0..10 {
            assert_eq!(scramble(&input, 42), first);
        }
    }

    #[test]
    fn test_scramble_is_a_permutation() {
        let input = statements(20);
        let mut shuffled = line_numbers(&scramble(&input, 7));
        shuffled.sort_unstable();
        assert_eq!(shuffled, line_numbers(&input));
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let input = statements(20);
        let orders: std::collections::HashSet<_> = (0..8u64)
            .map(|seed| line_numbers(&scramble(&input, seed)))
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_input_is_untouched() {
        let input = statements(5);
        let before = input.clone();
        let _ = scramble(&input, 1);
        assert_eq!(input, before);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(scramble(&[], 3).is_empty());
        assert_eq!(scramble(&statements(1), 3), statements(1));
    }

    #[test]
    fn test_parallel_scrambles_match_serial() {
        let input = statements(30);
        let expected: Vec<_> = (0..8u64).map(|seed| scramble(&input, seed)).collect();

        let parallel: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8u64)
                .map(|seed| {
                    let input = &input;
                    s.spawn(move || scramble(input, seed))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(parallel, expected);
    }
}
