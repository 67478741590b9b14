//! Number frequency tables

use crate::draws::DrawStore;
use crate::types::{in_range, FrequencyTable, NUMBER_COUNT, NUMBER_MIN};

/// The three frequency tables computed from one store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    pub main: FrequencyTable,
    pub bonus: FrequencyTable,
    pub combined: FrequencyTable,
}

/// Slot `n - 1` holds the count of number `n`
type Counts = [u32; NUMBER_COUNT];

fn tally<I: IntoIterator<Item = u8>>(numbers: I) -> Counts {
    let mut counts = [0u32; NUMBER_COUNT];
    for n in numbers {
        if in_range(n) {
            counts[usize::from(n - NUMBER_MIN)] += 1;
        }
    }
    counts
}

fn to_table(counts: &Counts) -> FrequencyTable {
    FrequencyTable::from_counts(
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as u8 + NUMBER_MIN, c)),
    )
}

/// Count every number over all main-number slots
pub fn main_frequencies(store: &DrawStore) -> FrequencyTable {
    to_table(&tally(store.iter().flat_map(|d| d.main_numbers().iter().copied())))
}

/// Count bonus numbers over draws that have one; empty when none do
pub fn bonus_frequencies(store: &DrawStore) -> FrequencyTable {
    to_table(&tally(store.iter().filter_map(|d| d.bonus())))
}

/// Merge two tables additively
pub fn combined_frequencies(main: &FrequencyTable, bonus: &FrequencyTable) -> FrequencyTable {
    let mut counts = [0u32; NUMBER_COUNT];
    for (slot, (m, b)) in counts
        .iter_mut()
        .zip(main.zero_filled().into_iter().zip(bonus.zero_filled()))
    {
        *slot = m + b;
    }
    to_table(&counts)
}

/// Main, bonus and combined tables
pub fn frequency_report(store: &DrawStore) -> FrequencyReport {
    let main = main_frequencies(store);
    let bonus = bonus_frequencies(store);
    let combined = combined_frequencies(&main, &bonus);
    tracing::debug!(
        main_numbers = main.len(),
        bonus_numbers = bonus.len(),
        "computed frequency tables"
    );
    FrequencyReport {
        main,
        bonus,
        combined,
    }
}

/// Zero-filled counts for 1..=50 over an arbitrary number sequence
pub fn observed_counts(numbers: &[u8]) -> Vec<u32> {
    tally(numbers.iter().copied()).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::fixtures::three_draws;

    #[test]
    fn test_main_frequencies() {
        let table = main_frequencies(&three_draws());
        assert_eq!(table.get(1), 2);
        assert_eq!(table.get(7), 1);
        assert_eq!(table.get(10), 1);
        assert_eq!(table.get(50), 0);
        assert_eq!(table.total(), 21);
        // Ties on count resolve by number ascending
        assert_eq!(table.rows()[0].number, 1);
        assert_eq!(table.rows()[5].number, 6);
        assert_eq!(table.rows()[6].number, 7);
    }

    #[test]
    fn test_bonus_and_combined() {
        let report = frequency_report(&three_draws());
        assert_eq!(report.bonus.len(), 2);
        assert_eq!(report.bonus.get(9), 1);
        assert_eq!(report.bonus.get(1), 1);
        assert_eq!(report.combined.get(1), 3);
        assert_eq!(report.combined.get(9), 1);
        assert_eq!(report.combined.rows()[0].number, 1);
        for n in 1..=50u8 {
            assert_eq!(
                report.combined.get(n),
                report.main.get(n) + report.bonus.get(n)
            );
        }
    }

    #[test]
    fn test_no_bonus_gives_empty_table() {
        let store = DrawStore::new(vec![crate::draws::fixtures::draw(
            "2024-01-01",
            [1, 2, 3, 4, 5, 6, 7],
            None,
        )])
        .unwrap();
        let report = frequency_report(&store);
        assert!(report.bonus.is_empty());
        assert_eq!(report.combined, report.main);
    }

    #[test]
    fn test_empty_store() {
        let report = frequency_report(&DrawStore::default());
        assert!(report.main.is_empty());
        assert!(report.combined.is_empty());
    }

    #[test]
    fn test_observed_counts_zero_filled() {
        let counts = observed_counts(&[1, 1, 50]);
        assert_eq!(counts.len(), 50);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[49], 1);
        assert_eq!(counts[24], 0);
    }
}
