//! Pair and triplet co-occurrence counting
//!
//! Every draw contributes its C(7,2) = 21 pairs and C(7,3) = 35 triplets,
//! generated from the ascending-sorted main numbers so each key is canonical.

use std::collections::HashMap;

use crate::draws::DrawStore;
use crate::types::{PairCount, TripletCount, MAIN_NUMBERS};

/// Ranked pair and triplet tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceTables {
    pairs: Vec<PairCount>,
    triplets: Vec<TripletCount>,
}

/// Highest-ranked pair and triplet containing a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch {
    pub number: u32,
    pub pair: Option<PairCount>,
    pub triplet: Option<TripletCount>,
}

/// Every pair and triplet containing a number, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberCombinations {
    pub number: u32,
    pub pairs: Vec<PairCount>,
    pub triplets: Vec<TripletCount>,
}

impl NumberCombinations {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.triplets.is_empty()
    }
}

/// Add one draw's pairs and triplets to the running counts
fn accumulate(
    sorted: &[u8; MAIN_NUMBERS],
    pairs: &mut HashMap<(u8, u8), u32>,
    triplets: &mut HashMap<(u8, u8, u8), u32>,
) {
    for i in 0..MAIN_NUMBERS {
        for j in (i + 1)..MAIN_NUMBERS {
            *pairs.entry((sorted[i], sorted[j])).or_insert(0) += 1;
            for k in (j + 1)..MAIN_NUMBERS {
                *triplets.entry((sorted[i], sorted[j], sorted[k])).or_insert(0) += 1;
            }
        }
    }
}

/// Count pair and triplet co-occurrences across the whole store
pub fn build_cooccurrence(store: &DrawStore) -> CooccurrenceTables {
    let mut pair_counts: HashMap<(u8, u8), u32> = HashMap::new();
    let mut triplet_counts: HashMap<(u8, u8, u8), u32> = HashMap::new();

    for draw in store {
        accumulate(&draw.sorted_main(), &mut pair_counts, &mut triplet_counts);
    }

    let mut pairs: Vec<PairCount> = pair_counts
        .into_iter()
        .map(|((num1, num2), count)| PairCount { num1, num2, count })
        .collect();
    pairs.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then((a.num1, a.num2).cmp(&(b.num1, b.num2)))
    });

    let mut triplets: Vec<TripletCount> = triplet_counts
        .into_iter()
        .map(|((num1, num2, num3), count)| TripletCount {
            num1,
            num2,
            num3,
            count,
        })
        .collect();
    triplets.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then((a.num1, a.num2, a.num3).cmp(&(b.num1, b.num2, b.num3)))
    });

    tracing::debug!(
        draws = store.len(),
        pairs = pairs.len(),
        triplets = triplets.len(),
        "built co-occurrence tables"
    );
    CooccurrenceTables { pairs, triplets }
}

impl CooccurrenceTables {
    /// Pairs ranked by count descending, then `(num1, num2)` ascending
    pub fn pairs(&self) -> &[PairCount] {
        &self.pairs
    }

    /// Triplets ranked by count descending, then `(num1, num2, num3)` ascending
    pub fn triplets(&self) -> &[TripletCount] {
        &self.triplets
    }

    /// First pair and first triplet containing `number`
    pub fn best_match(&self, number: u32) -> BestMatch {
        BestMatch {
            number,
            pair: self.pairs.iter().find(|p| p.contains(number)).copied(),
            triplet: self.triplets.iter().find(|t| t.contains(number)).copied(),
        }
    }

    /// All pairs and triplets containing `number`; empty if it never
    /// co-occurred with anything
    pub fn list_all(&self, number: u32) -> NumberCombinations {
        NumberCombinations {
            number,
            pairs: self
                .pairs
                .iter()
                .filter(|p| p.contains(number))
                .copied()
                .collect(),
            triplets: self
                .triplets
                .iter()
                .filter(|t| t.contains(number))
                .copied()
                .collect(),
        }
    }
}
