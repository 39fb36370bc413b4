use super::candidates::{candidates_from_level, single_item_candidates};
use crate::ap::basket::{matrix_to_baskets, Basket};
use crate::ap::utils::{FrequentItemsets, FrequentLevel, Item, Itemset};
use ndarray::ArrayView2;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Level-wise Apriori over `baskets`.
///
/// `min_support` is an absolute basket count. Each level counts its
/// candidates with a full scan of the baskets, keeps those reaching the
/// threshold and joins the survivors into the next level's candidates.
/// Mining stops at the first level where nothing survives.
///
/// A `min_support` of 0 admits every combination of the items present and
/// grows combinatorially with the number of distinct items; callers must
/// bound their input accordingly.
pub fn mine(baskets: &[Basket], min_support: usize) -> FrequentItemsets {
    let mut table = FrequentItemsets::new(baskets.len());
    let mut candidates = single_item_candidates(baskets);
    let mut itemset_size = 1;

    while !candidates.is_empty() {
        let level = count_level(baskets, &candidates, itemset_size, min_support);
        debug!(
            itemset_size,
            candidates = candidates.len(),
            frequent = level.len(),
            "counted apriori level"
        );

        if level.is_empty() {
            break;
        }

        candidates = candidates_from_level(&level);
        table.push_level(level);
        itemset_size += 1;
    }

    info!(
        baskets = baskets.len(),
        min_support,
        frequent_itemsets = table.len(),
        max_itemset_size = table.max_itemset_size(),
        "apriori mining finished"
    );
    table
}

/// Mines a dense 0/1 transaction matrix (rows are baskets, columns items).
pub fn mine_matrix(transactions: ArrayView2<i32>, min_support: usize) -> FrequentItemsets {
    let baskets = matrix_to_baskets(transactions);
    mine(&baskets, min_support)
}

/// Converts a relative support in `[0, 1]` into an absolute basket count.
pub fn min_support_count(min_support: f64, num_baskets: usize) -> usize {
    (min_support * num_baskets as f64).ceil() as usize
}

/// Number of baskets containing every item of the sorted `itemset`.
pub fn support_count(baskets: &[Basket], itemset: &[Item]) -> usize {
    baskets
        .iter()
        .filter(|basket| basket.len() >= itemset.len() && basket.contains_all(itemset))
        .count()
}

fn count_level(
    baskets: &[Basket],
    candidates: &BTreeSet<Itemset>,
    itemset_size: usize,
    min_support: usize,
) -> FrequentLevel {
    let mut level = FrequentLevel::new(itemset_size);

    for candidate in candidates {
        let support = support_count(baskets, candidate);
        if support >= min_support {
            level.add_itemset_with_support(candidate.clone(), support);
        }
    }

    level
}
