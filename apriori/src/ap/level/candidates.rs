use crate::ap::basket::Basket;
use crate::ap::utils::{FrequentLevel, Item, Itemset};
use std::collections::BTreeSet;

/// Every distinct item of any basket as a 1-itemset.
pub fn single_item_candidates(baskets: &[Basket]) -> BTreeSet<Itemset> {
    baskets
        .iter()
        .flat_map(|basket| basket.items().iter().map(|&item| vec![item]))
        .collect()
}

/// Next-level candidates: the union of every pair of itemsets in `level`
/// whose union is exactly one item larger.
///
/// Pairs are compared all-against-all, so this is quadratic in the level
/// size. The `BTreeSet` both deduplicates and keeps candidates in
/// lexicographic order.
pub fn candidates_from_level(level: &FrequentLevel) -> BTreeSet<Itemset> {
    let target = level.itemset_size + 1;
    let itemsets: Vec<&[Item]> = level.iter_itemsets().collect();
    let mut candidates = BTreeSet::new();

    for (i, left) in itemsets.iter().enumerate() {
        for right in &itemsets[i + 1..] {
            let union = union_sorted(left, right);
            if union.len() == target {
                candidates.insert(union);
            }
        }
    }

    candidates
}

/// Merges two sorted, duplicate-free slices into their sorted union.
pub fn union_sorted(left: &[Item], right: &[Item]) -> Itemset {
    let mut union = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => {
                union.push(left[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                union.push(right[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                union.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    union.extend_from_slice(&left[i..]);
    union.extend_from_slice(&right[j..]);
    union
}
