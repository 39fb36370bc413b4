use crate::ap::utils::{Item, Itemset};

/// Calls `callback` with every `k`-combination of `items`, in lexicographic
/// order of positions.
pub fn for_each_combination<F>(items: &[Item], k: usize, callback: &mut F)
where
    F: FnMut(&[Item]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, callback);
}

fn generate_combinations_recursive<F>(
    items: &[Item],
    k: usize,
    start: usize,
    current: &mut Vec<Item>,
    callback: &mut F,
) where
    F: FnMut(&[Item]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Leave room for the items still needed.
    let last_start = items.len() - (k - current.len());
    for i in start..=last_start {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// Items of the sorted `itemset` that are not in the sorted `subset`.
pub fn complement(itemset: &[Item], subset: &[Item]) -> Itemset {
    itemset
        .iter()
        .copied()
        .filter(|item| subset.binary_search(item).is_err())
        .collect()
}
