use std::collections::{BTreeMap, HashMap};

pub type Item = usize;
pub type Itemset = Vec<Item>;

/// Sorts and dedups items so that equal itemsets share a single key.
pub fn canonicalize(mut items: Vec<Item>) -> Itemset {
    items.sort_unstable();
    items.dedup();
    items
}

pub fn is_canonical(items: &[Item]) -> bool {
    items.windows(2).all(|pair| pair[0] < pair[1])
}

/// Flat storage of itemsets with their support counts
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<Item>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size, in insertion order
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_itemset_with_support(&mut self, items: Vec<Item>, support: usize) {
        let items = canonicalize(items);
        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[Item] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self { storage: ItemsetStorage::new(), itemset_size }
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<Item>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset_with_support(items, support);
        self.storage.len() - 1
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[Item]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their support counts.
    pub fn iter(&self) -> impl Iterator<Item = (&[Item], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }
}

/// The frequent-itemset table: every frequent itemset of every size with its
/// support count.
///
/// Levels are indexed by itemset size (`levels[0]` holds 1-itemsets).
/// Iteration goes level by level, and within a level in the order itemsets
/// were added, which is lexicographic for tables built by the miner or by
/// [`FrequentItemsets::from_counts`]. Lookups go through a hash index keyed by
/// the canonical item tuple.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<FrequentLevel>,
    index: HashMap<Itemset, usize>,
    num_baskets: usize,
}

impl FrequentItemsets {
    pub fn new(num_baskets: usize) -> Self {
        Self { levels: Vec::new(), index: HashMap::new(), num_baskets }
    }

    /// Builds a table from arbitrary `(itemset, support)` pairs.
    ///
    /// Itemsets are canonicalized first; when two pairs canonicalize to the
    /// same key the later one wins. No subset-closure check is made.
    pub fn from_counts<I>(counts: I, num_baskets: usize) -> Self
    where
        I: IntoIterator<Item = (Vec<Item>, usize)>,
    {
        let ordered: BTreeMap<(usize, Itemset), usize> = counts
            .into_iter()
            .map(|(items, support)| {
                let items = canonicalize(items);
                ((items.len(), items), support)
            })
            .collect();
        let mut table = Self::new(num_baskets);
        for ((size, items), support) in ordered {
            if size == 0 {
                continue;
            }
            table.ensure_level(size).add_itemset_with_support(items.clone(), support);
            table.index.insert(items, support);
        }
        table
    }

    /// Appends a freshly mined level. Its size must follow the last level.
    pub(crate) fn push_level(&mut self, level: FrequentLevel) {
        debug_assert_eq!(level.itemset_size, self.levels.len() + 1);
        for (items, support) in level.iter() {
            self.index.insert(items.to_vec(), support);
        }
        self.levels.push(level);
    }

    fn ensure_level(&mut self, size: usize) -> &mut FrequentLevel {
        while self.levels.len() < size {
            self.levels.push(FrequentLevel::new(self.levels.len() + 1));
        }
        &mut self.levels[size - 1]
    }

    /// Support count of `items`, or `None` when the itemset is not frequent.
    pub fn support(&self, items: &[Item]) -> Option<usize> {
        if is_canonical(items) {
            self.index.get(items).copied()
        } else {
            self.index.get(&canonicalize(items.to_vec())).copied()
        }
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.support(items).is_some()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of baskets the table was mined from (0 when unknown).
    pub fn num_baskets(&self) -> usize {
        self.num_baskets
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn level(&self, itemset_size: usize) -> Option<&FrequentLevel> {
        itemset_size.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    /// Largest itemset size present in the table.
    pub fn max_itemset_size(&self) -> usize {
        self.levels
            .iter()
            .rev()
            .find(|level| !level.is_empty())
            .map_or(0, |level| level.itemset_size)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Item], usize)> {
        self.levels.iter().flat_map(|level| level.iter())
    }
}
