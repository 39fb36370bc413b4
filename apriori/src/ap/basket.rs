use super::utils::{canonicalize, Item};
use ndarray::ArrayView2;

/// One transaction's set of items, kept sorted and duplicate-free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Basket {
    items: Vec<Item>,
}

impl Basket {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self { items: canonicalize(items.into_iter().collect()) }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every item of the sorted `itemset` is in this basket.
    pub fn contains_all(&self, itemset: &[Item]) -> bool {
        if itemset.len() > self.items.len() {
            return false;
        }
        let mut mine = self.items.iter();
        itemset
            .iter()
            .all(|wanted| mine.by_ref().any(|item| item == wanted))
    }
}

impl FromIterator<Item> for Basket {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Converts a dense 0/1 transaction matrix into baskets.
///
/// Rows are transactions and column indices are item ids; any non-zero cell
/// marks the item as present.
pub fn matrix_to_baskets(transactions: ArrayView2<i32>) -> Vec<Basket> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
