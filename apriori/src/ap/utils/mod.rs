pub mod storage;

pub use storage::{canonicalize, is_canonical, FrequentItemsets, FrequentLevel, Item, Itemset, ItemsetStorage};
