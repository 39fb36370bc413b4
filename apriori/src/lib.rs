//! Level-wise (Apriori) frequent itemset mining and association rules over
//! baskets of items.
//!
//! ```
//! use apriori::{generate_rules, mine, Basket};
//!
//! let baskets = vec![
//!     Basket::new([0, 1]),
//!     Basket::new([0, 1]),
//!     Basket::new([0]),
//! ];
//! let table = mine(&baskets, 2);
//! assert_eq!(table.support(&[0, 1]), Some(2));
//!
//! let rules = generate_rules(&table, 0.9);
//! assert_eq!(rules.len(), 1);
//! assert_eq!(rules[0].antecedent, vec![1]);
//! ```

pub mod ap;

pub use ap::{
    generate_rules, matrix_to_baskets, mine, mine_matrix, min_support_count, read_transactions,
    read_transactions_path, render_itemsets, render_rules, AprioriError, AprioriResult, Basket,
    FrequentItemsets, FrequentLevel, IngestOptions, Item, ItemCatalog, Itemset, MiningConfig, Rule,
    Transactions,
};
