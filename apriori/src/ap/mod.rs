pub mod basket;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod level;
pub mod render;
pub mod rules;
pub mod utils;

pub use basket::{matrix_to_baskets, Basket};
pub use catalog::ItemCatalog;
pub use config::MiningConfig;
pub use errors::{AprioriError, AprioriResult};
pub use ingest::{read_transactions, read_transactions_path, IngestOptions, Transactions};
pub use level::{mine, mine_matrix, min_support_count, support_count};
pub use render::{format_itemset, render_itemsets, render_rules};
pub use rules::{generate_rules, Rule};
pub use utils::{canonicalize, FrequentItemsets, FrequentLevel, Item, Itemset};
