pub mod candidates;
pub mod mining;

pub use candidates::{candidates_from_level, single_item_candidates, union_sorted};
pub use mining::{mine, mine_matrix, min_support_count, support_count};
