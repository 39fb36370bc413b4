pub mod combinations;
pub mod generator;

pub use combinations::{complement, for_each_combination};
pub use generator::{generate_rules, Rule};
