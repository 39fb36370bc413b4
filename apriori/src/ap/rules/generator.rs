use super::combinations::{complement, for_each_combination};
use crate::ap::utils::{FrequentItemsets, Item, Itemset};
use tracing::{debug, trace};

/// An association rule `antecedent -> consequent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support count of `antecedent ∪ consequent`.
    pub support: usize,
    /// `support / support(antecedent)`.
    pub confidence: f64,
    /// `confidence / (support(consequent) / num_baskets)`; `None` when the
    /// table does not know its basket count or the consequent's support.
    pub lift: Option<f64>,
}

/// Derives every rule of `table` whose confidence is at least
/// `min_confidence`.
///
/// Itemsets are visited in table order. For each one, antecedents are taken
/// by ascending size and, within a size, in lexicographic order; the
/// consequent is the rest of the itemset. A split whose antecedent is absent
/// from the table (or has zero support) is skipped.
pub fn generate_rules(table: &FrequentItemsets, min_confidence: f64) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut skipped = 0usize;

    for (itemset, support) in table.iter().filter(|(items, _)| items.len() > 1) {
        for antecedent_size in 1..itemset.len() {
            for_each_combination(itemset, antecedent_size, &mut |antecedent: &[Item]| {
                let Some(antecedent_support) =
                    table.support(antecedent).filter(|&count| count > 0)
                else {
                    trace!(?itemset, ?antecedent, "antecedent missing from table");
                    skipped += 1;
                    return;
                };

                let confidence = support as f64 / antecedent_support as f64;
                if confidence < min_confidence {
                    return;
                }

                let consequent = complement(itemset, antecedent);
                let lift = lift(table, &consequent, confidence);
                rules.push(Rule {
                    antecedent: antecedent.to_vec(),
                    consequent,
                    support,
                    confidence,
                    lift,
                });
            });
        }
    }

    debug!(min_confidence, rules = rules.len(), skipped, "generated association rules");
    rules
}

fn lift(table: &FrequentItemsets, consequent: &[Item], confidence: f64) -> Option<f64> {
    let num_baskets = table.num_baskets();
    if num_baskets == 0 {
        return None;
    }
    let consequent_support = table.support(consequent).filter(|&count| count > 0)?;
    Some(confidence * num_baskets as f64 / consequent_support as f64)
}
