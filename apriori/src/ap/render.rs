use super::catalog::ItemCatalog;
use super::rules::Rule;
use super::utils::{FrequentItemsets, Item};
use std::fmt::Write;

fn item_label(item: Item, catalog: Option<&ItemCatalog>) -> String {
    catalog
        .and_then(|catalog| catalog.name(item))
        .map_or_else(|| item.to_string(), str::to_owned)
}

fn join_items(items: &[Item], catalog: Option<&ItemCatalog>) -> String {
    items
        .iter()
        .map(|&item| item_label(item, catalog))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `(a, b)`
pub fn format_itemset(items: &[Item], catalog: Option<&ItemCatalog>) -> String {
    format!("({})", join_items(items, catalog))
}

/// One `"(a, b): Support=n"` line per itemset, in table order.
pub fn render_itemsets(table: &FrequentItemsets, catalog: Option<&ItemCatalog>) -> String {
    let mut out = String::new();
    for (items, support) in table.iter() {
        let _ = writeln!(out, "{}: Support={}", format_itemset(items, catalog), support);
    }
    out
}

/// One `"Rule: {a} -> {b}, Support=n, Confidence=c"` line per rule.
///
/// Confidence and lift print at full precision (`1.0`, `0.6666666666666666`).
pub fn render_rules(rules: &[Rule], catalog: Option<&ItemCatalog>) -> String {
    let mut out = String::new();
    for rule in rules {
        let _ = write!(
            out,
            "Rule: {{{}}} -> {{{}}}, Support={}, Confidence={:?}",
            join_items(&rule.antecedent, catalog),
            join_items(&rule.consequent, catalog),
            rule.support,
            rule.confidence,
        );
        if let Some(lift) = rule.lift {
            let _ = write!(out, ", Lift={lift:?}");
        }
        out.push('\n');
    }
    out
}
