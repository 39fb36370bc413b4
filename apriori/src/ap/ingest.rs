use super::basket::Basket;
use super::catalog::ItemCatalog;
use super::errors::{AprioriError, AprioriResult};
use super::utils::Item;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_TRANSACTION_COLUMN: &str = "TransactionNo";
pub const DEFAULT_ITEM_COLUMN: &str = "Items";

/// Which columns of the transaction table hold the basket id and the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub transaction_column: String,
    pub item_column: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            transaction_column: DEFAULT_TRANSACTION_COLUMN.to_owned(),
            item_column: DEFAULT_ITEM_COLUMN.to_owned(),
        }
    }
}

/// Baskets read from a transaction table, with the names behind item ids.
#[derive(Debug, Clone, Default)]
pub struct Transactions {
    pub baskets: Vec<Basket>,
    pub catalog: ItemCatalog,
}

impl Transactions {
    pub fn len(&self) -> usize {
        self.baskets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baskets.is_empty()
    }

    /// Keeps the leading `floor(len * data_percentage)` baskets.
    ///
    /// This is a truncation in transaction-id order, not a random sample. The catalog
    /// is left untouched.
    pub fn truncate(&mut self, data_percentage: f64) {
        let keep = (self.baskets.len() as f64 * data_percentage.clamp(0.0, 1.0)) as usize;
        debug!(total = self.baskets.len(), keep, "truncating baskets");
        self.baskets.truncate(keep);
    }
}

pub fn read_transactions_path(path: &Path, options: &IngestOptions) -> AprioriResult<Transactions> {
    let file = File::open(path)?;
    read_transactions(BufReader::new(file), options)
}

/// Reads a CSV transaction table into baskets.
///
/// The first line is the header. Exact duplicate rows are dropped, then rows
/// are grouped by the transaction column into baskets sorted by transaction
/// id. Ids compare as integers when all of them parse as one, otherwise as
/// strings. Item ids follow the sorted order of item names. An item repeated
/// within one transaction counts once.
pub fn read_transactions<R: BufRead>(reader: R, options: &IngestOptions) -> AprioriResult<Transactions> {
    let mut lines = reader.lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((idx, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break split_record(&line, idx + 1)?;
                }
            }
            None => return Ok(Transactions::default()),
        }
    };

    let transaction_idx = column_index(&header, &options.transaction_column)?;
    let item_idx = column_index(&header, &options.item_column)?;

    let mut seen_rows: HashSet<Vec<String>> = HashSet::new();
    let mut basket_of: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<Item>)> = Vec::new();
    let mut catalog = ItemCatalog::new();
    let mut duplicates = 0usize;

    for (idx, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let record = split_record(&line, line_no)?;
        if record.len() != header.len() {
            return Err(AprioriError::MalformedRow {
                line: line_no,
                reason: format!("expected {} fields, found {}", header.len(), record.len()),
            });
        }

        let transaction = record[transaction_idx].clone();
        let item = catalog.intern(&record[item_idx]);

        if !seen_rows.insert(record) {
            duplicates += 1;
            continue;
        }

        let slot = *basket_of.entry(transaction.clone()).or_insert_with(|| {
            grouped.push((transaction, Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(item);
    }

    sort_by_transaction_id(&mut grouped);
    let (catalog, remap) = catalog.into_sorted();
    let baskets: Vec<Basket> = grouped
        .into_iter()
        .map(|(_, items)| items.into_iter().map(|item| remap[item]).collect())
        .collect();
    info!(
        baskets = baskets.len(),
        items = catalog.len(),
        duplicate_rows = duplicates,
        "read transaction table"
    );
    Ok(Transactions { baskets, catalog })
}

fn sort_by_transaction_id(grouped: &mut [(String, Vec<Item>)]) {
    if grouped.iter().all(|(id, _)| id.parse::<i64>().is_ok()) {
        grouped.sort_by_cached_key(|(id, _)| id.parse::<i64>().unwrap_or_default());
    } else {
        grouped.sort_by(|a, b| a.0.cmp(&b.0));
    }
}

fn column_index(header: &[String], name: &str) -> AprioriResult<usize> {
    header
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| AprioriError::MissingColumn { name: name.to_owned() })
}

/// Splits one CSV line into trimmed fields. Double-quoted fields may hold
/// commas and `""` escapes; a record may not span lines.
fn split_record(line: &str, line_no: usize) -> AprioriResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(field.trim().to_owned());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(AprioriError::MalformedRow {
            line: line_no,
            reason: "unterminated quoted field".into(),
        });
    }
    fields.push(field.trim().to_owned());
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_record_quotes() {
        let fields = split_record(r#"1,"Bread, white","say ""hi""", x "#, 1).unwrap();
        assert_eq!(fields, vec!["1", "Bread, white", r#"say "hi""#, "x"]);
    }

    #[test]
    fn test_sort_by_transaction_id() {
        let mut numeric = vec![("10".to_owned(), vec![0]), ("9".to_owned(), vec![1])];
        sort_by_transaction_id(&mut numeric);
        assert_eq!(numeric[0].0, "9");

        let mut mixed = vec![("b".to_owned(), vec![0]), ("10".to_owned(), vec![1]), ("9".to_owned(), vec![2])];
        sort_by_transaction_id(&mut mixed);
        let ids: Vec<&str> = mixed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["10", "9", "b"]);
    }

    #[test]
    fn test_split_record_unterminated() {
        let err = split_record(r#"1,"Bread"#, 7).unwrap_err();
        assert!(matches!(err, AprioriError::MalformedRow { line: 7, .. }));
    }
}
