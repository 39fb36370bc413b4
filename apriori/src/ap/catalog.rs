use super::utils::Item;
use std::collections::HashMap;

/// Interns item names into dense ids, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    names: Vec<String>,
    ids: HashMap<String, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Item {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<Item> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, item: Item) -> Option<&str> {
        self.names.get(item).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Renumbers items so that ids follow the sorted order of their names.
    ///
    /// Returns the new catalog and a table mapping each old id to its new id.
    pub fn into_sorted(self) -> (Self, Vec<Item>) {
        let mut order: Vec<Item> = (0..self.names.len()).collect();
        order.sort_by(|&a, &b| self.names[a].cmp(&self.names[b]));

        let mut remap = vec![0; self.names.len()];
        let mut sorted = Self::new();
        for old in order {
            remap[old] = sorted.intern(&self.names[old]);
        }
        (sorted, remap)
    }
}
