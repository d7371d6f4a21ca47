//! In-memory list collection with whole-file JSON persistence.
//!
//! Names and items are compared case-insensitively; the casing a list was
//! created with is kept for display and for the persisted document.

use super::persistence;
use crate::config::StoreConfig;
use list_bot_types::{
    AddManyOutcome, AddOutcome, ListDocument, ListError, ListLimits, ListStats, ListSummary,
    ListView, RejectedItem, RemovedItem, SearchHit,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedList {
    name: String,
    items: Vec<String>,
}

impl NamedList {
    fn position_of(&self, item: &str) -> Option<usize> {
        let needle = fold(item);
        self.items.iter().position(|existing| fold(existing) == needle)
    }
}

/// The single owner of all lists for the lifetime of the process
pub struct ListStore {
    /// Case-folded name -> list. Ordered, so listings and searches are stable.
    lists: BTreeMap<String, NamedList>,
    limits: ListLimits,
    /// None keeps the store purely in memory
    data_file: Option<PathBuf>,
    backup_enabled: bool,
}

impl ListStore {
    /// Create an empty store that never touches the disk
    pub fn new(limits: ListLimits) -> Self {
        Self {
            lists: BTreeMap::new(),
            limits,
            data_file: None,
            backup_enabled: false,
        }
    }

    /// Open the store backed by `config.data_file`. A missing or corrupt file
    /// yields an empty store; the file is (re)created on the first mutation.
    pub fn open(config: &StoreConfig) -> Self {
        let doc = persistence::load_or_recover(&config.data_file);
        let mut store = Self::from_document(doc, config.limits);
        store.data_file = Some(config.data_file.clone());
        store.backup_enabled = config.backup_enabled;
        store
    }

    /// Build an in-memory store from a persisted document. Names or items
    /// that collide case-insensitively keep their first occurrence.
    pub fn from_document(doc: ListDocument, limits: ListLimits) -> Self {
        let mut store = Self::new(limits);
        for (name, items) in doc {
            let key = fold(&name);
            if store.lists.contains_key(&key) {
                log::warn!("Skipping list '{}': name collides with an existing list", name);
                continue;
            }
            let mut list = NamedList {
                name,
                items: Vec::with_capacity(items.len()),
            };
            for item in items {
                if list.position_of(&item).is_some() {
                    log::warn!("Dropping duplicate '{}' from '{}'", item, list.name);
                    continue;
                }
                list.items.push(item);
            }
            store.lists.insert(key, list);
        }
        store
    }

    pub fn to_document(&self) -> ListDocument {
        self.lists
            .values()
            .map(|list| (list.name.clone(), list.items.clone()))
            .collect()
    }

    pub fn limits(&self) -> &ListLimits {
        &self.limits
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Create an empty list, keeping the given casing for display
    pub fn create(&mut self, name: &str) -> Result<String, ListError> {
        let name = self.validate_list_name(name)?;
        let key = fold(&name);

        if self.lists.contains_key(&key) {
            return Err(ListError::AlreadyExists { name });
        }
        if self.lists.len() >= self.limits.max_lists {
            return Err(ListError::LimitExceeded(format!(
                "Maximum {} lists allowed",
                self.limits.max_lists
            )));
        }

        self.lists.insert(
            key,
            NamedList {
                name: name.clone(),
                items: Vec::new(),
            },
        );
        self.persist();

        log::info!("Created list: {}", name);
        Ok(name)
    }

    /// Delete a list and everything in it
    pub fn delete(&mut self, name: &str) -> Result<ListSummary, ListError> {
        let key = fold(name.trim());
        let removed = self.lists.remove(&key).ok_or_else(|| not_found(name))?;
        self.persist();

        log::info!("Deleted list: {}", removed.name);
        Ok(ListSummary {
            name: removed.name,
            item_count: removed.items.len(),
        })
    }

    /// Append one item. An item already present (any casing) is reported as
    /// `AddOutcome::Duplicate` and leaves the list untouched.
    pub fn add(&mut self, name: &str, item: &str) -> Result<AddOutcome, ListError> {
        let item = self.validate_item(item)?;
        let max_items = self.limits.max_items_per_list;
        let list = self.get_mut(name)?;

        if let Some(pos) = list.position_of(&item) {
            return Ok(AddOutcome::Duplicate {
                list_name: list.name.clone(),
                item: list.items[pos].clone(),
            });
        }
        if list.items.len() >= max_items {
            return Err(ListError::LimitExceeded(format!(
                "Maximum {} items per list allowed",
                max_items
            )));
        }

        list.items.push(item.clone());
        let list_name = list.name.clone();
        self.persist();

        log::info!("Added '{}' to '{}'", item, list_name);
        Ok(AddOutcome::Added { list_name, item })
    }

    /// Add a batch of items with `add` semantics per item, persisting once.
    /// Only a missing list, an empty batch, or a batch that would overflow
    /// the list fails as a whole.
    pub fn add_many<S: AsRef<str>>(
        &mut self,
        name: &str,
        items: &[S],
    ) -> Result<AddManyOutcome, ListError> {
        let limits = self.limits;
        let list = self.get_mut(name)?;

        let candidates: Vec<&str> = items
            .iter()
            .map(|item| item.as_ref().trim())
            .filter(|item| !item.is_empty())
            .collect();
        if candidates.is_empty() {
            return Err(ListError::Validation("No valid items found".to_string()));
        }

        let mut outcome = AddManyOutcome {
            list_name: list.name.clone(),
            ..Default::default()
        };
        let mut fresh: Vec<String> = Vec::new();

        for item in candidates {
            if item.chars().count() > limits.max_item_length {
                outcome.rejected.push(RejectedItem {
                    item: item.to_string(),
                    reason: format!("longer than {} characters", limits.max_item_length),
                });
                continue;
            }
            let folded = fold(item);
            let seen = list.position_of(item).is_some()
                || fresh.iter().any(|f| fold(f) == folded);
            if seen {
                outcome.duplicates.push(item.to_string());
            } else {
                fresh.push(item.to_string());
            }
        }

        if list.items.len() + fresh.len() > limits.max_items_per_list {
            return Err(ListError::LimitExceeded(format!(
                "Adding {} items would exceed the limit of {} items per list",
                fresh.len(),
                limits.max_items_per_list
            )));
        }

        list.items.extend(fresh.iter().cloned());
        outcome.added = fresh;

        if !outcome.added.is_empty() {
            self.persist();
            log::info!(
                "Added {} items to '{}': {:?}",
                outcome.added.len(),
                outcome.list_name,
                outcome.added
            );
        }
        Ok(outcome)
    }

    /// Remove the first case-insensitive match
    pub fn remove(&mut self, name: &str, item: &str) -> Result<RemovedItem, ListError> {
        let item = item.trim();
        let list = self.get_mut(name)?;

        let pos = list.position_of(item).ok_or_else(|| ListError::ItemNotFound {
            list: list.name.clone(),
            item: item.to_string(),
        })?;
        let removed = RemovedItem {
            list_name: list.name.clone(),
            item: list.items.remove(pos),
            position: pos + 1,
        };
        self.persist();

        log::info!("Removed '{}' from '{}'", removed.item, removed.list_name);
        Ok(removed)
    }

    pub fn show(&self, name: &str) -> Result<ListView, ListError> {
        let list = self.get(name)?;
        Ok(ListView::new(list.name.clone(), &list.items))
    }

    /// All lists with their item counts, alphabetical by case-folded name
    pub fn list_all(&self) -> Vec<ListSummary> {
        self.lists
            .values()
            .map(|list| ListSummary {
                name: list.name.clone(),
                item_count: list.items.len(),
            })
            .collect()
    }

    /// Case-insensitive substring scan over every item of every list.
    /// Hits come back list by list, in item order.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let needle = fold(term.trim());
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for list in self.lists.values() {
            for item in &list.items {
                if fold(item).contains(&needle) {
                    hits.push(SearchHit {
                        list_name: list.name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }
        hits
    }

    pub fn stats(&self) -> ListStats {
        let total_lists = self.lists.len();
        let total_items: usize = self.lists.values().map(|l| l.items.len()).sum();
        ListStats {
            total_lists,
            total_items,
            average_items_per_list: if total_lists == 0 {
                0.0
            } else {
                total_items as f64 / total_lists as f64
            },
            largest_list_size: self.lists.values().map(|l| l.items.len()).max().unwrap_or(0),
        }
    }

    fn get(&self, name: &str) -> Result<&NamedList, ListError> {
        self.lists.get(&fold(name.trim())).ok_or_else(|| not_found(name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut NamedList, ListError> {
        self.lists
            .get_mut(&fold(name.trim()))
            .ok_or_else(|| not_found(name))
    }

    fn validate_list_name(&self, name: &str) -> Result<String, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ListError::Validation("List name cannot be empty".to_string()));
        }
        if name.chars().count() > self.limits.max_list_name_length {
            return Err(ListError::Validation(format!(
                "List name must be 1-{} characters long",
                self.limits.max_list_name_length
            )));
        }
        Ok(name.to_string())
    }

    fn validate_item(&self, item: &str) -> Result<String, ListError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(ListError::Validation("Item cannot be empty".to_string()));
        }
        if item.chars().count() > self.limits.max_item_length {
            return Err(ListError::Validation(format!(
                "Item must be 1-{} characters long",
                self.limits.max_item_length
            )));
        }
        Ok(item.to_string())
    }

    /// Rewrite the backing document. Failures are logged, not returned: the
    /// in-memory mutation stands either way.
    fn persist(&self) {
        let Some(path) = &self.data_file else {
            return;
        };
        if let Err(e) = persistence::save_document(path, &self.to_document(), self.backup_enabled)
        {
            log::error!("Error saving data: {}", e);
        }
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

fn not_found(name: &str) -> ListError {
    ListError::NotFound {
        name: name.trim().to_string(),
    }
}
