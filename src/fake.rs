//! In-memory stand-ins for document nodes and preference storage.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::store::{PreferenceStore, StorageError};
use crate::surface::{ClassList, InlineStyle};

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
}

impl FakeNode {
    pub fn with_class(name: &str) -> Self {
        let mut node = Self::default();
        node.add_class(name);
        node
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

impl ClassList for FakeNode {
    fn add_class(&mut self, name: &str) {
        self.classes.insert(name.to_owned());
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}

impl InlineStyle for FakeNode {
    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read("disabled".to_owned()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.writes += 1;
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
