use super::PackageRecord;
use std::collections::HashMap;

/// Insertion-ordered mapping from package name to [`PackageRecord`].
///
/// Order is the order the listing source returned the packages in; the
/// renderer emits rows in exactly this order and performs no sorting.
/// Inserting a name that already exists replaces the record in place and
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    records: Vec<PackageRecord>,
    index: HashMap<String, usize>,
}

impl PackageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PackageRecord) {
        match self.index.get(&record.name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PackageRecord> {
        let pos = *self.index.get(name)?;
        Some(&mut self.records[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records flagged as having an update available.
    pub fn update_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_update).count()
    }

    /// Number of records flagged with a security advisory.
    pub fn advisory_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_security_issue).count()
    }
}
