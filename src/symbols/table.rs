use std::{collections::VecDeque, fmt::Display};

use log::{debug, warn};

use crate::{
    config::constants::{
        bounded, ScopeLevel, GLOBAL_SCOPE, HASH_MULTIPLIER, HASH_TABLE_SIZE, LOCAL_SCOPE,
        MAX_NAME_LENGTH, MAX_TYPE_LENGTH,
    },
    values::value::SymbolValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub id: SymbolId,
    pub name: String,
    pub type_name: String,
    pub value: Option<SymbolValue>,
    pub is_const: bool,
    pub is_initialized: bool,
    pub scope: ScopeLevel,
}

impl SymbolEntry {
    fn visible_from(&self, scope: ScopeLevel) -> bool {
        self.scope == scope || (scope == LOCAL_SCOPE && self.scope == GLOBAL_SCOPE)
    }
}

/// ×31 rolling hash of `name`, reduced into `[0, bucket_count)`.
/// Bytes are added sign-extended, so non-ASCII names land where a signed
/// `char` hash puts them.
pub fn hash_name(name: &str, bucket_count: usize) -> usize {
    let hash = name.bytes().fold(0u32, |hash, byte| {
        hash.wrapping_mul(HASH_MULTIPLIER as u32)
            .wrapping_add(byte as i8 as u32)
    });
    hash as usize % bucket_count.max(1)
}

/// Scoped symbol table with chained buckets.
///
/// Every name hashes to one bucket; all entries with that name, whatever
/// their scope, live in that bucket's chain. New entries go to the head of
/// the chain, so the most recent declaration of a name wins name lookups.
/// Ids are unique and never reused.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    buckets: Vec<VecDeque<SymbolEntry>>,
    next_id: u32,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_buckets(HASH_TABLE_SIZE)
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        SymbolTable {
            buckets: vec![VecDeque::new(); bucket_count.max(1)],
            next_id: 0,
        }
    }

    fn bucket_for(&self, name: &str) -> usize {
        hash_name(name, self.buckets.len())
    }

    /// Adds a new entry at the head of the name's chain and returns its id.
    /// Existing entries with the same name are kept. An empty name is ignored.
    pub fn insert(
        &mut self,
        name: &str,
        type_name: &str,
        value: Option<SymbolValue>,
        scope: ScopeLevel,
        is_const: bool,
        is_initialized: bool,
    ) -> Option<SymbolId> {
        if name.is_empty() {
            warn!("ignoring symbol insertion with an empty name");
            return None;
        }

        let name = bounded(name, MAX_NAME_LENGTH);
        let index = self.bucket_for(&name);

        let id = SymbolId(self.next_id);
        self.next_id += 1;

        debug!("inserting `{}` ({}) as id {} in scope {}", name, type_name, id, scope);
        self.buckets[index].push_front(SymbolEntry {
            id,
            name,
            type_name: bounded(type_name, MAX_TYPE_LENGTH),
            value,
            is_const,
            is_initialized,
            scope,
        });

        Some(id)
    }

    /// Finds `name` declared exactly in `scope`; from the local scope, falls
    /// back to a global declaration of the same name. The query is bounded
    /// the same way stored names are.
    pub fn lookup_by_name(&self, name: &str, scope: ScopeLevel) -> Option<&SymbolEntry> {
        if name.is_empty() {
            return None;
        }

        let name = bounded(name, MAX_NAME_LENGTH);
        let bucket = &self.buckets[self.bucket_for(&name)];
        let exact = bucket
            .iter()
            .find(|entry| entry.name == name && entry.scope == scope);

        if exact.is_some() || scope != LOCAL_SCOPE {
            return exact;
        }

        bucket
            .iter()
            .find(|entry| entry.name == name && entry.scope == GLOBAL_SCOPE)
    }

    /// Finds the entry with `id` if it is visible from `scope`, with the same
    /// local-to-global fallback as name lookups.
    pub fn lookup_by_id(&self, id: SymbolId, scope: ScopeLevel) -> Option<&SymbolEntry> {
        self.iter()
            .find(|entry| entry.id == id)
            .filter(|entry| entry.visible_from(scope))
    }

    fn lookup_by_id_mut(&mut self, id: SymbolId, scope: ScopeLevel) -> Option<&mut SymbolEntry> {
        self.buckets
            .iter_mut()
            .flat_map(|bucket| bucket.iter_mut())
            .find(|entry| entry.id == id)
            .filter(|entry| entry.visible_from(scope))
    }

    pub fn exists_by_name(&self, name: &str, scope: ScopeLevel) -> bool {
        self.lookup_by_name(name, scope).is_some()
    }

    pub fn exists_by_id(&self, id: SymbolId, scope: ScopeLevel) -> bool {
        self.lookup_by_id(id, scope).is_some()
    }

    /// Replaces the value of a non-const entry and marks it initialized.
    /// Returns whether anything changed.
    pub fn update_value(&mut self, id: SymbolId, value: SymbolValue, scope: ScopeLevel) -> bool {
        let Some(entry) = self.lookup_by_id_mut(id, scope) else {
            warn!("symbol {} not found in scope {}", id, scope);
            return false;
        };

        if entry.is_const {
            warn!("refusing to update const symbol `{}`", entry.name);
            return false;
        }

        entry.value = Some(value);
        entry.is_initialized = true;
        debug!("updated value of symbol {}", id);
        true
    }

    /// Removes the first entry named `name` in chain order, whatever its scope.
    pub fn delete_by_name(&mut self, name: &str) -> Option<SymbolEntry> {
        if name.is_empty() {
            return None;
        }

        let name = bounded(name, MAX_NAME_LENGTH);
        let index = self.bucket_for(&name);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| entry.name == name)?;
        bucket.remove(position)
    }

    pub fn delete_by_id(&mut self, id: SymbolId) -> Option<SymbolEntry> {
        for bucket in self.buckets.iter_mut() {
            if let Some(position) = bucket.iter().position(|entry| entry.id == id) {
                return bucket.remove(position);
            }
        }
        None
    }

    /// Drops every entry. The id counter keeps counting.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    /// Rehashes every entry into `bucket_count` buckets, keeping ids, the id
    /// counter and the relative order of each chain.
    pub fn resize(&mut self, bucket_count: usize) {
        let mut buckets = vec![VecDeque::new(); bucket_count.max(1)];

        for bucket in self.buckets.drain(..) {
            for entry in bucket.into_iter().rev() {
                let index = hash_name(&entry.name, buckets.len());
                buckets[index].push_front(entry);
            }
        }

        self.buckets = buckets;
    }

    /// Entries in bucket order, head of each chain first.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn next_id(&self) -> SymbolId {
        SymbolId(self.next_id)
    }
}
