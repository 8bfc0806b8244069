//! Insertion-ordered record table keyed by descriptor.
//!
//! `IndexMap::shift_remove` keeps order but is O(N). Since descriptors are never reused, a
//! removed slot can instead be left as a tombstone and swept later in a single `retain` pass,
//! which keeps removal amortized O(1) without disturbing the iteration order.

use super::Descriptor;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Tables smaller than this are never compacted.
const MIN_COMPACT_TOMBSTONES: usize = 32;

#[derive(Debug, Clone)]
pub(in crate::graph) struct Table<K, V> {
    slots: IndexMap<K, Option<V>, FxBuildHasher>,
    live: usize,
}

impl<K: Descriptor, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K: Descriptor, V> Table<K, V> {
    pub(in crate::graph) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            live: 0,
        }
    }

    pub(in crate::graph) fn len(&self) -> usize {
        self.live
    }

    pub(in crate::graph) fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    pub(in crate::graph) fn get(&self, key: K) -> Option<&V> {
        self.slots.get(&key)?.as_ref()
    }

    pub(in crate::graph) fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots.get_mut(&key)?.as_mut()
    }

    /// `key` must never have been inserted before.
    pub(in crate::graph) fn insert(&mut self, key: K, value: V) {
        debug_assert!(!self.slots.contains_key(&key), "descriptor {key} reused");
        self.slots.insert(key, Some(value));
        self.live += 1;
    }

    pub(in crate::graph) fn remove(&mut self, key: K) -> Option<V> {
        let value = self.slots.get_mut(&key)?.take()?;
        self.live -= 1;
        let tombstones = self.slots.len() - self.live;
        if tombstones >= MIN_COMPACT_TOMBSTONES && tombstones > self.live {
            self.slots.retain(|_, slot| slot.is_some());
        }
        Some(value)
    }

    pub(in crate::graph) fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub(in crate::graph) fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.slots
            .iter()
            .filter_map(|(k, slot)| slot.as_ref().map(|v| (*k, v)))
    }

    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
