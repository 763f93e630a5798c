// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// An ordered, duplicate-free selection with a fixed capacity.
///
/// `BoundedSelection` does not impose hashing or ordering constraints on `T`;
/// it only requires equality. Keys live in a small `Vec<T>` and uniqueness is
/// enforced by scanning, which is cheap at the sizes a capacity bound implies.
///
/// Insertion order is kept: the first selected key stays first.
#[derive(Clone, Debug)]
pub struct BoundedSelection<T> {
    items: Vec<T>,
    capacity: usize,
    revision: u64,
}

impl<T> BoundedSelection<T> {
    /// Creates an empty selection that holds at most `capacity` keys.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            revision: 0,
        }
    }

    /// Maximum number of keys.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no more keys can be inserted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Number of keys that can still be inserted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Monotonic counter bumped only when the contents change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys. Returns `false` if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.bump_revision();
        true
    }

    /// Keeps only keys for which `keep` returns `true`, optionally replacing
    /// each kept key with the value `keep` maps it to.
    ///
    /// Returns `true` if anything was removed or replaced.
    pub fn retain_map<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> Option<T>,
    {
        if self.items.is_empty() {
            return false;
        }
        let before = self.items.len();
        let mut replaced = false;
        let mut next = Vec::with_capacity(self.capacity);
        for key in self.items.drain(..) {
            if let Some(mapped) = keep(&key) {
                replaced = true;
                next.push(mapped);
            }
        }
        let changed = replaced || next.len() != before;
        self.items = next;
        if changed {
            self.bump_revision();
        }
        changed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> BoundedSelection<T>
where
    T: PartialEq,
{
    /// Returns `true` if the selection currently contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Appends `key` if it is absent and there is room.
    ///
    /// Returns `false` (and leaves the selection untouched) when the key is
    /// already present or the selection is full.
    pub fn insert(&mut self, key: T) -> bool {
        if self.is_full() || self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key` if present. Returns `false` if it was not selected.
    pub fn remove(&mut self, key: &T) -> bool {
        match self.position_of(key) {
            Some(idx) => {
                self.items.remove(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Returns the position of `key` within the selection, if present.
    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::BoundedSelection;

    #[test]
    fn insert_respects_capacity_and_uniqueness() {
        let mut sel = BoundedSelection::new(2);
        assert!(sel.insert(1));
        assert!(!sel.insert(1));
        assert!(sel.insert(2));
        assert!(sel.is_full());
        assert!(!sel.insert(3));
        assert_eq!(sel.items(), &[1, 2]);
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn remove_and_clear_bump_revision_only_on_change() {
        let mut sel = BoundedSelection::new(4);
        sel.insert(1);
        sel.insert(2);
        let rev = sel.revision();

        assert!(!sel.remove(&9));
        assert_eq!(sel.revision(), rev);

        assert!(sel.remove(&1));
        assert_eq!(sel.items(), &[2]);
        assert!(sel.revision() > rev);

        assert!(sel.clear());
        let rev = sel.revision();
        assert!(!sel.clear());
        assert_eq!(sel.revision(), rev);
    }

    #[test]
    fn zero_capacity_accepts_nothing() {
        let mut sel = BoundedSelection::new(0);
        assert!(!sel.insert(1));
        assert_eq!(sel.remaining(), 0);
    }

    #[test]
    fn retain_map_drops_and_rebinds() {
        let mut sel = BoundedSelection::new(4);
        sel.insert(1);
        sel.insert(2);
        sel.insert(3);

        let changed = sel.retain_map(|&k| (k != 2).then_some(k * 10));
        assert!(changed);
        assert_eq!(sel.items(), &[10, 30]);
    }
}
