// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense array dispatch keyed by entity kind.
//!
//! Many consumers keep one slot of state per primary entity kind (node,
//! way, relation): per-kind counters, per-kind handlers, per-kind output
//! files. [`NwrArray`] is the `[T; 3]` for that, indexed directly by
//! [`ItemType`] via the NWR index so call sites never spell out `0`/`1`/`2`.

use crate::item_type::ItemType;

/// Fixed container with one `T` per NWR kind.
///
/// Indexing uses [`ItemType::nwr_index`] and inherits its precondition:
/// indexing by a tag other than `Node`, `Way` or `Relation` trips a debug
/// assertion (and is out of contract in release builds). Guard with
/// [`ItemType::is_nwr`] when the tag comes from untrusted input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NwrArray<T> {
    items: [T; 3],
}

impl<T: Default> NwrArray<T> {
    /// Array with all three slots default-initialized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> NwrArray<T> {
    /// Reference to the slot for `kind`. `kind` must be NWR.
    #[inline]
    #[must_use]
    pub fn get(&self, kind: ItemType) -> &T {
        &self.items[kind.nwr_index()]
    }

    /// Mutable reference to the slot for `kind`. `kind` must be NWR.
    #[inline]
    pub fn get_mut(&mut self, kind: ItemType) -> &mut T {
        &mut self.items[kind.nwr_index()]
    }

    /// Iterator over the slots in node, way, relation order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable iterator over the slots in node, way, relation order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Iterator over `(kind, slot)` pairs in node, way, relation order.
    pub fn entries(&self) -> impl Iterator<Item = (ItemType, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemType::from_nwr_index(index), item))
    }
}

impl<T> std::ops::Index<ItemType> for NwrArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, kind: ItemType) -> &T {
        self.get(kind)
    }
}

impl<T> std::ops::IndexMut<ItemType> for NwrArray<T> {
    #[inline]
    fn index_mut(&mut self, kind: ItemType) -> &mut T {
        self.get_mut(kind)
    }
}

impl<'a, T> IntoIterator for &'a NwrArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
