//! Position-addressable doubly-linked list
//!
//! [`IndexedList`] is the container behind both "cells in a row" and
//! "rows in a table". Nodes live in a slot arena owned by the list and are
//! linked through slot indices, so splicing a node in or out is O(1) and a
//! [`NodeHandle`] can never dangle: removing a node bumps its slot's
//! generation, which turns every outstanding handle to it stale.
//!
//! Each linked node records the [`ListId`] of the list it belongs to. That
//! owner id is the node's back-reference to its parent; a value that has been
//! popped out of a list is a plain value again and has no parent.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`IndexedList`]
///
/// A fresh id is minted for every new list, including clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(u64);

impl ListId {
    fn mint() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value of the id
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable address of a node mapped into an [`IndexedList`]
///
/// Handles are cheap to copy. They stay valid while the node remains linked
/// into the list that issued them, and go stale once it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    list: ListId,
    slot: u32,
    generation: u32,
}

impl NodeHandle {
    /// Id of the list this handle was issued by (the node's parent)
    pub fn owner(&self) -> ListId {
        self.list
    }
}

struct Node<T> {
    value: T,
    prev: Option<u32>,
    next: Option<u32>,
    owner: ListId,
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Doubly-linked list with positional addressing
///
/// Invariants kept by every operation:
/// - `len()` equals the number of linked nodes
/// - head and tail are absent iff the list is empty
/// - every linked node's owner is this list
/// - walking `next` from the head reaches the tail in exactly `len()` steps,
///   and symmetrically for `prev` from the tail
pub struct IndexedList<T> {
    id: ListId,
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> IndexedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::mint(),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Identity of this list
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Number of linked elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the first element
    pub fn head(&self) -> Option<NodeHandle> {
        self.head.map(|slot| self.handle_for(slot))
    }

    /// Handle of the last element
    pub fn tail(&self) -> Option<NodeHandle> {
        self.tail.map(|slot| self.handle_for(slot))
    }

    /// Handle of the element after `handle`
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let node = self.resolve(handle)?;
        node.next.map(|slot| self.handle_for(slot))
    }

    /// Handle of the element before `handle`
    pub fn prev(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let node = self.resolve(handle)?;
        node.prev.map(|slot| self.handle_for(slot))
    }

    /// Handle of the element at `index`
    pub fn handle_at(&self, index: usize) -> Option<NodeHandle> {
        self.locate(index).map(|slot| self.handle_for(slot))
    }

    /// Get the element at `index`
    ///
    /// Walks from whichever end is closer.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.locate(index)?;
        Some(&self.linked(slot).value)
    }

    /// Get a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.locate(index)?;
        Some(&mut self.linked_mut(slot).value)
    }

    /// Get the element addressed by `handle`
    pub fn node(&self, handle: NodeHandle) -> Option<&T> {
        self.resolve(handle).map(|node| &node.value)
    }

    /// Get a mutable reference to the element addressed by `handle`
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        self.resolve(handle)?;
        Some(&mut self.linked_mut(handle.slot).value)
    }

    /// Parent recorded on the node addressed by `handle`
    pub fn owner_of(&self, handle: NodeHandle) -> Option<ListId> {
        self.resolve(handle).map(|node| node.owner)
    }

    /// Check if `handle` addresses a node linked into this list
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Current index of the node addressed by `handle`
    pub fn position(&self, handle: NodeHandle) -> Option<usize> {
        self.resolve(handle)?;
        self.links().position(|slot| slot == handle.slot)
    }

    /// Index of the first element matching `predicate`
    pub fn position_where<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Handle of the first element matching `predicate`
    pub fn find<F>(&self, mut predicate: F) -> Option<NodeHandle>
    where
        F: FnMut(&T) -> bool,
    {
        self.links()
            .find(|&slot| predicate(&self.linked(slot).value))
            .map(|slot| self.handle_for(slot))
    }

    /// Append an element, returning its handle
    pub fn push_back(&mut self, value: T) -> NodeHandle {
        let prev = self.tail;
        let slot = self.alloc(value, prev, None);
        match prev {
            Some(tail) => self.linked_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        self.handle_for(slot)
    }

    /// Prepend an element, returning its handle
    pub fn push_front(&mut self, value: T) -> NodeHandle {
        let next = self.head;
        let slot = self.alloc(value, None, next);
        match next {
            Some(head) => self.linked_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        self.handle_for(slot)
    }

    /// Insert an element so that it ends up at `index`
    ///
    /// Elements from `index` onwards shift up by one. `index == len()`
    /// appends.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<NodeHandle> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return Ok(self.push_back(value));
        }

        let Some(at) = self.locate(index) else {
            unreachable!("index {index} below length {} did not resolve", self.len);
        };
        let prev = self.linked(at).prev;
        let slot = self.alloc(value, prev, Some(at));
        self.linked_mut(at).prev = Some(slot);
        match prev {
            Some(prev) => self.linked_mut(prev).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.len += 1;
        Ok(self.handle_for(slot))
    }

    /// Detach and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let slot = self.locate(index)?;
        Some(self.detach(slot))
    }

    /// Detach and return the element addressed by `handle`
    ///
    /// Fails with [`Error::ForeignNode`] if the handle does not address a
    /// node currently linked into this list (including stale handles to
    /// nodes that were already removed).
    pub fn remove(&mut self, handle: NodeHandle) -> Result<T> {
        if self.resolve(handle).is_none() {
            return Err(Error::ForeignNode);
        }
        Ok(self.detach(handle.slot))
    }

    /// Detach and return the first element
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|slot| self.detach(slot))
    }

    /// Detach and return the last element
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|slot| self.detach(slot))
    }

    /// Remove every element
    ///
    /// Slot generations survive, so handles issued before the clear stay
    /// stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            links: self.links(),
        }
    }

    /// Iterate over the handles of the elements in order
    pub fn handles(&self) -> Handles<'_, T> {
        Handles {
            links: self.links(),
        }
    }

    /// Compare with another list using a custom element predicate
    ///
    /// Lengths are compared first; elements are compared in order and the
    /// walk stops at the first mismatch.
    pub fn eq_by<F>(&self, other: &IndexedList<T>, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| eq(a, b))
    }

    /// Build an independent copy using a custom element copier
    ///
    /// The copy gets a fresh [`ListId`], so handles into `self` are not valid
    /// in it.
    pub fn clone_with<F>(&self, mut copy: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut cloned = Self::with_capacity(self.len);
        for value in self.iter() {
            cloned.push_back(copy(value));
        }
        cloned
    }

    /// Walk the links in both directions and panic on any broken invariant
    ///
    /// # Panics
    ///
    /// Panics if the cached length, head/tail, prev/next links or node
    /// owners disagree with each other.
    pub fn assert_consistent(&self) {
        assert_eq!(
            self.head.is_none(),
            self.len == 0,
            "head presence disagrees with length {}",
            self.len
        );
        assert_eq!(
            self.tail.is_none(),
            self.len == 0,
            "tail presence disagrees with length {}",
            self.len
        );

        let mut steps = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            assert!(steps < self.len, "forward walk exceeds length {}", self.len);
            let node = self.linked(slot);
            assert_eq!(node.prev, prev, "broken prev link at position {steps}");
            assert_eq!(node.owner, self.id, "foreign owner at position {steps}");
            prev = Some(slot);
            cursor = node.next;
            steps += 1;
        }
        assert_eq!(steps, self.len, "forward walk length mismatch");
        assert_eq!(prev, self.tail, "forward walk did not end at tail");

        steps = 0;
        let mut next = None;
        cursor = self.tail;
        while let Some(slot) = cursor {
            assert!(steps < self.len, "backward walk exceeds length {}", self.len);
            let node = self.linked(slot);
            assert_eq!(node.next, next, "broken next link at position {steps} from tail");
            next = Some(slot);
            cursor = node.prev;
            steps += 1;
        }
        assert_eq!(steps, self.len, "backward walk length mismatch");
        assert_eq!(next, self.head, "backward walk did not end at head");

        let occupied = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        assert_eq!(occupied, self.len, "arena holds unlinked nodes");
    }

    fn handle_for(&self, slot: u32) -> NodeHandle {
        NodeHandle {
            list: self.id,
            slot,
            generation: self.slots[slot as usize].generation,
        }
    }

    fn resolve(&self, handle: NodeHandle) -> Option<&Node<T>> {
        if handle.list != self.id {
            return None;
        }
        let slot = self.slots.get(handle.slot as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let node = slot.node.as_ref()?;
        assert_eq!(
            node.owner, self.id,
            "node in list {} records owner {}",
            self.id, node.owner
        );
        Some(node)
    }

    fn locate(&self, index: usize) -> Option<u32> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.linked(slot).next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                slot = self.linked(slot).prev?;
            }
            Some(slot)
        }
    }

    fn links(&self) -> Links<'_, T> {
        Links {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    #[track_caller]
    fn linked(&self, slot: u32) -> &Node<T> {
        match self.slots.get(slot as usize).and_then(|s| s.node.as_ref()) {
            Some(node) => node,
            None => panic!("list {} links to vacant slot {slot}", self.id),
        }
    }

    #[track_caller]
    fn linked_mut(&mut self, slot: u32) -> &mut Node<T> {
        let id = self.id;
        match self.slots.get_mut(slot as usize).and_then(|s| s.node.as_mut()) {
            Some(node) => node,
            None => panic!("list {id} links to vacant slot {slot}"),
        }
    }

    fn alloc(&mut self, value: T, prev: Option<u32>, next: Option<u32>) -> u32 {
        let node = Node {
            value,
            prev,
            next,
            owner: self.id,
        };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize].node = Some(node);
                slot
            }
            None => {
                let slot = u32::try_from(self.slots.len()).expect("list arena exceeds u32 slots");
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                slot
            }
        }
    }

    fn detach(&mut self, slot: u32) -> T {
        let (prev, next) = {
            let node = self.linked(slot);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.linked_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.linked_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;

        let entry = &mut self.slots[slot as usize];
        let Some(node) = entry.node.take() else {
            unreachable!("detached slot {slot} was vacant");
        };
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        node.value
    }
}

impl<T> Default for IndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IndexedList<T> {
    fn clone(&self) -> Self {
        self.clone_with(T::clone)
    }
}

impl<T: PartialEq> PartialEq for IndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_by(other, T::eq)
    }
}

impl<T: Eq> Eq for IndexedList<T> {}

impl<T: fmt::Debug> fmt::Debug for IndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for IndexedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for IndexedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Slot indices in link order
struct Links<'a, T> {
    list: &'a IndexedList<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<T> Iterator for Links<'_, T> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front?;
        self.front = self.list.linked(slot).next;
        self.remaining -= 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Links<'_, T> {
    fn next_back(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back?;
        self.back = self.list.linked(slot).prev;
        self.remaining -= 1;
        Some(slot)
    }
}

/// Iterator over the elements of an [`IndexedList`]
pub struct Iter<'a, T> {
    links: Links<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.links.list;
        self.links.next().map(|slot| &list.linked(slot).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.links.list;
        self.links.next_back().map(|slot| &list.linked(slot).value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the handles of an [`IndexedList`]
pub struct Handles<'a, T> {
    links: Links<'a, T>,
}

impl<T> Iterator for Handles<'_, T> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let list = self.links.list;
        self.links.next().map(|slot| list.handle_for(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<T> DoubleEndedIterator for Handles<'_, T> {
    fn next_back(&mut self) -> Option<NodeHandle> {
        let list = self.links.list;
        self.links.next_back().map(|slot| list.handle_for(slot))
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}

/// Owning iterator, draining an [`IndexedList`] front to back
pub struct IntoIter<T> {
    list: IndexedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn list_of(values: &[&'static str]) -> IndexedList<&'static str> {
        values.iter().copied().collect()
    }

    fn contents<T: Clone>(list: &IndexedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_get_walks_from_either_end() {
        let list = list_of(&["a", "b", "c", "d", "e"]);
        for (index, expected) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            assert_eq!(list.get(index), Some(expected));
        }
        assert_eq!(list.get(5), None);
        assert_eq!(IndexedList::<u8>::new().get(0), None);
    }

    #[test]
    fn test_insert_at_boundaries() {
        let mut list = IndexedList::new();
        list.insert_at(0, "b").unwrap();
        list.insert_at(0, "a").unwrap();
        list.insert_at(2, "d").unwrap();
        list.insert_at(2, "c").unwrap();
        list.assert_consistent();
        assert_eq!(contents(&list), vec!["a", "b", "c", "d"]);

        assert_eq!(
            list.insert_at(5, "z"),
            Err(Error::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_insert_before_single_element() {
        let mut list = list_of(&["only"]);
        list.insert_at(0, "first").unwrap();
        list.assert_consistent();
        assert_eq!(list.get(0), Some(&"first"));
        assert_eq!(list.get(1), Some(&"only"));
        assert_eq!(list.node(list.tail().unwrap()), Some(&"only"));
    }

    #[test]
    fn test_remove_head_tail_and_middle() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        assert_eq!(list.remove_at(0), Some("a"));
        assert_eq!(list.remove_at(2), Some("d"));
        assert_eq!(list.remove_at(2), None);
        list.assert_consistent();
        assert_eq!(contents(&list), vec!["b", "c"]);

        let middle = list.handle_at(1).unwrap();
        assert_eq!(list.remove(middle), Ok("c"));
        assert_eq!(list.remove_at(0), Some("b"));
        list.assert_consistent();
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut list = list_of(&["a", "b"]);
        let handle = list.handle_at(0).unwrap();
        assert_eq!(list.remove(handle), Ok("a"));
        assert_eq!(list.remove(handle), Err(Error::ForeignNode));

        // The freed slot is reused, but the old handle stays stale.
        let fresh = list.push_back("c");
        assert_ne!(fresh, handle);
        assert!(!list.contains(handle));
        assert_eq!(list.node(handle), None);
        assert_eq!(contents(&list), vec!["b", "c"]);
    }

    #[test]
    fn test_handle_from_other_list_is_foreign() {
        let mut first = list_of(&["a"]);
        let second = list_of(&["a"]);
        let foreign = second.head().unwrap();
        assert!(!first.contains(foreign));
        assert_eq!(first.remove(foreign), Err(Error::ForeignNode));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_traversal_and_position() {
        let list = list_of(&["a", "b", "c"]);
        let mut seen = Vec::new();
        let mut cursor = list.head();
        while let Some(handle) = cursor {
            seen.push(*list.node(handle).unwrap());
            assert_eq!(list.owner_of(handle), Some(list.id()));
            cursor = list.next(handle);
        }
        assert_eq!(seen, vec!["a", "b", "c"]);

        let last = list.tail().unwrap();
        assert_eq!(list.position(last), Some(2));
        assert_eq!(list.prev(last), list.handle_at(1));
        assert_eq!(list.find(|v| *v == "b"), list.handle_at(1));
        assert_eq!(list.position_where(|v| *v == "z"), None);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = list_of(&["a", "b"]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_ne!(copy.id(), original.id());
        assert!(!copy.contains(original.head().unwrap()));

        *copy.get_mut(0).unwrap() = "changed";
        copy.push_back("c");
        assert_ne!(copy, original);
        assert_eq!(contents(&original), vec!["a", "b"]);
    }

    #[test]
    fn test_eq_by_checks_length_first() {
        let short = list_of(&["a"]);
        let long = list_of(&["a", "b"]);
        let mut calls = 0;
        assert!(!short.eq_by(&long, |_, _| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_clear_keeps_handles_stale() {
        let mut list = list_of(&["a", "b"]);
        let handle = list.head().unwrap();
        list.clear();
        list.assert_consistent();
        list.push_back("c");
        list.push_back("d");
        assert!(!list.contains(handle));
        assert_eq!(contents(&list), vec!["c", "d"]);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let list = list_of(&["a", "b", "c"]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(u8),
        Insert(usize, u8),
        RemoveAt(usize),
        RemoveHandle(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Push),
            (0usize..12, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (0usize..12).prop_map(Op::RemoveAt),
            (0usize..12).prop_map(Op::RemoveHandle),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut list = IndexedList::new();
            let mut model: Vec<u8> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        list.push_back(v);
                        model.push(v);
                    }
                    Op::Insert(i, v) => {
                        let result = list.insert_at(i, v);
                        if i <= model.len() {
                            prop_assert!(result.is_ok());
                            model.insert(i, v);
                            prop_assert_eq!(list.get(i), Some(&v));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    Op::RemoveAt(i) => {
                        let expected = (i < model.len()).then(|| model.remove(i));
                        prop_assert_eq!(list.remove_at(i), expected);
                    }
                    Op::RemoveHandle(i) => {
                        if let Some(handle) = list.handle_at(i) {
                            prop_assert_eq!(list.position(handle), Some(i));
                            prop_assert_eq!(list.remove(handle), Ok(model.remove(i)));
                            prop_assert_eq!(list.remove(handle), Err(Error::ForeignNode));
                        }
                    }
                }
                list.assert_consistent();
                prop_assert_eq!(list.len(), model.len());
            }

            for (i, v) in model.iter().enumerate() {
                prop_assert_eq!(list.get(i), Some(v));
            }
            prop_assert_eq!(list.get(model.len()), None);
        }
    }
}
