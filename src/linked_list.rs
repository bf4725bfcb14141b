//! Singly linked list implementation.
//!
//! This module provides [`LinkedList`], a sequence of values joined by
//! one-directional links. Nodes are stored in an arena and refer to their
//! successor by index, so every node has exactly one owner: its predecessor,
//! or the list itself for the head.
//!
//! # Examples
//!
//! ```
//! use tether_list::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_first("second");
//! list.add_first("first");
//! list.add_last("third");
//!
//! assert_eq!(list.length(), 3);
//! assert_eq!(list.visit(), "first, second, third");
//! ```

use alloc::string::String;
use alloc::string::ToString;
use core::fmt;

use crate::Ptr;
use crate::arena::Arena;

mod traverse;
mod walk;

#[cfg(any(test, feature = "test-support"))]
mod test_support;

pub(crate) use walk::Walk;

/// A singly linked list backed by an arena of nodes.
///
/// All lookups return borrowed values, and every "not found" or "out of
/// range" condition is reported as `None` (or `false`) rather than a panic.
///
/// # Examples
///
/// ```
/// use tether_list::LinkedList;
///
/// let mut list: LinkedList<i32> = [5, 1, 4].into_iter().collect();
/// assert_eq!(list.get_first(), Some(&5));
/// assert_eq!(list.get_last(), Some(&4));
/// assert_eq!(list.find_max(), Some(&5));
///
/// assert_eq!(list.delete(&1), Some(1));
/// assert_eq!(list.visit(), "5, 4");
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    head: Option<Ptr>,
    nodes: Arena<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    ///
    /// The list does not allocate until the first value is added.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.get_first(), None);
    /// ```
    pub fn new() -> Self {
        LinkedList {
            head: None,
            nodes: Arena::new(),
            len: 0,
        }
    }

    /// Creates an empty list able to hold at least `capacity` values without
    /// reallocating its node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::with_capacity(16);
    /// list.add_last('a');
    /// assert_eq!(list.length(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            head: None,
            nodes: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of values in the list.
    ///
    /// The count is maintained on every insertion and deletion, so this does
    /// not walk the nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.length(), 0);
    /// list.add_first(1);
    /// list.add_last(2);
    /// assert_eq!(list.length(), 2);
    /// ```
    pub fn length(&self) -> usize {
        self.len
    }

    /// Same as [`length`](Self::length).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = (0..10).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.visit(), "");
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
    }

    /// Returns the value at the head of the list, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.get_first(), None);
    /// list.add_first(7);
    /// assert_eq!(list.get_first(), Some(&7));
    /// ```
    pub fn get_first(&self) -> Option<&T> {
        self.head.map(|ptr| &self.nodes[ptr].value)
    }

    /// Inserts `value` as the new head of the list. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(2);
    /// list.add_first(1);
    /// assert_eq!(list.visit(), "1, 2");
    /// ```
    pub fn add_first(&mut self, value: T) {
        let ptr = self.nodes.alloc(value, self.head);
        self.head = Some(ptr);
        self.len += 1;
    }

    /// Returns the value at zero-based position `index` from the head, or
    /// `None` if `index` is past the end of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    /// assert_eq!(list.get_at_index(0), Some(&"a"));
    /// assert_eq!(list.get_at_index(2), Some(&"c"));
    /// assert_eq!(list.get_at_index(3), None);
    /// ```
    pub fn get_at_index(&self, index: usize) -> Option<&T> {
        self.values().nth(index)
    }

    /// Returns the value of the last node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.get_last(), None);
    /// list.add_first(2);
    /// list.add_first(1);
    /// assert_eq!(list.get_last(), Some(&2));
    /// ```
    pub fn get_last(&self) -> Option<&T> {
        self.tail_ptr().map(|ptr| &self.nodes[ptr].value)
    }

    /// Appends `value` after the current last node, or makes it the head of an
    /// empty list. O(n), since the tail is found by walking from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// assert_eq!(list.get_first(), Some(&1));
    /// assert_eq!(list.get_last(), Some(&1));
    ///
    /// list.add_last(2);
    /// assert_eq!(list.visit(), "1, 2");
    /// ```
    pub fn add_last(&mut self, value: T) {
        let tail = self.tail_ptr();
        self.link_after(tail, value);
    }

    /// Returns `true` if any value in the list equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = [3, 6, 9].into_iter().collect();
    /// assert!(list.search(&6));
    /// assert!(!list.search(&4));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values().any(|candidate| candidate == value)
    }

    /// Returns the largest value in the list, or `None` if it is empty.
    ///
    /// When several values compare equal to the maximum, the one closest to
    /// the head is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = [4, 11, 2].into_iter().collect();
    /// assert_eq!(list.find_max(), Some(&11));
    /// assert_eq!(LinkedList::<i32>::new().find_max(), None);
    /// ```
    pub fn find_max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.values()
            .reduce(|max, candidate| if candidate > max { candidate } else { max })
    }

    /// Removes the first node, counting from the head, whose value equals
    /// `value` and returns the removed value.
    ///
    /// Returns `None` and leaves the list untouched if no such node exists.
    /// Later duplicates of `value` are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 2, 1, 3].into_iter().collect();
    /// assert_eq!(list.delete(&1), Some(1));
    /// assert_eq!(list.visit(), "2, 1, 3");
    /// assert_eq!(list.delete(&8), None);
    /// assert_eq!(list.length(), 3);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut found = None;
        let mut last = None;
        for ptr in self.ptrs() {
            if found.is_none() {
                if self.nodes[ptr].value == *value {
                    found = Some(ptr);
                } else {
                    prev = Some(ptr);
                }
            }
            last = Some(ptr);
        }

        let found = found?;
        let removed = self.nodes.free(found);
        let successor = removed.next.filter(|&next| next != found);
        match prev {
            Some(prev) => *self.nodes.next_mut(prev) = successor,
            None => self.head = successor,
        }
        // A closed chain links the tail back to the removed node.
        if let Some(last) = last.filter(|&last| last != found) {
            if self.nodes.next(last) == Some(found) {
                *self.nodes.next_mut(last) = successor;
            }
        }
        self.len -= 1;

        Some(removed.value)
    }

    /// Renders every value from head to tail, separated by `", "`.
    ///
    /// An empty list renders as the empty string. This is the same text the
    /// [`Display`](fmt::Display) implementation produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.visit(), "1, 2, 3");
    /// assert_eq!(LinkedList::<u8>::new().visit(), "");
    /// ```
    pub fn visit(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Walks node handles from the head, yielding at most `len` of them.
    pub(crate) fn ptrs(&self) -> Walk<'_, T> {
        Walk::new(&self.nodes, self.head, self.len)
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.ptrs().map(|ptr| &self.nodes[ptr].value)
    }

    fn tail_ptr(&self) -> Option<Ptr> {
        self.ptrs().last()
    }

    fn link_after(&mut self, tail: Option<Ptr>, value: T) -> Ptr {
        let ptr = self.nodes.alloc(value, None);
        match tail {
            Some(tail) => *self.nodes.next_mut(tail) = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.len += 1;
        ptr
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.values().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_ptr();
        for value in iter {
            tail = Some(self.link_after(tail, value));
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = LinkedList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}
