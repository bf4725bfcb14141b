#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod linked_list;

extern crate alloc;

use core::num::NonZeroU32;

pub use linked_list::LinkedList;

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
/// Index handle of a node slot in the list's arena.
///
/// Handles are **non-generational**: once a node is deleted its slot, and
/// therefore its handle, may be reused by a later insertion. They never leave
/// the crate.
pub(crate) struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.unchecked_get())
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::MIN.saturating_add(index as u32))
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
