use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;

use crate::Ptr;

#[cold]
#[inline(never)]
fn invalid_slot() -> ! {
    panic!("Arena slot does not hold what its handle expects");
}

/// A single list node: one value and the handle of its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Ptr>,
}

#[derive(Debug, Clone, Copy)]
enum Slot<T> {
    Free { next_free: Option<Ptr> },
    Occupied(Node<T>),
}

impl<T> Slot<T> {
    fn node(&self) -> &Node<T> {
        match self {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => invalid_slot(),
        }
    }

    fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => invalid_slot(),
        }
    }
}

/// Slot storage for list nodes. Vacated slots are threaded into a free list
/// through `Slot::Free` and handed out again before the vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Ptr>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    pub(crate) fn alloc(&mut self, value: T, next: Option<Ptr>) -> Ptr {
        let node = Slot::Occupied(Node { value, next });
        match self.free_head {
            Some(ptr) => {
                let old = core::mem::replace(&mut self.slots[ptr.unchecked_get()], node);
                self.free_head = match old {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => invalid_slot(),
                };
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.slots.len());
                self.slots.push(node);
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot::Occupied(_))
        )
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Node<T> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let old = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(ptr);

        match old {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => invalid_slot(),
        }
    }

    pub(crate) fn next(&self, ptr: Ptr) -> Option<Ptr> {
        self[ptr].next
    }

    pub(crate) fn next_mut(&mut self, ptr: Ptr) -> &mut Option<Ptr> {
        &mut self[ptr].next
    }
}

impl<T> Index<Ptr> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, index: Ptr) -> &Self::Output {
        self.slots[index.unchecked_get()].node()
    }
}

impl<T> IndexMut<Ptr> for Arena<T> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        self.slots[index.unchecked_get()].node_mut()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use core::assert_eq;

    use super::*;

    #[test]
    fn test_ptr_round_trips_index() {
        let ptr = Ptr::unchecked_from(42);
        assert_eq!(ptr.unchecked_get(), 42);
        assert_eq!(Ptr::unchecked_from(0).unchecked_get(), 0);
    }

    #[test]
    fn test_ptr_debug() {
        assert_eq!(format!("{:?}", Ptr::unchecked_from(0)), "Ptr(0)");
        assert_eq!(format!("{:?}", Ptr::unchecked_from(42)), "Ptr(42)");
    }

    #[test]
    fn test_ptr_equality() {
        let ptr1 = Ptr::unchecked_from(42);
        let ptr2 = Ptr::unchecked_from(42);
        let ptr3 = Ptr::unchecked_from(43);

        assert_eq!(ptr1, ptr2);
        assert_ne!(ptr1, ptr3);
    }

    #[test]
    fn test_arena_new() {
        let arena: Arena<i32> = Arena::new();
        assert_eq!(arena.slots.len(), 0);
        assert!(arena.free_head.is_none());
    }

    #[test]
    fn test_arena_with_capacity() {
        let arena: Arena<i32> = Arena::with_capacity(10);
        assert!(arena.slots.capacity() >= 10);
        assert_eq!(arena.slots.len(), 0);
    }

    #[test]
    fn test_arena_alloc_single() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(vec![1, 2, 3], None);

        assert!(arena.is_occupied(ptr));
        assert_eq!(arena.slots.len(), 1);
        assert_eq!(arena[ptr].value, [1, 2, 3]);
        assert_eq!(arena.next(ptr), None);
    }

    #[test]
    fn test_arena_alloc_links_successor() {
        let mut arena = Arena::new();
        let tail = arena.alloc("tail".to_string(), None);
        let head = arena.alloc("head".to_string(), Some(tail));

        assert_ne!(head, tail);
        assert_eq!(arena.next(head), Some(tail));
        assert_eq!(arena.next(tail), None);
        assert_eq!(arena[head].value, "head");
    }

    #[test]
    fn test_arena_free_and_reuse() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc("one".to_string(), None);
        let ptr2 = arena.alloc("two".to_string(), None);

        let node = arena.free(ptr1);
        assert_eq!(node.value, "one");
        assert!(!arena.is_occupied(ptr1));
        assert!(arena.is_occupied(ptr2));

        let ptr3 = arena.alloc("three".to_string(), Some(ptr2));
        assert_eq!(ptr3, ptr1);
        assert_eq!(arena[ptr3].value, "three");
        assert_eq!(arena.next(ptr3), Some(ptr2));
        assert_eq!(arena.slots.len(), 2);
    }

    #[test]
    fn test_arena_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ptrs: vec::Vec<_> = (0..4).map(|i| arena.alloc(i, None)).collect();

        arena.free(ptrs[1]);
        arena.free(ptrs[3]);

        assert_eq!(arena.alloc(10, None), ptrs[3]);
        assert_eq!(arena.alloc(11, None), ptrs[1]);
        assert_eq!(arena.alloc(12, None), Ptr::unchecked_from(4));
    }

    #[test]
    fn test_arena_next_mut_relinks() {
        let mut arena = Arena::new();
        let a = arena.alloc(1, None);
        let b = arena.alloc(2, None);

        *arena.next_mut(a) = Some(b);
        assert_eq!(arena.next(a), Some(b));

        *arena.next_mut(a) = None;
        assert_eq!(arena.next(a), None);
    }

    #[test]
    fn test_arena_index_mut() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(String::from("hello"), None);

        arena[ptr].value = "world".to_string();
        assert_eq!(arena[ptr].value, "world");
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, None);
        arena.alloc(2, None);
        arena.free(ptr);

        arena.clear();

        assert_eq!(arena.slots.len(), 0);
        assert!(arena.free_head.is_none());
        assert_eq!(arena.alloc(3, None), Ptr::unchecked_from(0));
    }

    #[test]
    fn test_arena_clone_with_free_slots() {
        let mut arena = Arena::new();
        let ptr1 = arena.alloc(1, None);
        let ptr2 = arena.alloc(2, Some(ptr1));
        let ptr3 = arena.alloc(3, None);

        arena.free(ptr3);

        let cloned = arena.clone();

        assert!(cloned.is_occupied(ptr1));
        assert!(cloned.is_occupied(ptr2));
        assert!(!cloned.is_occupied(ptr3));
        assert_eq!(cloned.next(ptr2), Some(ptr1));
        assert_eq!(cloned.free_head, arena.free_head);
    }

    #[test]
    fn test_arena_is_occupied_out_of_range() {
        let arena: Arena<i32> = Arena::new();
        assert!(!arena.is_occupied(Ptr::unchecked_from(7)));
    }

    #[test]
    #[should_panic]
    fn test_arena_index_unoccupied_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, None);
        arena.free(ptr);
        let _ = &arena[ptr];
    }

    #[test]
    #[should_panic]
    fn test_arena_next_mut_unoccupied_ptr() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, None);
        arena.free(ptr);
        let _ = arena.next_mut(ptr);
    }

    #[test]
    #[should_panic]
    fn test_arena_double_free() {
        let mut arena = Arena::new();
        let ptr = arena.alloc(1, None);
        arena.free(ptr);
        arena.free(ptr);
    }

    #[test]
    fn test_niche_optimization() {
        use core::mem::size_of;
        assert_eq!(size_of::<Option<Ptr>>(), size_of::<u32>());
    }
}
