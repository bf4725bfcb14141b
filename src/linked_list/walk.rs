use crate::Ptr;
use crate::arena::Arena;

/// Forward walk over node handles, starting at a given node.
///
/// The walk stops at the end of the chain or after `remaining` handles,
/// whichever comes first. Bounding it by the list length keeps every
/// traversal finite even when the chain has been closed into a cycle.
pub(crate) struct Walk<'a, T> {
    nodes: &'a Arena<T>,
    next: Option<Ptr>,
    remaining: usize,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<T>, start: Option<Ptr>, remaining: usize) -> Self {
        Walk {
            nodes,
            next: start,
            remaining,
        }
    }
}

impl<T> Iterator for Walk<'_, T> {
    type Item = Ptr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ptr = self.next?;
        self.remaining -= 1;
        self.next = self.nodes.next(ptr);
        Some(ptr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1.min(self.remaining), Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}
