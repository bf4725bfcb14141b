use super::LinkedList;

impl<T> LinkedList<T> {
    /// Links the last node back to the head, closing the list into a cycle.
    ///
    /// This deliberately breaks the acyclic chain every other operation relies
    /// on and exists only so tests can exercise [`has_cycle`]. Lookups stay
    /// bounded by [`length`], and [`delete`] keeps the tail pointing at the
    /// new head. Does nothing on an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert!(!list.has_cycle());
    ///
    /// list.create_cycle();
    /// assert!(list.has_cycle());
    /// assert_eq!(list.visit(), "1, 2, 3");
    /// ```
    ///
    /// [`has_cycle`]: LinkedList::has_cycle
    /// [`length`]: LinkedList::length
    /// [`delete`]: LinkedList::delete
    pub fn create_cycle(&mut self) {
        let (Some(head), Some(tail)) = (self.head, self.tail_ptr()) else {
            return;
        };
        *self.nodes.next_mut(tail) = Some(head);
    }
}
