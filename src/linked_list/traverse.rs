//! Pointer-chasing algorithms over the list: in-place reversal, middle and
//! nth-from-end lookup, and cycle detection.

use super::LinkedList;

impl<T> LinkedList<T> {
    /// Reverses the list in place.
    ///
    /// Nodes are relinked rather than copied, so values never move. Runs in
    /// O(n) time with O(1) extra space. Reversing an empty list does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// list.reverse();
    /// assert_eq!(list.visit(), "3, 2, 1");
    /// assert_eq!(list.get_first(), Some(&3));
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();

        while let Some(ptr) = current {
            current = core::mem::replace(self.nodes.next_mut(ptr), reversed);
            reversed = Some(ptr);
        }

        self.head = reversed;
    }

    /// Returns the value at index `length() / 2`, or `None` if the list is
    /// empty.
    ///
    /// For an even number of values this is the second of the two middle
    /// values. The list is walked once, with one cursor advancing two nodes
    /// for every node the other advances.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let odd: LinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// assert_eq!(odd.find_middle_value(), Some(&3));
    ///
    /// let even: LinkedList<_> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(even.find_middle_value(), Some(&3));
    /// ```
    pub fn find_middle_value(&self) -> Option<&T> {
        let mut slow = self.ptrs();
        let mut fast = self.ptrs();

        let mut middle = slow.next()?;
        while fast.nth(1).is_some() {
            middle = slow.next()?;
        }

        Some(&self.nodes[middle].value)
    }

    /// Returns the value `n` nodes before the tail, where `n == 0` is the
    /// last value.
    ///
    /// Returns `None` if the list is empty or `n >= length()`. A leading
    /// cursor is placed `n` nodes ahead, then both cursors advance together
    /// until the leader reaches the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.find_nth_from_end(0), Some(&3));
    /// assert_eq!(list.find_nth_from_end(2), Some(&1));
    /// assert_eq!(list.find_nth_from_end(5), None);
    /// ```
    pub fn find_nth_from_end(&self, n: usize) -> Option<&T> {
        let mut lead = self.ptrs();
        lead.nth(n)?;

        let mut trail = self.ptrs();
        let mut found = trail.next()?;
        while lead.next().is_some() {
            found = trail.next()?;
        }

        Some(&self.nodes[found].value)
    }

    /// Returns `true` if following links from the head ever revisits a node.
    ///
    /// Uses Floyd's tortoise and hare: a slow cursor advances one link per
    /// step and a fast cursor two, and they can only meet inside a cycle.
    /// Unlike every other traversal this one follows raw links without a
    /// length bound, and still terminates in O(n) steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_list::LinkedList;
    ///
    /// let list: LinkedList<_> = (0..100).collect();
    /// assert!(!list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;

        while let Some(step) = fast.and_then(|ptr| self.nodes.next(ptr)) {
            fast = self.nodes.next(step);
            slow = slow.and_then(|ptr| self.nodes.next(ptr));
            if fast.is_some() && fast == slow {
                return true;
            }
        }

        false
    }
}
