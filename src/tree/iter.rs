use std::iter::FusedIterator;

use crate::tree::{NodeIndex, OrderedTree, NIL};

/// In-order walk over the elements of an [`OrderedTree`], smallest first.
///
/// Keeps the left spine of the unvisited part on an explicit stack, so each
/// call to `next` is amortized constant time.
#[derive(Debug)]
pub struct Iter<'a, T: Ord> {
    tree: &'a OrderedTree<T>,
    stack: Vec<NodeIndex>,
    remaining: usize
}
impl<'a, T: Ord> Iter<'a, T> {
    #[inline]
    fn new(tree: &'a OrderedTree<T>) -> Self {
        let mut iter = Self { tree, stack: Vec::new(), remaining: tree.len() };
        iter.push_spine(tree.root());
        iter
    }
    #[inline]
    fn push_spine(&mut self, mut ptr: NodeIndex) {
        while ptr != NIL {
            self.stack.push(ptr);
            ptr = self.tree.arena[ptr].children[0];
        }
    }
}
impl<T: Ord> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { tree: self.tree, stack: self.stack.clone(), remaining: self.remaining }
    }
}
impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.stack.pop()?;
        self.push_spine(self.tree.arena[ptr].children[1]);
        self.remaining -= 1;
        self.tree.element(ptr)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}
impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<T: Ord> OrderedTree<T> {
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
