use log::debug;

use crate::{
    arena::Arena,
    tree::{Color, Error, OrderedTree, Target, HEADER, NIL, RESERVED}
};

impl<T: Ord> OrderedTree<T> {
    #[inline]
    pub fn new() -> Self {
        Self::from_arena(Arena::new())
    }
    /// Pre-sizes node storage for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(Arena::with_capacity(capacity + RESERVED))
    }
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.arena.len() - RESERVED
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root() == NIL
    }
    /// Adds `item` to the set. Returns `false` and leaves the tree untouched
    /// when an equal element is already present.
    #[inline]
    pub fn insert(&mut self, item: T) -> bool {
        self.insert_top_down(item)
    }
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.search(Target::Item(item)) != NIL
    }
    /// Removes `item` from the set. Returns `false` when it was not present.
    #[inline]
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }
    /// Removes `item` from the set and hands back the stored element.
    #[inline]
    pub fn take(&mut self, item: &T) -> Option<T> {
        if !self.contains(item) {
            return None;
        }
        self.remove_present(Target::Item(item))
    }
    /// Smallest element, fails with [`Error::Underflow`] on an empty tree.
    #[inline]
    pub fn min(&self) -> Result<&T, Error> {
        self.extreme::<0>()
    }
    /// Largest element, fails with [`Error::Underflow`] on an empty tree.
    #[inline]
    pub fn max(&self) -> Result<&T, Error> {
        self.extreme::<1>()
    }
    #[inline]
    fn extreme<const I: usize>(&self) -> Result<&T, Error> {
        let root = self.root();
        if root == NIL {
            return Err(Error::Underflow);
        }
        self.element(self.limit::<I>(root)).ok_or(Error::Underflow)
    }
    /// Makes the tree logically empty. Node storage is handed back to the
    /// arena, the sentinel and header stay in place.
    ///
    /// Detaching the root is constant work, but every stored element is
    /// dropped here, so the call is linear in [`len`](Self::len).
    #[inline]
    pub fn clear(&mut self) {
        debug!("[CLEAR] dropping {} elements", self.len());
        self.arena.truncate(RESERVED);
        let header = &mut self.arena[HEADER];
        header.children = [NIL, NIL];
        header.color = Color::Black;
        self.set_color(NIL, Color::Black);
    }
}
impl<T: Ord> Default for OrderedTree<T> {
    #[inline(always)]
    fn default() -> Self { Self::new() }
}
