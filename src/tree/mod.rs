mod node;
pub(crate) use node::*;
mod interface;
mod remove;
mod validate;
mod iter;
pub use iter::*;

use std::cmp::Ordering;

use log::trace;
use thiserror::Error;

use crate::arena::Arena;

/// Slots taken by the sentinel and the header.
const RESERVED: usize = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("tree is empty")]
    Underflow,
}

/// Broken invariant reported by [`OrderedTree::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("red node has a red child")]
    ConsecutiveReds,
    #[error("black height differs, left: {left} right: {right}")]
    UnbalancedBlacks { left: usize, right: usize },
    #[error("elements are not in ascending order")]
    OutOfOrder,
    #[error("root has to be black")]
    RedRoot,
    #[error("header has to be black between operations")]
    RedHeader,
}

/// What a descent is looking for: a caller supplied element, or an element
/// that already lives in the tree.
#[derive(Debug)]
pub(crate) enum Target<'a, T> {
    Item(&'a T),
    Node(NodeIndex),
}
impl<T> Clone for Target<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for Target<'_, T> {}

/// Nodes along the search path, shifted down one level per step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Path {
    pub current: NodeIndex,
    pub sibling: NodeIndex,
    pub parent: NodeIndex,
    pub grand: NodeIndex,
    pub great: NodeIndex,
}
impl Path {
    #[inline]
    const fn new() -> Self {
        Self {
            current: HEADER,
            sibling: HEADER,
            parent: HEADER,
            grand: HEADER,
            great: HEADER,
        }
    }
}

/// Ordered set of `T` kept balanced as a red-black tree.
///
/// Nodes are stored in an arena and addressed by index. Two slots are
/// reserved for the whole lifetime of the tree: a black sentinel used as every
/// missing child, and a header whose right child is the real root, so no
/// algorithm ever special-cases an empty root.
///
/// A panicking `Ord` implementation leaves the tree in an unspecified state.
#[derive(Debug)]
pub struct OrderedTree<T: Ord> {
    pub(crate) arena: Arena<Node<T>>,
}

impl<T: Ord> OrderedTree<T> {
    #[inline]
    fn from_arena(mut arena: Arena<Node<T>>) -> Self {
        let nil = arena.insert(Node::reserved());
        let header = arena.insert(Node::reserved());
        debug_assert_eq!([nil, header], [NIL, HEADER]);
        Self { arena }
    }
    #[inline(always)]
    fn root(&self) -> NodeIndex {
        self.arena[HEADER].children[1]
    }
    #[inline(always)]
    fn element(&self, ptr: NodeIndex) -> Option<&T> {
        self.arena[ptr].element.as_ref()
    }
    #[inline(always)]
    fn is_black(&self, ptr: NodeIndex) -> bool {
        ptr == NIL || self.arena[ptr].is_black()
    }
    #[inline(always)]
    fn is_red(&self, ptr: NodeIndex) -> bool {
        !self.is_black(ptr)
    }
    #[inline(always)]
    fn set_color(&mut self, ptr: NodeIndex, color: Color) {
        self.arena[ptr].color = color;
    }
    /// Which of the two child slots of `parent` holds `ptr`.
    #[inline]
    fn side(&self, parent: NodeIndex, ptr: NodeIndex) -> usize {
        if self.arena[parent].children[0] == ptr { 0 } else { 1 }
    }
    #[inline]
    fn sibling(&self, parent: NodeIndex, ptr: NodeIndex) -> NodeIndex {
        let [left, right] = self.arena[parent].children;
        if left == ptr { right } else { left }
    }
    #[inline]
    fn towards(&self, ptr: NodeIndex, ordering: Ordering) -> NodeIndex {
        match ordering {
            Ordering::Less => self.arena[ptr].children[0],
            _ => self.arena[ptr].children[1]
        }
    }
    #[inline]
    fn limit<const I: usize>(&self, mut ptr: NodeIndex) -> NodeIndex {
        loop {
            let next = self.arena[ptr].children[I];
            if next == NIL { return ptr }
            ptr = next;
        }
    }
    /// Orders `target` relative to the node at `ptr`.
    ///
    /// Everything is greater than the header and equal to the sentinel, so a
    /// descent starting at the header always ends at a match or a leaf.
    #[inline]
    fn compare(&self, target: Target<'_, T>, ptr: NodeIndex) -> Ordering {
        if ptr == HEADER {
            return Ordering::Greater;
        }
        let Some(element) = self.element(ptr) else { return Ordering::Equal };
        match target {
            Target::Item(item) => item.cmp(element),
            Target::Node(index) if index == ptr => Ordering::Equal,
            Target::Node(index) => match self.element(index) {
                Some(key) => key.cmp(element),
                None => Ordering::Equal
            }
        }
    }
    /// Moves `path` one level down towards `target`.
    #[inline]
    fn step(&self, path: &mut Path, target: Target<'_, T>) {
        let next = self.towards(path.current, self.compare(target, path.current));
        path.great = path.grand;
        path.grand = path.parent;
        path.parent = path.current;
        path.current = next;
        path.sibling = self.sibling(path.parent, path.current);
    }
    #[inline]
    fn search(&self, target: Target<'_, T>) -> NodeIndex {
        let mut ptr = self.root();
        loop {
            match self.compare(target, ptr) {
                Ordering::Equal => return ptr,
                ordering => ptr = self.towards(ptr, ordering)
            }
        }
    }
    /// Single rotation of `ptr` with its child `children[I]`, returns the new
    /// subtree root. The caller rewires the parent slot.
    #[inline]
    fn rotate_with<const I: usize>(&mut self, ptr: NodeIndex) -> NodeIndex {
        let pivot = self.arena[ptr].children[I];
        let inner = self.arena[pivot].children[1 - I];
        self.arena[ptr].children[I] = inner;
        self.arena[pivot].children[1 - I] = ptr;
        pivot
    }
    /// Rotates `child` above `ptr`, where `ptr` hangs below `parent`.
    ///
    /// Returns `child`, which now occupies the slot of `parent` that held `ptr`.
    #[inline]
    fn rotate(&mut self, parent: NodeIndex, ptr: NodeIndex, child: NodeIndex) -> NodeIndex {
        let slot = self.side(parent, ptr);
        let rotated = match self.side(ptr, child) {
            0 => self.rotate_with::<0>(ptr),
            _ => self.rotate_with::<1>(ptr)
        };
        self.arena[parent].children[slot] = rotated;
        rotated
    }
    /// Top-down insertion: every node on the way down that has two red
    /// children is flipped before descending further.
    fn insert_top_down(&mut self, item: T) -> bool {
        let mut path = Path::new();
        while self.compare(Target::Item(&item), path.current) != Ordering::Equal {
            self.step(&mut path, Target::Item(&item));
            let [left, right] = self.arena[path.current].children;
            if self.is_red(left) && self.is_red(right) {
                self.reorient(&mut path);
            }
        }
        if path.current != NIL {
            return false;
        }
        let slot = match self.compare(Target::Item(&item), path.parent) {
            Ordering::Less => 0,
            _ => 1
        };
        let ptr = self.arena.insert(Node::new(item, Color::Red));
        self.arena[path.parent].children[slot] = ptr;
        path.current = ptr;
        self.reorient(&mut path);
        true
    }
    /// Color flip at `path.current`, followed by one or two rotations when the
    /// flip leaves two reds in a row.
    fn reorient(&mut self, path: &mut Path) {
        let [left, right] = self.arena[path.current].children;
        self.set_color(path.current, Color::Red);
        self.set_color(left, Color::Black);
        self.set_color(right, Color::Black);
        if self.is_red(path.parent) {
            self.set_color(path.grand, Color::Red);
            if self.side(path.grand, path.parent) != self.side(path.parent, path.current) {
                trace!("[INSERT] double rotation below {:?}", path.grand);
                path.parent = self.rotate(path.grand, path.parent, path.current);
            } else {
                trace!("[INSERT] single rotation below {:?}", path.great);
            }
            path.current = self.rotate(path.great, path.grand, path.parent);
            self.set_color(path.current, Color::Black);
        }
        let root = self.root();
        self.set_color(root, Color::Black);
        self.set_color(NIL, Color::Black);
    }
}
