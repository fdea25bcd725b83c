use std::{cmp::Ordering, mem::replace};

use log::trace;

use crate::tree::{Color, NodeIndex, OrderedTree, Path, Target, HEADER, NIL};

impl<T: Ord> OrderedTree<T> {
    /// A black node whose children are both black. The sentinel qualifies.
    #[inline]
    fn is_double_black(&self, ptr: NodeIndex) -> bool {
        let [left, right] = self.arena[ptr].children;
        self.is_black(ptr) && self.is_black(left) && self.is_black(right)
    }
    #[inline]
    fn has_red_child(&self, ptr: NodeIndex) -> bool {
        let [left, right] = self.arena[ptr].children;
        self.is_red(left) || self.is_red(right)
    }
    #[inline]
    fn is_leaf(&self, ptr: NodeIndex) -> bool {
        ptr != NIL && self.arena[ptr].children == [NIL, NIL]
    }
    /// `child` of the sibling sits on the same side as the sibling does below
    /// the parent.
    #[inline]
    fn is_outer(&self, path: &Path, child: NodeIndex) -> bool {
        let side = self.side(path.parent, path.sibling);
        self.arena[path.sibling].children[side] == child
    }
    /// Removes the node matching `target`, which has to be present.
    ///
    /// Every black node entered on the way down is made red first, so the
    /// node that finally gets unlinked is a red leaf or the last node. Inner
    /// nodes are not spliced out: the in-order neighbour is removed instead and
    /// its element moved into the matching node.
    pub(crate) fn remove_present(&mut self, target: Target<'_, T>) -> Option<T> {
        let mut path = Path::new();
        self.set_color(HEADER, Color::Red);
        while self.compare(target, path.current) != Ordering::Equal {
            self.step(&mut path, target);
            // a promotion lands on another black node, which needs the same
            // treatment before the descent may continue below it
            loop {
                if self.is_double_black(path.current) {
                    self.resolve_double_black(&mut path);
                } else if self.has_red_child(path.current) {
                    let ordering = self.compare(target, path.current);
                    if ordering != Ordering::Equal && self.is_black(self.towards(path.current, ordering)) {
                        self.promote_sibling(&mut path, target);
                        continue;
                    }
                }
                break;
            }
            let root = self.root();
            self.set_color(root, Color::Black);
            self.set_color(NIL, Color::Black);
        }
        let found = path.current;
        debug_assert_ne!(found, NIL, "removed element has to be present");
        let element = if self.is_leaf(found) {
            self.unlink_leaf(&path);
            self.arena.remove(found).and_then( |node| node.element )
        } else {
            let [left, right] = self.arena[found].children;
            let neighbour = if right != NIL {
                self.limit::<0>(right)
            } else {
                self.limit::<1>(left)
            };
            trace!("[REMOVE] relabel {:?} from {:?}", found, neighbour);
            let replacement = self.remove_present(Target::Node(neighbour));
            replace(&mut self.arena[found].element, replacement)
        };
        self.set_color(HEADER, Color::Black);
        let root = self.root();
        self.set_color(root, Color::Black);
        element
    }
    #[inline]
    fn unlink_leaf(&mut self, path: &Path) {
        if path.current == self.root() {
            self.arena[HEADER].children[1] = NIL;
        } else {
            let slot = if self.arena[path.parent].children[1] == path.current { 1 } else { 0 };
            self.arena[path.parent].children[slot] = NIL;
        }
    }
    /// Case 1: `path.current` is double black.
    fn resolve_double_black(&mut self, path: &mut Path) {
        let sibling = path.sibling;
        if self.is_double_black(sibling) {
            trace!("[REMOVE] case 1A at {:?}", path.current);
            self.set_color(path.current, Color::Red);
            self.set_color(sibling, Color::Red);
            self.set_color(path.parent, Color::Black);
        } else if sibling != NIL && self.is_black(sibling) {
            let [left, right] = self.arena[sibling].children;
            if (self.is_red(left) && self.is_outer(path, left))
                || (self.is_red(right) && self.is_outer(path, right))
            {
                trace!("[REMOVE] case 1B at {:?}", path.current);
                self.promote_outer(path);
            } else {
                trace!("[REMOVE] case 1C at {:?}", path.current);
                let child = if self.is_red(left) { left } else { right };
                self.promote_inner(path, child);
            }
        }
    }
    /// Case 1B: the sibling has a red outer child, rotate the sibling above the
    /// parent.
    #[inline]
    fn promote_outer(&mut self, path: &mut Path) {
        path.grand = self.rotate(path.grand, path.parent, path.sibling);
        self.recolor(path);
    }
    /// Case 1C: the sibling has a red inner child, rotate it above the sibling
    /// first so it turns into case 1B.
    #[inline]
    fn promote_inner(&mut self, path: &mut Path, child: NodeIndex) {
        path.sibling = self.rotate(path.parent, path.sibling, child);
        path.grand = self.rotate(path.grand, path.parent, path.sibling);
        self.recolor(path);
    }
    #[inline]
    fn recolor(&mut self, path: &mut Path) {
        let [left, right] = self.arena[path.grand].children;
        self.set_color(left, Color::Black);
        self.set_color(right, Color::Black);
        self.set_color(path.current, Color::Red);
        self.set_color(path.grand, Color::Red);
        path.sibling = self.sibling(path.parent, path.current);
    }
    /// Case 2: the next node on the path is black while its sibling is red.
    /// Step onto it and rotate the red sibling above the parent.
    fn promote_sibling(&mut self, path: &mut Path, target: Target<'_, T>) {
        trace!("[REMOVE] case 2 at {:?}", path.current);
        self.step(path, target);
        self.set_color(path.parent, Color::Red);
        self.set_color(path.sibling, Color::Black);
        path.grand = self.rotate(path.grand, path.parent, path.sibling);
        path.sibling = self.sibling(path.parent, path.current);
    }
}
