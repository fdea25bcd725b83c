use crate::tree::{NodeIndex, OrderedTree, Violation, HEADER, NIL};

impl<T: Ord> OrderedTree<T> {
    /// Validate the tree with the following rules:
    ///
    /// * Elements are in strictly ascending in-order sequence.
    /// * No red node has a red child.
    /// * Every path from the root down to the sentinel has the same number of
    ///   black nodes.
    /// * Root and header are black.
    ///
    /// Returns the black height of the root.
    pub fn validate(&self) -> Result<usize, Violation> {
        if self.arena[HEADER].is_red() {
            return Err(Violation::RedHeader);
        }
        let root = self.root();
        if self.is_red(root) {
            return Err(Violation::RedRoot);
        }
        self.validate_node(root, false, [None, None])
    }

    fn validate_node(&self, ptr: NodeIndex, from_red: bool, bounds: [Option<&T>; 2]) -> Result<usize, Violation> {
        if ptr == NIL {
            return Ok(0);
        }
        let node = &self.arena[ptr];
        let red = node.is_red();
        if from_red && red {
            return Err(Violation::ConsecutiveReds);
        }
        let Some(element) = node.element.as_ref() else { return Err(Violation::OutOfOrder) };
        let [low, high] = bounds;
        if low.is_some_and( |low| low >= element ) || high.is_some_and( |high| high <= element ) {
            return Err(Violation::OutOfOrder);
        }
        let [left, right] = node.children;
        let left_blacks = self.validate_node(left, red, [low, Some(element)])?;
        let right_blacks = self.validate_node(right, red, [Some(element), high])?;
        if left_blacks != right_blacks {
            return Err(Violation::UnbalancedBlacks { left: left_blacks, right: right_blacks });
        }
        Ok(left_blacks + node.is_black() as usize)
    }
}
