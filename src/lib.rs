//! In-memory ordered set backed by a red-black tree.
//!
//! Insertion rebalances top-down with color flips on the way to the leaf,
//! removal resolves double-black nodes on the way down to the target, so
//! neither ever walks back up. Nodes live in an index-addressed arena.
//!
//! ```
//! use rb_ordered::prelude::*;
//!
//! let mut tree = OrderedTree::new();
//! for x in [10, 20, 15, 5, 1] {
//!     tree.insert(x);
//! }
//! tree.remove(&10);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 5, 15, 20]);
//! assert_eq!(tree.min(), Ok(&1));
//! assert!(tree.validate().is_ok());
//! ```

mod arena;
pub mod tree;

pub use crate::tree::{Error, Iter, OrderedTree, Violation};

pub mod prelude {
    pub use crate::tree::{Error, OrderedTree, Violation};
}

#[cfg(test)]
mod test;
