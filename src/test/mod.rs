
use std::fmt::Debug;

use simplelog::{Config, LevelFilter, SimpleLogger};

use crate::tree::{Color, NodeIndex, OrderedTree, HEADER, NIL};

fn init_logging() {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}

fn root<T: Ord>(tree: &OrderedTree<T>) -> NodeIndex {
    tree.arena[HEADER].children[1]
}

fn validate_rb_node<T>(ptr: NodeIndex, parent: Color, blacks: usize, expected: usize,
    tree: &OrderedTree<T>
)
    where T: Ord + Debug
{
    if ptr == NIL {
        assert_eq!(blacks, expected, "black height of all paths has to be equal");
        return;
    }
    let node = &tree.arena[ptr];
    let blacks = match node.color {
        Color::Black => blacks + 1,
        Color::Red => {
            assert_eq!(parent, Color::Black, "cannot have two red nodes in a row");
            blacks
        }
    };
    assert!(node.element.is_some(), "real node without element");
    let [left, right] = node.children;
    validate_rb_node(left, node.color, blacks, expected, tree);
    validate_rb_node(right, node.color, blacks, expected, tree);
}

/// Checks the tree independently of `OrderedTree::validate` and returns its
/// black height.
fn validate_rb_tree<T>(tree: &OrderedTree<T>) -> usize
    where T: Ord + Debug
{
    assert!(tree.arena[HEADER].is_black(), "header has to be black between operations");
    assert_eq!(tree.arena[HEADER].children[0], NIL, "header never has a left child");
    assert!(tree.arena[NIL].is_black(), "sentinel has to be black");
    assert_eq!(tree.arena[NIL].children, [NIL, NIL], "sentinel never gets children");
    let root = root(tree);
    assert!(root == NIL || tree.arena[root].is_black(), "root has to be black");

    let mut expected = 0;
    let mut ptr = root;
    while ptr != NIL {
        if tree.arena[ptr].is_black() {
            expected += 1;
        }
        ptr = tree.arena[ptr].children[0];
    }
    validate_rb_node(root, Color::Black, 0, expected, tree);

    let elements = tree.iter().collect::<Vec<_>>();
    assert!(elements.windows(2).all( |pair| pair[0] < pair[1] ), "bad order: {:?}", elements);
    assert_eq!(elements.len(), tree.len());
    assert_eq!(tree.is_empty(), elements.is_empty());
    assert_eq!(tree.validate(), Ok(expected));
    expected
}

fn height<T: Ord>(ptr: NodeIndex, tree: &OrderedTree<T>) -> usize {
    if ptr == NIL {
        return 0;
    }
    let [left, right] = tree.arena[ptr].children;
    1 + height(left, tree).max(height(right, tree))
}

fn print_subtree<T>(ptr: NodeIndex, depth: u8, markers: u32,
    tree: &OrderedTree<T>
)
    where T: Ord + Debug
{
    for i in 0..depth {
        if markers & (1 << i) == 0 {
            print!("| ");
        } else {
            print!("  ");
        }
    }
    if ptr == NIL {
        println!("[B] NIL");
        return;
    }
    let node = &tree.arena[ptr];
    println!("[{}] {:?}", if node.is_red() { "R" } else { "B" }, node.element);
    print_subtree(node.children[0], depth + 1, markers, tree);
    print_subtree(node.children[1], depth + 1, markers | (1 << (depth + 1)), tree);
}
#[allow(unused)]
fn print_tree<T>(tree: &OrderedTree<T>)
    where T: Ord + Debug
{
    print_subtree(root(tree), 0, 1, tree);
}
