use std::cmp::Ordering;
use std::collections::HashSet;

use treewalk::tree::Tree;

/// Builds a tree from `keys` search-tree style so that arbitrary key vectors
/// produce arbitrary shapes. Duplicates are dropped.
fn build(keys: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for &key in keys {
        match tree.root() {
            None => {
                let id = tree.add_node(key);
                tree.set_root(Some(id));
            }
            Some(mut at) => loop {
                match key.cmp(tree.value(at)) {
                    Ordering::Equal => break,
                    Ordering::Less => match tree.left(at) {
                        Some(left) => at = left,
                        None => {
                            let id = tree.add_node(key);
                            tree.set_left(at, Some(id));
                            break;
                        }
                    },
                    Ordering::Greater => match tree.right(at) {
                        Some(right) => at = right,
                        None => {
                            let id = tree.add_node(key);
                            tree.set_right(at, Some(id));
                            break;
                        }
                    },
                }
            },
        }
    }

    tree
}

quickcheck::quickcheck! {
    /// All five traversals agree on the set of nodes they visit.
    fn traversals_agree_on_node_set(keys: Vec<i8>) -> bool {
        let mut tree = build(&keys);

        let in_order: HashSet<_> = tree.in_order().collect();
        let pre_order: HashSet<_> = tree.pre_order().collect();
        let post_order: HashSet<_> = tree.post_order().collect();
        let level_order: HashSet<_> = tree.level_order().collect();
        let threaded: HashSet<_> = tree.threaded_in_order().collect();

        in_order == pre_order
            && in_order == post_order
            && in_order == level_order
            && in_order == threaded
    }
}

quickcheck::quickcheck! {
    /// Pre-order visits the root first; post-order visits it last.
    fn root_position(keys: Vec<i8>) -> bool {
        let tree = build(&keys);

        tree.pre_order().next() == tree.root() && tree.post_order().last() == tree.root()
    }
}

quickcheck::quickcheck! {
    /// Traversals after an abandoned threaded walk are unaffected by it.
    fn abandoned_threaded_walk_is_invisible(keys: Vec<i8>, taken: usize) -> bool {
        let mut tree = build(&keys);
        let expected: Vec<_> = tree.in_order().collect();
        let taken = taken % (tree.len() + 2);

        {
            let mut iter = tree.threaded_in_order();
            for _ in 0..taken {
                iter.next();
            }
        }

        tree.in_order().collect::<Vec<_>>() == expected
    }
}
