//! A binary tree over externally constructed nodes, with five traversal
//! strategies exposed as lazy iterators.
//!
//! Nodes live in an arena owned by the [`Tree`] and are addressed by
//! [`NodeId`]. Callers build the shape directly: allocate nodes with
//! [`Tree::add_node`] and wire them together with [`Tree::set_root`],
//! [`Tree::set_left`], and [`Tree::set_right`]. There is no search-tree
//! policy here — no ordered insert, no delete, no balancing. The tree is
//! whatever shape the caller wires up.
//!
//! # Examples
//!
//! ```
//! use treewalk::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let a = tree.add_node('a');
//! let b = tree.add_node('b');
//! let c = tree.add_node('c');
//!
//! tree.set_root(Some(a));
//! tree.set_left(a, Some(b));
//! tree.set_right(a, Some(c));
//!
//! let in_order: Vec<_> = tree.in_order().map(|id| *tree.value(id)).collect();
//! assert_eq!(in_order, vec!['b', 'a', 'c']);
//!
//! let level_order: Vec<_> = tree.level_order().map(|id| *tree.value(id)).collect();
//! assert_eq!(level_order, vec!['a', 'b', 'c']);
//! ```
//!
//! The threaded traversal borrows the tree mutably because it temporarily
//! rewires right-child links, but it always puts them back — even when the
//! iterator is dropped partway through:
//!
//! ```
//! use treewalk::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let a = tree.add_node(1);
//! let b = tree.add_node(2);
//! tree.set_root(Some(a));
//! tree.set_left(a, Some(b));
//!
//! let before = tree.clone();
//!
//! let mut iter = tree.threaded_in_order();
//! iter.next();
//! drop(iter); // any live threads are unlinked here
//!
//! assert_eq!(tree, before);
//! ```

use std::collections::VecDeque;

/// An opaque handle to a node in a [`Tree`]. Handles are only meaningful to
/// the tree that produced them via [`Tree::add_node`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// One node in the arena: a value and two optional child links.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary tree whose shape is wired up directly by the caller and whose
/// nodes can be visited in in-order, pre-order, post-order, level-order, or
/// threaded in-order.
///
/// The child links reachable from the root must form a finite, acyclic
/// structure: no node may be its own ancestor and no node may appear as a
/// child twice. Wiring up a cycle is a precondition violation — the
/// traversals will loop forever, and the threaded traversal will additionally
/// corrupt the shape.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Allocates a new node holding `value` with no children and returns its
    /// handle. The node starts out detached: it is not the root and is no
    /// one's child until the caller wires it in.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        id
    }

    /// Sets (or clears) the root of the tree.
    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Sets (or clears) the left child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` or `child` did not come from this tree's
    /// [`add_node`][Tree::add_node].
    pub fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        debug_assert!(child != Some(parent));
        if let Some(child) = child {
            assert!(child.0 < self.nodes.len());
        }
        self.node_mut(parent).left = child;
    }

    /// Sets (or clears) the right child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` or `child` did not come from this tree's
    /// [`add_node`][Tree::add_node].
    pub fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        debug_assert!(child != Some(parent));
        if let Some(child) = child {
            assert!(child.0 < self.nodes.len());
        }
        self.node_mut(parent).right = child;
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns a reference to the value stored at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree's
    /// [`add_node`][Tree::add_node].
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    /// Returns the left child of `id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree's
    /// [`add_node`][Tree::add_node].
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    /// Returns the right child of `id`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree's
    /// [`add_node`][Tree::add_node].
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    /// The number of nodes allocated in this tree, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root. Note that a tree can be non-empty by
    /// this measure while still having detached nodes allocated.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// Visits the left subtree, then the node, then the right subtree, for
    /// every node reachable from the root. Uses an explicit stack whose depth
    /// is bounded by the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treewalk::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let a = tree.add_node("root");
    /// let b = tree.add_node("left");
    /// tree.set_root(Some(a));
    /// tree.set_left(a, Some(b));
    ///
    /// let order: Vec<_> = tree.in_order().collect();
    /// assert_eq!(order, vec![b, a]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// Visits the node, then its left subtree, then its right subtree, for
    /// every node reachable from the root.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Visits the left subtree, then the right subtree, then the node, for
    /// every node reachable from the root.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            tree: self,
            stack: Vec::new(),
            current: self.root,
            last_visited: None,
        }
    }

    /// Visits every node at depth `d` before any node at depth `d + 1`, left
    /// to right within a depth. Straightforward BFS over a FIFO queue.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Visits nodes in the same order as [`in_order`][Tree::in_order] but
    /// with constant auxiliary space, using Morris traversal over a
    /// [threaded binary tree](https://en.wikipedia.org/wiki/Threaded_binary_tree).
    ///
    /// Instead of a stack, the traversal temporarily sets the empty right
    /// link of a node's in-order predecessor to point back at the node (a
    /// "thread"), follows it after finishing the left subtree, and then
    /// clears it again. The mutable borrow lasts for the life of the
    /// iterator; when the iterator is dropped — exhausted or not — every
    /// outstanding thread has been unlinked and the shape is exactly what it
    /// was before the traversal started.
    ///
    /// # Examples
    ///
    /// ```
    /// use treewalk::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let a = tree.add_node(2);
    /// let b = tree.add_node(1);
    /// let c = tree.add_node(3);
    /// tree.set_root(Some(a));
    /// tree.set_left(a, Some(b));
    /// tree.set_right(a, Some(c));
    ///
    /// let threaded: Vec<_> = tree.threaded_in_order().collect();
    /// let stacked: Vec<_> = tree.in_order().collect();
    /// assert_eq!(threaded, stacked);
    /// ```
    pub fn threaded_in_order(&mut self) -> ThreadedInOrder<'_, T> {
        ThreadedInOrder {
            current: self.root,
            tree: self,
        }
    }
}

/// Lazy in-order traversal. See [`Tree::in_order`].
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.current {
                // Go as far left as possible, remembering the path.
                Some(id) => {
                    self.stack.push(id);
                    self.current = self.tree.node(id).left;
                }
                // Nothing further left: the top of the stack is next.
                None => {
                    let id = self.stack.pop()?;
                    self.current = self.tree.node(id).right;
                    return Some(id);
                }
            }
        }
    }
}

/// Lazy pre-order traversal. See [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Push the right child first so the left one is popped before it.
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(id)
    }
}

/// Lazy post-order traversal. See [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
    /// The node most recently yielded. Distinguishes arriving at a node from
    /// returning to it after finishing its right subtree.
    last_visited: Option<NodeId>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.current {
                Some(id) => {
                    self.stack.push(id);
                    self.current = self.tree.node(id).left;
                }
                None => {
                    let &peek = self.stack.last()?;
                    let right = self.tree.node(peek).right;
                    // Descend into the right subtree unless we just came back
                    // out of it.
                    if right.is_some() && right != self.last_visited {
                        self.current = right;
                    } else {
                        self.stack.pop();
                        self.last_visited = Some(peek);
                        return Some(peek);
                    }
                }
            }
        }
    }
}

/// Lazy level-order (breadth-first) traversal. See [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.queue.pop_front()?;
        let node = self.tree.node(id);
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some(id)
    }
}

/// Lazy threaded (Morris) in-order traversal. See
/// [`Tree::threaded_in_order`].
///
/// Holds the tree mutably for its whole lifetime. While the iterator is live,
/// some right-child links may be threads pointing back up the tree; dropping
/// the iterator unlinks any that remain.
pub struct ThreadedInOrder<'a, T> {
    tree: &'a mut Tree<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for ThreadedInOrder<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(id) = self.current {
            match self.tree.node(id).left {
                // No left subtree: visit now and move right. The right link
                // may be a thread, in which case this resumes an ancestor.
                None => {
                    self.current = self.tree.node(id).right;
                    return Some(id);
                }
                Some(left) => {
                    // Walk to the in-order predecessor: rightmost node of the
                    // left subtree. Stop early if we reach the thread we
                    // planted on a previous pass.
                    let mut pred = left;
                    loop {
                        match self.tree.node(pred).right {
                            Some(right) if right != id => pred = right,
                            _ => break,
                        }
                    }

                    if self.tree.node(pred).right.is_none() {
                        // First arrival: plant the thread and defer this node
                        // until the left subtree is done.
                        self.tree.node_mut(pred).right = Some(id);
                        self.current = Some(left);
                    } else {
                        // Second arrival, via the thread: the left subtree is
                        // finished. Unlink the thread, visit, move right.
                        self.tree.node_mut(pred).right = None;
                        self.current = self.tree.node(id).right;
                        return Some(id);
                    }
                }
            }
        }
        None
    }
}

impl<T> Drop for ThreadedInOrder<'_, T> {
    fn drop(&mut self) {
        // Abandoning the walk mid-flight would leave threads installed and
        // the next traversal of this tree would follow them. Run the
        // remaining steps without yielding so every thread gets unlinked.
        while self.next().is_some() {}
    }
}
