use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::traversal::{self, Branching, Traversal, Walk};

/// Node of a binary tree.
#[derive(Debug, Clone)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl<T> BinaryNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Arena-backed binary tree filled level by level, left before right.
///
/// Values are placed by position, not by order: this is not a search tree.
#[derive(Debug)]
pub struct BinaryTree<T> {
    arena: Arena<BinaryNode<T>>,
    root: Option<Index>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Places `value` in the first empty slot in breadth-first order.
    #[instrument(level = "debug", skip(self, value))]
    pub fn insert(&mut self, value: T) -> Index {
        let node = self.arena.insert(BinaryNode::leaf(value));
        let Some(root) = self.root else {
            debug!("empty tree, new node becomes root");
            self.root = Some(node);
            return node;
        };

        let Some((parent, side)) = self.first_free_slot(root) else {
            debug!("root no longer in arena, new node becomes root");
            self.root = Some(node);
            return node;
        };
        if let Some(parent_node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent_node.left = Some(node),
                Side::Right => parent_node.right = Some(node),
            }
        }
        node
    }

    fn first_free_slot(&self, root: Index) -> Option<(Index, Side)> {
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            let Some(node) = self.arena.get(current) else {
                continue;
            };
            match node.left {
                None => return Some((current, Side::Left)),
                Some(left) => queue.push_back(left),
            }
            match node.right {
                None => return Some((current, Side::Right)),
                Some(right) => queue.push_back(right),
            }
        }
        None
    }

    /// Id of the first node in level order holding `value`. Never mutates.
    #[instrument(level = "debug", skip(self, value))]
    pub fn search(&self, value: &T) -> Option<Index>
    where
        T: PartialEq,
    {
        traversal::find(self, value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(value).is_some()
    }

    /// Reports whether `value` is present.
    ///
    /// Binary trees do not restructure on delete; the tree is left untouched.
    #[instrument(level = "debug", skip(self, value))]
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.contains(value);
        debug!(found, "binary delete is a lookup");
        found
    }

    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn walk(&self, kind: Traversal) -> Walk<'_, Self> {
        traversal::walk(self, kind)
    }

    pub fn traverse(&self, kind: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        traversal::traverse(self, kind)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn depth(&self) -> usize {
        traversal::depth(self)
    }

    pub fn leaf_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        traversal::leaf_values(self)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&BinaryNode<T>> {
        self.arena.get(idx)
    }
}

impl<T> Branching for BinaryTree<T> {
    type Value = T;

    fn root(&self) -> Option<Index> {
        self.root
    }

    fn value(&self, idx: Index) -> Option<&T> {
        self.arena.get(idx).map(|n| &n.value)
    }

    fn children(&self, idx: Index) -> Vec<Index> {
        self.arena
            .get(idx)
            .map(|n| n.left.into_iter().chain(n.right).collect())
            .unwrap_or_default()
    }

    /// Self sits between the left and right subtree.
    fn inorder_split(&self, idx: Index) -> usize {
        self.arena
            .get(idx)
            .map_or(0, |n| usize::from(n.left.is_some()))
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::domain::hierarchy::TreeNodeConvert;
        write!(f, "{}", self.to_tree_string())
    }
}
