use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::capacity::{CapacityPolicy, RandomCapacity};
use crate::domain::traversal::{self, Branching, Traversal, Walk};

/// Node of an n-ary tree.
#[derive(Debug, Clone)]
pub struct NaryNode<T> {
    pub value: T,
    /// Child ids, kept sorted ascending by value
    pub children: Vec<Index>,
}

impl<T> NaryNode<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }
}

/// Arena-backed n-ary tree with breadth-first, capacity-limited insertion.
///
/// Every node in the arena is reachable from the root: deleting a node
/// removes its whole subtree from the arena.
#[derive(Debug)]
pub struct NaryTree<T, P = RandomCapacity> {
    arena: Arena<NaryNode<T>>,
    root: Option<Index>,
    policy: P,
}

impl<T: Ord> Default for NaryTree<T, RandomCapacity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> NaryTree<T, RandomCapacity> {
    pub fn new() -> Self {
        Self::with_policy(RandomCapacity::default())
    }
}

impl<T: Ord, P: CapacityPolicy> NaryTree<T, P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            policy,
        }
    }

    /// Inserts `value` as a new leaf and returns its id.
    ///
    /// Breadth-first from the root: the first node whose child count is below
    /// the policy's capacity adopts the leaf. If every visited node is full,
    /// the last visited node adopts it, so a call always grows the tree by one.
    #[instrument(level = "debug", skip(self, value))]
    pub fn insert(&mut self, value: T) -> Index {
        let node = self.arena.insert(NaryNode::leaf(value));
        let Some(root) = self.root else {
            debug!("empty tree, new node becomes root");
            self.root = Some(node);
            return node;
        };

        let mut queue = VecDeque::from([root]);
        let mut last = root;
        while let Some(current) = queue.pop_front() {
            last = current;
            self.sort_children(current);
            let capacity = self.policy.capacity(current == root);
            let Some(current_node) = self.arena.get(current) else {
                continue;
            };
            trace!(
                children = current_node.children.len(),
                capacity,
                "checking capacity"
            );
            if current_node.children.len() < capacity {
                self.attach(current, node);
                return node;
            }
            queue.extend(current_node.children.iter().copied());
        }

        debug!("every visited node is full, attaching to last visited node");
        self.attach(last, node);
        node
    }

    /// Removes the first node in level order holding `value` together with
    /// its subtree. Deleting the root empties the tree.
    ///
    /// Returns the number of removed nodes, 0 when `value` is absent.
    #[instrument(level = "debug", skip(self, value))]
    pub fn delete(&mut self, value: &T) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        if self.arena.get(root).is_some_and(|n| n.value == *value) {
            let removed = self.arena.len();
            debug!(removed, "root matched, clearing tree");
            self.reset();
            return removed;
        }

        let mut queue = VecDeque::from([root]);
        while let Some(parent) = queue.pop_front() {
            let Some(parent_node) = self.arena.get(parent) else {
                continue;
            };
            let hit = parent_node
                .children
                .iter()
                .position(|&c| self.arena.get(c).is_some_and(|n| n.value == *value));
            match hit {
                Some(pos) => {
                    let Some(parent_node) = self.arena.get_mut(parent) else {
                        return 0;
                    };
                    let child = parent_node.children.remove(pos);
                    let removed = self.remove_subtree(child);
                    debug!(removed, "subtree removed");
                    return removed;
                }
                None => queue.extend(parent_node.children.iter().copied()),
            }
        }
        0
    }

    /// Id of the first node in level order holding `value`.
    #[instrument(level = "debug", skip(self, value))]
    pub fn search(&self, value: &T) -> Option<Index> {
        traversal::find(self, value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
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

    pub fn get(&self, idx: Index) -> Option<&NaryNode<T>> {
        self.arena.get(idx)
    }

    fn attach(&mut self, parent: Index, child: Index) {
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        self.sort_children(parent);
    }

    /// Stable sort, so equal values keep insertion order.
    fn sort_children(&mut self, idx: Index) {
        let Some(node) = self.arena.get_mut(idx) else {
            return;
        };
        let mut children = std::mem::take(&mut node.children);
        let arena = &self.arena;
        children.sort_by(|a, b| {
            let a = arena.get(*a).map(|n| &n.value);
            let b = arena.get(*b).map(|n| &n.value);
            a.cmp(&b)
        });
        if let Some(node) = self.arena.get_mut(idx) {
            node.children = children;
        }
    }

    fn remove_subtree(&mut self, idx: Index) -> usize {
        let mut removed = 0;
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                removed += 1;
                stack.extend(node.children);
            }
        }
        removed
    }
}

impl<T, P> Branching for NaryTree<T, P> {
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
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }
}

impl<T: fmt::Display, P> fmt::Display for NaryTree<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::domain::hierarchy::TreeNodeConvert;
        write!(f, "{}", self.to_tree_string())
    }
}
