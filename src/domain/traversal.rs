//! Shared traversal machinery for every tree variant.
//!
//! Both trees expose their shape through [`Branching`]; a single [`Walk`]
//! iterator then produces any of the four classic orders.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::DomainError;

/// The four classic traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Inorder,
    Preorder,
    Postorder,
    LevelOrder,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::Inorder,
        Traversal::Preorder,
        Traversal::Postorder,
        Traversal::LevelOrder,
    ];

    /// Human readable label used in result lines.
    pub fn label(&self) -> &'static str {
        match self {
            Traversal::Inorder => "Inorder",
            Traversal::Preorder => "Preorder",
            Traversal::Postorder => "Postorder",
            Traversal::LevelOrder => "Level order",
        }
    }

    fn emit_at(self) -> Option<EmitAt> {
        match self {
            Traversal::Preorder => Some(EmitAt::First),
            Traversal::Inorder => Some(EmitAt::Split),
            Traversal::Postorder => Some(EmitAt::Last),
            Traversal::LevelOrder => None,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Inorder => "inorder",
            Traversal::Preorder => "preorder",
            Traversal::Postorder => "postorder",
            Traversal::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

impl FromStr for Traversal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(Traversal::Inorder),
            "preorder" | "pre" => Ok(Traversal::Preorder),
            "postorder" | "post" => Ok(Traversal::Postorder),
            "level-order" | "levelorder" | "level_order" | "level" => Ok(Traversal::LevelOrder),
            other => Err(DomainError::UnknownTraversal(other.to_string())),
        }
    }
}

/// Where a depth-first walk emits a node relative to its children.
#[derive(Debug, Clone, Copy)]
enum EmitAt {
    First,
    Split,
    Last,
}

/// Read access to a tree whose nodes live in a generational arena.
///
/// Implementors only describe their shape; traversal, search and
/// rendering are written once against this trait.
pub trait Branching {
    type Value;

    fn root(&self) -> Option<Index>;

    fn value(&self, idx: Index) -> Option<&Self::Value>;

    /// Existing children of `idx`, left to right.
    fn children(&self, idx: Index) -> Vec<Index>;

    /// Number of children emitted before the node itself in an inorder walk.
    ///
    /// Defaults to "all children first", the n-ary reading of inorder.
    fn inorder_split(&self, idx: Index) -> usize {
        self.children(idx).len()
    }
}

enum Frontier {
    Depth { stack: Vec<Step>, emit_at: EmitAt },
    Breadth(VecDeque<Index>),
}

enum Step {
    Expand(Index),
    Emit(Index),
}

/// Iterator over `(id, value)` pairs of a tree in a chosen [`Traversal`].
pub struct Walk<'a, B: ?Sized> {
    tree: &'a B,
    frontier: Frontier,
}

impl<'a, B: Branching + ?Sized> Walk<'a, B> {
    #[instrument(level = "trace", skip(tree))]
    pub fn new(tree: &'a B, kind: Traversal) -> Self {
        let start = tree.root();
        let frontier = match kind.emit_at() {
            Some(emit_at) => Frontier::Depth {
                stack: start.map(Step::Expand).into_iter().collect(),
                emit_at,
            },
            None => Frontier::Breadth(start.into_iter().collect()),
        };
        Self { tree, frontier }
    }
}

impl<'a, B: Branching + ?Sized> Iterator for Walk<'a, B> {
    type Item = (Index, &'a B::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        match &mut self.frontier {
            Frontier::Breadth(queue) => {
                while let Some(idx) = queue.pop_front() {
                    if let Some(value) = tree.value(idx) {
                        queue.extend(tree.children(idx));
                        return Some((idx, value));
                    }
                }
                None
            }
            Frontier::Depth { stack, emit_at } => {
                while let Some(step) = stack.pop() {
                    match step {
                        Step::Emit(idx) => {
                            if let Some(value) = tree.value(idx) {
                                return Some((idx, value));
                            }
                        }
                        Step::Expand(idx) => {
                            let children = tree.children(idx);
                            let split = match emit_at {
                                EmitAt::First => 0,
                                EmitAt::Split => tree.inorder_split(idx).min(children.len()),
                                EmitAt::Last => children.len(),
                            };
                            // Pushed in reverse so the stack pops left to right.
                            stack.extend(children[split..].iter().rev().map(|&c| Step::Expand(c)));
                            stack.push(Step::Emit(idx));
                            stack.extend(children[..split].iter().rev().map(|&c| Step::Expand(c)));
                        }
                    }
                }
                None
            }
        }
    }
}

pub fn walk<B: Branching + ?Sized>(tree: &B, kind: Traversal) -> Walk<'_, B> {
    Walk::new(tree, kind)
}

/// Collects the values of `tree` in `kind` order. Empty trees yield an empty vector.
#[instrument(level = "debug", skip(tree))]
pub fn traverse<B>(tree: &B, kind: Traversal) -> Vec<B::Value>
where
    B: Branching + ?Sized,
    B::Value: Clone,
{
    walk(tree, kind).map(|(_, value)| value.clone()).collect()
}

/// Id of the first node in level order holding `value`.
pub fn find<B>(tree: &B, value: &B::Value) -> Option<Index>
where
    B: Branching + ?Sized,
    B::Value: PartialEq,
{
    walk(tree, Traversal::LevelOrder)
        .find(|(_, v)| *v == value)
        .map(|(idx, _)| idx)
}

/// Number of levels, computed breadth-first with (node, depth) pairs.
pub fn depth<B: Branching + ?Sized>(tree: &B) -> usize {
    let mut max_depth = 0;
    let mut queue: VecDeque<(Index, usize)> = tree.root().map(|r| (r, 1)).into_iter().collect();

    while let Some((idx, level)) = queue.pop_front() {
        max_depth = max_depth.max(level);
        for child in tree.children(idx) {
            queue.push_back((child, level + 1));
        }
    }

    max_depth
}

/// Values of all leaf nodes, left to right.
pub fn leaf_values<B>(tree: &B) -> Vec<B::Value>
where
    B: Branching + ?Sized,
    B::Value: Clone,
{
    walk(tree, Traversal::Preorder)
        .filter(|(idx, _)| tree.children(*idx).is_empty())
        .map(|(_, value)| value.clone())
        .collect()
}
