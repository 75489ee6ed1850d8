//! Generic labeled hierarchy for renderers and ASCII display.

use std::fmt::Display;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use crate::domain::traversal::Branching;

/// `{label, children}` view of a tree, the shape tree-layout libraries consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub label: String,
    #[serde(default)]
    pub children: Vec<Hierarchy>,
}

impl Hierarchy {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// `None` for an empty tree.
    #[instrument(level = "debug", skip(tree))]
    pub fn from_tree<B>(tree: &B) -> Option<Self>
    where
        B: Branching + ?Sized,
        B::Value: Display,
    {
        tree.root().and_then(|root| Self::from_node(tree, root))
    }

    fn from_node<B>(tree: &B, idx: Index) -> Option<Self>
    where
        B: Branching + ?Sized,
        B::Value: Display,
    {
        let value = tree.value(idx)?;
        let children = tree
            .children(idx)
            .into_iter()
            .filter_map(|child| Self::from_node(tree, child))
            .collect();
        Some(Self {
            label: value.to_string(),
            children,
        })
    }

    /// Number of nodes in this hierarchy.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Hierarchy::size).sum::<usize>()
    }

    pub fn to_termtree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_termtree()).collect();
        Tree::new(self.label.clone()).with_leaves(leaves)
    }
}

/// ASCII rendering of any tree through `termtree`.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<B> TreeNodeConvert for B
where
    B: Branching,
    B::Value: Display,
{
    fn to_tree_string(&self) -> Tree<String> {
        match Hierarchy::from_tree(self) {
            Some(hierarchy) => hierarchy.to_termtree(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
