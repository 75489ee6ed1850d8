//! A session owns one tree of either variant and answers commands against it.

use std::fmt;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::application::command::{Command, TreeKind};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{
    unique_values, BinaryTree, Hierarchy, NaryTree, RandomCapacity, Traversal, TreeNodeConvert,
};

/// Value type handled by sessions.
pub type Value = i64;

/// Either tree variant behind one interface.
#[derive(Debug)]
pub enum AnyTree {
    Nary(NaryTree<Value, RandomCapacity>),
    Binary(BinaryTree<Value>),
}

impl AnyTree {
    pub fn new(kind: TreeKind, settings: &Settings) -> Self {
        match kind {
            TreeKind::Nary => AnyTree::Nary(NaryTree::with_policy(RandomCapacity::new(
                settings.max_root_children,
                settings.max_other_node_children,
                settings.seed,
            ))),
            TreeKind::Binary => AnyTree::Binary(BinaryTree::new()),
        }
    }

    pub fn kind(&self) -> TreeKind {
        match self {
            AnyTree::Nary(_) => TreeKind::Nary,
            AnyTree::Binary(_) => TreeKind::Binary,
        }
    }
}

/// Result of a single command, displayed as one result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(Value),
    /// N-ary delete: the node and its subtree are gone
    Deleted { value: Value, removed: usize },
    Found(Value),
    NotFound(Value),
    Traversed { kind: Traversal, values: Vec<Value> },
    Loaded(Vec<Value>),
    Reset,
    Rendered(String),
    Exported(String),
    Help,
    Quit,
}

impl Outcome {
    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::NotFound(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted(v) => write!(f, "Node {v} inserted."),
            Outcome::Deleted { value, removed } => {
                write!(f, "Node {value} deleted ({removed} node(s) removed).")
            }
            Outcome::Found(v) => write!(f, "Node {v} found."),
            Outcome::NotFound(v) => write!(f, "Node {v} not found."),
            Outcome::Traversed { kind, values } => {
                write!(f, "{}: {}", kind.label(), values.iter().join(" "))
            }
            Outcome::Loaded(values) => write!(
                f,
                "{} random nodes inserted: {}",
                values.len(),
                values.iter().join(", ")
            ),
            Outcome::Reset => write!(f, "The tree has been reset."),
            Outcome::Rendered(text) | Outcome::Exported(text) => write!(f, "{}", text.trim_end()),
            Outcome::Help => write!(f, "{}", Command::HELP),
            Outcome::Quit => write!(f, "Bye."),
        }
    }
}

fn sample_seed(seed: u64) -> u64 {
    seed.wrapping_add(1)
}

#[derive(Debug)]
pub struct Session {
    tree: AnyTree,
    rng: StdRng,
    sample_count: usize,
    sample_min: Value,
    sample_max: Value,
}

impl Session {
    pub fn new(kind: TreeKind, settings: &Settings) -> Self {
        // distinct from the capacity stream
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(sample_seed(seed)),
            None => StdRng::from_entropy(),
        };
        Self {
            tree: AnyTree::new(kind, settings),
            rng,
            sample_count: settings.sample_count,
            sample_min: settings.sample_min,
            sample_max: settings.sample_max,
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.tree.kind()
    }

    pub fn tree(&self) -> &AnyTree {
        &self.tree
    }

    pub fn len(&self) -> usize {
        match &self.tree {
            AnyTree::Nary(t) => t.len(),
            AnyTree::Binary(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert(&mut self, value: Value) -> Outcome {
        match &mut self.tree {
            AnyTree::Nary(t) => {
                t.insert(value);
            }
            AnyTree::Binary(t) => {
                t.insert(value);
            }
        }
        Outcome::Inserted(value)
    }

    pub fn insert_all(&mut self, values: &[Value]) {
        for &v in values {
            self.insert(v);
        }
    }

    pub fn delete(&mut self, value: Value) -> Outcome {
        match &mut self.tree {
            AnyTree::Nary(t) => match t.delete(&value) {
                0 => Outcome::NotFound(value),
                removed => Outcome::Deleted { value, removed },
            },
            AnyTree::Binary(t) => {
                if t.delete(&value) {
                    Outcome::Found(value)
                } else {
                    Outcome::NotFound(value)
                }
            }
        }
    }

    pub fn search(&self, value: Value) -> Outcome {
        let found = match &self.tree {
            AnyTree::Nary(t) => t.contains(&value),
            AnyTree::Binary(t) => t.contains(&value),
        };
        if found {
            Outcome::Found(value)
        } else {
            Outcome::NotFound(value)
        }
    }

    pub fn traverse(&self, kind: Traversal) -> Vec<Value> {
        match &self.tree {
            AnyTree::Nary(t) => t.traverse(kind),
            AnyTree::Binary(t) => t.traverse(kind),
        }
    }

    pub fn depth(&self) -> usize {
        match &self.tree {
            AnyTree::Nary(t) => t.depth(),
            AnyTree::Binary(t) => t.depth(),
        }
    }

    pub fn leaves(&self) -> Vec<Value> {
        match &self.tree {
            AnyTree::Nary(t) => t.leaf_values(),
            AnyTree::Binary(t) => t.leaf_values(),
        }
    }

    pub fn reset(&mut self) {
        match &mut self.tree {
            AnyTree::Nary(t) => t.reset(),
            AnyTree::Binary(t) => t.reset(),
        }
    }

    /// Resets the tree and fills it with the configured number of unique random values.
    #[instrument(level = "debug", skip(self))]
    pub fn load_random(&mut self) -> ApplicationResult<Vec<Value>> {
        let values = unique_values(
            self.sample_count,
            self.sample_min,
            self.sample_max,
            &mut self.rng,
        )?;
        self.reset();
        self.insert_all(&values);
        info!(count = values.len(), "random values loaded");
        Ok(values)
    }

    pub fn hierarchy(&self) -> Option<Hierarchy> {
        match &self.tree {
            AnyTree::Nary(t) => Hierarchy::from_tree(t),
            AnyTree::Binary(t) => Hierarchy::from_tree(t),
        }
    }

    /// ASCII drawing of the current tree.
    pub fn render(&self) -> String {
        match &self.tree {
            AnyTree::Nary(t) => t.to_tree_string().to_string(),
            AnyTree::Binary(t) => t.to_tree_string().to_string(),
        }
    }

    /// `{label, children}` JSON of the current tree, `null` when empty.
    pub fn export_json(&self) -> ApplicationResult<String> {
        Ok(serde_json::to_string_pretty(&self.hierarchy())?)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: Command) -> ApplicationResult<Outcome> {
        let outcome = match command {
            Command::Insert(v) => self.insert(v),
            Command::Delete(v) => self.delete(v),
            Command::Search(v) => self.search(v),
            Command::Traverse(kind) => Outcome::Traversed {
                kind,
                values: self.traverse(kind),
            },
            Command::Random => Outcome::Loaded(self.load_random()?),
            Command::Reset => {
                self.reset();
                Outcome::Reset
            }
            Command::Show => Outcome::Rendered(self.render()),
            Command::Export => Outcome::Exported(self.export_json()?),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        debug!(%outcome, nodes = self.len(), "command executed");
        Ok(outcome)
    }
}
