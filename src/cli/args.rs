//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::TreeKind;
use crate::domain::Traversal;

/// Build, inspect and traverse n-ary and binary trees
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "RSTREE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Fixed RNG seed for capacities and random values
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Fan-out cap of the n-ary root
    #[arg(long, global = true)]
    pub max_root_children: Option<usize>,

    /// Upper bound of the random fan-out of other n-ary nodes
    #[arg(long = "max-other-children", global = true)]
    pub max_other_node_children: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert values, print all traversals and the tree
    Build {
        /// Tree variant: nary or binary
        kind: TreeKind,
        /// Values in insertion order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Insert values and print a single traversal
    Traverse {
        /// Tree variant: nary or binary
        kind: TreeKind,
        /// inorder, preorder, postorder or level-order
        traversal: Traversal,
        /// Values in insertion order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Insert values and print the {label, children} hierarchy as JSON
    Export {
        /// Tree variant: nary or binary
        kind: TreeKind,
        /// Values in insertion order
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Load unique random values and show the result
    Demo {
        /// Tree variant: nary or binary
        kind: TreeKind,
    },

    /// Read commands from stdin, one per line
    Session {
        /// Tree variant: nary or binary
        kind: TreeKind,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
