//! rstree: n-ary and binary trees for teaching.
//!
//! Layers, innermost first:
//! - [`domain`]: the trees, their insertion/deletion rules and traversals
//! - [`application`]: sessions that parse textual commands and drive one tree
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing, dispatch and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{Command, Outcome, Session, TreeKind};
pub use domain::{
    BinaryTree, Branching, CapacityPolicy, FixedCapacity, Hierarchy, NaryTree, RandomCapacity,
    Traversal,
};
