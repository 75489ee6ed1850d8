//! Domain layer: tree structures and their algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod binary;
pub mod capacity;
pub mod error;
pub mod hierarchy;
pub mod nary;
pub mod sample;
pub mod traversal;

pub use binary::{BinaryNode, BinaryTree};
pub use capacity::{CapacityPolicy, FixedCapacity, RandomCapacity};
pub use error::{DomainError, DomainResult};
pub use hierarchy::{Hierarchy, TreeNodeConvert};
pub use nary::{NaryNode, NaryTree};
pub use sample::unique_values;
pub use generational_arena::Index;
pub use traversal::{Branching, Traversal, Walk};
