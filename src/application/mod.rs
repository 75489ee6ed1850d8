//! Application layer: sessions and command parsing
//!
//! Sits between the CLI and the domain trees.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, TreeKind};
pub use error::{ApplicationError, ApplicationResult};
pub use session::{AnyTree, Outcome, Session, Value};
