//! Terminal output for trees, traversals and session results
//!
//! Colors follow NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

use crate::application::{Outcome, Value};

/// Error line on stderr with a red bold "error:" prefix.
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Session result: green check on hits, yellow on misses.
pub fn outcome(outcome: &Outcome) {
    if outcome.is_miss() {
        println!("{} {}", "?".yellow(), outcome);
    } else {
        println!("{} {}", "✓".green(), outcome);
    }
}

/// One value list per line: `Preorder: 1 2 4 5 3 6 7`.
pub fn values(label: &str, values: &[Value]) {
    println!("{}: {}", label.green(), itertools::join(values, " "));
}

pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Rendered tree, JSON or TOML, printed as is.
pub fn block(text: &str) {
    println!("{}", text.trim_end());
}

pub fn prompt(msg: &(impl Display + ?Sized)) {
    print!("{} ", msg.to_string().cyan());
    std::io::stdout().flush().ok();
}
