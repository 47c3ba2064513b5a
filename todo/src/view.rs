//! Plain-text view of the widget and the terminal command grammar.

use crate::types::TodoState;
use std::fmt::Write as _;

/// Heading shown above the list
pub const HEADING: &str = "What's the Plan for Today?";

/// Help text listing the terminal commands
pub const HELP: &str = concat!(
    "  <text>   submit text (Add Todo / Update)\n",
    "  (empty)  submit the current pending text\n",
    "  :e N     edit item N\n",
    "  :d N     delete item N\n",
    "  :h       show this help\n",
    "  :q       quit",
);

/// Renders the widget: heading, input line, then the numbered items.
///
/// The item under the edit cursor is marked with `*`.
#[must_use]
pub fn render(state: &TodoState, pending: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "[{pending}] <{}>", state.submit_label());

    if state.is_empty() {
        let _ = writeln!(out, "  (nothing planned)");
    }
    for (index, item) in state.items.iter().enumerate() {
        let marker = if state.edit_cursor == Some(index) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker}{index:>3}. {item}");
    }

    out
}

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the pending text to this line and submit it
    Submit(String),
    /// Submit whatever is pending
    SubmitPending,
    /// Edit the item at this index
    Edit(usize),
    /// Delete the item at this index
    Delete(usize),
    /// Print the help text
    Help,
    /// Leave the session
    Quit,
    /// A `:` command that could not be understood
    Unknown(String),
}

impl Command {
    /// Parses one line of input (without its trailing newline).
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return if line.is_empty() {
                Self::SubmitPending
            } else {
                Self::Submit(line.to_string())
            };
        };

        let mut parts = rest.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let index = parts.next().and_then(|n| n.parse::<usize>().ok());
        let extra = parts.next().is_some();

        match (verb, index, extra) {
            ("e" | "edit", Some(index), false) => Self::Edit(index),
            ("d" | "delete", Some(index), false) => Self::Delete(index),
            ("h" | "help", None, false) => Self::Help,
            ("q" | "quit", None, false) => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}
