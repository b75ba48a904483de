//! Parsed human name model

use serde::{Deserialize, Serialize};

/// A creator string split into its name parts.
///
/// Any part may be empty; a bare surname is a valid parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub first: String,
    pub last: String,
    pub initials: String,
}

impl ParsedName {
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty() && self.initials.is_empty()
    }

    /// First name with initials appended, space-separated, for `rft.aufirst`.
    pub fn first_with_initials(&self) -> String {
        join_parts(&[&self.first, &self.initials])
    }

    /// Full `<first> [<initials>] <last>` rendering, for `rft.au`.
    pub fn full_name(&self) -> String {
        join_parts(&[&self.first, &self.initials, &self.last])
    }
}

fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
