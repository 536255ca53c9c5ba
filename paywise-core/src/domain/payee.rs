//! Payee domain model

use serde::{Deserialize, Serialize};

/// A known payee in the recipient directory
///
/// Note: `tag` is the unique PayTag handle (e.g. "@sarah_j") used for lookup
/// and display. Directory entries are immutable; the directory owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub tag: String,
    pub display_name: String,
    /// Short label shown in place of a profile picture, e.g. "SJ"
    pub avatar_label: String,
}

impl Payee {
    /// Create a payee, deriving the avatar label from the display name
    pub fn new(tag: impl Into<String>, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let avatar_label = Self::derive_avatar_label(&display_name);
        Self {
            tag: tag.into(),
            display_name,
            avatar_label,
        }
    }

    /// Initials of up to the first two words of the display name
    pub fn derive_avatar_label(display_name: &str) -> String {
        display_name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    /// Case-insensitive substring match against tag or display name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.tag.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
    }
}
