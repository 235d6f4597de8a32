#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::Language;

/// Editable state of the single-document editor page. Constructed once
/// per load from the share link query, re-encoded on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub code: String,
    pub language: Language,
    pub use_transforms: bool,
}

/// Editable state of the two-document diff page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffState {
    pub code_old: String,
    pub code_new: String,
    pub language: Language,
}
