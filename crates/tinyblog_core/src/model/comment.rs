//! Comment draft model.
//!
//! # Responsibility
//! - Carry raw visitor input between submission handling and rendering.
//!
//! # Invariants
//! - Field values are stored unescaped; escaping happens at render time.
//! - Drafts are transient and never persisted by core.

use serde::{Deserialize, Serialize};

/// Raw, unescaped visitor input for a prospective comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    /// Visitor display name.
    pub name: String,
    /// Visitor website, kept as free text.
    pub website: String,
    /// Comment body.
    pub text: String,
}

impl CommentDraft {
    /// Creates a draft from the three submitted form fields.
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            text: text.into(),
        }
    }
}
