//! # Content Formatting
//!
//! Turns the raw text of one SOAP section into renderable [`Fragment`]s.
//!
//! Formatting runs in two passes:
//!
//! 1. **Bullet normalization** over the whole text: dash-separated clauses
//!    (`a - b`) become one `• ` line each and a leading bullet is normalized.
//! 2. **Line tokenization**: each line is either a [`Fragment::Heading`]
//!    (an optional `• `/`N. ` prefix, a `Label:`, the rest of the line) or a
//!    [`Fragment::Plain`] run.
//!
//! ## Modules
//!
//! - **`bullets`**: `normalize_bullets()` and the `BULLET` marker
//! - **`fragment`**: `Fragment` enum and the lazy `Fragments` iterator

pub mod bullets;
pub mod fragment;

pub use bullets::{BULLET, normalize_bullets};
pub use fragment::{Fragment, Fragments};

/// Normalized text of one section, ready to be split into fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedContent {
    text: String,
}

impl FormattedContent {
    pub fn new(segment: &str) -> Self {
        Self {
            text: normalize_bullets(segment),
        }
    }

    /// The normalized text, lines separated by `\n`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `true` when there is nothing to render; the section should be skipped.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn fragments(&self) -> Fragments<'_> {
        Fragments::new(&self.text)
    }
}

/// Formats one section's raw text. Never fails; empty input yields no fragments.
pub fn format_content(segment: &str) -> FormattedContent {
    FormattedContent::new(segment)
}
