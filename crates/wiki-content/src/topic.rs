//! The topic content type and its query.

use serde::{Deserialize, Serialize};

use crate::fields::ImageRef;

/// One entry of the "topic" content type, as listed on the homepage.
///
/// Entries are created and edited in the host platform; this core only
/// reads them, freshly on every render. Title and permalink are always
/// present by construction of the content type; icon and summary are
/// independently optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Topic title.
    pub title: String,
    /// Permalink to the topic page.
    pub permalink: String,
    /// Card icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ImageRef>,
    /// Short summary shown on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl TopicEntry {
    /// Create a topic entry with the two required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            permalink: permalink.into(),
            icon: None,
            summary: None,
        }
    }

    /// Set the card icon.
    #[must_use]
    pub fn with_icon(mut self, icon: ImageRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the card summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Query parameters for the topic listing.
///
/// Results are always ordered by the manual ordering field, ascending —
/// the only ordering the theme uses. `limit: None` means unbounded and
/// exists for parity with legacy full-set fetches; callers in this
/// repository always pass a bounded limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicQuery {
    /// Maximum number of entries to return.
    pub limit: Option<usize>,
}

impl TopicQuery {
    /// Default cap on topic queries.
    pub const DEFAULT_LIMIT: usize = 200;

    /// A query bounded by [`Self::DEFAULT_LIMIT`].
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            limit: Some(Self::DEFAULT_LIMIT),
        }
    }

    /// A query with an explicit limit.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl Default for TopicQuery {
    fn default() -> Self {
        Self::bounded()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_query_is_bounded() {
        assert_eq!(TopicQuery::default().limit, Some(200));
    }

    #[test]
    fn test_builder() {
        let topic = TopicEntry::new("Redes", "/tema/redes")
            .with_icon(ImageRef::new("/img/redes.svg"))
            .with_summary("Todo sobre redes.");
        assert_eq!(topic.title, "Redes");
        assert_eq!(topic.icon.unwrap().url, "/img/redes.svg");
        assert_eq!(topic.summary.as_deref(), Some("Todo sobre redes."));
    }
}
