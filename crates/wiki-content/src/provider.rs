//! Provider traits and error types.
//!
//! The three external collaborators of the rendering core — content,
//! session, and navigation — are consumed through trait objects so the
//! theme can be rendered against any host platform (a CMS, a headless
//! content API, a flat-file store) and unit-tested against in-memory
//! mocks.
//!
//! Provider failures are not recovered here: they propagate up and fail
//! the whole render, leaving the host runtime to produce its failure
//! page.

use crate::fields::GreetingContent;
use crate::session::UserSession;
use crate::topic::{TopicEntry, TopicQuery};

/// Semantic provider error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderErrorKind {
    /// Requested content does not exist.
    NotFound,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown backend failure.
    Other,
}

/// Provider error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct ProviderError {
    /// Semantic error category.
    pub kind: ProviderErrorKind,
    /// Provider identifier (e.g., "Content", "Mock").
    pub provider: Option<&'static str>,
    /// Request context (e.g., a field name or menu location).
    pub context: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Create a new provider error.
    #[must_use]
    pub fn new(kind: ProviderErrorKind) -> Self {
        Self {
            kind,
            provider: None,
            context: None,
            source: None,
        }
    }

    /// Attach a provider identifier.
    #[must_use]
    pub fn with_provider(mut self, provider: &'static str) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Attach request context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with context.
    #[must_use]
    pub fn not_found(context: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NotFound).with_context(context)
    }

    /// Create an unavailable error with context.
    #[must_use]
    pub fn unavailable(context: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable).with_context(context)
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Provider] Kind: message (context)"
        if let Some(provider) = self.provider {
            write!(f, "[{provider}] ")?;
        }

        let kind_str = match self.kind {
            ProviderErrorKind::NotFound => "Not found",
            ProviderErrorKind::Unavailable => "Unavailable",
            ProviderErrorKind::Timeout => "Timeout",
            ProviderErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }

        Ok(())
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Structured content source: the greeting singleton and topic queries.
///
/// Implementations return topic entries already sorted by the manual
/// ordering field, ascending, truncated to the query limit.
pub trait ContentProvider: Send + Sync {
    /// Fetch the homepage greeting singleton.
    ///
    /// Missing fields are not errors; an entirely unconfigured greeting
    /// is `GreetingContent::default()`.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the backend cannot be reached.
    fn greeting(&self) -> Result<GreetingContent, ProviderError>;

    /// Query topic entries in manual order, ascending.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the backend cannot be reached.
    fn topics(&self, query: &TopicQuery) -> Result<Vec<TopicEntry>, ProviderError>;
}

/// Current-user session source.
pub trait SessionProvider: Send + Sync {
    /// Snapshot the current user for this request.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the session backend fails.
    fn current_user(&self) -> Result<UserSession, ProviderError>;
}

/// Named-location navigation source.
///
/// Returns ready-made menu markup; the theme embeds it verbatim inside
/// the nav region. An unconfigured location yields an empty string, not
/// an error.
pub trait NavigationProvider: Send + Sync {
    /// Render the menu assigned to a named location.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the menu backend fails.
    fn render_menu(&self, location: &str) -> Result<String, ProviderError>;
}
