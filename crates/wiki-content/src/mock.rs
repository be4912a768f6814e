//! Mock providers for testing.
//!
//! In-memory implementations of the three provider traits, configured
//! through builder methods. Used by the theme's unit tests and useful
//! to any host embedding the theme.

use crate::fields::GreetingContent;
use crate::provider::{
    ContentProvider, NavigationProvider, ProviderError, ProviderErrorKind, SessionProvider,
};
use crate::session::UserSession;
use crate::topic::{TopicEntry, TopicQuery};

/// Mock content provider.
///
/// # Example
///
/// ```ignore
/// use wiki_content::{ContentProvider, MockContentProvider, TopicEntry, TopicQuery};
///
/// let content = MockContentProvider::new()
///     .with_topic(TopicEntry::new("Redes", "/tema/redes"));
///
/// let topics = content.topics(&TopicQuery::default()).unwrap();
/// assert_eq!(topics.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockContentProvider {
    greeting: GreetingContent,
    topics: Vec<TopicEntry>,
    fail: bool,
}

impl MockContentProvider {
    /// Create an empty mock: default greeting, no topics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the greeting singleton.
    #[must_use]
    pub fn with_greeting(mut self, greeting: GreetingContent) -> Self {
        self.greeting = greeting;
        self
    }

    /// Append a topic entry. Entries are returned in insertion order,
    /// which stands in for the manual ordering field.
    #[must_use]
    pub fn with_topic(mut self, topic: TopicEntry) -> Self {
        self.topics.push(topic);
        self
    }

    /// Make every call fail with an unavailable error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self, context: &str) -> Result<(), ProviderError> {
        if self.fail {
            return Err(ProviderError::new(ProviderErrorKind::Unavailable)
                .with_provider("Mock")
                .with_context(context.to_owned()));
        }
        Ok(())
    }
}

impl ContentProvider for MockContentProvider {
    fn greeting(&self) -> Result<GreetingContent, ProviderError> {
        self.check("greeting")?;
        Ok(self.greeting.clone())
    }

    fn topics(&self, query: &TopicQuery) -> Result<Vec<TopicEntry>, ProviderError> {
        self.check("topics")?;
        let mut topics = self.topics.clone();
        if let Some(limit) = query.limit {
            topics.truncate(limit);
        }
        Ok(topics)
    }
}

/// Mock session provider returning a fixed snapshot.
#[derive(Debug)]
pub struct MockSessionProvider {
    session: UserSession,
    fail: bool,
}

impl MockSessionProvider {
    /// An anonymous session with placeholder login/logout URLs.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            session: UserSession::anonymous("/acceder", "/salir"),
            fail: false,
        }
    }

    /// An authenticated session for the given display name.
    #[must_use]
    pub fn authenticated(display_name: impl Into<String>) -> Self {
        Self {
            session: UserSession::authenticated(display_name, "/acceder", "/salir"),
            fail: false,
        }
    }

    /// Use an explicit session snapshot.
    #[must_use]
    pub fn with_session(session: UserSession) -> Self {
        Self {
            session,
            fail: false,
        }
    }

    /// Make every call fail with an unavailable error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl SessionProvider for MockSessionProvider {
    fn current_user(&self) -> Result<UserSession, ProviderError> {
        if self.fail {
            return Err(ProviderError::new(ProviderErrorKind::Unavailable)
                .with_provider("Mock")
                .with_context("current_user"));
        }
        Ok(self.session.clone())
    }
}

/// Mock navigation provider mapping locations to fixed markup.
#[derive(Debug, Default)]
pub struct MockNavigationProvider {
    menus: Vec<(String, String)>,
    fail: bool,
}

impl MockNavigationProvider {
    /// Create an empty mock: every location renders empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign markup to a named location.
    #[must_use]
    pub fn with_menu(mut self, location: impl Into<String>, markup: impl Into<String>) -> Self {
        self.menus.push((location.into(), markup.into()));
        self
    }

    /// Make every call fail with an unavailable error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl NavigationProvider for MockNavigationProvider {
    fn render_menu(&self, location: &str) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError::new(ProviderErrorKind::Unavailable)
                .with_provider("Mock")
                .with_context(location.to_owned()));
        }
        Ok(self
            .menus
            .iter()
            .find(|(loc, _)| loc == location)
            .map(|(_, markup)| markup.clone())
            .unwrap_or_default())
    }
}
