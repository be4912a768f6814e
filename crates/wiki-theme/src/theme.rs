//! Theme facade: configuration plus the three providers.

use std::sync::Arc;

use chrono::Datelike;
use wiki_config::SiteConfig;
use wiki_content::{
    ContentProvider, NavigationProvider, ProviderError, SessionProvider, TopicQuery,
};

use crate::homepage;
use crate::shell::PageShell;

/// Error returned when a page render fails.
///
/// Provider failures fail the whole render; there is no partial-page
/// fallback. The hosting runtime turns this into its failure page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An external provider call failed.
    #[error("provider failure: {0}")]
    Provider(#[from] ProviderError),
}

/// The wiki theme, wired to a host platform.
///
/// Holds the site configuration and the three provider trait objects.
/// Each render fetches fresh snapshots — nothing is cached and no
/// state is kept between requests.
pub struct Theme {
    config: SiteConfig,
    content: Arc<dyn ContentProvider>,
    session: Arc<dyn SessionProvider>,
    navigation: Arc<dyn NavigationProvider>,
}

impl Theme {
    /// Wire the theme to its providers.
    #[must_use]
    pub fn new(
        config: SiteConfig,
        content: Arc<dyn ContentProvider>,
        session: Arc<dyn SessionProvider>,
        navigation: Arc<dyn NavigationProvider>,
    ) -> Self {
        Self {
            config,
            content,
            session,
            navigation,
        }
    }

    /// Site configuration in use.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the homepage as a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Provider` if any provider call fails.
    pub fn render_homepage(&self) -> Result<String, RenderError> {
        self.render_homepage_with_year(chrono::Local::now().year())
    }

    /// Render the homepage with an explicit copyright year.
    ///
    /// The year is the only render input not captured by the provider
    /// snapshots; taking it as a parameter keeps rendering reproducible.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Provider` if any provider call fails.
    pub fn render_homepage_with_year(&self, year: i32) -> Result<String, RenderError> {
        let session = self.session.current_user()?;
        let nav_markup = self.navigation.render_menu(&self.config.nav_location)?;
        let greeting = self.content.greeting()?;
        let query = TopicQuery::with_limit(self.config.topics_limit);
        let topics = self.content.topics(&query)?;

        tracing::debug!(
            topic_count = topics.len(),
            authenticated = session.is_authenticated,
            "Rendering homepage"
        );

        let shell = PageShell::new(&self.config, &session, &nav_markup, year);
        let body = homepage::render_body(&greeting, &topics);
        Ok(shell.render_document(None, &body))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiki_content::{
        GreetingContent, MockContentProvider, MockNavigationProvider, MockSessionProvider,
        TopicEntry,
    };

    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            name: "Mi Wiki".to_owned(),
            ..SiteConfig::default()
        }
    }

    fn theme(
        content: MockContentProvider,
        session: MockSessionProvider,
        navigation: MockNavigationProvider,
    ) -> Theme {
        Theme::new(
            config(),
            Arc::new(content),
            Arc::new(session),
            Arc::new(navigation),
        )
    }

    #[test]
    fn test_homepage_end_to_end_authenticated() {
        let theme = theme(
            MockContentProvider::new()
                .with_greeting(GreetingContent {
                    image: None,
                    title: Some("Bienvenidos".to_owned()),
                    text: None,
                })
                .with_topic(TopicEntry::new("Redes", "/tema/redes")),
            MockSessionProvider::authenticated("Ana"),
            MockNavigationProvider::new().with_menu("main_nav", "<ul><li>Temas</li></ul>"),
        );

        let html = theme.render_homepage_with_year(2026).unwrap();

        assert!(html.contains(r#"<span class="wiki-user-name">Ana</span>"#));
        assert!(html.contains("Cerrar sesión"));
        assert!(!html.contains("Iniciar sesión"));
        assert!(html.contains("<ul><li>Temas</li></ul>"));
        assert!(html.contains("<h2>Bienvenidos</h2>"));
        assert!(html.contains(r#"<a href="/tema/redes">Redes</a>"#));
        assert!(html.contains("&copy; 2026 Mi Wiki."));
    }

    #[test]
    fn test_homepage_anonymous_shows_login_only() {
        let theme = theme(
            MockContentProvider::new(),
            MockSessionProvider::anonymous(),
            MockNavigationProvider::new(),
        );

        let html = theme.render_homepage_with_year(2026).unwrap();

        assert!(html.contains("Iniciar sesión"));
        assert!(!html.contains("Cerrar sesión"));
        assert!(html.contains("No se han encontrado tópicos aún."));
    }

    #[test]
    fn test_same_snapshot_renders_identically() {
        let theme = theme(
            MockContentProvider::new().with_topic(TopicEntry::new("Redes", "/tema/redes")),
            MockSessionProvider::anonymous(),
            MockNavigationProvider::new().with_menu("main_nav", "<ul></ul>"),
        );

        let first = theme.render_homepage_with_year(2026).unwrap();
        let second = theme.render_homepage_with_year(2026).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_topics_query_uses_configured_limit() {
        let content = (0..10).fold(MockContentProvider::new(), |content, i| {
            content.with_topic(TopicEntry::new(format!("Tema {i}"), format!("/tema/{i}")))
        });
        let theme = Theme::new(
            SiteConfig {
                name: "Mi Wiki".to_owned(),
                topics_limit: 3,
                ..SiteConfig::default()
            },
            Arc::new(content),
            Arc::new(MockSessionProvider::anonymous()),
            Arc::new(MockNavigationProvider::new()),
        );

        let html = theme.render_homepage_with_year(2026).unwrap();
        assert_eq!(html.matches("wiki-topic-card").count(), 3);
    }

    #[test]
    fn test_provider_failure_fails_whole_render() {
        let theme = theme(
            MockContentProvider::new().failing(),
            MockSessionProvider::anonymous(),
            MockNavigationProvider::new(),
        );

        let err = theme.render_homepage_with_year(2026).unwrap_err();
        assert!(matches!(err, RenderError::Provider(_)));
    }

    #[test]
    fn test_session_failure_fails_whole_render() {
        let theme = theme(
            MockContentProvider::new(),
            MockSessionProvider::anonymous().failing(),
            MockNavigationProvider::new(),
        );

        assert!(theme.render_homepage_with_year(2026).is_err());
    }

    #[test]
    fn test_nav_location_from_config() {
        let theme = Theme::new(
            SiteConfig {
                nav_location: "cabecera".to_owned(),
                ..SiteConfig::default()
            },
            Arc::new(MockContentProvider::new()),
            Arc::new(MockSessionProvider::anonymous()),
            Arc::new(
                MockNavigationProvider::new()
                    .with_menu("main_nav", "<ul>equivocado</ul>")
                    .with_menu("cabecera", "<ul>correcto</ul>"),
            ),
        );

        let html = theme.render_homepage_with_year(2026).unwrap();
        assert!(html.contains("<ul>correcto</ul>"));
        assert!(!html.contains("equivocado"));
    }
}
