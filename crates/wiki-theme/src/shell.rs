//! Page shell: document head, wiki header, and footer.
//!
//! The shell wraps a page-specific body with the markup every page
//! shares. It is pure over its inputs — config, session snapshot, nav
//! markup, and the calendar year are all passed in, so rendering the
//! same snapshot twice yields byte-identical output.

use std::fmt::Write;

use wiki_config::SiteConfig;
use wiki_content::UserSession;

use crate::html::escape_html;

/// Fixed footer navigation: label and root-relative path.
const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Inicio", "/"),
    ("Acerca de", "/acerca-de"),
    ("Contacto", "/contacto"),
];

/// Consistent shell around a page body.
///
/// The shell never fails: an empty nav renders an empty region, an
/// empty site name renders as the empty string. Degradation is visual
/// only.
pub struct PageShell<'a> {
    config: &'a SiteConfig,
    session: &'a UserSession,
    nav_markup: &'a str,
    year: i32,
}

impl<'a> PageShell<'a> {
    /// Create a shell from per-request snapshots.
    ///
    /// `nav_markup` is embedded verbatim (it comes from the navigation
    /// provider, which owns its own escaping); everything else is
    /// escaped here.
    #[must_use]
    pub fn new(
        config: &'a SiteConfig,
        session: &'a UserSession,
        nav_markup: &'a str,
        year: i32,
    ) -> Self {
        Self {
            config,
            session,
            nav_markup,
            year,
        }
    }

    /// Render a complete document around the given body markup.
    #[must_use]
    pub fn render_document(&self, page_title: Option<&str>, body: &str) -> String {
        let mut out = String::new();
        self.render_head(&mut out, page_title);
        self.render_header(&mut out);
        out.push_str(body);
        self.render_footer(&mut out);
        out
    }

    /// Render the doctype, `<head>`, and opening `<body>` tag.
    pub fn render_head(&self, out: &mut String, page_title: Option<&str>) {
        let title = match page_title {
            Some(page) if !page.is_empty() => format!("{page} | {}", self.config.name),
            _ => self.config.name.clone(),
        };
        write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n",
            escape_html(&self.config.language)
        )
        .unwrap();
        write!(
            out,
            "<meta charset=\"{}\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{}</title>\n\
             </head>\n<body>\n",
            escape_html(&self.config.charset),
            escape_html(&title)
        )
        .unwrap();
    }

    /// Render the wiki header: logo, nav region, and user status.
    pub fn render_header(&self, out: &mut String) {
        write!(
            out,
            r#"<header class="wiki-header"><a href="{}" class="wiki-logo">{}</a>"#,
            escape_html(&self.config.url_for("/")),
            escape_html(&self.config.name)
        )
        .unwrap();
        write!(
            out,
            r#"<nav class="wiki-nav">{}</nav>"#,
            self.nav_markup
        )
        .unwrap();
        out.push_str(r#"<div class="wiki-user">"#);
        self.render_user_status(out);
        out.push_str("</div></header>\n");
    }

    /// Two states only: authenticated shows the display name and a
    /// logout link, anonymous shows a login link. Chosen solely from
    /// the session snapshot at render time.
    fn render_user_status(&self, out: &mut String) {
        if self.session.is_authenticated {
            let name = self.session.display_name.as_deref().unwrap_or_default();
            write!(
                out,
                r#"<span class="wiki-user-name">{}</span><a href="{}" class="wiki-user-action">Cerrar sesión</a>"#,
                escape_html(name),
                escape_html(&self.session.logout_url)
            )
            .unwrap();
        } else {
            write!(
                out,
                r#"<a href="{}" class="wiki-user-action">Iniciar sesión</a>"#,
                escape_html(&self.session.login_url)
            )
            .unwrap();
        }
    }

    /// Render the footer and close the document.
    pub fn render_footer(&self, out: &mut String) {
        write!(
            out,
            "<footer class=\"site-footer\"><div class=\"footer-content\">\
             <p>&copy; {} {}. Todos los derechos reservados.</p>\n<p>",
            self.year,
            escape_html(&self.config.name)
        )
        .unwrap();
        for (i, (label, path)) in FOOTER_LINKS.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            write!(
                out,
                r#"<a href="{}">{label}</a>"#,
                escape_html(&self.config.url_for(path))
            )
            .unwrap();
        }
        out.push_str("</p></div></footer>\n</body>\n</html>\n");
    }
}
