//! Page shell and homepage rendering for the wiki theme.
//!
//! This crate turns provider snapshots into a complete HTML document:
//!
//! - [`link_anchor`]: optional structured link → anchor markup
//! - [`PageShell`]: document head, wiki header (logo, nav, user
//!   status), and footer around a page body
//! - [`homepage`]: greeting block + topic card grid
//! - [`Theme`]: facade wiring configuration and the three providers
//!
//! Rendering is synchronous and request-scoped: one call fetches fresh
//! snapshots from the providers and returns one `String`. Every
//! user-influenced value is HTML-escaped at the templating boundary.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wiki_config::SiteConfig;
//! use wiki_theme::Theme;
//!
//! let theme = Theme::new(SiteConfig::default(), content, session, navigation);
//! let html = theme.render_homepage()?;
//! ```

mod html;
pub mod homepage;
mod link;
mod shell;
mod theme;

pub use html::escape_html;
pub use link::link_anchor;
pub use shell::PageShell;
pub use theme::{RenderError, Theme};
