//! Typed content schema and provider interfaces for the wiki theme.
//!
//! This crate defines the boundary between the rendering core and the
//! host content platform. It provides:
//!
//! - Typed field values ([`LinkField`], [`ImageRef`], [`GreetingContent`])
//!   with validation from loosely-typed provider payloads
//! - The topic content type ([`TopicEntry`]) and its query ([`TopicQuery`])
//! - The per-request session snapshot ([`UserSession`])
//! - Provider traits ([`ContentProvider`], [`SessionProvider`],
//!   [`NavigationProvider`]) with a unified [`ProviderError`]
//! - [`MockContentProvider`] and friends for testing (behind the `mock`
//!   feature flag)
//!
//! The rendering core never reads raw key/value fields: hosts validate
//! payloads into these types at the provider boundary, so the renderer
//! only ever sees well-typed optional values.

mod fields;
#[cfg(feature = "mock")]
mod mock;
mod options;
mod provider;
mod session;
mod topic;

pub use fields::{FieldError, GreetingContent, ImageRef, LinkField};
#[cfg(feature = "mock")]
pub use mock::{MockContentProvider, MockNavigationProvider, MockSessionProvider};
pub use options::{OptionsPage, theme_options_pages};
pub use provider::{
    ContentProvider, NavigationProvider, ProviderError, ProviderErrorKind, SessionProvider,
};
pub use session::UserSession;
pub use topic::{TopicEntry, TopicQuery};
