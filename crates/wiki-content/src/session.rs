//! Per-request user session snapshot.

use serde::{Deserialize, Serialize};

/// Current-user snapshot, recomputed on every request.
///
/// The theme never mutates session state; it only branches on this
/// snapshot to pick the header's user-status region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// True if a user is logged in.
    pub is_authenticated: bool,
    /// Display name of the logged-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// URL of the host's login page.
    pub login_url: String,
    /// URL of the host's logout endpoint.
    pub logout_url: String,
}

impl UserSession {
    /// An anonymous session with the given login/logout URLs.
    #[must_use]
    pub fn anonymous(login_url: impl Into<String>, logout_url: impl Into<String>) -> Self {
        Self {
            is_authenticated: false,
            display_name: None,
            login_url: login_url.into(),
            logout_url: logout_url.into(),
        }
    }

    /// An authenticated session for the given display name.
    #[must_use]
    pub fn authenticated(
        display_name: impl Into<String>,
        login_url: impl Into<String>,
        logout_url: impl Into<String>,
    ) -> Self {
        Self {
            is_authenticated: true,
            display_name: Some(display_name.into()),
            login_url: login_url.into(),
            logout_url: logout_url.into(),
        }
    }
}
