//! Current-user session: the account API seam, the session status machine
//! and the logout flow.
//!
//! Status moves `Loading -> Authenticated | Anonymous` once per mount, and
//! `Authenticated -> Anonymous` on logout or a rejected fetch. Neither flow
//! can fail from the caller's point of view; the worst case is the anonymous
//! view.

use core::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CURRENT_USER_PATH, HOME_ROUTE, LOGOUT_PATH, StorefrontConfig};
use crate::storage::ClientState;

const ADMIN_ROLE: &str = "admin";
const INITIALS_PLACEHOLDER: &str = "U";
const MAX_INITIALS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl SessionUser {
    #[must_use]
    pub fn initials(&self) -> String {
        initials(Some(&self.name))
    }

    /// First space-separated token of the display name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Up to two uppercase initials, one per space-separated token of `name`;
/// `"U"` when there is no usable name.
#[must_use]
pub fn initials(name: Option<&str>) -> String {
    let initials: String = name
        .unwrap_or_default()
        .split(' ')
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect();
    if initials.is_empty() {
        INITIALS_PLACEHOLDER.to_owned()
    } else {
        initials
    }
}

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session token was rejected")]
    Unauthorized,
    #[error("account backend answered with status {0}")]
    Status(u16),
    #[error("account backend unreachable: {0}")]
    Transport(String),
    #[error("unexpected account payload: {0}")]
    Decode(String),
}

impl SessionError {
    /// An expired or invalid token; the stored credential is stale.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// The account backend, as seen by the menu.
pub trait AccountApi {
    fn current_user(&self, token: &str) -> impl Future<Output = Result<SessionUser, SessionError>>;

    fn logout(&self, token: &str) -> impl Future<Output = Result<(), SessionError>>;
}

/// [`AccountApi`] over HTTP with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpAccountApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolves an empty backend URL against the page origin, since the
    /// HTTP client only accepts absolute URLs.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let base = if config.backend_url().is_empty() {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        } else {
            config.backend_url().to_owned()
        };
        Self::new(base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl AccountApi for HttpAccountApi {
    async fn current_user(&self, token: &str) -> Result<SessionUser, SessionError> {
        let response = self
            .client
            .get(self.url(CURRENT_USER_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SessionError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SessionError::Status(status.as_u16()));
        }

        let body: CurrentUserResponse = response
            .json()
            .await
            .map_err(|err| SessionError::Decode(err.to_string()))?;
        Ok(body.user)
    }

    async fn logout(&self, token: &str) -> Result<(), SessionError> {
        let response = self
            .client
            .post(self.url(LOGOUT_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| SessionError::Transport(err.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SessionError::Status(response.status().as_u16()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated(SessionUser),
    Anonymous,
}

impl SessionStatus {
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Resolves the session for a freshly mounted menu.
///
/// Without a stored token no request is made. A rejected token is purged.
pub async fn resolve_session<A: AccountApi>(client: &ClientState, api: &A) -> SessionStatus {
    let Some(token) = client.token() else {
        return SessionStatus::Anonymous;
    };

    match api.current_user(&token).await {
        Ok(user) => SessionStatus::Authenticated(user),
        Err(err) => {
            logging::error!("Error fetching user data: {err}");
            if err.is_unauthorized() {
                logging::warn!("Clearing rejected session token");
                client.clear_token();
            }
            SessionStatus::Anonymous
        }
    }
}

/// Where the app goes once local logout is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub status: SessionStatus,
    /// Opened as a full page load so every component re-derives its session.
    pub redirect: &'static str,
}

/// Best-effort backend logout followed by an unconditional local one.
pub async fn perform_logout<A: AccountApi>(client: &ClientState, api: &A) -> LogoutOutcome {
    if let Some(token) = client.token()
        && let Err(err) = api.logout(&token).await
    {
        logging::warn!("Ignoring logout notification failure: {err}");
    }

    client.clear_session();

    LogoutOutcome {
        status: SessionStatus::Anonymous,
        redirect: HOME_ROUTE,
    }
}

/// Admits one logout at a time. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct LogoutGuard {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of a logout; releases the guard when dropped.
#[derive(Debug)]
pub struct LogoutTicket {
    in_flight: Arc<AtomicBool>,
}

impl LogoutGuard {
    /// `None` while another logout holds its ticket.
    #[must_use]
    pub fn try_begin(&self) -> Option<LogoutTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LogoutTicket {
                in_flight: Arc::clone(&self.in_flight),
            })
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for LogoutTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// [`perform_logout`] unless one is already running, in which case the
/// repeated submission is dropped and `None` returned.
pub async fn guarded_logout<A: AccountApi>(
    guard: &LogoutGuard,
    client: &ClientState,
    api: &A,
) -> Option<LogoutOutcome> {
    let _ticket = guard.try_begin()?;
    Some(perform_logout(client, api).await)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: &'static str,
    pub time: &'static str,
    pub read: bool,
}

/// Illustrative feed; there is no notifications backend yet.
pub const NOTIFICATIONS: [Notification; 3] = [
    Notification {
        id: 1,
        text: "Your order has been shipped",
        time: "2 hours ago",
        read: false,
    },
    Notification {
        id: 2,
        text: "New message from support",
        time: "5 hours ago",
        read: false,
    },
    Notification {
        id: 3,
        text: "Special offer: 20% off",
        time: "1 day ago",
        read: true,
    },
];

#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::Mutex;

    /// Answers every call with a fixed result and records the tokens it saw.
    struct FixedApi {
        user: Result<SessionUser, SessionError>,
        logout: Result<(), SessionError>,
        calls: Mutex<Vec<String>>,
    }

    impl FixedApi {
        fn new(user: Result<SessionUser, SessionError>) -> Self {
            Self {
                user,
                logout: Ok(()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AccountApi for FixedApi {
        async fn current_user(&self, token: &str) -> Result<SessionUser, SessionError> {
            self.calls.lock().unwrap().push(format!("current:{token}"));
            self.user.clone()
        }

        async fn logout(&self, token: &str) -> Result<(), SessionError> {
            self.calls.lock().unwrap().push(format!("logout:{token}"));
            self.logout.clone()
        }
    }

    fn jane() -> SessionUser {
        SessionUser {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn initials_from_name() {
        assert_eq!(initials(Some("Jane Doe")), "JD");
        assert_eq!(initials(Some("jane")), "J");
        assert_eq!(initials(Some("Mary Jane Watson")), "MJ");
        assert_eq!(initials(Some("  ada   lovelace ")), "AL");
    }

    #[test]
    fn initials_placeholder_without_name() {
        assert_eq!(initials(None), "U");
        assert_eq!(initials(Some("")), "U");
        assert_eq!(initials(Some("   ")), "U");
        assert_eq!(SessionUser::default().initials(), "U");
    }

    #[test]
    fn first_name_and_role() {
        let mut user = jane();
        assert_eq!(user.first_name(), "Jane");
        assert!(!user.is_admin());
        user.role = Some("admin".to_owned());
        assert!(user.is_admin());
    }

    #[test]
    fn deserializes_current_user_payload() {
        let body: CurrentUserResponse = serde_json::from_value(serde_json::json!({
            "user": {
                "_id": "42",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "role": "customer",
                "profileImage": "https://cdn.example.com/jane.png"
            }
        }))
        .unwrap();

        assert_eq!(body.user.id.as_deref(), Some("42"));
        assert_eq!(body.user.role.as_deref(), Some("customer"));
        assert_eq!(
            body.user.profile_image.as_deref(),
            Some("https://cdn.example.com/jane.png")
        );
    }

    #[test]
    fn no_token_resolves_anonymous_without_request() {
        let client = ClientState::in_memory();
        let api = FixedApi::new(Ok(jane()));

        let status = tokio_test::block_on(resolve_session(&client, &api));

        assert_eq!(status, SessionStatus::Anonymous);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn valid_token_resolves_user() {
        let client = ClientState::in_memory();
        client.set_token("abc");
        let api = FixedApi::new(Ok(jane()));

        let status = tokio_test::block_on(resolve_session(&client, &api));

        assert_matches!(status, SessionStatus::Authenticated(ref user) if user.name == "Jane Doe");
        assert_eq!(api.calls(), vec!["current:abc".to_owned()]);
        assert_eq!(client.token().as_deref(), Some("abc"));
    }

    #[test]
    fn unauthorized_purges_token() {
        let client = ClientState::in_memory();
        client.set_token("expired");
        let api = FixedApi::new(Err(SessionError::Unauthorized));

        let status = tokio_test::block_on(resolve_session(&client, &api));

        assert_eq!(status, SessionStatus::Anonymous);
        assert_eq!(client.token(), None);
    }

    #[test]
    fn other_failures_keep_token() {
        for err in [
            SessionError::Status(500),
            SessionError::Transport("offline".to_owned()),
            SessionError::Decode("bad json".to_owned()),
        ] {
            let client = ClientState::in_memory();
            client.set_token("abc");
            let api = FixedApi::new(Err(err));

            let status = tokio_test::block_on(resolve_session(&client, &api));

            assert_eq!(status, SessionStatus::Anonymous);
            assert_eq!(client.token().as_deref(), Some("abc"));
        }
    }

    #[test]
    fn logout_survives_backend_failure() {
        let client = ClientState::in_memory();
        client.set_token("abc");
        let mut api = FixedApi::new(Ok(jane()));
        api.logout = Err(SessionError::Transport("offline".to_owned()));

        let outcome = tokio_test::block_on(perform_logout(&client, &api));

        assert_eq!(outcome.status, SessionStatus::Anonymous);
        assert_eq!(outcome.redirect, "/");
        assert_eq!(client.token(), None);
        assert_eq!(api.calls(), vec!["logout:abc".to_owned()]);
    }

    #[test]
    fn logout_without_token_skips_backend() {
        let client = ClientState::in_memory();
        let api = FixedApi::new(Ok(jane()));

        let outcome = tokio_test::block_on(perform_logout(&client, &api));

        assert_eq!(outcome.status, SessionStatus::Anonymous);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn repeated_logout_while_in_flight_is_dropped() {
        let client = ClientState::in_memory();
        client.set_token("abc");
        let api = FixedApi::new(Ok(jane()));
        let guard = LogoutGuard::default();

        let first = guard.try_begin().unwrap();
        assert!(guard.is_in_flight());
        assert_eq!(tokio_test::block_on(guarded_logout(&guard, &client, &api)), None);
        assert!(api.calls().is_empty());
        assert_eq!(client.token().as_deref(), Some("abc"));

        drop(first);
        let outcome = tokio_test::block_on(guarded_logout(&guard, &client, &api));
        assert_matches!(outcome, Some(LogoutOutcome { status: SessionStatus::Anonymous, redirect: "/" }));
        assert_eq!(api.calls(), vec!["logout:abc".to_owned()]);
        assert!(!guard.is_in_flight());
    }

    #[test]
    fn guard_clones_share_state() {
        let guard = LogoutGuard::default();
        let ticket = guard.clone().try_begin();
        assert!(ticket.is_some());
        assert!(guard.try_begin().is_none());
    }

    #[test]
    fn status_accessors() {
        assert!(SessionStatus::default().is_loading());
        assert_eq!(SessionStatus::Anonymous.user(), None);
        assert_eq!(
            SessionStatus::Authenticated(jane()).user().map(SessionUser::first_name),
            Some("Jane")
        );
    }

    #[test]
    fn unread_notifications() {
        assert_eq!(unread_count(&NOTIFICATIONS), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn relative_endpoints_join_base() {
        let api = HttpAccountApi::new("https://shop.example.com");
        assert_eq!(
            api.url(CURRENT_USER_PATH),
            "https://shop.example.com/api/user/current"
        );
    }
}
