//! Session store
//!
//! Holds the bearer token and the signed-in user. The token is mirrored into
//! the client's [`TokenStorage`] so the request interceptor and the router
//! guard see it too. State lives in a `RefCell`: the UI runs on a single
//! thread and no borrow is held across an `.await`.

use crate::client::ApiClient;
use crate::client::error::ClientError;
use crate::storage::TokenStorage;
use crate::types::{LoginRequest, SessionUser};
use std::cell::RefCell;

/// In-memory session state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session store backed by the client's token storage
pub struct SessionStore {
    client: ApiClient,
    session: RefCell<Session>,
}

impl SessionStore {
    /// Create a store, restoring the token from persistent storage
    pub fn new(client: ApiClient) -> Self {
        let token = match client.storage().token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore persisted token");
                None
            }
        };

        Self {
            client,
            session: RefCell::new(Session { token, user: None }),
        }
    }

    /// The client this store logs in with
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    /// Log in and report what went wrong on failure.
    ///
    /// The token is persisted before the in-memory session changes, so a
    /// storage failure leaves the session untouched.
    pub async fn try_login(&self, credentials: &LoginRequest) -> Result<(), ClientError> {
        let response = self.client.login(credentials).await?;
        self.client.storage().set_token(&response.token)?;

        let mut session = self.session.borrow_mut();
        session.token = Some(response.token);
        session.user = Some(SessionUser {
            role: response.role,
        });
        tracing::info!(email = %credentials.email, "Logged in");
        Ok(())
    }

    /// Log in, returning `false` on any failure. Errors are logged, never
    /// returned.
    pub async fn login(&self, credentials: &LoginRequest) -> bool {
        match self.try_login(credentials).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                false
            }
        }
    }

    /// Drop the token from memory and storage. No server call is made.
    pub fn logout(&self) {
        *self.session.borrow_mut() = Session::default();
        if let Err(e) = self.client.storage().clear_token() {
            tracing::warn!(error = %e, "Could not remove persisted token");
        }
        tracing::info!("Logged out");
    }
}
