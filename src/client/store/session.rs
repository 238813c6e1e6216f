//! The client's record of who is logged in.
//!
//! [`SessionStore`] is a cheap-clone handle: every clone observes the same session, so one
//! store can be handed to the API client (as its [`TokenProvider`]) and to every consumer that
//! needs to know the current identity. The session is persisted under two keys, one for the
//! bearer token and one for the JSON identity record, which are always written and removed
//! together.

#[cfg(test)]
mod tests;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dioxus_logger::tracing;
use fleetdesk_model::auth::{Identity, LoginRequest};

use crate::client::{
    api::{AuthApi, TokenProvider},
    error::{auth::AuthError, storage::StorageError, Error},
    store::storage::SessionStorage,
};

pub const SESSION_TOKEN_KEY: &str = "fleetdesk:token";
pub const SESSION_USER_KEY: &str = "fleetdesk:user";

/// An authenticated identity together with its bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }
}

/// Snapshot of the store's state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True from construction until [`SessionStore::restore`] has run
    pub loading: bool,
}

/// Outcome of reading the persisted keys.
enum Persisted {
    Absent,
    Present(Session),
    /// Only one of the two keys is set, or the identity record doesn't parse
    Damaged(String),
}

struct Inner<S, A> {
    storage: S,
    auth: A,
    state: RwLock<SessionState>,
}

/// Single source of truth for the logged in user.
pub struct SessionStore<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for SessionStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> SessionStore<S, A>
where
    S: SessionStorage,
    A: AuthApi,
{
    /// Create an empty store in the loading state.
    ///
    /// Call [`SessionStore::restore`] to pick up a session persisted by a previous run.
    pub fn new(storage: S, auth: A) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                auth,
                state: RwLock::new(SessionState {
                    session: None,
                    loading: true,
                }),
            }),
        }
    }

    /// Restore the session persisted by a previous run.
    ///
    /// The session is only admitted when both keys are present, the token isn't empty and the
    /// identity record parses. A lone or malformed key is removed so the pair stays
    /// consistent. Never fails: an unreadable storage leaves the store logged out.
    ///
    /// # Returns
    /// - `Some(Session)` - A persisted session was restored
    /// - `None` - The store is logged out
    pub fn restore(&self) -> Option<Session> {
        let restored = match self.load_persisted() {
            Ok(Persisted::Present(session)) => {
                tracing::debug!(
                    user_id = %session.identity.user_id,
                    "Restored persisted session"
                );

                Some(session)
            }
            Ok(Persisted::Absent) => {
                tracing::debug!("No persisted session to restore");

                None
            }
            Ok(Persisted::Damaged(reason)) => {
                tracing::debug!("Discarding persisted session: {}", reason);
                self.remove_persisted();

                None
            }
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);

                None
            }
        };

        let mut state = self.write_state();
        state.session = restored.clone();
        state.loading = false;

        restored
    }

    /// Log in with an email and password.
    ///
    /// Only checks that both values are non-empty (an all-whitespace email counts as empty)
    /// before handing them to the API unchanged. On any failure the store is left logged out
    /// and the error is returned for display.
    ///
    /// # Returns
    /// - `Ok(Session)` - Logged in; the session has been persisted
    /// - `Err(Error::AuthError(AuthError::MissingCredential))` - Email or password is empty
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - The API rejected the credentials
    /// - `Err(Error::ApiError(_))` - The API could not be reached or failed
    /// - `Err(Error::StorageError(_))` - The session could not be persisted
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingCredential("email").into());
        }
        if password.is_empty() {
            return Err(AuthError::MissingCredential("password").into());
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = match self.inner.auth.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.clear();

                return Err(e);
            }
        };

        let session = Session {
            identity: Identity::from(&response),
            token: response.token,
        };

        if let Err(e) = self.persist(&session) {
            self.clear();

            return Err(e.into());
        }

        {
            let mut state = self.write_state();
            state.session = Some(session.clone());
            state.loading = false;
        }

        tracing::info!(
            user_id = %session.identity.user_id,
            role = %session.identity.role,
            "Logged in"
        );

        Ok(session)
    }

    /// Log out, in memory and in storage.
    ///
    /// Calling it while logged out does nothing. Storage failures are logged, never returned.
    pub fn logout(&self) {
        if self.clear() {
            tracing::info!("Logged out");
        }
    }

    /// Drop the session because the API rejected its token.
    pub fn expire(&self) {
        if self.clear() {
            tracing::warn!("Session expired");
        }
    }

    /// True iff someone is logged in with the administrator role.
    pub fn is_admin(&self) -> bool {
        self.read_state()
            .session
            .as_ref()
            .is_some_and(Session::is_admin)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    pub fn session(&self) -> Option<Session> {
        self.read_state().session.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read_state()
            .session
            .as_ref()
            .map(|session| session.identity.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.read_state()
            .session
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub fn state(&self) -> SessionState {
        self.read_state().clone()
    }

    pub fn storage(&self) -> &S {
        &self.inner.storage
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load_persisted(&self) -> Result<Persisted, StorageError> {
        let storage = &self.inner.storage;

        let token = storage
            .get(SESSION_TOKEN_KEY)?
            .filter(|token| !token.is_empty());
        let user = storage.get(SESSION_USER_KEY)?.filter(|user| !user.is_empty());

        let persisted = match (token, user) {
            (None, None) => Persisted::Absent,
            (Some(token), Some(user)) => match serde_json::from_str::<Identity>(&user) {
                Ok(identity) => Persisted::Present(Session { identity, token }),
                Err(e) => Persisted::Damaged(format!("identity record is malformed: {}", e)),
            },
            (Some(_), None) => Persisted::Damaged("identity record is missing".to_string()),
            (None, Some(_)) => Persisted::Damaged("token is missing".to_string()),
        };

        Ok(persisted)
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.identity)?;

        self.inner.storage.set(SESSION_TOKEN_KEY, &session.token)?;
        self.inner.storage.set(SESSION_USER_KEY, &user)?;

        Ok(())
    }

    fn remove_persisted(&self) {
        for key in [SESSION_TOKEN_KEY, SESSION_USER_KEY] {
            if let Err(e) = self.inner.storage.remove(key) {
                tracing::warn!(key = %key, "Failed to remove persisted session value: {}", e);
            }
        }
    }

    /// Clear memory and storage, returning whether a session was present in memory.
    fn clear(&self) -> bool {
        let had_session = {
            let mut state = self.write_state();
            state.loading = false;
            state.session.take().is_some()
        };

        self.remove_persisted();

        had_session
    }
}

impl<S, A> TokenProvider for SessionStore<S, A>
where
    S: SessionStorage + 'static,
    A: AuthApi + 'static,
{
    fn token(&self) -> Option<String> {
        SessionStore::token(self)
    }

    fn revoke(&self) {
        self.expire();
    }
}
