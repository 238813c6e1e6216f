//! Client side gate in front of protected areas.
//!
//! Mirrors what the API enforces so the client can refuse early instead of sending requests
//! that are bound to fail. The API remains the authority.

use crate::client::{
    api::AuthApi,
    error::auth::AuthError,
    store::{Session, SessionStorage, SessionStore},
};

/// Who may enter an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any logged in user (dashboard, own vehicles, own profile)
    Member,
    /// Administrators only (personnel and vehicle management)
    Admin,
}

/// Check the current session against the access an area requires.
///
/// # Returns
/// - `Ok(Session)` - The current session, which satisfies `access`
/// - `Err(AuthError::NotAuthenticated)` - Nobody is logged in
/// - `Err(AuthError::AdminRequired)` - Logged in without the administrator role
pub fn authorize<S, A>(store: &SessionStore<S, A>, access: Access) -> Result<Session, AuthError>
where
    S: SessionStorage,
    A: AuthApi,
{
    let session = store.session().ok_or(AuthError::NotAuthenticated)?;

    match access {
        Access::Member => Ok(session),
        Access::Admin if session.is_admin() => Ok(session),
        Access::Admin => Err(AuthError::AdminRequired),
    }
}
