
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use fleetdesk_model::auth::{LoginRequest, LoginResponse};
use fleetdesk_test_utils::prelude::*;
use reqwest::StatusCode;

use crate::client::{
    api::AuthApi,
    error::{api::ApiError, auth::AuthError, storage::StorageError, Error},
    store::{
        session::{SessionStore, SESSION_TOKEN_KEY, SESSION_USER_KEY},
        storage::{MemoryStorage, SessionStorage},
    },
};

enum Outcome {
    Accept(LoginResponse),
    Reject,
    ServerError,
}

/// Stand-in for the login endpoint that counts how often it was called.
#[derive(Clone)]
struct FakeAuth {
    outcome: Arc<Outcome>,
    calls: Arc<AtomicUsize>,
}

impl FakeAuth {
    fn accepting(role: &str) -> Self {
        Self::with(Outcome::Accept(factory::login_response(role)))
    }

    fn rejecting() -> Self {
        Self::with(Outcome::Reject)
    }

    fn failing() -> Self {
        Self::with(Outcome::ServerError)
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome: Arc::new(outcome),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.outcome.as_ref() {
            Outcome::Accept(response) => Ok(response.clone()),
            Outcome::Reject => Err(AuthError::InvalidCredentials.into()),
            Outcome::ServerError => Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal server error".to_string(),
            }
            .into()),
        }
    }
}

/// Storage that can be read but refuses every write.
#[derive(Clone, Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl SessionStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn store(storage: &MemoryStorage, auth: &FakeAuth) -> SessionStore<MemoryStorage, FakeAuth> {
    SessionStore::new(storage.clone(), auth.clone())
}
