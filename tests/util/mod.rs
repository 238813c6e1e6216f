use fleetdesk::{
    client::{
        store::{
            session::{SESSION_TOKEN_KEY, SESSION_USER_KEY},
            SessionStorage,
        },
        ApiClient, HttpClient, MemoryStorage, SessionStore,
    },
    model::auth::Identity,
};
use fleetdesk_test_utils::prelude::*;

/// Session store and API client wired to the mock server, sharing one in-memory storage.
pub struct Console {
    pub storage: MemoryStorage,
    pub store: SessionStore<MemoryStorage, HttpClient>,
    pub api: ApiClient,
}

pub trait TestSetupExt {
    fn http_client(&self) -> HttpClient;

    /// Console with nobody logged in
    fn console(&self) -> Console;

    /// Console restored from a persisted session of the test user with `role`
    fn console_as(&self, role: &str) -> Console;
}

impl TestSetupExt for TestSetup {
    fn http_client(&self) -> HttpClient {
        HttpClient::new(self.url()).unwrap()
    }

    fn console(&self) -> Console {
        console_over(self.http_client(), MemoryStorage::new())
    }

    fn console_as(&self, role: &str) -> Console {
        let storage = MemoryStorage::new();
        let identity = Identity::from(&factory::login_response(role));

        storage.set(SESSION_TOKEN_KEY, TEST_TOKEN).unwrap();
        storage
            .set(SESSION_USER_KEY, &serde_json::to_string(&identity).unwrap())
            .unwrap();

        console_over(self.http_client(), storage)
    }
}

fn console_over(http: HttpClient, storage: MemoryStorage) -> Console {
    let store = SessionStore::new(storage.clone(), http.clone());
    store.restore();
    let api = ApiClient::new(http, store.clone());

    Console {
        storage,
        store,
        api,
    }
}
