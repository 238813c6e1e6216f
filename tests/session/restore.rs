use fleetdesk::client::{FileStorage, SessionStore};
use fleetdesk_test_utils::prelude::*;

use crate::TestSetupExt;

#[tokio::test]
/// Expect a new store over the same storage to pick up the login
async fn login_survives_reload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("admin"), 1)
        .build()
        .await?;
    let console = test.console();
    let session = console.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let reloaded = SessionStore::new(console.storage.clone(), test.http_client());
    assert!(reloaded.is_loading());

    let restored = reloaded.restore();

    assert_eq!(restored, Some(session));
    assert!(reloaded.is_admin());
    assert!(!reloaded.is_loading());

    Ok(())
}

#[tokio::test]
/// Expect a session persisted to disk to be restored by a later process
async fn file_storage_keeps_session_between_runs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("user"), 1)
        .build()
        .await?;
    let dir = tempfile::tempdir().unwrap();

    let first = SessionStore::new(FileStorage::new(dir.path()), test.http_client());
    first.restore();
    first.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let second = SessionStore::new(FileStorage::new(dir.path()), test.http_client());
    let restored = second.restore().unwrap();

    assert_eq!(restored.token, TEST_TOKEN);
    assert_eq!(restored.identity.email, TEST_EMAIL);
    assert!(!restored.is_admin());

    second.logout();

    let third = SessionStore::new(FileStorage::new(dir.path()), test.http_client());
    assert!(third.restore().is_none());

    Ok(())
}
