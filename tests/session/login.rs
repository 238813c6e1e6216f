use fleetdesk::client::{
    error::{api::ApiError, auth::AuthError, Error},
    store::{
        session::{SESSION_TOKEN_KEY, SESSION_USER_KEY},
        SessionStorage,
    },
};
use fleetdesk_test_utils::prelude::*;
use mockito::Matcher;
use reqwest::StatusCode;

use crate::TestSetupExt;

#[tokio::test]
/// Expect an admin login to be held in memory and persisted under both keys
async fn logs_in_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("admin"), 1)
        .build()
        .await?;
    let console = test.console();

    let session = console.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    assert!(session.is_admin());
    assert_eq!(session.identity.user_id, TEST_USER_ID);
    assert!(console.store.is_admin());
    assert!(!console.store.is_loading());
    assert_eq!(
        console.storage.get(SESSION_TOKEN_KEY).unwrap().as_deref(),
        Some(TEST_TOKEN)
    );
    assert!(console.storage.contains(SESSION_USER_KEY));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a regular user to be authenticated without the admin flag
async fn logs_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response("user"), 1)
        .build()
        .await?;
    let console = test.console();

    let session = console.store.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    assert!(!session.is_admin());
    assert!(console.store.is_authenticated());
    assert!(!console.store.is_admin());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the email to be sent exactly as typed
async fn sends_email_unchanged() -> Result<(), TestError> {
    let email = format!("  {} ", TEST_EMAIL);
    let expected_body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = serde_json::to_string(&factory::login_response("user"))?;

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("POST", "/Auth/login")
                .match_body(Matcher::Json(expected_body))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(response)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let console = test.console();

    let result = console.store.login(&email, TEST_PASSWORD).await;

    assert!(result.is_ok());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect rejected credentials to leave the store logged out with nothing persisted
async fn rejects_invalid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_rejection(1).build().await?;
    let console = test.console();

    let result = console.store.login(TEST_EMAIL, "wrong").await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    assert!(!console.store.is_authenticated());
    assert!(console.storage.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a 400 answer to a login to be treated as rejected credentials
async fn bad_request_is_invalid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/Auth/login")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Invalid email or password"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let console = test.console();

    let result = console.store.login(TEST_EMAIL, "wrong").await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    assert!(!console.store.is_authenticated());
    assert!(console.storage.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect missing credentials to be refused without calling the API
async fn empty_credentials_skip_api() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_rejection(0).build().await?;
    let console = test.console();

    let no_email = console.store.login("   ", TEST_PASSWORD).await;
    let no_password = console.store.login(TEST_EMAIL, "").await;

    assert!(matches!(
        no_email,
        Err(Error::AuthError(AuthError::MissingCredential("email")))
    ));
    assert!(matches!(
        no_password,
        Err(Error::AuthError(AuthError::MissingCredential("password")))
    ));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a server failure to surface the API's message
async fn reports_server_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/Auth/login")
                .match_body(Matcher::Any)
                .with_status(500)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"Database offline"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let console = test.console();

    let result = console.store.login(TEST_EMAIL, TEST_PASSWORD).await;

    match result {
        Err(Error::ApiError(ApiError::Status { status, message })) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "Database offline");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!console.store.is_authenticated());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed login to also drop a session that was active before
async fn failed_login_clears_previous_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_login_rejection(1).build().await?;
    let console = test.console_as("admin");
    assert!(console.store.is_authenticated());

    let result = console.store.login(TEST_EMAIL, "wrong").await;

    assert!(result.is_err());
    assert!(!console.store.is_authenticated());
    assert!(console.storage.is_empty());

    Ok(())
}
