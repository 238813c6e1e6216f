use fleetdesk::{
    client::api::UserService,
    model::user::{UserUpdateDto, ADMIN_ROLE},
};
use fleetdesk_test_utils::prelude::*;
use mockito::Matcher;

use crate::TestSetupExt;

#[tokio::test]
/// Expect personnel to be listed with the session's token
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_users_endpoint(vec![factory::user(1, "admin"), factory::user(2, "user")], 1)
        .build()
        .await?;
    let console = test.console_as("admin");

    let users = UserService::new(&console.api).list().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].full_name(), "Driver2 Test");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a new user to be posted with its password and returned without it
async fn creates_user() -> Result<(), TestError> {
    let new_user = factory::new_user("user");
    let expected_body = serde_json::to_value(&new_user)?;
    let response = serde_json::to_string(&factory::user(12, "user"))?;

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("POST", "/users")
                .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                .match_body(Matcher::Json(expected_body))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(response)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let console = test.console_as("admin");

    let created = UserService::new(&console.api).create(&new_user).await.unwrap();

    assert_eq!(created.user_id, 12);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a role change to be sent with the rest of the record
async fn updates_user_role() -> Result<(), TestError> {
    let mut update = UserUpdateDto::from(&factory::user(4, "user"));
    update.role = ADMIN_ROLE.to_string();
    let expected_body = serde_json::to_value(&update)?;

    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("PUT", "/users/4")
                .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                .match_body(Matcher::Json(expected_body))
                .with_status(204)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let console = test.console_as("admin");

    UserService::new(&console.api).update(4, &update).await.unwrap();

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test.api().create_no_content_endpoint("DELETE", "/users/4", 1);
    let console = test.console_as("admin");

    UserService::new(&console.api).delete(4).await.unwrap();

    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a regular user to read their own profile
async fn reads_own_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let body = serde_json::to_string(&factory::user(TEST_USER_ID, "user"))?;
    let mock = test.api().create_json_endpoint("GET", "/my/profile", body, 1)?;
    let console = test.console_as("user");

    let profile = UserService::new(&console.api).profile().await.unwrap();

    assert_eq!(profile.user_id, TEST_USER_ID);
    mock.assert();

    Ok(())
}
