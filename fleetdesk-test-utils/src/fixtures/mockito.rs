//! Mock endpoints of the fleet API.
//!
//! Authenticated endpoints only match requests carrying `Authorization: Bearer TEST_TOKEN`;
//! a request without it falls through to mockito's default `501` response.

use fleetdesk_model::{api::ErrorDto, auth::LoginResponse, user::UserDto, vehicle::VehicleDto};
use mockito::{Matcher, Mock};

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN},
    error::TestError,
    fixtures::ApiFixtures,
};

fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}

impl<'a> ApiFixtures<'a> {
    /// Create a mock `POST /Auth/login` accepting the test credentials.
    ///
    /// # Arguments
    /// - `response` - Login response to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(
        &mut self,
        response: &LoginResponse,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("POST", "/Auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "email": TEST_EMAIL,
                "password": TEST_PASSWORD,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(response)?)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /Auth/login` rejecting any credentials with `401`.
    pub fn create_login_rejection_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/Auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Invalid email or password"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /vehicles` for the test token.
    pub fn create_vehicles_endpoint(
        &mut self,
        vehicles: &[VehicleDto],
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(vehicles)?;

        self.create_json_endpoint("GET", "/vehicles", body, expected_requests)
    }

    /// Create a mock `GET /users` for the test token.
    pub fn create_users_endpoint(
        &mut self,
        users: &[UserDto],
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(users)?;

        self.create_json_endpoint("GET", "/users", body, expected_requests)
    }

    /// Create an authenticated mock answering `200` with a JSON body.
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        body: String,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock(method, path)
            .match_header("authorization", bearer().as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create an authenticated mock answering with an empty success response.
    pub fn create_no_content_endpoint(
        &mut self,
        method: &str,
        path: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_header("authorization", bearer().as_str())
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock answering `401`, whatever token is presented.
    pub fn create_unauthorized_endpoint(
        &mut self,
        method: &str,
        path: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(401)
            .expect(expected_requests)
            .create()
    }

    /// Create an authenticated mock failing with `status` and an `ErrorDto` body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        error: &ErrorDto,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock(method, path)
            .match_header("authorization", bearer().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(error)?)
            .expect(expected_requests)
            .create())
    }
}
