//! Declarative setup of the mock fleet API.
//!
//! Endpoints are queued on the builder and registered on a fresh mockito server by
//! `build()`.

use fleetdesk_model::{auth::LoginResponse, user::UserDto, vehicle::VehicleDto};
use mockito::Mock;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    login_endpoints: Vec<(LoginResponse, usize)>, // (response, expected_requests)
    login_rejections: Vec<usize>,
    vehicle_endpoints: Vec<(Vec<VehicleDto>, usize)>,
    user_endpoints: Vec<(Vec<UserDto>, usize)>,
    unauthorized_endpoints: Vec<(String, String, usize)>, // (method, path, expected_requests)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            login_endpoints: Vec::new(),
            login_rejections: Vec::new(),
            vehicle_endpoints: Vec::new(),
            user_endpoints: Vec::new(),
            unauthorized_endpoints: Vec::new(),
        }
    }

    /// Add a `POST /Auth/login` endpoint accepting the test credentials.
    ///
    /// # Arguments
    /// - `response` - Login response returned to the client
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_login_endpoint(
        mut self,
        response: LoginResponse,
        expected_requests: usize,
    ) -> Self {
        self.login_endpoints.push((response, expected_requests));
        self
    }

    /// Add a `POST /Auth/login` endpoint rejecting every attempt with `401`.
    pub fn with_login_rejection(mut self, expected_requests: usize) -> Self {
        self.login_rejections.push(expected_requests);
        self
    }

    /// Add a `GET /vehicles` endpoint for the test token.
    pub fn with_vehicles_endpoint(
        mut self,
        vehicles: Vec<VehicleDto>,
        expected_requests: usize,
    ) -> Self {
        self.vehicle_endpoints.push((vehicles, expected_requests));
        self
    }

    /// Add a `GET /users` endpoint for the test token.
    pub fn with_users_endpoint(mut self, users: Vec<UserDto>, expected_requests: usize) -> Self {
        self.user_endpoints.push((users, expected_requests));
        self
    }

    /// Add an endpoint that answers `401` to simulate an expired token.
    pub fn with_unauthorized_endpoint(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.unauthorized_endpoints
            .push((method.into(), path.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Server running with all endpoints registered
    /// - `Err(TestError::SerdeJson)` - A fixture could not be serialized
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // Custom endpoints are created first so tests can stack several mocks on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (response, expected) in self.login_endpoints {
            mocks.push(setup.api().create_login_endpoint(&response, expected)?);
        }

        for expected in self.login_rejections {
            mocks.push(setup.api().create_login_rejection_endpoint(expected));
        }

        for (vehicles, expected) in self.vehicle_endpoints {
            mocks.push(setup.api().create_vehicles_endpoint(&vehicles, expected)?);
        }

        for (users, expected) in self.user_endpoints {
            mocks.push(setup.api().create_users_endpoint(&users, expected)?);
        }

        for (method, path, expected) in self.unauthorized_endpoints {
            mocks.push(
                setup
                    .api()
                    .create_unauthorized_endpoint(&method, &path, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
