use mockito::{Mock, Server, ServerGuard};

use crate::error::TestError;

/// Mock API server plus the endpoints registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Start a mock API server with no endpoints.
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(Self {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL to configure the client under test with
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
