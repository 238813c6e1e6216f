//! Fixtures for API tests.
//!
//! - `factory` - Records as the API would return them
//! - `mockito` - Mock endpoints of the fleet API

pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { setup: self }
    }
}

pub struct ApiFixtures<'a> {
    setup: &'a mut TestSetup,
}
