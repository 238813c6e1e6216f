//! Test utilities for the fleetdesk workspace.
//!
//! Tests describe the API they expect with [`TestBuilder`], which starts a mockito server
//! and registers the requested endpoints. The resulting [`TestSetup`] exposes the server URL
//! to point a client at and verifies call counts with `assert_mocks()`.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, TEST_USER_ID},
        fixtures::factory,
        TestBuilder, TestError, TestSetup,
    };
}
