/// Bearer token issued by the mock login endpoint
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_EMAIL: &str = "dispatch@fleet.test";
pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_USER_ID: i32 = 1;
