use dioxus_logger::tracing;
use fleetdesk_model::user::{NewUserDto, UserDto, UserUpdateDto};

use crate::client::{api::ApiClient, error::Error};

/// Service for personnel records.
pub struct UserService<'a> {
    api: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// All personnel (`GET /users`)
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        Ok(self.api.get("/users").await?)
    }

    /// Create a user (`POST /users`)
    pub async fn create(&self, user: &NewUserDto) -> Result<UserDto, Error> {
        let created: UserDto = self.api.post("/users", user).await?;

        tracing::info!(user_id = %created.user_id, "Created user {}", created.email);

        Ok(created)
    }

    /// Update a user (`PUT /users/{id}`)
    pub async fn update(&self, user_id: i32, user: &UserUpdateDto) -> Result<(), Error> {
        self.api.put(&format!("/users/{}", user_id), user).await?;

        tracing::info!(user_id = %user_id, "Updated user");

        Ok(())
    }

    /// Delete a user (`DELETE /users/{id}`)
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        self.api.delete(&format!("/users/{}", user_id)).await?;

        tracing::info!(user_id = %user_id, "Deleted user");

        Ok(())
    }

    /// Profile of the logged in user (`GET /my/profile`)
    pub async fn profile(&self) -> Result<UserDto, Error> {
        Ok(self.api.get("/my/profile").await?)
    }
}
