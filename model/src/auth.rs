use serde::{Deserialize, Serialize};

use crate::user::ADMIN_ROLE;

/// Credentials submitted to `POST /Auth/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response of `POST /Auth/login`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i32,
    pub role: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The authenticated user as remembered by the client between restarts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<&LoginResponse> for Identity {
    fn from(response: &LoginResponse) -> Self {
        Self {
            user_id: response.user_id,
            first_name: response.first_name.clone(),
            last_name: response.last_name.clone(),
            email: response.email.clone(),
            role: response.role.clone(),
        }
    }
}
