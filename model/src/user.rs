use serde::{Deserialize, Serialize};

/// Role tag granting access to personnel and vehicle management
pub const ADMIN_ROLE: &str = "admin";
/// Role tag of regular personnel
pub const USER_ROLE: &str = "user";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    pub email: String,
    pub role: String,
}

impl UserDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Payload of `POST /users`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
    pub role: String,
}

/// Payload of `PUT /users/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub role: String,
}

impl From<&UserDto> for UserUpdateDto {
    fn from(user: &UserDto) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            address: user.address.clone(),
            role: user.role.clone(),
        }
    }
}
