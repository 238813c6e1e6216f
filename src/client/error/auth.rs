use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("The {0} field is required")]
    MissingCredential(&'static str),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("You need to log in first")]
    NotAuthenticated,
    #[error("This action requires the administrator role")]
    AdminRequired,
}
