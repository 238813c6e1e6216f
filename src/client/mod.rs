//! Fleet console client.
//!
//! - `store` - Who is logged in, persisted between restarts
//! - `api` - HTTP boundary and resource services
//! - `view` - Labels and styling classes derived from API records
//! - `access` - Session and role checks in front of protected areas

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod view;

pub use access::{authorize, Access};
pub use api::{ApiClient, HttpClient};
pub use config::Config;
pub use error::Error;
pub use store::{FileStorage, MemoryStorage, Session, SessionStore};
