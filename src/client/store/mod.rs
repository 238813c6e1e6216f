//! Client-side state that outlives a single request.
//!
//! The session store keeps the authenticated identity and its bearer token, and the storage
//! backends decide where that pair is persisted between restarts.

pub mod session;
pub mod storage;

pub use session::{Session, SessionState, SessionStore};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
