//! Persistent session credential storage.
//!
//! Flows never touch storage directly; they receive a [`SessionStore`] and go
//! through `read`/`write`/`clear`. The binary uses [`FileSessionStore`],
//! tests use [`MemorySessionStore`].
//!
//! [`FileSessionStore`]: file_session_store::FileSessionStore
//! [`MemorySessionStore`]: memory_session_store::MemorySessionStore

pub mod file_session_store;
pub mod memory_session_store;

use crate::{CoreResult, SessionCredential};

/// Fixed key the credential is stored under.
pub const SESSION_KEY: &str = "adminToken";

pub trait SessionStore: Send + Sync {
    /// Current credential, if any. Presence says nothing about validity.
    fn read(&self) -> CoreResult<Option<SessionCredential>>;

    /// Replace the stored credential.
    fn write(&self, credential: &SessionCredential) -> CoreResult<()>;

    /// Remove the credential. Clearing an empty store is not an error.
    fn clear(&self) -> CoreResult<()>;
}
