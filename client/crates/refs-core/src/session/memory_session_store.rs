use crate::{CoreError, CoreResult, SessionCredential, SessionStore};

use std::sync::Mutex;

/// In-process store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    credential: Mutex<Option<SessionCredential>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a credential already present.
    pub fn with_credential(credential: SessionCredential) -> Self {
        Self {
            credential: Mutex::new(Some(credential)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> CoreResult<Option<SessionCredential>> {
        let guard = self
            .credential
            .lock()
            .map_err(|_| CoreError::lock_poisoned())?;
        Ok(guard.clone())
    }

    fn write(&self, credential: &SessionCredential) -> CoreResult<()> {
        let mut guard = self
            .credential
            .lock()
            .map_err(|_| CoreError::lock_poisoned())?;
        *guard = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        let mut guard = self
            .credential
            .lock()
            .map_err(|_| CoreError::lock_poisoned())?;
        *guard = None;
        Ok(())
    }
}
