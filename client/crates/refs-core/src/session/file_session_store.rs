use crate::{CoreError, CoreResult, SESSION_KEY, SessionCredential, SessionStore};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::{Map, Value};

/// Key-value storage file holding the credential under a fixed key.
///
/// The file is a flat JSON object so other entries written by other tools
/// survive `write` and `clear`. A file that is not a JSON object is moved
/// aside to `<file>.bak` and then treated as empty, so the next write never
/// destroys it.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    key: String,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, SESSION_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupted storage file is moved before it is replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn backup_corrupted(&self) -> CoreResult<()> {
        let backup = self.backup_path();

        fs::rename(&self.path, &backup)
            .map_err(|e| CoreError::backup_failed(self.path.clone(), backup.clone(), e))?;

        warn!("Backed up corrupted storage to {backup:?}");
        Ok(())
    }

    fn load_entries(&self) -> CoreResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| CoreError::storage_read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(entries)) => return Ok(entries),
            Ok(_) => warn!("Storage file at {:?} is not a JSON object", self.path),
            Err(e) => warn!("Storage file corrupted at {:?}: {e}", self.path),
        }

        self.backup_corrupted()?;
        Ok(Map::new())
    }

    /// Temp file, fsync, then rename over the real file.
    fn save_entries(&self, entries: &Map<String, Value>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| CoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp_name);

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| CoreError::storage_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| CoreError::storage_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| CoreError::storage_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CoreError::atomic_rename(temp_path, self.path.clone(), e)
        })
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> CoreResult<Option<SessionCredential>> {
        let entries = self.load_entries()?;

        match entries.get(&self.key) {
            Some(Value::String(value)) if !value.is_empty() => {
                Ok(Some(SessionCredential::from_stored(value.as_str())))
            }
            Some(Value::String(_)) | None => Ok(None),
            Some(_) => {
                warn!("Ignoring non-string '{}' entry in {:?}", self.key, self.path);
                Ok(None)
            }
        }
    }

    fn write(&self, credential: &SessionCredential) -> CoreResult<()> {
        let mut entries = self.load_entries()?;
        entries.insert(
            self.key.clone(),
            Value::String(credential.as_str().to_string()),
        );
        self.save_entries(&entries)?;

        debug!("Session stored in {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.load_entries()?;
        if entries.remove(&self.key).is_some() {
            self.save_entries(&entries)?;
            debug!("Session cleared from {:?}", self.path);
        }

        Ok(())
    }
}
