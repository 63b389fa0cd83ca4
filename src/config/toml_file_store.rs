use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{LockSnitchError, LockSnitchResult};
use crate::traits::config_store::ConfigStore;

/// Settings kept in a TOML file, re-read on every access.
pub struct TomlFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn open_default() -> LockSnitchResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> LockSnitchResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| LockSnitchError::system_error("locate config", "home directory could not be determined"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> LockSnitchResult<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.file_error(&e.to_string()))?;

        toml::from_str::<toml::Table>(&content)
            .map_err(|e| self.file_error(e.message()))
    }

    /// Replaces the file in one rename so readers never see a partial write.
    fn write_table(&self, table: &toml::Table) -> LockSnitchResult<()> {
        let parent = self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| self.file_error(&e.to_string()))?;

        let content = toml::to_string_pretty(table)?;
        let mut staged = NamedTempFile::new_in(parent).map_err(|e| self.file_error(&e.to_string()))?;
        staged.write_all(content.as_bytes()).map_err(|e| self.file_error(&e.to_string()))?;
        staged.persist(&self.path).map_err(|e| self.file_error(&e.error.to_string()))?;
        Ok(())
    }

    fn file_error(&self, reason: &str) -> LockSnitchError {
        LockSnitchError::config_file_error(&self.path.display().to_string(), reason)
    }
}

impl ConfigStore for TomlFileStore {
    fn get(&self, key: &str) -> LockSnitchResult<Option<toml::Value>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: toml::Value) -> LockSnitchResult<()> {
        let _guard = self.write_lock
            .lock()
            .map_err(|_| LockSnitchError::system_error("write config", "config lock poisoned"))?;

        let mut table = self.read_table()?;
        table.insert(key.to_string(), value);
        self.write_table(&table)
    }
}
