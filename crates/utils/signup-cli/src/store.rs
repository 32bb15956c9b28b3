//! File-backed key/value store: one JSON object per file.

use std::fs;
use std::path::PathBuf;

use lib_signup::{KeyValueStore, SignupError};
use serde_json::{Map, Value};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> lib_signup::Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| SignupError::Storage(format!("{}: {}", self.path.display(), e)))?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(SignupError::Storage(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    #[cfg(test)]
    pub fn get_item(&self, key: &str) -> lib_signup::Result<Option<String>> {
        Ok(self.load()?.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }
}

impl KeyValueStore for JsonFileStore {
    fn set_item(&self, key: &str, value: &str) -> lib_signup::Result<()> {
        let mut items = self.load()?;
        items.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| SignupError::Storage(format!("{}: {}", parent.display(), e)))?;
        }

        let body = serde_json::to_string_pretty(&Value::Object(items))
            .map_err(|e| SignupError::Storage(e.to_string()))?;
        fs::write(&self.path, body)
            .map_err(|e| SignupError::Storage(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(key, path = %self.path.display(), "Stored item");
        Ok(())
    }
}
