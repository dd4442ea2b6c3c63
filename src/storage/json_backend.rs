use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::Result,
    ledger::Ledger,
    storage::StorageBackend,
    utils::{app_data_dir, ensure_dir},
};

const SNAPSHOT_FILE: &str = "transactions.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the whole ledger in one pretty-printed JSON file, the disk
/// analogue of the original's single local-storage key.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens the store rooted at the given directory, defaulting to the app
    /// data dir. The directory is created if missing.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            path: root.join(SNAPSHOT_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = ledger.len(), "snapshot saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        Ok(Some(ledger))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn save_and_load_roundtrip_preserves_everything() {
        let (store, _guard) = store_with_temp_dir();
        let ledger = seed::starter_ledger();
        store.save(&ledger).expect("save snapshot");
        let loaded = store.load().expect("load snapshot").expect("snapshot present");
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn load_returns_none_when_no_snapshot_exists() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn snapshot_is_a_bare_json_array() {
        let (store, _guard) = store_with_temp_dir();
        store.save(&seed::starter_ledger()).expect("save snapshot");
        let raw = fs::read_to_string(store.path()).expect("read snapshot");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse snapshot");
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 5);
    }
}
