use super::StorageBackend;
use crate::config::ZetConfig;
use crate::error::{Result, ZetError};
use crate::model::{Links, Notes, ShortIndex};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FsBackend {
    config: ZetConfig,
}

impl FsBackend {
    pub fn new(config: ZetConfig) -> Self {
        Self { config }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ZetError::Io)?;
        }
        Ok(())
    }

    fn load_document<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        debug!(path = %path.display(), "loading document");
        let content = fs::read_to_string(path).map_err(ZetError::Io)?;
        let doc = serde_json::from_str(&content).map_err(ZetError::Serialization)?;
        Ok(doc)
    }

    fn save_document<T: Serialize>(&self, path: &Path, doc: &T) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| ZetError::Store(format!("Invalid path: {}", path.display())))?;
        self.ensure_dir(dir)?;

        debug!(path = %path.display(), "saving document");
        let content = serde_json::to_string_pretty(doc).map_err(ZetError::Serialization)?;

        // Atomic write
        let tmp_file = dir.join(format!(".zetnote-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ZetError::Io)?;
        fs::rename(&tmp_file, path).map_err(ZetError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn ensure_documents(&self) -> Result<()> {
        self.ensure_dir(&self.config.data_dir)?;
        if !self.config.notes_path().exists() {
            self.save_notes(&Notes::new())?;
        }
        if !self.config.links_path().exists() {
            self.save_links(&Links::new())?;
        }
        Ok(())
    }

    fn load_notes(&self) -> Result<Notes> {
        self.load_document(&self.config.notes_path())
    }

    fn save_notes(&self, notes: &Notes) -> Result<()> {
        self.save_document(&self.config.notes_path(), notes)
    }

    fn load_links(&self) -> Result<Links> {
        self.load_document(&self.config.links_path())
    }

    fn save_links(&self, links: &Links) -> Result<()> {
        self.save_document(&self.config.links_path(), links)
    }

    fn load_short_index(&self) -> Result<ShortIndex> {
        self.load_document(&self.config.short_index_path())
    }

    fn save_short_index(&self, index: &ShortIndex) -> Result<()> {
        self.save_document(&self.config.short_index_path(), index)
    }

    fn write_export(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let dir = self.config.exports_path();
        self.ensure_dir(&dir)?;
        let path = dir.join(file_name);
        debug!(path = %path.display(), "writing export");
        fs::write(&path, contents).map_err(ZetError::Io)?;
        Ok(path)
    }

    fn data_dir(&self) -> PathBuf {
        self.config.data_dir.clone()
    }
}
