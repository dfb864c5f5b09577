use crate::error::{Result, ZetError};
use directories::{BaseDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DATA_DIR_NAME: &str = "zetnote_data";

/// Storage layout for zetnote.
///
/// `data_dir` is decided by the caller; the file names can be overridden by a
/// `config.json` placed inside the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZetConfig {
    #[serde(skip)]
    pub data_dir: PathBuf,

    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    #[serde(default = "default_links_file")]
    pub links_file: String,

    #[serde(default = "default_short_index_file")]
    pub short_index_file: String,

    /// Directory for export files, relative to `data_dir`
    #[serde(default = "default_exports_dir")]
    pub exports_dir: String,
}

fn default_notes_file() -> String {
    "notes.json".to_string()
}

fn default_links_file() -> String {
    "links.json".to_string()
}

fn default_short_index_file() -> String {
    "shortmap.json".to_string()
}

fn default_exports_dir() -> String {
    "exports".to_string()
}

impl ZetConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            notes_file: default_notes_file(),
            links_file: default_links_file(),
            short_index_file: default_short_index_file(),
            exports_dir: default_exports_dir(),
        }
    }

    /// Load config from `data_dir`, or return defaults if there is none.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let config_path = data_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::new(data_dir));
        }

        let content = fs::read_to_string(&config_path).map_err(ZetError::Io)?;
        let mut config: ZetConfig =
            serde_json::from_str(&content).map_err(ZetError::Serialization)?;
        config.data_dir = data_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ZetError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ZetError::Serialization)?;
        fs::write(self.data_dir.join(CONFIG_FILENAME), content).map_err(ZetError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let names = [
            &self.notes_file,
            &self.links_file,
            &self.short_index_file,
            &self.exports_dir,
        ];
        for name in names {
            if name.trim().is_empty() {
                return Err(ZetError::Config("file names must not be empty".into()));
            }
        }
        if self.notes_file == self.links_file
            || self.notes_file == self.short_index_file
            || self.links_file == self.short_index_file
        {
            return Err(ZetError::Config(
                "notes, links and short index files must be distinct".into(),
            ));
        }
        Ok(())
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(&self.notes_file)
    }

    pub fn links_path(&self) -> PathBuf {
        self.data_dir.join(&self.links_file)
    }

    pub fn short_index_path(&self) -> PathBuf {
        self.data_dir.join(&self.short_index_file)
    }

    pub fn exports_path(&self) -> PathBuf {
        self.data_dir.join(&self.exports_dir)
    }
}

/// `~/Documents/zetnote_data`, or `~/zetnote_data` when there is no documents dir.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dirs) = UserDirs::new() {
        if let Some(docs) = dirs.document_dir() {
            return Ok(docs.join(DATA_DIR_NAME));
        }
        return Ok(dirs.home_dir().join("Documents").join(DATA_DIR_NAME));
    }
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DATA_DIR_NAME))
        .ok_or_else(|| ZetError::Config("could not determine a home directory".into()))
}
