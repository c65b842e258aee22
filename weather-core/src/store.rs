//! Persistence of the last resolved location name.

use anyhow::{Context, Result};
use std::{
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
};

use crate::config::project_dirs;

/// One key: the most recently resolved location name.
pub trait LocationStore: Send + Sync + Debug {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, name: &str) -> Result<()>;
}

/// Plain-text file holding just the name.
#[derive(Debug, Clone)]
pub struct FileLocationStore {
    path: PathBuf,
}

impl FileLocationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `last_city` in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(project_dirs()?.data_dir().join("last_city")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocationStore for FileLocationStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let name = contents.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read last location: {}", self.path.display())),
        }
    }

    fn save(&mut self, name: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, name)
            .with_context(|| format!("Failed to write last location: {}", self.path.display()))
    }
}

/// Keeps the name for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocationStore {
    last: Option<String>,
}

impl MemoryLocationStore {
    pub fn with_last(name: impl Into<String>) -> Self {
        Self {
            last: Some(name.into()),
        }
    }
}

impl LocationStore for MemoryLocationStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.last.clone())
    }

    fn save(&mut self, name: &str) -> Result<()> {
        self.last = Some(name.to_string());
        Ok(())
    }
}
