use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_PAGE_FILENAME: &str = "playlist.html";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory unusable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` (and parents) unless it already exists as a directory.
pub fn prepare_output_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::OutputDir(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir)
            .map_err(|err| PersistError::OutputDir(format!("{}: {err}", dir.display()))),
        Err(err) => Err(PersistError::OutputDir(format!("{}: {err}", dir.display()))),
    }
}

/// Publishes the rendered player page.
///
/// Each publish writes a sibling temp file and renames it over the page, so a
/// browser reloading the page never sees a half-written document.
#[derive(Debug, Clone)]
pub struct PageWriter {
    target: PathBuf,
}

impl PageWriter {
    pub fn new(dir: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            target: dir.into().join(filename),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn publish(&self, content: &str) -> Result<&Path, PersistError> {
        let dir = self
            .target
            .parent()
            .ok_or_else(|| PersistError::OutputDir("page path has no parent".into()))?;
        prepare_output_dir(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file_mut().sync_all()?;
        staged
            .persist(&self.target)
            .map_err(|err| PersistError::Io(err.error))?;
        Ok(&self.target)
    }
}
