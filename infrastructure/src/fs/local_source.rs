//! Local filesystem document source

use glob::glob;
use skillcheck_application::ports::document_source::{
    DocumentSource, SKILL_FILE_NAME, SourceError,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// [`DocumentSource`] backed by blocking `std::fs` reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDocumentSource;

impl LocalDocumentSource {
    pub fn new() -> Self {
        Self
    }

    fn check_is_file(path: &Path) -> Result<(), SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }
        Ok(())
    }

    fn read_bytes(path: &Path) -> Result<Vec<u8>, SourceError> {
        Self::check_is_file(path)?;
        fs::read(path).map_err(|error| SourceError::Unreadable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })
    }
}

impl DocumentSource for LocalDocumentSource {
    fn read_document(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = Self::read_bytes(path)?;
        String::from_utf8(bytes).map_err(|error| SourceError::Unreadable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })
    }

    fn read_document_lossy(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = Self::read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn list_skill_documents(&self, root: &Path) -> Result<Vec<(String, PathBuf)>, SourceError> {
        if !root.is_dir() {
            return Err(SourceError::MissingRoot(root.to_path_buf()));
        }

        // One designated file per immediate subdirectory; directories
        // without it drop out of the glob naturally.
        let pattern = root.join("*").join(SKILL_FILE_NAME);
        let pattern = pattern.to_string_lossy();
        debug!("enumerating skills with pattern {}", pattern);

        let mut documents = Vec::new();
        let paths = glob(&pattern).map_err(|error| SourceError::Unreadable {
            path: root.to_path_buf(),
            reason: error.to_string(),
        })?;

        for entry in paths {
            let Ok(path) = entry else {
                continue;
            };
            let Some(skill_name) = path
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
            else {
                continue;
            };
            trace!("found skill document {}", path.display());
            documents.push((skill_name, path));
        }

        Ok(documents)
    }
}
