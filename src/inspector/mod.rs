use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::classifier::{LineClassifier, LineCounts};
use crate::error::{LocFileError, Result};
use crate::language::LanguageRegistry;

/// Summary of one inspected file. Constructed fresh per request and
/// immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    /// Display name from the extension mapping; empty if unrecognized.
    pub language: String,
    /// Size in bytes from the filesystem stat; 0 for content-based
    /// inspection, where no stat occurs.
    pub size: u64,
    pub lines: LineCounts,
}

/// Builds `FileInfo` records by resolving the language and running the line
/// classifier over file content.
pub struct FileInspector<'a> {
    registry: &'a LanguageRegistry,
    classifier: LineClassifier,
}

impl Default for FileInspector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileInspector<'static> {
    /// Inspector backed by the process-wide extension mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::global())
    }
}

impl<'a> FileInspector<'a> {
    #[must_use]
    pub fn with_registry(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            classifier: LineClassifier::new(),
        }
    }

    /// Inspect the file at `path`.
    ///
    /// A path pointing at a non-regular file (e.g. a directory) yields a
    /// zero-valued record rather than an error. An unrecognized extension
    /// short-circuits with empty `language` and zeroed counts.
    ///
    /// # Errors
    /// `NotFound` if the path does not exist, `Metadata` or `FileRead` if
    /// the stat or read fails after the existence check.
    pub fn inspect_path(&self, path: &Path) -> Result<FileInfo> {
        if !path.exists() {
            return Err(LocFileError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let metadata = fs::metadata(path).map_err(|source| LocFileError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Ok(FileInfo::default());
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut info = FileInfo {
            language: self.resolve_language(&name),
            name,
            size: metadata.len(),
            lines: LineCounts::new(),
        };
        if info.language.is_empty() {
            return Ok(info);
        }

        let content = fs::read_to_string(path).map_err(|source| LocFileError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if !content.is_empty() {
            info.lines = self.classifier.classify(&content);
        }

        Ok(info)
    }

    /// Inspect already-loaded content under a display name. No filesystem
    /// access; `size` stays 0.
    #[must_use]
    pub fn inspect_content(&self, name: &str, content: &str) -> FileInfo {
        let mut info = FileInfo {
            name: name.to_string(),
            language: self.resolve_language(name),
            size: 0,
            lines: LineCounts::new(),
        };
        if info.language.is_empty() {
            return info;
        }

        if !content.is_empty() {
            info.lines = self.classifier.classify(content);
        }

        info
    }

    /// Extension is everything after the final dot of the name, dot
    /// included. A name without a dot produces a key that resolves to
    /// nothing.
    fn resolve_language(&self, name: &str) -> String {
        let extension = name
            .rsplit('.')
            .next()
            .map_or_else(String::new, |tail| format!(".{tail}"));
        self.registry.resolve(&extension).to_string()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
