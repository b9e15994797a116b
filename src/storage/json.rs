//! JSON file storage implementation
//!
//! This module provides a directory-of-JSON-files implementation of the
//! ArtifactStore trait. Writes go to a temporary sibling first and are
//! renamed into place, so a failed write never truncates the previous artifact.

use crate::models::ArticleRecord;
use crate::storage::traits::{ArtifactStore, StorageError, StorageResult};
use crate::storage::{Artifact, KeywordArtifact, SentimentArtifact, REPORT_PREFIX};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Artifact store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonArtifactStore {
    root: PathBuf,
}

impl JsonArtifactStore {
    /// Opens a store, creating the directory if needed
    ///
    /// # Arguments
    ///
    /// * `root` - Directory holding the artifacts
    ///
    /// # Returns
    ///
    /// * `Ok(JsonArtifactStore)` - The directory exists and is a directory
    /// * `Err(StorageError)` - The directory could not be created
    pub fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Full path of an artifact
    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.file_name())
    }

    fn write<T: Serialize + ?Sized>(&self, artifact: Artifact, value: &T) -> StorageResult<PathBuf> {
        let path = self.path(artifact);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json)?;

        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }

    fn read<T: DeserializeOwned>(&self, artifact: Artifact) -> StorageResult<T> {
        let path = self.path(artifact);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound(path)),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

impl ArtifactStore for JsonArtifactStore {
    fn root(&self) -> &Path {
        &self.root
    }

    // ===== Stage Outputs =====

    fn save_articles(&self, articles: &[ArticleRecord]) -> StorageResult<PathBuf> {
        self.write(Artifact::Articles, articles)
    }

    fn save_summarized(&self, articles: &[ArticleRecord]) -> StorageResult<PathBuf> {
        self.write(Artifact::SummarizedArticles, articles)
    }

    fn save_keywords(&self, keywords: &KeywordArtifact) -> StorageResult<PathBuf> {
        self.write(Artifact::Keywords, keywords)
    }

    fn save_sentiment(&self, sentiment: &SentimentArtifact) -> StorageResult<PathBuf> {
        self.write(Artifact::Sentiment, sentiment)
    }

    // ===== Readback =====

    fn load_articles(&self) -> StorageResult<Vec<ArticleRecord>> {
        self.read(Artifact::Articles)
    }

    fn load_summarized(&self) -> StorageResult<Vec<ArticleRecord>> {
        self.read(Artifact::SummarizedArticles)
    }

    fn load_keywords(&self) -> StorageResult<KeywordArtifact> {
        self.read(Artifact::Keywords)
    }

    fn load_sentiment(&self) -> StorageResult<SentimentArtifact> {
        self.read(Artifact::Sentiment)
    }

    // ===== Maintenance =====

    fn clear(&self) -> StorageResult<usize> {
        let mut deleted = 0;

        for artifact in Artifact::all() {
            match fs::remove_file(self.path(artifact)) {
                Ok(()) => deleted += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(deleted),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            let is_report = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(REPORT_PREFIX));

            if is_report && entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
                deleted += 1;
            }
        }

        tracing::info!("Deleted {} artifacts from {}", deleted, self.root.display());
        Ok(deleted)
    }
}
