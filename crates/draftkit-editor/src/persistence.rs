//! Document files built from the action log.
//!
//! A draft file does not store the final diagram tree. It stores the
//! actions that produced it, and loading replays them through the
//! reducer. Files stay small and diffable, and every historic document
//! keeps loading as long as the action format stays readable.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actions::{reduce, EditorAction};
use crate::editor::EditorState;
use crate::error::EditorError;
use crate::renderer::RendererRegistry;
use crate::serializer::Serializer;
use crate::store::EditorStore;

/// Draft file format version.
const FILE_FORMAT_VERSION: u32 = 1;

/// A saved document: metadata plus the full action log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftFile {
    pub version: u32,
    pub metadata: FileMetadata,
    pub actions: Vec<EditorAction>,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DraftFile {
    /// Captures the store's action log under a document name.
    pub fn from_store(name: impl Into<String>, store: &EditorStore) -> Self {
        let now = Utc::now();

        Self {
            version: FILE_FORMAT_VERSION,
            metadata: FileMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            actions: store.actions(),
        }
    }

    /// Save the document to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize document")?;

        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;

        Ok(())
    }

    /// Load a document from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;

        let mut file: DraftFile =
            serde_json::from_str(&content).context("Failed to parse document file")?;

        if file.version != FILE_FORMAT_VERSION {
            return Err(EditorError::UnsupportedVersion {
                found: file.version,
                expected: FILE_FORMAT_VERSION,
            }
            .into());
        }

        file.metadata.modified = Utc::now();

        Ok(file)
    }

    /// Rebuilds the document by replaying the log over an empty state.
    pub fn replay(&self, registry: &Arc<RendererRegistry>) -> EditorState {
        let serializer = Serializer::new(Arc::clone(registry));

        debug!(actions = self.actions.len(), "replaying document log");

        self.actions
            .iter()
            .fold(EditorState::empty(), |state, action| {
                reduce(&state, action, registry, &serializer)
            })
    }
}

/// Saves a store to a fixed path whenever its state actually moved since
/// the last write. The identity check makes the idle case free.
pub struct Autosaver {
    path: PathBuf,
    last_saved: Option<EditorState>,
}

impl Autosaver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_saved: None,
        }
    }

    /// Writes the document if it changed since the last call. Returns
    /// whether a file was written.
    pub fn save_if_changed(&mut self, name: &str, store: &EditorStore) -> Result<bool> {
        if let Some(last) = &self.last_saved {
            if last.ptr_eq(store.present()) {
                return Ok(false);
            }
        }

        DraftFile::from_store(name, store).save_to_file(&self.path)?;
        self.last_saved = Some(store.present().clone());

        debug!(path = %self.path.display(), "autosaved document");

        Ok(true)
    }
}
