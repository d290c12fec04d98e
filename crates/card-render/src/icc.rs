//! ICC profile storage
//!
//! Profiles are named binary blobs keyed case-insensitively by a `.icc` file
//! name. The layout engine never touches the store; callers fetch the bytes
//! and hand them over in `CardSettings`.

use crate::{RenderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const ICC_EXTENSION: &str = ".icc";

/// A stored profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IccProfileEntry {
    /// File name including the `.icc` extension
    pub file_name: String,
    /// Display name (file name without extension)
    pub name: String,
}

#[async_trait]
pub trait IccProfileStore: Send + Sync {
    /// All stored profiles, sorted case-insensitively by name
    async fn list(&self) -> Result<Vec<IccProfileEntry>>;
    /// Persist a profile, returning the sanitized file name it was stored under
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String>;
    /// Profile bytes by name; the `.icc` extension is optional
    async fn fetch(&self, name: &str) -> Result<Vec<u8>>;
    async fn delete(&self, name: &str) -> Result<()>;
}

/// Fetch a named profile, treating an absent one as "no profile".
///
/// An empty name means no profile was requested.
pub async fn resolve_icc_profile<S>(store: &S, name: &str) -> Result<Option<Vec<u8>>>
where
    S: IccProfileStore + ?Sized,
{
    if name.trim().is_empty() {
        return Ok(None);
    }
    match store.fetch(name).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e @ (RenderError::IccNotFound(_) | RenderError::InvalidIccName(_))) => {
            log::warn!("{}; continuing without an output intent", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Reduce an uploaded file name to a safe single path component.
///
/// Keeps ASCII letters, digits, `-`, `_` and `.`; whitespace becomes `_`;
/// leading and trailing dots and underscores are stripped.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    cleaned.trim_matches(['.', '_']).to_string()
}

fn has_icc_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(ICC_EXTENSION)
}

fn display_name(file_name: &str) -> &str {
    &file_name[..file_name.len() - ICC_EXTENSION.len()]
}

/// Directory-backed profile store
pub struct FsIccStore {
    root: PathBuf,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl FsIccStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            locks: Mutex::new(HashMap::new()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Per-profile lock serialising writers of the same name
    fn lock_for(&self, file_name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(file_name.to_ascii_lowercase())
            .or_default()
            .clone()
    }

    /// Forget the lock for `file_name` unless another task is still using it
    fn release_lock(&self, file_name: &str, lock: Arc<tokio::sync::Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        // one reference in the map, one held here
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&file_name.to_ascii_lowercase());
        }
    }

    /// Sanitized file name for a lookup key, with the extension appended if missing
    fn key(name: &str) -> Result<String> {
        let mut file_name = sanitize_file_name(name);
        if !has_icc_extension(&file_name) {
            file_name.push_str(ICC_EXTENSION);
        }
        if display_name(&file_name).is_empty() {
            return Err(RenderError::InvalidIccName(name.to_string()));
        }
        Ok(file_name)
    }

    /// Find the stored file matching `file_name` case-insensitively
    async fn locate(&self, file_name: &str) -> Result<Option<PathBuf>> {
        let exact = self.root.join(file_name);
        if tokio::fs::try_exists(&exact).await? {
            return Ok(Some(exact));
        }

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(file_name))
            {
                return Ok(Some(entry.path()));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl IccProfileStore for FsIccStore {
    async fn list(&self) -> Result<Vec<IccProfileEntry>> {
        let mut profiles = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            // in-flight writes are hidden dot files
            if file_name.starts_with('.') || !has_icc_extension(&file_name) {
                continue;
            }
            profiles.push(IccProfileEntry {
                name: display_name(&file_name).to_string(),
                file_name,
            });
        }

        profiles.sort_by_key(|profile| profile.name.to_lowercase());
        Ok(profiles)
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        if !has_icc_extension(file_name) {
            return Err(RenderError::InvalidIccName(file_name.to_string()));
        }
        let stored_name = Self::key(file_name)?;

        let lock = self.lock_for(&stored_name);
        let _guard = lock.lock().await;

        let previous = self.locate(&stored_name).await?;

        // Write beside the target and rename, so readers see old or new, never partial
        let temp_path = self.root.join(format!(".{}.tmp", stored_name));
        let final_path = self.root.join(&stored_name);
        tokio::fs::write(&temp_path, bytes).await?;
        tokio::fs::rename(&temp_path, &final_path).await?;

        // A differently-cased copy of the same profile is replaced, not kept alongside
        if let Some(previous) = previous.filter(|path| *path != final_path) {
            tokio::fs::remove_file(previous).await?;
        }

        log::info!("Saved ICC profile {} ({} bytes)", stored_name, bytes.len());
        Ok(stored_name)
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let file_name = Self::key(name)?;
        match self.locate(&file_name).await? {
            Some(path) => Ok(tokio::fs::read(path).await?),
            None => Err(RenderError::IccNotFound(name.to_string())),
        }
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let file_name = Self::key(name)?;

        let lock = self.lock_for(&file_name);
        let guard = lock.lock().await;

        let Some(path) = self.locate(&file_name).await? else {
            return Err(RenderError::IccNotFound(name.to_string()));
        };
        tokio::fs::remove_file(path).await?;
        drop(guard);
        self.release_lock(&file_name, lock);

        log::info!("Deleted ICC profile {}", file_name);
        Ok(())
    }
}
