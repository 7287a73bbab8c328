//! Optional common-password blacklist.
//!
//! Loaded once at startup from a plain text file, one password per line,
//! then treated as a process-wide read-only set. Analysis works without it;
//! the blacklist check simply never fires until `init_blacklist` succeeds.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

static BLACKLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

const DEFAULT_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("blacklist file is empty")]
    EmptyFile,
}

/// Resolves the blacklist file location: the `PWD_METER_BLACKLIST`
/// environment variable if set, otherwise `./assets/blacklist.txt`.
pub fn blacklist_path() -> PathBuf {
    std::env::var("PWD_METER_BLACKLIST")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATH))
}

/// Loads the blacklist from the resolved path. Call once at startup.
///
/// Idempotent: a second call returns the size of the already-loaded set
/// without touching the filesystem.
///
/// # Errors
///
/// Fails if the file is missing, unreadable, or contains no entries.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(blacklist_path())
}

/// Loads the blacklist from an explicit path, bypassing the environment
/// variable lookup.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = BLACKLIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("blacklist load failed, file not found: {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let set: HashSet<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("blacklist load failed, no entries in {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let count = set.len();
    *BLACKLIST.write().unwrap() = Some(set);

    #[cfg(feature = "tracing")]
    tracing::info!("blacklist loaded: {} entries from {}", count, path.display());

    Ok(count)
}

/// Exact, case-insensitive membership test. Always `false` before the
/// blacklist is initialized.
pub fn is_blacklisted(password: &str) -> bool {
    BLACKLIST
        .read()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&password.to_lowercase()))
}

/// Clears the loaded blacklist so each test starts from a known state.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    *BLACKLIST.write().unwrap() = None;
}
