//! Local Gemini API key file: `<state dir>/credentials/gemini.key`.
//!
//! The state dir is the parent of `DATA_ANALYST_CONFIG` when set, otherwise
//! `~/.data-analyst`. The credentials dir is 0700 and the key file 0600 on
//! unix.

use std::path::{Path, PathBuf};

const KEY_FILE: &str = "gemini.key";

/// Directory holding the config file and credentials.
pub fn state_dir() -> PathBuf {
    match std::env::var("DATA_ANALYST_CONFIG") {
        Ok(config) => match Path::new(&config).parent() {
            Some(parent) => parent.to_path_buf(),
            None => home_state_dir(),
        },
        Err(_) => home_state_dir(),
    }
}

fn home_state_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".data-analyst")
}

/// Path of the key file under `state_dir`.
pub fn key_path(state_dir: &Path) -> PathBuf {
    state_dir.join("credentials").join(KEY_FILE)
}

pub fn write_key_to(state_dir: &Path, api_key: &str) -> anyhow::Result<PathBuf> {
    let api_key = api_key.trim();
    anyhow::ensure!(!api_key.is_empty(), "API key cannot be empty");

    let path = key_path(state_dir);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", dir.display()))?;
        restrict(dir, 0o700)?;
    }

    std::fs::write(&path, api_key)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    restrict(&path, 0o600)?;
    Ok(path)
}

/// Trimmed key, or `None` when the file is missing, unreadable or blank.
pub fn read_key_from(state_dir: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(key_path(state_dir)).ok()?;
    Some(raw.trim().to_string()).filter(|k| !k.is_empty())
}

pub fn store_api_key(api_key: &str) -> anyhow::Result<PathBuf> {
    write_key_to(&state_dir(), api_key)
}

#[cfg(unix)]
fn restrict(path: &Path, mode: u32) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| anyhow::anyhow!("failed to chmod {mode:o} {}: {e}", path.display()))
}

#[cfg(not(unix))]
fn restrict(_path: &Path, _mode: u32) -> anyhow::Result<()> {
    Ok(())
}
