use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context as _;

use crate::foundation::error::MyomResult;
use crate::template::registry::TemplateKind;

/// Where exported PNG files go.
pub trait ExportTarget {
    /// Persist `png` under `file_name`, returning where it ended up.
    fn save(&mut self, file_name: &str, png: &[u8]) -> MyomResult<PathBuf>;
}

/// `{prefix}-{kind}-{timestamp_ms}.png`.
pub fn export_file_name(prefix: &str, kind: TemplateKind, timestamp_ms: u64) -> String {
    format!("{prefix}-{}-{timestamp_ms}.png", kind.key())
}

/// Milliseconds since the Unix epoch, `0` if the clock is before it.
pub fn timestamp_ms_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

pub fn ensure_parent_dir(path: &Path) -> MyomResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Writes exports into a directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportTarget for DirectoryTarget {
    fn save(&mut self, file_name: &str, png: &[u8]) -> MyomResult<PathBuf> {
        let path = self.dir.join(file_name);
        ensure_parent_dir(&path)?;
        std::fs::write(&path, png).with_context(|| format!("write png '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "export written");
        Ok(path)
    }
}

/// In-memory target for tests and embedding hosts that hand bytes to their own download UI.
#[derive(Debug, Default)]
pub struct InMemoryTarget {
    files: Vec<(String, Vec<u8>)>,
}

impl InMemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved files in save order.
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }
}

impl ExportTarget for InMemoryTarget {
    fn save(&mut self, file_name: &str, png: &[u8]) -> MyomResult<PathBuf> {
        self.files.push((file_name.to_owned(), png.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/target.rs"]
mod tests;
