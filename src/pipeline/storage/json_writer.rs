use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{CompleteDocument, SearchEntry};

/// Pretty-print `value` (two-space indent, non-ASCII kept as is) and write it
/// to `path` through a sibling temp file, so the target either keeps its old
/// content or gets the whole new document.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<u64> {
    let json_content = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "output.json".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let written = (|| -> Result<()> {
        let mut tmp = fs::File::create(&tmp_path)?;
        tmp.write_all(json_content.as_bytes())?;
        tmp.sync_all()?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    debug!("Wrote {} bytes to {}", json_content.len(), path.display());
    Ok(json_content.len() as u64)
}

/// Paths of the two artifacts after a successful write.
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub complete: PathBuf,
    pub search: PathBuf,
}

/// Write the complete document, then the search index. The pair is not
/// transactional: a failure on the second leaves the first in place.
pub fn write_outputs(
    complete_path: &Path,
    search_path: &Path,
    document: &CompleteDocument,
    search: &[SearchEntry],
) -> Result<WrittenFiles> {
    let bytes = write_json_atomic(complete_path, document)?;
    info!(
        "💾 Saved {} members to {} ({} bytes)",
        document.members.len(),
        complete_path.display(),
        bytes
    );

    let bytes = write_json_atomic(search_path, search)?;
    info!(
        "💾 Saved search index to {} ({} bytes)",
        search_path.display(),
        bytes
    );

    Ok(WrittenFiles {
        complete: complete_path.to_path_buf(),
        search: search_path.to_path_buf(),
    })
}
