// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::Path};

use hdaycal_core::{Document, ParseWarning};

/// Reads and parses an hday file.
#[tracing::instrument]
pub fn read_document(path: &Path) -> Result<(Document, Vec<ParseWarning>), Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hday file at {}: {}", path.display(), e))?;
    Ok(Document::parse_with_warnings(&text))
}

/// Replaces the file content, going through a temporary file next to it so
/// a failed write leaves the original intact.
#[tracing::instrument(skip(text))]
pub fn write_document(path: &Path, text: &str) -> Result<(), Box<dyn Error>> {
    let tmp = path.with_extension("hday.tmp");
    let result = fs::write(&tmp, text)
        .map_err(|e| format!("Failed to write hday file at {}: {}", tmp.display(), e))
        .and_then(|()| {
            fs::rename(&tmp, path)
                .map_err(|e| format!("Failed to replace hday file at {}: {}", path.display(), e))
        });
    if result.is_err()
        && let Err(e) = fs::remove_file(&tmp)
    {
        tracing::debug!(path = %tmp.display(), err = %e, "temporary file not removed");
    }
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.hday");
        write_document(&path, "bd1 # Mondays\n").unwrap();

        let (doc, warnings) = read_document(&path).unwrap();
        assert_eq!(doc.raw, "bd1 # Mondays\n");
        assert_eq!(doc.len(), 1);
        assert!(warnings.is_empty());
        assert!(!path.with_extension("hday.tmp").exists());
    }

    #[test]
    fn failed_replace_removes_temporary_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.hday");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let err = write_document(&path, "bd1\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to replace hday file"));
        assert!(!path.with_extension("hday.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("missing.hday")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read hday file"));
    }
}
