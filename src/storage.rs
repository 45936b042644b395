use crate::errors::SnapshotError;
use crate::models::Snapshot;
use std::path::Path;
use tokio::fs;
use tracing::{debug, error};

/// Reads and parses the snapshot. There is no fallback: a missing or broken
/// file is an error for the caller to surface.
pub async fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let bytes = fs::read(path).await.map_err(|source| {
        error!("failed to read snapshot {}: {source}", path.display());
        SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(|source| {
        error!("failed to parse snapshot {}: {source}", path.display());
        SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(matchups = snapshot.len(), "loaded snapshot");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }

    #[tokio::test]
    async fn garbage_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_snapshot(file.path()).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse snapshot"));
    }

    #[tokio::test]
    async fn empty_object_is_an_empty_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        let snapshot = load_snapshot(file.path()).await.unwrap();
        assert!(snapshot.is_empty());
    }
}
