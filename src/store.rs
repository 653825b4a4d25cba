// src/store.rs
// =============================================================================
// Reads and writes the link collection: a JSON array of strings on disk.
//
// - read_links never fails. A missing file means "first run", a broken file
//   is logged one level louder (shown with -v); both give an empty history
//   and neither prints anything at the default verbosity.
// - write_links replaces the whole file. The new content goes to a sibling
//   temporary file first and is renamed into place, so the destination is
//   never left half-written by this process.
// =============================================================================

use crate::error::StoreError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Indentation used in the written file
const INDENT: &[u8] = b"    ";

/// Reads the persisted links, falling back to an empty list on any error
pub async fn read_links(path: &Path) -> Vec<String> {
    match load_links(path).await {
        Ok(links) => {
            log::debug!("Read {} link(s) from '{}'", links.len(), path.display());
            links
        }
        Err(e) if e.is_not_found() => {
            log::log!(
                recovery_level(&e),
                "No link history at '{}', starting empty",
                path.display()
            );
            Vec::new()
        }
        Err(e) => {
            log::log!(
                recovery_level(&e),
                "Ignoring unreadable link history at '{}': {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

// Missing history is the normal first run; a broken file is worth seeing
// with -v. Both stay below the default Warn filter.
fn recovery_level(error: &StoreError) -> log::Level {
    if error.is_not_found() {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Reads the persisted links, reporting what went wrong
pub async fn load_links(path: &Path) -> Result<Vec<String>, StoreError> {
    let bytes = tokio::fs::read(path).await?;
    let links: Vec<String> = serde_json::from_slice(&bytes)?;
    Ok(links)
}

/// Writes `links` as a pretty-printed JSON array, replacing the file
pub async fn write_links(path: &Path, links: &[String]) -> Result<(), StoreError> {
    let content = to_pretty_json(links)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    tokio::fs::write(&tmp, &content).await?;

    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        // Don't leave the temporary file lying around
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    log::debug!("Wrote {} link(s) to '{}'", links.len(), path.display());
    Ok(())
}

fn to_pretty_json(links: &[String]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    links.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

// links.json -> links.json.tmp, in the same directory so rename stays on
// one filesystem
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("links"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        assert!(read_links(&path).await.is_empty());
        assert!(load_links(&path).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        assert!(read_links(&path).await.is_empty());
        assert!(matches!(load_links(&path).await, Err(StoreError::Json(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, r#"{"links": ["http://a.com"]}"#).unwrap();

        assert!(read_links(&path).await.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        let written = links(&["http://a.com", "https://b.com/path"]);

        write_links(&path, &written).await.unwrap();
        assert_eq!(read_links(&path).await, written);
    }

    #[tokio::test]
    async fn test_written_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");

        write_links(&path, &links(&["http://a.com", "http://b.com"]))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n    \"http://a.com\",\n    \"http://b.com\"\n]\n");
    }

    #[tokio::test]
    async fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, r#"["http://old.com", "http://older.com"]"#).unwrap();

        write_links(&path, &links(&["http://new.com"])).await.unwrap();

        assert_eq!(read_links(&path).await, links(&["http://new.com"]));
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("nested").join("links.json");

        write_links(&path, &links(&["http://a.com"])).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_recovered_reads_stay_quiet_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");

        let missing = load_links(&path).await.unwrap_err();
        assert_eq!(recovery_level(&missing), log::Level::Debug);

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let corrupt = load_links(&path).await.unwrap_err();
        assert_eq!(recovery_level(&corrupt), log::Level::Info);

        // The CLI filters at Warn unless -v is given
        assert!(recovery_level(&missing) > log::LevelFilter::Warn);
        assert!(recovery_level(&corrupt) > log::LevelFilter::Warn);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/data/links.json");
        assert_eq!(temp_path(path), PathBuf::from("/data/links.json.tmp"));
    }
}
