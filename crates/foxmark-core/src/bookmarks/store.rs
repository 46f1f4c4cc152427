use super::types::Bookmark;
use crate::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The JSON file holding all bookmark records
///
/// The whole file is read on [`load`](Self::load) and rewritten on
/// [`save`](Self::save). There is no locking: two concurrent runs race and
/// the last writer wins.
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all bookmarks in file order; a missing file is an empty store
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        if !self.path.exists() {
            tracing::debug!(
                "Bookmark store {} does not exist, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let bookmarks: Vec<Bookmark> = serde_json::from_reader(BufReader::new(file))?;

        tracing::debug!(
            "Loaded {} bookmark(s) from {}",
            bookmarks.len(),
            self.path.display()
        );

        Ok(bookmarks)
    }

    /// Overwrite the store with the given bookmarks
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, bookmarks)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!(
            "Saved {} bookmark(s) to {}",
            bookmarks.len(),
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample() -> Vec<Bookmark> {
        vec![
            Bookmark::new("Example", "work", "http://example.com", 3),
            Bookmark::new("Mail", "personal", "https://mail.example", 0),
            Bookmark::new("Example", "work", "http://example.org", 1),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmarks.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        fs::write(
            &path,
            r#"[
  {"Display Name": "B", "Profile": "work", "URL": "https://b.example", "Count": 7},
  {"Display Name": "A", "Profile": "personal", "URL": "https://a.example", "Count": 0}
]"#,
        )
        .unwrap();

        let bookmarks = BookmarkStore::new(&path).load().unwrap();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0], Bookmark::new("B", "work", "https://b.example", 7));
        assert_eq!(bookmarks[1], Bookmark::new("A", "personal", "https://a.example", 0));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        fs::write(&path, "{ not json").unwrap();

        let result = BookmarkStore::new(&path).load();
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmarks.json"));

        store.save(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_save_is_indented_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmarks.json"));

        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n    \"Display Name\": \"Example\""));
        assert!(!content.contains("Mail"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("nested").join("bookmarks.json"));

        store.save(&sample()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_increment_persists_for_one_record_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::new(dir.path().join("bookmarks.json"));
        store.save(&sample()).unwrap();

        let mut bookmarks = store.load().unwrap();
        bookmarks[0].increment();
        store.save(&bookmarks).unwrap();

        let reloaded = store.load().unwrap();
        let before = sample();
        assert_eq!(reloaded[0].count, before[0].count + 1);
        assert_eq!(reloaded[1], before[1]);
        assert_eq!(reloaded[2], before[2]);
    }
}
