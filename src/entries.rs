//! Directory entry collection and ordering

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One name read from a directory, together with the directory it came from.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub parent: PathBuf,
}

impl Entry {
    /// Full path of this entry.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// The sorted entries of one directory, ready for rendering.
///
/// `max_name_width` is the widest retained name in characters; the grid
/// layout needs it before any per-entry metadata is looked up.
#[derive(Debug)]
pub struct ListingBatch {
    pub entries: Vec<Entry>,
    pub max_name_width: usize,
    /// Error hit partway through enumeration, if any. The entries collected
    /// up to that point are still valid and still rendered.
    pub read_error: Option<io::Error>,
}

impl ListingBatch {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect the visible children of `dir`, sorted by byte-wise name order.
///
/// Hidden entries (names starting with `.`) are excluded. `read_dir` never
/// yields `.` or `..`, so those need no special casing. Fails only when the
/// directory itself cannot be opened; a failure partway through enumeration
/// is recorded on the batch instead, and the partial batch is returned.
pub fn collect(dir: &Path) -> io::Result<ListingBatch> {
    let mut entries = Vec::new();
    let mut max_name_width = 0;
    let mut read_error = None;

    for item in fs::read_dir(dir)? {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                read_error = Some(e);
                break;
            }
        };
        let name = item.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        max_name_width = max_name_width.max(name.chars().count());
        entries.push(Entry {
            name,
            parent: dir.to_path_buf(),
        });
    }

    // Two-pass: collect everything first, then sort. String comparison is
    // byte-wise, which keeps the order case-sensitive and locale-free.
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    Ok(ListingBatch {
        entries,
        max_name_width,
        read_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create file");
    }

    #[test]
    fn test_collect_excludes_hidden() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "visible.txt");
        touch(dir.path(), ".secret");
        touch(dir.path(), ".also-hidden");

        let batch = collect(dir.path()).unwrap();
        let names: Vec<_> = batch.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["visible.txt"]);
    }

    #[test]
    fn test_collect_sorts_bytewise() {
        let dir = TempDir::new().unwrap();
        for name in ["delta", "alpha", "Zulu", "charlie"] {
            touch(dir.path(), name);
        }

        let batch = collect(dir.path()).unwrap();
        let names: Vec<_> = batch.entries.iter().map(|e| e.name.as_str()).collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(names, vec!["Zulu", "alpha", "charlie", "delta"]);
    }

    #[test]
    fn test_collect_max_name_width_in_chars() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ab");
        touch(dir.path(), "héllo");

        let batch = collect(dir.path()).unwrap();
        // "héllo" is 6 bytes but 5 characters.
        assert_eq!(batch.max_name_width, 5);
    }

    #[test]
    fn test_collect_never_yields_dot_entries() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a");
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let batch = collect(dir.path()).unwrap();
        assert!(batch.entries.iter().all(|e| e.name != "." && e.name != ".."));
    }

    #[test]
    fn test_collect_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(collect(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_collect_empty_dir() {
        let dir = TempDir::new().unwrap();
        let batch = collect(dir.path()).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.max_name_width, 0);
        assert!(batch.read_error.is_none());
    }

    #[test]
    fn test_entry_path_joins_parent() {
        let entry = Entry {
            name: "x.txt".to_string(),
            parent: PathBuf::from("some/dir"),
        };
        assert_eq!(entry.path(), PathBuf::from("some/dir/x.txt"));
    }
}
