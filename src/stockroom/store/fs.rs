use super::{strip_bom, RecordStore, BOM};
use crate::error::{Result, StockroomError};
use crate::model::Record;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Store backed by a single file on disk.
///
/// Each operation opens the file, does its work and drops the handle before
/// returning, on success and on failure alike.
pub struct FileStore {
    path: PathBuf,
    write_bom: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_bom: false,
        }
    }

    /// Start newly created files with a UTF-8 byte-order mark.
    pub fn with_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    fn io_err(&self, source: std::io::Error) -> StockroomError {
        StockroomError::io(&self.path, source)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StockroomError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure(&self) -> Result<()> {
        if self.path.is_file() {
            return Ok(());
        }
        self.ensure_parent()?;

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                if self.write_bom {
                    file.write_all(BOM.as_bytes())
                        .map_err(|e| self.io_err(e))?;
                }
                info!("Created store file {}", self.path.display());
                Ok(())
            }
            // Regular files returned early, so whatever is here is something else.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(self.io_err(io::Error::new(
                ErrorKind::Other,
                "path exists but is not a regular file",
            ))),
            Err(e) => Err(self.io_err(e)),
        }
    }

    fn append(&self, record: &Record) -> Result<()> {
        self.ensure()?;
        let line = record.to_line();

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_err(e))?;

        debug!(
            "Appended {} bytes to {}",
            line.len(),
            self.path.display()
        );
        Ok(())
    }

    fn read_all(&self) -> Result<String> {
        self.ensure()?;
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        debug!("Read {} bytes from {}", content.len(), self.path.display());
        Ok(strip_bom(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir, name: &str) -> FileStore {
        FileStore::new(dir.path().join(name))
    }

    #[test]
    fn append_then_read_all_returns_the_line() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "product.csv");

        store
            .append(&Record::new(["1", "Bolt", "S1", "steel"]))
            .unwrap();

        assert_eq!(store.read_all().unwrap(), "1,Bolt,S1,steel\n");
        assert_eq!(store.search("steel").unwrap(), vec!["1,Bolt,S1,steel"]);
        assert!(store.search("zzz").unwrap().is_empty());
    }

    #[test]
    fn append_adds_exactly_one_line_after_existing_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "stock.csv");
        store.append(&Record::new(["E1", "P1", "10"])).unwrap();
        let before = store.read_all().unwrap();

        store.append(&Record::new(["E2", "P2", "4"])).unwrap();

        assert_eq!(store.read_all().unwrap(), format!("{}E2,P2,4\n", before));
    }

    #[test]
    fn duplicate_ids_are_both_kept() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "stock.csv");
        store.append(&Record::new(["E1", "P1", "10"])).unwrap();
        store.append(&Record::new(["E1", "P1", "12"])).unwrap();

        assert_eq!(store.search("e1").unwrap().len(), 2);
    }

    #[test]
    fn commas_never_add_columns() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "product.csv");
        store
            .append(&Record::new(["1", "Nut, hex", "S1,S2", "m8, zinc"]))
            .unwrap();
        store.append(&Record::new(["2", ",", ",,", ""])).unwrap();

        for line in store.read_all().unwrap().lines() {
            assert_eq!(line.split(',').count(), 4, "line: {line}");
        }
    }

    #[test]
    fn read_all_on_missing_file_creates_it_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "supplier.csv");
        assert!(!store.path().exists());

        assert_eq!(store.read_all().unwrap(), "");
        assert!(store.path().is_file());
    }

    #[test]
    fn search_on_missing_file_creates_it_and_finds_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "supplier.csv");

        assert!(store.search("acme").unwrap().is_empty());
        assert!(store.path().is_file());
    }

    #[test]
    fn ensure_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("deeper").join("stock.csv"));

        store.ensure().unwrap();
        assert!(store.path().is_file());
    }

    #[test]
    fn ensure_leaves_existing_content_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stock.csv");
        fs::write(&path, "E1,P1,3\n").unwrap();

        let store = FileStore::new(&path);
        store.ensure().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "E1,P1,3\n");
    }

    #[test]
    fn ensure_fails_when_a_directory_holds_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("product.csv");
        fs::create_dir(&path).unwrap();

        let err = FileStore::new(&path).ensure().unwrap_err();
        assert!(matches!(err, StockroomError::Io { .. }));
        assert!(err.to_string().contains("not a regular file"));
        assert!(path.is_dir());
    }

    #[test]
    fn bom_is_written_once_and_hidden_from_readers() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "product.csv").with_bom(true);
        store.append(&Record::new(["1", "Bolt", "S1", "steel"])).unwrap();
        store.append(&Record::new(["2", "Nut", "S1", "zinc"])).unwrap();

        let raw = fs::read(store.path()).unwrap();
        assert!(raw.starts_with(BOM.as_bytes()));
        assert_eq!(store.read_all().unwrap(), "1,Bolt,S1,steel\n2,Nut,S1,zinc\n");
        assert_eq!(store.search("1,bolt").unwrap(), vec!["1,Bolt,S1,steel"]);
    }

    #[test]
    fn read_all_returns_crlf_content_unmodified() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stock.csv");
        fs::write(&path, "E1,P1,3\r\nE2,P2,5\r\n").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.read_all().unwrap(), "E1,P1,3\r\nE2,P2,5\r\n");
        assert_eq!(store.search("p2").unwrap(), vec!["E2,P2,5"]);
    }

    #[test]
    fn io_failures_name_the_path() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes every open fail.
        let path = dir.path().join("product.csv");
        fs::create_dir(&path).unwrap();

        let store = FileStore::new(&path);
        let err = store
            .append(&Record::new(["1", "Bolt", "S1", "steel"]))
            .unwrap_err();

        assert!(matches!(err, StockroomError::Io { .. }));
        assert!(err.to_string().contains("product.csv"));
        assert!(store.read_all().is_err());
    }
}
