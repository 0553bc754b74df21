use super::{parse_entries, serialize_entries, StorageBackend};
use crate::error::{Result, WordzError};
use crate::model::Entries;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores each dictionary as a single JSON file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackend;

impl FsBackend {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WordzError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self, path: &Path) -> Result<PathBuf> {
        let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
            WordzError::Store(format!("Not a dictionary file path: {}", path.display()))
        })?;
        Ok(path.with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4())))
    }
}

/// Write `tmp_path` with `write`, then rename it over `path`. On any failure
/// the temporary file is removed and `path` is left as it was.
fn replace_via_tmp<F>(tmp_path: &Path, path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let outcome = File::create(tmp_path)
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(tmp_path, path));

    outcome.map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        WordzError::Io(e)
    })
}

impl StorageBackend for FsBackend {
    fn read_entries(&self, path: &Path) -> Result<Option<Entries>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(WordzError::Io)?;
        parse_entries(path, &content).map(Some)
    }

    fn write_entries(&self, path: &Path, entries: &Entries) -> Result<()> {
        self.ensure_parent(path)?;
        let content = serialize_entries(entries)?;

        let tmp_path = self.tmp_path(path)?;
        replace_via_tmp(&tmp_path, path, |file| file.write_all(content.as_bytes()))
    }
}
