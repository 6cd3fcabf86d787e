// offsets.rs
use crate::scraper::{Result, ScraperError};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const OFFSET_EXTENSION: &str = "dat";

/// File stem for a (location, category) pair.
///
/// Values that themselves contain `_` can collide (`a_b` + `c` vs `a` + `b_c`);
/// callers are expected to use the site's own slugs, which never do.
pub fn storage_key(location: &str, category: &str) -> String {
    format!("{location}_{category}")
}

/// Persists the highest delivered listing id per (location, category) as a
/// plain decimal in `<dir>/<location>_<category>.dat`.
///
/// When disabled every read is 0 and writes touch nothing. There is no locking:
/// two passes over the same key race and the last writer wins.
#[derive(Debug, Clone)]
pub struct OffsetStore {
    dir: PathBuf,
    enabled: bool,
}

impl OffsetStore {
    pub fn new(dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            dir: dir.into(),
            enabled,
        }
    }

    pub fn disabled() -> Self {
        Self::new(".", false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, location: &str, category: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{OFFSET_EXTENSION}", storage_key(location, category)))
    }

    pub fn read_watermark(&self, location: &str, category: &str) -> Result<i64> {
        if !self.enabled {
            return Ok(0);
        }

        let path = self.path_for(location, category);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored offset yet");
                return Ok(0);
            }
            Err(e) => {
                return Err(ScraperError::StorageRead {
                    path,
                    message: e.to_string(),
                })
            }
        };

        data.trim()
            .parse::<i64>()
            .map_err(|e| ScraperError::StorageRead {
                message: format!("invalid offset {:?}: {e}", data.trim()),
                path,
            })
    }

    /// Overwrites the stored value via a temp file and rename, so a reader
    /// sees either the old number or the new one.
    pub fn write_watermark(&self, location: &str, category: &str, value: i64) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.path_for(location, category);
        let write_err = |source: std::io::Error| ScraperError::StorageWrite {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let mut temp_path = path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);
        let mut file = File::create(&temp_path).map_err(write_err)?;
        file.write_all(value.to_string().as_bytes())
            .map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        fs::rename(&temp_path, &path).map_err(write_err)?;

        debug!(path = %path.display(), value, "stored offset");
        Ok(())
    }
}
