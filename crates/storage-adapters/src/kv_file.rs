//! File-backed implementation of `KvStore`: one file per key under a data
//! directory. Writes land in a temp file first and are moved into place
//! with a rename, which gives us the single-key atomic replace the
//! repository relies on.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use domains::traits::KvStore;
use tracing::debug;

pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Opens (creating if needed) the data directory.
    pub fn open(root: impl AsRef<Path>) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating data directory {}", root.display()))?;
        debug!(root = %root.display(), "file store opened");
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading key {key}")),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let target = self.path_for(key);
        let staging = self.root.join(format!(".{key}.tmp"));
        fs::write(&staging, value).with_context(|| format!("staging key {key}"))?;
        fs::rename(&staging, &target).with_context(|| format!("replacing key {key}"))?;
        Ok(())
    }
}
