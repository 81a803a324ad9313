use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 先寫入暫存檔再改名，失敗時不會留下截斷的輸出
        let staging = staging_path(&full_path);
        if let Err(e) = fs::write(&staging, data).and_then(|_| fs::rename(&staging, &full_path)) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path.display().to_string())
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let written = storage.write_file("data/tagger_regs.hjson", b"{}\n").unwrap();

        let target = temp_dir.path().join("data/tagger_regs.hjson");
        assert_eq!(written, target.display().to_string());
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}\n");
        assert!(!temp_dir.path().join("data/tagger_regs.hjson.tmp").exists());
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("out.hjson", b"old content that is longer").unwrap();
        storage.write_file("out.hjson", b"new").unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("out.hjson")).unwrap(),
            "new"
        );
    }
}
