// File system module: reads and writes under the Minecraft install root, locally or over FTP

use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod ftp;

pub use ftp::{FtpArgs, FtpFileSystem};

/// The handful of file operations the installer needs.
///
/// Paths are relative to the install root and use `/` separators.
pub trait FileSystem: Send + Sync {
    /// Write the bytes to the path, creating parent directories as needed
    fn write_file(&self, rel_path: &str, data: &[u8]) -> anyhow::Result<()>;

    /// Read the path; `None` if it does not exist
    fn read_file(&self, rel_path: &str) -> anyhow::Result<Option<Vec<u8>>>;

    fn mkdir_all(&self, rel_path: &str) -> anyhow::Result<()>;

    fn close(&self);
}

/// Local disk rooted at the Minecraft install path
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, rel_path: &str) -> PathBuf {
        self.root.join(Path::new(rel_path))
    }
}

impl FileSystem for LocalFileSystem {
    fn write_file(&self, rel_path: &str, data: &[u8]) -> anyhow::Result<()> {
        let path = self.full_path(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))
    }

    fn read_file(&self, rel_path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.full_path(rel_path);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn mkdir_all(&self, rel_path: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.full_path(rel_path))?;
        Ok(())
    }

    fn close(&self) {}
}

/// Open an FTP file system when FTP details are given, otherwise the local install root
pub fn open_filesystem(
    install_path: &Path,
    ftp_args: Option<&FtpArgs>,
) -> anyhow::Result<Box<dyn FileSystem>> {
    match ftp_args {
        Some(args) => Ok(Box::new(FtpFileSystem::connect(args)?)),
        None => Ok(Box::new(LocalFileSystem::new(install_path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::new(temp_dir.path());

        fs.write_file("mods/deep/file.jar", b"jar bytes").unwrap();

        let written = std::fs::read(temp_dir.path().join("mods/deep/file.jar")).unwrap();
        assert_eq!(written, b"jar bytes");
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::new(temp_dir.path());

        assert!(fs.read_file("mods/missing.json").unwrap().is_none());
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::new(temp_dir.path());
        fs.write_file("a.txt", b"abc").unwrap();

        assert_eq!(fs.read_file("a.txt").unwrap(), Some(b"abc".to_vec()));
    }

    #[test]
    fn test_mkdir_all() {
        let temp_dir = TempDir::new().unwrap();
        let fs = LocalFileSystem::new(temp_dir.path());

        fs.mkdir_all("mods/a/b").unwrap();
        assert!(temp_dir.path().join("mods/a/b").is_dir());
    }

    #[test]
    fn test_open_filesystem_defaults_to_local() {
        let temp_dir = TempDir::new().unwrap();
        let fs = open_filesystem(temp_dir.path(), None).unwrap();

        fs.write_file("mods/x.jar", b"x").unwrap();
        assert!(temp_dir.path().join("mods/x.jar").exists());
    }
}
