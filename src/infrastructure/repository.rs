//! File system repository for generated content

use crate::error::{Result, SeedError};
use std::fs::{self, DirBuilder, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Destination for rendered articles
pub trait ContentRepository {
    /// Directory the articles are written to
    fn root(&self) -> &Path;

    /// Remove the directory with all its contents and create it empty
    fn reset(&self) -> Result<()>;

    /// Create or truncate `<root>/<filename>` and write `content` as its entire contents
    fn write_article(&self, filename: &str, content: &str) -> Result<()>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository writing into `root`
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    fn reset_error(&self, source: std::io::Error) -> SeedError {
        SeedError::ResetDirectory {
            path: self.root.clone(),
            source,
        }
    }
}

impl ContentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn reset(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(self.reset_error(e)),
        }

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o777);
        }
        builder
            .create(&self.root)
            .map_err(|e| self.reset_error(e))
    }

    fn write_article(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.root.join(filename);
        let write = |path: &Path| -> std::io::Result<()> {
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            // Surface deferred write errors before the handle is closed
            file.sync_all()
        };
        write(&path).map_err(|source| SeedError::WriteArticle { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("content").join("learning");
        let repo = FileSystemRepository::new(root.clone());

        repo.reset().unwrap();

        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_removes_previous_contents() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("learning");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("stale.md"), "old").unwrap();
        fs::write(root.join("nested").join("deep.md"), "old").unwrap();

        let repo = FileSystemRepository::new(root.clone());
        repo.reset().unwrap();

        assert!(root.is_dir());
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("content");
        fs::write(&blocker, "not a directory").unwrap();

        let repo = FileSystemRepository::new(blocker.join("learning"));
        match repo.reset() {
            Err(SeedError::ResetDirectory { path, .. }) => {
                assert_eq!(path, blocker.join("learning"))
            }
            other => panic!("Expected ResetDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_article_overwrites() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.write_article("learning-0.md", "first version").unwrap();
        repo.write_article("learning-0.md", "second").unwrap();

        let content = fs::read_to_string(temp.path().join("learning-0.md")).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_write_article_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().join("missing"));

        match repo.write_article("learning-0.md", "text") {
            Err(SeedError::WriteArticle { path, source }) => {
                assert_eq!(path, temp.path().join("missing").join("learning-0.md"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected WriteArticle error, got {:?}", other),
        }
    }
}
