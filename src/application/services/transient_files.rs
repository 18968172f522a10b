use std::io;
use std::path::{Path, PathBuf};

/// Owns files a podcast run creates along the way and deletes whatever is
/// still tracked when dropped, including on early error returns.
#[derive(Debug, Default)]
pub struct TransientFiles {
    paths: Vec<PathBuf>,
}

impl TransientFiles {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Stops tracking `path` so it survives the drop.
    pub fn keep(&mut self, path: &Path) {
        self.paths.retain(|p| p != path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Drop for TransientFiles {
    fn drop(&mut self) {
        // Synchronous removal on the calling task: at most one small file per
        // script line plus the output, and callers rely on the files being
        // gone once the request returns.
        for path in &self.paths {
            match std::fs::remove_file(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "Removed transient file"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove transient file")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_tracked_files_on_drop() {
        let dir = tempfile::TempDir::new().unwrap();
        let a = dir.path().join("a.mp3");
        let b = dir.path().join("b.mp3");
        std::fs::write(&a, b"a").unwrap();
        std::fs::write(&b, b"b").unwrap();

        {
            let mut files = TransientFiles::new(vec![a.clone()]);
            files.track(b.clone());
            files.keep(&b);
        }

        assert!(!a.exists());
        assert!(b.exists());
    }

    #[test]
    fn ignores_paths_that_were_never_created() {
        let dir = tempfile::TempDir::new().unwrap();
        let files = TransientFiles::new(vec![dir.path().join("missing.mp3")]);
        drop(files);
    }
}
