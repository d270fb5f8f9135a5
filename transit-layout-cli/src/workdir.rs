//! A working directory for the solver's `problem.lp`/`solution.sol`
//! files: either a caller-supplied directory that outlives the run, or
//! a temporary one cleaned up automatically.
//!
//! Grounded in `transit_map_generator/transit_map.py`'s `transit_map()`,
//! which calls `tempfile.mkdtemp()` when no `work_dir` is supplied.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Owns the directory the solver reads/writes in. Dropping a
/// caller-supplied directory leaves it on disk; dropping a generated one
/// removes it.
pub enum ScopedWorkDir {
    /// A directory the caller asked us to use and keep.
    Borrowed(PathBuf),
    /// A directory we created and will remove on drop.
    Owned(tempfile::TempDir),
}

impl ScopedWorkDir {
    /// Use `path` if given, otherwise create a fresh temporary directory.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                std::fs::create_dir_all(&path)
                    .with_context(|| format!("creating work dir {}", path.display()))?;
                Ok(ScopedWorkDir::Borrowed(path))
            }
            None => {
                let dir = tempfile::tempdir().context("creating temporary work dir")?;
                Ok(ScopedWorkDir::Owned(dir))
            }
        }
    }

    /// The directory's path.
    pub fn path(&self) -> &Path {
        match self {
            ScopedWorkDir::Borrowed(path) => path,
            ScopedWorkDir::Owned(dir) => dir.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_dir_exists_while_held_and_is_removed_on_drop() {
        let path;
        {
            let work_dir = ScopedWorkDir::new(None).unwrap();
            path = work_dir.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn borrowed_dir_survives_drop() {
        let parent = tempfile::tempdir().unwrap();
        let target = parent.path().join("kept");
        {
            let work_dir = ScopedWorkDir::new(Some(target.clone())).unwrap();
            assert_eq!(work_dir.path(), target);
        }
        assert!(target.exists());
    }
}
