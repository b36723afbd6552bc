//! Component source backed by a local checkout.
//!
//! Components live at `root/<pattern>` with `{componentName}` substituted.
//! Directories are walked single-threaded so ignore rules apply in order;
//! files are then read in parallel.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;
use tokenbridge_core::config::ScanConfig;
use tokenbridge_core::constants::COMPONENT_PLACEHOLDER;
use tokenbridge_core::errors::{BatchResult, SourceError};
use tokenbridge_core::ComponentFile;

use super::ignores::IgnorePatterns;
use super::ComponentSource;

/// Reads components from a directory tree.
pub struct LocalComponentSource {
    root: PathBuf,
    pattern: String,
    source_extensions: Vec<String>,
    max_file_size: u64,
    follow_symlinks: bool,
    ignores: IgnorePatterns,
}

impl LocalComponentSource {
    pub fn new(root: impl Into<PathBuf>, config: &ScanConfig) -> Result<Self, SourceError> {
        let root = root.into();
        let pattern = config.effective_component_pattern().trim_matches('/').to_string();
        if !pattern.contains(COMPONENT_PLACEHOLDER) {
            return Err(SourceError::InvalidPattern {
                pattern,
                message: format!("must contain {COMPONENT_PLACEHOLDER}"),
            });
        }
        config
            .ignore_patterns()
            .map_err(|e| SourceError::InvalidPattern {
                pattern: config.extra_ignore.join(", "),
                message: e.to_string(),
            })?;

        let threads = config.effective_threads();
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }

        Ok(Self {
            ignores: IgnorePatterns::new(&root, &config.extra_ignore),
            root,
            pattern,
            source_extensions: config.effective_source_extensions(),
            max_file_size: config.effective_max_file_size(),
            follow_symlinks: config.effective_follow_symlinks(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all components: the pattern up to the placeholder.
    pub fn components_dir(&self) -> PathBuf {
        let prefix = self
            .pattern
            .split(COMPONENT_PLACEHOLDER)
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        self.root.join(prefix)
    }

    /// Directory of one component.
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.root.join(self.pattern.replace(COMPONENT_PLACEHOLDER, name))
    }

    fn relative_to_root<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .is_some_and(|e| self.source_extensions.contains(&e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        if self.follow_symlinks {
            path.is_dir()
        } else {
            fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        if self.follow_symlinks {
            path.is_file()
        } else {
            fs::symlink_metadata(path).is_ok_and(|m| m.is_file())
        }
    }

    /// Recursively collect candidate files under `dir`.
    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "cannot read directory");
                return;
            }
        };
        let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            let relative = self.relative_to_root(&path);
            if self.is_dir(&path) {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files);
                }
            } else if self.is_file(&path)
                && !self.ignores.is_ignored(relative, false)
                && self.has_source_extension(&path)
            {
                files.push(path);
            }
        }
    }

    fn read_file(&self, base: &Path, path: &Path) -> Result<ComponentFile, SourceError> {
        let io_err = |source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_file_size {
            return Err(SourceError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max: self.max_file_size,
            });
        }
        let bytes = fs::read(path).map_err(io_err)?;
        let content = String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = path
            .strip_prefix(base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        Ok(ComponentFile::new(name, relative, content))
    }
}

impl ComponentSource for LocalComponentSource {
    fn list_components(&self) -> Result<Vec<String>, SourceError> {
        let dir = self.components_dir();
        let entries = fs::read_dir(&dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::ComponentDirMissing { path: dir.clone() },
            _ => SourceError::Io {
                path: dir.clone(),
                source: e,
            },
        })?;
        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| self.is_dir(p))
            .filter(|p| !self.ignores.is_ignored(self.relative_to_root(p), true))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn component_files(&self, name: &str) -> Result<BatchResult<Vec<ComponentFile>>, SourceError> {
        let base = self.component_dir(name);
        if !base.is_dir() {
            return Err(SourceError::ComponentDirMissing { path: base });
        }

        let mut paths = Vec::new();
        self.walk_dir(&base, &mut paths);

        let errors: Mutex<Vec<SourceError>> = Mutex::new(Vec::new());
        let files: Vec<ComponentFile> = paths
            .par_iter()
            .filter_map(|path| match self.read_file(&base, path) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping file");
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(e);
                    }
                    None
                }
            })
            .collect();

        let mut batch = BatchResult::new(files);
        for e in errors.into_inner().unwrap_or_default() {
            batch.add_error(e);
        }
        tracing::info!(
            component = name,
            files = batch.data.len(),
            errors = batch.error_count(),
            "read component"
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_from_pattern() {
        let config = ScanConfig {
            component_pattern: Some("packages/ui/{componentName}/src".to_string()),
            ..Default::default()
        };
        let source = LocalComponentSource::new("/repo", &config).unwrap();
        assert_eq!(source.components_dir(), PathBuf::from("/repo/packages/ui"));
        assert_eq!(source.component_dir("Card"), PathBuf::from("/repo/packages/ui/Card/src"));
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        let config = ScanConfig {
            component_pattern: Some("src/components".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            LocalComponentSource::new("/repo", &config),
            Err(SourceError::InvalidPattern { .. })
        ));
    }
}
