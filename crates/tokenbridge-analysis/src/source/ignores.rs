//! Default ignore patterns for front-end component trees.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories never descended into.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    ".pnpm",
    ".yarn",
    "bower_components",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Build outputs
    "dist",
    "build",
    "out",
    "storybook-static",
    // Framework caches
    ".cache",
    ".next",
    ".nuxt",
    ".turbo",
    ".vercel",
    ".parcel-cache",
    // Testing
    "coverage",
    "__snapshots__",
    // Temp
    "tmp",
    "temp",
];

/// Files that are generated or not worth reading.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    "*.d.ts",
    "*.min.js",
    "*.map",
    "*.generated.*",
    "*.snap",
];

/// Gitignore-style matcher built from the defaults, configured patterns,
/// and the root's `.gitignore` / `.tokenbridgeignore`.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid ignore pattern");
            }
        }
        for file in [".tokenbridgeignore", ".gitignore"] {
            let path = root.join(file);
            if path.exists() {
                if let Some(e) = builder.add(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not read ignore file");
                }
            }
        }
        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to empty ignore set");
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// `path` is relative to the root the patterns were built for.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ignore_node_modules() {
        let patterns = IgnorePatterns::new(&PathBuf::from("/project"), &[]);
        assert!(patterns.is_ignored(Path::new("node_modules"), true));
        assert!(patterns.is_ignored(Path::new("src/.next"), true));
    }

    #[test]
    fn test_ignore_generated_files() {
        let patterns = IgnorePatterns::new(&PathBuf::from("/project"), &[]);
        assert!(patterns.is_ignored(Path::new("Button.d.ts"), false));
        assert!(!patterns.is_ignored(Path::new("Button.tsx"), false));
    }

    #[test]
    fn test_extra_patterns() {
        let patterns = IgnorePatterns::new(&PathBuf::from("/project"), &["*.stories.tsx".to_string()]);
        assert!(patterns.is_ignored(Path::new("Button.stories.tsx"), false));
    }
}
