//! Configuration types for the tree walker

/// Directory names pruned at every depth. Their contents are never read.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".expo",
    ".next",
    "dist",
    "build",
    "coverage",
    "__pycache__",
];

/// File extensions (without the dot) that qualify a file for the tree.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directory names skipped along with everything below them
    pub excluded_dirs: Vec<String>,
    /// Case-sensitive extensions of files to collect
    pub extensions: Vec<String>,
}

impl WalkerConfig {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    pub fn is_recognized_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
