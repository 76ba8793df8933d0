//! Output configuration types

/// Name of the file written at the scanned root.
pub const DEFAULT_OUTPUT_FILE: &str = "project_structure.txt";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// File name, relative to the scanned root, that receives the rendered tree
    pub file_name: String,
    /// Color the console confirmation line
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
            use_color: false,
        }
    }
}
