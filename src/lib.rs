//! Sapling - writes the TypeScript source tree of a project to a text file

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{
    DEFAULT_OUTPUT_FILE, OutputConfig, TreeFormatter, confirmation_message, print_confirmation,
    should_use_color, write_output,
};
pub use tree::{DirNode, TreeNode, TreeWalker, WalkerConfig};
