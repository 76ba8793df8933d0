//! Directory tree walking logic
//!
//! `TreeWalker` visits a root directory, prunes excluded directories at every
//! level and gathers files with recognized extensions into a `DirNode`.

mod config;
mod node;
mod walker;

pub use config::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS, WalkerConfig};
pub use node::{DirNode, TreeNode};
pub use walker::TreeWalker;
