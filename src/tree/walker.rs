//! TreeWalker - collects matching files into a `DirNode`

use std::io;
use std::path::{Component, Path};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use super::config::WalkerConfig;
use super::node::DirNode;

/// Walks a directory tree and builds the in-memory tree of matching files.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return the tree of directories and recognized files.
    ///
    /// Any error reading the tree (missing root, unreadable directory) aborts
    /// the walk.
    pub fn walk(&self, root: &Path) -> io::Result<DirNode> {
        debug!(root = %root.display(), "scanning");

        let config = self.config.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| !is_pruned(entry, &config))
            .build();

        let mut tree = DirNode::new();
        for result in walker {
            let entry = result.map_err(io::Error::other)?;
            if entry.depth() == 0 {
                continue;
            }

            let relative = entry.path().strip_prefix(root).map_err(io::Error::other)?;
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());

            if is_dir {
                tree.dir_at(segments(relative));
            } else if is_dir_symlink(&entry) {
                debug!(link = %relative.display(), "skipping symlinked directory");
            } else if self.is_recognized(entry.path()) {
                trace!(file = %relative.display(), "matched");
                let Some(name) = relative.file_name() else {
                    continue;
                };
                let parent = relative.parent().unwrap_or(Path::new(""));
                tree.dir_at(segments(parent))
                    .insert_file(name.to_string_lossy());
            }
        }

        Ok(tree)
    }

    fn is_recognized(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.is_recognized_extension(ext))
    }
}

/// Check whether a directory entry should be pruned before descending into it.
/// The walk root is never pruned.
fn is_pruned(entry: &DirEntry, config: &WalkerConfig) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }
    let pruned = config.is_excluded_dir(&entry.file_name().to_string_lossy());
    if pruned {
        debug!(dir = %entry.path().display(), "skipping excluded directory");
    }
    pruned
}

/// Links are not followed, but a link to a directory is never listed as a file.
fn is_dir_symlink(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && entry.path().is_dir()
}

/// Split a root-relative path into its name segments.
fn segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}
