//! In-memory tree of matching files

use std::collections::BTreeMap;

/// One entry in a directory: either a nested directory or a matching file.
///
/// A file's name is its key in the parent's children map, so the leaf carries
/// no data of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File,
    Dir(DirNode),
}

impl TreeNode {
    /// Turn this entry into a directory if it is not one already.
    fn make_dir(&mut self) -> &mut DirNode {
        if let TreeNode::File = self {
            *self = TreeNode::Dir(DirNode::default());
        }
        match self {
            TreeNode::Dir(dir) => dir,
            TreeNode::File => unreachable!("entry was converted to a directory"),
        }
    }
}

/// Contents of one directory, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirNode {
    children: BTreeMap<String, TreeNode>,
}

impl DirNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk down the chain of child directories named by `segments`,
    /// creating any that are missing, and return the last one.
    ///
    /// An empty chain returns `self`.
    pub fn dir_at<I, S>(&mut self, segments: I) -> &mut DirNode
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self;
        for segment in segments {
            node = node
                .children
                .entry(segment.into())
                .or_insert_with(|| TreeNode::Dir(DirNode::default()))
                .make_dir();
        }
        node
    }

    /// Record a matching file directly inside this directory.
    /// A directory of the same name takes precedence.
    pub fn insert_file(&mut self, name: impl Into<String>) {
        self.children.entry(name.into()).or_insert(TreeNode::File);
    }

    /// Children in ascending name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn get_dir(&self, name: &str) -> Option<&DirNode> {
        match self.children.get(name) {
            Some(TreeNode::Dir(dir)) => Some(dir),
            _ => None,
        }
    }

    pub fn contains_file(&self, name: &str) -> bool {
        matches!(self.children.get(name), Some(TreeNode::File))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of directories below this one, at any depth.
    pub fn dir_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TreeNode::Dir(dir) => 1 + dir.dir_count(),
                TreeNode::File => 0,
            })
            .sum()
    }

    /// Number of files below this one, at any depth.
    pub fn file_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TreeNode::Dir(dir) => dir.file_count(),
                TreeNode::File => 1,
            })
            .sum()
    }
}
