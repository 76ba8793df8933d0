//! Tree formatter for the rendered structure file

use std::path::Path;

use crate::tree::{DirNode, TreeNode};

/// Prefix added once per depth level.
const INDENT: &str = "    ";
const FILE_CONNECTOR: &str = "|-- ";
const DIR_CONNECTOR: &str = "+-- ";

/// Formats a `DirNode` as indented lines with ASCII connectors.
#[derive(Debug, Default)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the children of `node`, with top-level entries at `depth`.
    pub fn render_node(&self, node: &DirNode, depth: usize) -> Vec<String> {
        let mut lines = Vec::new();
        self.push_children(node, depth, &mut lines);
        lines
    }

    /// Render a whole tree, starting with a header line for the root.
    pub fn render_tree(&self, root: &Path, node: &DirNode) -> Vec<String> {
        let mut lines = vec![root_label(root)];
        self.push_children(node, 0, &mut lines);
        lines
    }

    /// Render a whole tree as newline-separated text.
    pub fn format(&self, root: &Path, node: &DirNode) -> String {
        self.render_tree(root, node).join("\n")
    }

    fn push_children(&self, node: &DirNode, depth: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        for (name, child) in node.children() {
            match child {
                TreeNode::File => {
                    lines.push(format!("{}{}{}", indent, FILE_CONNECTOR, name));
                }
                TreeNode::Dir(dir) => {
                    lines.push(format!("{}{}{}/", indent, DIR_CONNECTOR, name));
                    self.push_children(dir, depth + 1, lines);
                }
            }
        }
    }
}

/// Header line naming the root directory.
pub fn root_label(root: &Path) -> String {
    let name = root
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());
    if name.ends_with('/') {
        name
    } else {
        format!("{}/", name)
    }
}
