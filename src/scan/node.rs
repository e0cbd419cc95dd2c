//! In-memory hierarchy captured by `TreeWalker`

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
        /// Set when the directory could not be listed.
        error: Option<String>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Directories and files below this node, not counting the node itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| match child {
                TreeNode::File { .. } => (dirs, files + 1),
                TreeNode::Dir { .. } => {
                    let (d, f) = child.counts();
                    (dirs + 1 + d, files + f)
                }
            })
    }
}
