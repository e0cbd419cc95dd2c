//! TreeWalker - captures the directory hierarchy for tree rendering
//!
//! Unlike `Scanner`, the walker ignores every record filter: it shows the
//! whole hierarchy down to the depth bound.

use std::path::{Path, PathBuf};

use super::config::ScanConfig;
use super::node::TreeNode;
use super::utils::{display_name, read_sorted_entries};

pub struct TreeWalker {
    root: PathBuf,
    max_depth: Option<usize>,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>, max_depth: Option<usize>) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.root.clone(), config.max_depth)
    }

    pub fn walk(&self) -> TreeNode {
        self.walk_dir(&self.root, 0)
    }

    fn walk_dir(&self, path: &Path, depth: usize) -> TreeNode {
        let name = display_name(path);
        let entries = match read_sorted_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("cannot list '{}' for tree: {}", path.display(), e);
                return TreeNode::Dir {
                    name,
                    path: path.to_path_buf(),
                    children: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };

        let can_descend = self.max_depth.is_none_or(|max| depth < max);
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        // Entries arrive sorted by name; partitioning keeps that order
        for entry in entries {
            let entry_path = entry.path();
            let is_real_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_real_dir && can_descend {
                dirs.push(self.walk_dir(&entry_path, depth + 1));
            } else if entry_path.is_dir() {
                // Depth-limited, or a symlink we do not follow
                dirs.push(TreeNode::Dir {
                    name: display_name(&entry_path),
                    path: entry_path,
                    children: Vec::new(),
                    error: None,
                });
            } else {
                files.push(TreeNode::File {
                    name: display_name(&entry_path),
                    path: entry_path,
                });
            }
        }

        dirs.extend(files);
        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children: dirs,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn child_names(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_directories_before_files_each_sorted() {
        let tree = TestTree::new();
        tree.add_file("b.txt", "");
        tree.add_file("a.txt", "");
        tree.add_file("zeta/x.txt", "");
        tree.add_file("alpha/y.txt", "");
        tree.add_file("Upper.txt", "");

        let node = TreeWalker::new(tree.path(), None).walk();
        assert_eq!(
            child_names(&node),
            vec!["alpha", "zeta", "Upper.txt", "a.txt", "b.txt"]
        );
        assert_eq!(node.counts(), (2, 5));
    }

    #[test]
    fn test_depth_bound_leaves_directories_unexpanded() {
        let tree = TestTree::new();
        tree.add_file("l1/l2/deep.txt", "");
        tree.add_file("l1/mid.txt", "");

        let node = TreeWalker::new(tree.path(), Some(0)).walk();
        let l1 = &node.children()[0];
        assert_eq!(l1.name(), "l1");
        assert!(l1.children().is_empty());

        let node = TreeWalker::new(tree.path(), Some(1)).walk();
        let l1 = &node.children()[0];
        assert_eq!(child_names(l1), vec!["l2", "mid.txt"]);
        assert!(l1.children()[0].children().is_empty());
    }

    #[test]
    fn test_unreadable_root_marks_error() {
        let tree = TestTree::new();
        let node = TreeWalker::new(tree.path().join("missing"), None).walk();
        match node {
            TreeNode::Dir { error, children, .. } => {
                assert!(error.is_some());
                assert!(children.is_empty());
            }
            TreeNode::File { .. } => panic!("expected a directory node"),
        }
    }
}
