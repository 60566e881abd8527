//! JSON serialization types for tree output

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Serialize a path the way names are displayed, replacing invalid UTF-8
/// instead of failing.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// TreeNode for JSON output - builds full tree in memory.
/// For plain text output, use StreamingWalker instead.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        size: u64,
    },
    Dir {
        name: String,
        #[serde(serialize_with = "serialize_path_lossy")]
        path: PathBuf,
        children: Vec<TreeNode>,
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

    /// Children of a directory node; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }
}
