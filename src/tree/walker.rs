//! TreeWalker - builds full tree in memory for JSON output

use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::config::WalkerConfig;
use super::entry::{DirEntryInfo, read_entries};
use super::json_types::TreeNode;

/// Tree walker that builds the full tree in memory.
/// Required for JSON output serialization.
/// For console output, use StreamingWalker instead.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Build the tree rooted at `root`. Unlike the streaming walker, the root
    /// is part of the result, named by its base name or the path as given.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());

        debug!(root = %root.display(), include_files = self.config.include_files, "building tree");

        Ok(TreeNode::Dir {
            name,
            path: root.to_path_buf(),
            children: self.walk_children(root)?,
        })
    }

    fn walk_children(&self, path: &Path) -> Result<Vec<TreeNode>> {
        read_entries(path, &self.config)?
            .into_iter()
            .map(|entry| self.walk_entry(entry))
            .collect()
    }

    fn walk_entry(&self, entry: DirEntryInfo) -> Result<TreeNode> {
        if entry.is_dir {
            let children = self.walk_children(&entry.path)?;
            Ok(TreeNode::Dir {
                name: entry.name,
                path: entry.path,
                children,
            })
        } else {
            Ok(TreeNode::File {
                name: entry.name,
                path: entry.path,
                size: entry.size,
            })
        }
    }
}
