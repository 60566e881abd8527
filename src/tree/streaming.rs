//! StreamingWalker - streams output without building the tree in memory

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::output::child_prefix;

use super::config::WalkerConfig;
use super::entry::{DirEntryInfo, read_entries};

/// Callback for streaming output - receives each entry in pre-order.
pub trait StreamingOutput {
    /// Emit one entry. `prefix` is the indentation accumulated from its
    /// ancestors; `is_last` tells whether more siblings follow.
    fn output_node(&mut self, entry: &DirEntryInfo, is_last: bool, prefix: &str)
    -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Streaming tree walker that outputs directly without building the tree in memory.
/// Uses O(depth) memory for the traversal state.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` depth-first and stream every descendant to `output`.
    ///
    /// The root itself is not emitted. The first directory that cannot be
    /// listed aborts the walk; whatever was already written stays written.
    pub fn walk_streaming<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<()> {
        debug!(root = %root.display(), include_files = self.config.include_files, "walking");
        self.walk_dir_streaming(root, "", output)?;
        output.finish()?;
        Ok(())
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<()> {
        let entries = read_entries(path, &self.config)?;
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            output.output_node(entry, is_last, prefix)?;

            if entry.is_dir {
                let new_prefix = child_prefix(prefix, is_last);
                self.walk_dir_streaming(&entry.path, &new_prefix, output)?;
            }
        }

        Ok(())
    }
}
