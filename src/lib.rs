//! dirtree - print a directory's structure as a tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter, print_json, render, write_json};
pub use tree::{DirEntryInfo, StreamingOutput, StreamingWalker, TreeNode, TreeWalker, WalkerConfig};
