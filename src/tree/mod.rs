//! Directory tree walking logic
//!
//! This module provides tree walking capabilities for displaying directory structures.
//! It supports two main modes:
//!
//! - `StreamingWalker`: Streams entries directly to an output, uses O(depth) memory
//! - `TreeWalker`: Builds the full tree in memory, required for JSON output

mod config;
mod entry;
mod json_types;
mod streaming;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirEntryInfo, read_entries};
pub use json_types::TreeNode;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use walker::TreeWalker;
