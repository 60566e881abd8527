//! Tree formatting and display
//!
//! This module provides formatters for outputting tree structures:
//! - Plain or colored text, streamed line by line
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, child prefixes, size annotations
//! - `streaming` - Streaming formatter for text output
//! - `json` - JSON output

mod config;
mod json;
mod streaming;
mod utils;

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::tree::{StreamingWalker, WalkerConfig};

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use streaming::StreamingFormatter;
pub use utils::{BRANCH, LAST_BRANCH, child_prefix, connector, size_suffix};

/// Render the tree under `root` as plain text into `output`.
///
/// Only the root's descendants are listed, one line each, depth-first with
/// siblings sorted by name. With `include_files` unset, non-directories are
/// left out entirely. The first unreadable directory aborts the render with
/// `TreeError::Read`; lines already written are not retracted.
pub fn render<W: Write>(output: &mut W, root: &Path, include_files: bool) -> Result<()> {
    let walker = StreamingWalker::new(WalkerConfig { include_files });
    let mut formatter = StreamingFormatter::plain(output);
    walker.walk_streaming(root, &mut formatter)
}
