//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::TreeNode;

/// Write tree node as pretty-printed JSON, followed by a newline.
pub fn write_json<W: Write>(out: &mut W, node: &TreeNode) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, node)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> Result<()> {
    write_json(&mut io::stdout().lock(), node)
}
