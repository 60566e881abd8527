//! Shared utility functions for output formatting

/// Connector drawn before an entry that has further siblings.
pub const BRANCH: &str = "├───";
/// Connector drawn before the last entry of a listing.
pub const LAST_BRANCH: &str = "└───";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for a directory's children.
/// A last sibling's subtree is indented without the vertical bar.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}\t", prefix)
    } else {
        format!("{}│\t", prefix)
    }
}

/// Size annotation appended to non-directory entries.
pub fn size_suffix(size: u64) -> String {
    if size == 0 {
        " (empty)".to_string()
    } else {
        format!(" ({}b)", size)
    }
}
