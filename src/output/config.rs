//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Highlight directory names and size suffixes. Off by default so the
    /// stream is plain text.
    pub use_color: bool,
}
