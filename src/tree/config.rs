//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
///
/// The same configuration applies at every depth of one walk, so a file is
/// either visible everywhere in the tree or nowhere.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// List non-directory entries alongside directories
    pub include_files: bool,
}

impl WalkerConfig {
    pub fn with_files() -> Self {
        Self {
            include_files: true,
        }
    }

    pub fn dirs_only() -> Self {
        Self::default()
    }
}
