// ABOUTME: Error type for structural operations on split panes.
// ABOUTME: Index errors are reported before any mutation takes place.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("Pane index {index} out of range for {count} panes")]
    InvalidPaneIndex { index: usize, count: usize },

    #[error("Divider index {index} out of range for {count} dividers")]
    InvalidDividerIndex { index: usize, count: usize },
}
