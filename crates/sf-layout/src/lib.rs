// ABOUTME: Split pane layout engine for splitframe.
// ABOUTME: Panes separated by draggable dividers, and a nine-region compass frame built from them.

mod border;
mod component;
mod divider;
mod error;
mod split_pane;
mod splitter_layout;

#[cfg(test)]
mod test_support;

pub use border::{BorderSplitPane, Level, Region, Row};
pub use component::{Component, ComponentId, Orientable};
pub use divider::{Divider, DragState, QuickHide};
pub use error::SplitError;
pub use split_pane::{MultipleSplitPane, Pane};
pub use splitter_layout::{Arrangement, ChildIndex, Section, SplitterLayout};
