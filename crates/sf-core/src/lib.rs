// ABOUTME: Shared types and configuration for splitframe.
// ABOUTME: Defines pixel geometry, orientation, size specs and config file handling.

pub mod config;
pub mod geometry;
pub mod orientation;
pub mod size_spec;

pub use config::{ConfigError, FrameConfig, DEFAULT_DIVIDER_THICKNESS};
pub use geometry::{Insets, Point, Rect, Size};
pub use orientation::Orientation;
pub use size_spec::{ParseSizeSpecError, SizeSpec};
