// ABOUTME: Shared types and configuration for split-panel.
// ABOUTME: Defines dimensions, cursor policy, style fragments, and config file handling.

pub mod color;
pub mod config;
pub mod cursor;
pub mod dimension;
pub mod style;

pub use color::Color;
pub use config::{ConfigError, Primary, SplitConfig};
pub use cursor::{resizer_cursor, CursorAffordance, Platform};
pub use dimension::{convert_dimension, Dimension};
pub use style::{Align, FlexDirection, PointerEvents, Style, UserSelect};
