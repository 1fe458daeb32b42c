// ABOUTME: Two-pane split container for the split-panel widget.
// ABOUTME: Implements divider dragging, size clamping/stepping, and pane composition.

mod geometry;
mod panel;
mod resizer;
mod view;

pub use geometry::{Axis, LayoutRect, PaneRects};
pub use panel::{DragSession, LayoutCallback, PointerEvent, ResizeCallback, SplitPanel};
pub use resizer::{DefaultResizer, Resizer, ResizerProps};
pub use view::{LayoutTarget, ViewNode};
