// ABOUTME: Bridges winit window events to a split panel.
// ABOUTME: Measures the window, hit-tests the divider, and picks the cursor icon.

use split_core::CursorAffordance;
use split_layout::{Axis, LayoutRect, PaneRects, PointerEvent, SplitPanel};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::window::CursorIcon;

/// Divider footprint along the resize axis: a 12px grip plus 4px padding each side
pub const DIVIDER_THICKNESS: f64 = 20.0;

pub fn cursor_icon(affordance: CursorAffordance) -> CursorIcon {
    match affordance {
        CursorAffordance::Auto => CursorIcon::Default,
        CursorAffordance::NotAllowed => CursorIcon::NotAllowed,
        CursorAffordance::ColResize => CursorIcon::ColResize,
        CursorAffordance::RowResize => CursorIcon::RowResize,
    }
}

pub struct PanelHost {
    panel: SplitPanel,
    bounds: LayoutRect,
    pointer: (f64, f64),
}

impl PanelHost {
    pub fn new(panel: SplitPanel) -> Self {
        Self {
            panel,
            bounds: LayoutRect::default(),
            pointer: (0.0, 0.0),
        }
    }

    pub fn panel(&self) -> &SplitPanel {
        &self.panel
    }

    pub fn pane_rects(&self) -> PaneRects {
        self.panel.pane_rects(self.bounds)
    }

    /// The window is the container. The divider is measured before the
    /// container so the first measurement already excludes it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = LayoutRect::new(0.0, 0.0, width, height);
        let provisional = match self.panel.axis() {
            Axis::Horizontal => LayoutRect::new(0.0, 0.0, DIVIDER_THICKNESS, height),
            Axis::Vertical => LayoutRect::new(0.0, 0.0, width, DIVIDER_THICKNESS),
        };
        self.panel.on_resizer_layout(provisional);
        self.panel.on_container_layout(self.bounds);
        self.remeasure_divider();
    }

    fn remeasure_divider(&mut self) {
        let rects = self.pane_rects();
        self.panel.on_resizer_layout(rects.resizer);
    }

    fn event(&self) -> PointerEvent {
        PointerEvent::new(self.pointer.0, self.pointer.1)
    }

    pub fn over_divider(&self) -> bool {
        self.pane_rects().resizer.contains(self.pointer.0, self.pointer.1)
    }

    /// Returns whether the pane size changed.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.pointer = (x, y);
        if !self.panel.is_dragging() {
            return false;
        }

        let before = self.panel.pane_size();
        self.panel.responder_move(&self.event());
        let changed = self.panel.pane_size() != before;
        if changed {
            self.remeasure_divider();
        }
        changed
    }

    /// Returns whether a drag started or ended.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        if button != MouseButton::Left {
            return false;
        }

        let event = self.event();
        match state {
            ElementState::Pressed => {
                if !self.over_divider() || !self.panel.should_set_responder() {
                    return false;
                }
                self.panel.responder_grant(&event)
            }
            ElementState::Released => {
                if !self.panel.is_dragging() {
                    return false;
                }
                self.panel.responder_release(&event);
                true
            }
        }
    }

    /// Losing focus mid-drag ends the drag.
    pub fn focus_lost(&mut self) -> bool {
        if !self.panel.is_dragging() {
            return false;
        }
        tracing::debug!("Focus lost during drag, terminating");
        self.panel.responder_terminate(&self.event());
        true
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        if self.panel.is_dragging() || self.over_divider() {
            cursor_icon(self.panel.cursor())
        } else {
            CursorIcon::Default
        }
    }

    /// Feed a window event; returns whether the layout needs redrawing.
    pub fn window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width as f64, size.height as f64);
                true
            }
            WindowEvent::CursorMoved { position, .. } => self.pointer_moved(position.x, position.y),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::Focused(false) => self.focus_lost(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use split_core::Platform;

    fn host(panel: SplitPanel) -> PanelHost {
        let mut host = PanelHost::new(panel.with_platform(Platform::Desktop));
        host.resize(100.0, 220.0);
        host
    }

    #[test]
    fn resize_excludes_divider_from_default_size() {
        let host = host(SplitPanel::new());

        assert_eq!(host.panel().content_size(), 200.0);
        assert_eq!(host.panel().pane_size(), Some(100.0));
        assert_eq!(host.pane_rects().resizer, LayoutRect::new(0.0, 100.0, 100.0, 20.0));
    }

    #[test]
    fn dragging_the_divider_resizes_the_pane() {
        let mut host = host(SplitPanel::new());

        host.pointer_moved(50.0, 110.0);
        assert!(host.over_divider());
        assert_eq!(host.cursor_icon(), CursorIcon::RowResize);

        assert!(host.mouse_input(ElementState::Pressed, MouseButton::Left));
        assert!(host.pointer_moved(50.0, 140.0));
        assert_eq!(host.panel().pane_size(), Some(130.0));
        assert_eq!(host.pane_rects().resizer.y, 130.0);

        assert!(host.mouse_input(ElementState::Released, MouseButton::Left));
        assert!(!host.panel().is_dragging());
        assert_eq!(host.panel().pane_size(), Some(130.0));
    }

    #[test]
    fn press_outside_divider_is_ignored() {
        let mut host = host(SplitPanel::new());

        host.pointer_moved(50.0, 10.0);
        assert_eq!(host.cursor_icon(), CursorIcon::Default);
        assert!(!host.mouse_input(ElementState::Pressed, MouseButton::Left));
        assert!(!host.pointer_moved(50.0, 60.0));
        assert_eq!(host.panel().pane_size(), Some(100.0));
    }

    #[test]
    fn only_left_button_drags() {
        let mut host = host(SplitPanel::new());

        host.pointer_moved(50.0, 110.0);
        assert!(!host.mouse_input(ElementState::Pressed, MouseButton::Right));
        assert!(!host.panel().is_dragging());
    }

    #[test]
    fn locked_divider_shows_not_allowed() {
        let mut host = host(SplitPanel::new().with_allow_resize(false));

        host.pointer_moved(50.0, 105.0);
        assert_eq!(host.cursor_icon(), CursorIcon::NotAllowed);
        assert!(!host.mouse_input(ElementState::Pressed, MouseButton::Left));
    }

    #[test]
    fn focus_loss_ends_drag() {
        let mut host = host(SplitPanel::new());

        host.pointer_moved(50.0, 110.0);
        host.mouse_input(ElementState::Pressed, MouseButton::Left);
        assert!(host.focus_lost());
        assert!(!host.panel().is_dragging());
        assert!(!host.focus_lost());
    }

    #[test]
    fn affordances_map_to_winit_icons() {
        assert_eq!(cursor_icon(CursorAffordance::Auto), CursorIcon::Default);
        assert_eq!(cursor_icon(CursorAffordance::ColResize), CursorIcon::ColResize);
    }
}
