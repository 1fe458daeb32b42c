// ABOUTME: Split container state: measured extents, drag session, and resolved pane size.
// ABOUTME: Turns responder events into clamped/stepped sizes and renders the two panes.

use std::fmt;

use split_core::{
    convert_dimension, resizer_cursor, CursorAffordance, Dimension, FlexDirection, Platform,
    PointerEvents, Primary, SplitConfig, Style, UserSelect,
};

use crate::geometry::{split_rect, Axis, LayoutRect, PaneRects};
use crate::resizer::{DefaultResizer, Resizer, ResizerProps};
use crate::view::{LayoutTarget, ViewNode};

/// Pointer position in page coordinates, as delivered by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Snapshot taken when the divider is grabbed. Never changes during the drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Resolved pane size at grab time
    pub size: f64,
    pub page_x: f64,
    pub page_y: f64,
}

pub type ResizeCallback = Box<dyn FnMut(&PointerEvent, f64)>;
pub type LayoutCallback = Box<dyn FnMut(&LayoutRect)>;

const ACTIVE_OPACITY: f32 = 0.75;

/// Container holding two panes separated by a draggable divider.
///
/// The primary pane's size has two writers: the drag state machine
/// (`responder_*`) and the controlled size (`set_size`, re-resolved on every
/// layout). The controlled size wins whenever its resolved value changes.
pub struct SplitPanel {
    horizontal: bool,
    primary: Primary,
    allow_resize: bool,
    size: Option<Dimension>,
    default_size: Dimension,
    min_size: Dimension,
    max_size: Option<Dimension>,
    step: Option<Dimension>,
    test_id: Option<String>,
    platform: Platform,

    style: Style,
    pane_style: Style,
    pane1_style: Style,
    pane2_style: Style,
    resizer_style: Style,
    resizer: Box<dyn Resizer>,

    on_change: Option<ResizeCallback>,
    on_resize_started: Option<ResizeCallback>,
    on_resize_finished: Option<ResizeCallback>,
    on_layout: Option<LayoutCallback>,

    /// Resolved size of the primary pane; `None` until first measured or set
    pane_size: Option<f64>,
    /// Last size emitted by a move, for step hysteresis and duplicate suppression
    prev_pane_size: Option<f64>,
    /// Last resolved controlled size that was applied
    applied_size: Option<f64>,
    drag: Option<DragSession>,
    mounted: bool,
    container_rect: Option<LayoutRect>,
    resizer_rect: Option<LayoutRect>,
}

impl SplitPanel {
    pub fn new() -> Self {
        Self::from_config(SplitConfig::default())
    }

    pub fn from_config(config: SplitConfig) -> Self {
        let mut panel = Self {
            horizontal: config.horizontal,
            primary: config.primary,
            allow_resize: config.allow_resize,
            size: None,
            default_size: config.default_size,
            min_size: config.min_size,
            max_size: config.max_size,
            step: config.step,
            test_id: config.test_id,
            platform: Platform::current(),
            style: config.style,
            pane_style: config.pane_style,
            pane1_style: config.pane1_style,
            pane2_style: config.pane2_style,
            resizer_style: config.resizer_style,
            resizer: Box::new(DefaultResizer),
            on_change: None,
            on_resize_started: None,
            on_resize_finished: None,
            on_layout: None,
            pane_size: None,
            prev_pane_size: None,
            applied_size: None,
            drag: None,
            mounted: false,
            container_rect: None,
            resizer_rect: None,
        };
        panel.set_size(config.size);
        panel
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.set_horizontal(horizontal);
        self
    }

    pub fn with_primary(mut self, primary: Primary) -> Self {
        self.set_primary(primary);
        self
    }

    pub fn with_allow_resize(mut self, allow_resize: bool) -> Self {
        self.set_allow_resize(allow_resize);
        self
    }

    pub fn with_size(mut self, size: impl Into<Dimension>) -> Self {
        self.set_size(Some(size.into()));
        self
    }

    pub fn with_default_size(mut self, size: impl Into<Dimension>) -> Self {
        self.set_default_size(size.into());
        self
    }

    pub fn with_min_size(mut self, size: impl Into<Dimension>) -> Self {
        self.set_min_size(size.into());
        self
    }

    pub fn with_max_size(mut self, size: impl Into<Dimension>) -> Self {
        self.set_max_size(Some(size.into()));
        self
    }

    pub fn with_step(mut self, step: impl Into<Dimension>) -> Self {
        self.set_step(Some(step.into()));
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_pane_style(mut self, style: Style) -> Self {
        self.pane_style = style;
        self
    }

    pub fn with_pane1_style(mut self, style: Style) -> Self {
        self.pane1_style = style;
        self
    }

    pub fn with_pane2_style(mut self, style: Style) -> Self {
        self.pane2_style = style;
        self
    }

    pub fn with_resizer_style(mut self, style: Style) -> Self {
        self.resizer_style = style;
        self
    }

    pub fn with_resizer(mut self, resizer: impl Resizer + 'static) -> Self {
        self.set_resizer(resizer);
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&PointerEvent, f64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_resize_started(mut self, callback: impl FnMut(&PointerEvent, f64) + 'static) -> Self {
        self.on_resize_started = Some(Box::new(callback));
        self
    }

    pub fn on_resize_finished(mut self, callback: impl FnMut(&PointerEvent, f64) + 'static) -> Self {
        self.on_resize_finished = Some(Box::new(callback));
        self
    }

    pub fn on_layout(mut self, callback: impl FnMut(&LayoutRect) + 'static) -> Self {
        self.on_layout = Some(Box::new(callback));
        self
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        if self.horizontal != horizontal {
            self.horizontal = horizontal;
            self.sync_controlled_size();
        }
    }

    pub fn set_primary(&mut self, primary: Primary) {
        self.primary = primary;
    }

    /// Only gates new drags; a drag already in progress runs to completion.
    pub fn set_allow_resize(&mut self, allow_resize: bool) {
        self.allow_resize = allow_resize;
    }

    /// Controlled size. Applying it overrides the current pane size, including
    /// one produced by an earlier drag.
    pub fn set_size(&mut self, size: Option<Dimension>) {
        self.size = size;
        self.applied_size = None;
        self.sync_controlled_size();
    }

    pub fn set_default_size(&mut self, size: Dimension) {
        self.default_size = size;
    }

    pub fn set_min_size(&mut self, size: Dimension) {
        self.min_size = size;
    }

    pub fn set_max_size(&mut self, size: Option<Dimension>) {
        self.max_size = size;
    }

    pub fn set_step(&mut self, step: Option<Dimension>) {
        self.step = step;
    }

    pub fn set_resizer(&mut self, resizer: impl Resizer + 'static) {
        self.resizer = Box::new(resizer);
    }

    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    pub fn primary(&self) -> Primary {
        self.primary
    }

    pub fn allow_resize(&self) -> bool {
        self.allow_resize
    }

    pub fn pane_size(&self) -> Option<f64> {
        self.pane_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn container_rect(&self) -> Option<LayoutRect> {
        self.container_rect
    }

    pub fn resizer_rect(&self) -> Option<LayoutRect> {
        self.resizer_rect
    }

    /// Space shared by the two panes: container extent minus divider extent.
    pub fn content_size(&self) -> f64 {
        let axis = self.axis();
        let container = self.container_rect.map(|r| axis.extent(&r)).unwrap_or(0.0);
        let resizer = self.resizer_rect.map(|r| axis.extent(&r)).unwrap_or(0.0);
        container - resizer
    }

    /// Size applied to the primary pane: the resolved size, or the unresolved
    /// default before anything has been measured.
    pub fn primary_dimension(&self) -> Dimension {
        self.pane_size
            .map(Dimension::Absolute)
            .unwrap_or(self.default_size)
    }

    pub fn cursor(&self) -> CursorAffordance {
        resizer_cursor(self.allow_resize, self.horizontal, self.platform)
    }

    /// Host reports the container's rectangle.
    ///
    /// The first report seeds the pane size from the controlled size if there
    /// is one, else from `default_size`. Later reports only refresh extents.
    pub fn on_container_layout(&mut self, rect: LayoutRect) {
        if let Some(callback) = self.on_layout.as_mut() {
            callback(&rect);
        }

        self.container_rect = Some(rect);

        if !self.mounted {
            self.mounted = true;
            let content = self.content_size();
            let initial = convert_dimension(self.size, content)
                .unwrap_or_else(|| self.default_size.resolve(content));
            tracing::debug!("Initial pane size {} of {}", initial, content);
            self.pane_size = Some(initial);
        }

        self.sync_controlled_size();
    }

    /// Host reports the divider's rectangle.
    pub fn on_resizer_layout(&mut self, rect: LayoutRect) {
        self.resizer_rect = Some(rect);
        self.sync_controlled_size();
    }

    fn sync_controlled_size(&mut self) {
        let resolved = convert_dimension(self.size, self.content_size());
        if same_value(resolved, self.applied_size) {
            return;
        }
        self.applied_size = resolved;

        if let Some(size) = resolved {
            tracing::debug!("Controlled size applied: {}", size);
            self.pane_size = Some(size);
        }
    }

    /// Absolute rectangles of both panes and the divider inside `container`.
    pub fn pane_rects(&self, container: LayoutRect) -> PaneRects {
        let axis = self.axis();
        let resizer = self.resizer_rect.map(|r| axis.extent(&r)).unwrap_or(0.0);
        let content = axis.extent(&container) - resizer;
        let primary = self.primary_dimension().resolve(content);

        match self.primary {
            Primary::First => split_rect(container, axis, primary, resizer),
            Primary::Last => split_rect(container, axis, content - primary, resizer),
        }
    }

    /// Whether a press on the divider may start a drag.
    pub fn should_set_responder(&self) -> bool {
        self.allow_resize
    }

    /// Pointer went down on the divider. Returns whether a drag started.
    pub fn responder_grant(&mut self, event: &PointerEvent) -> bool {
        if !self.should_set_responder() {
            tracing::debug!("Resize not allowed, ignoring grant");
            return false;
        }

        let size = self.pane_size.unwrap_or(0.0);
        self.drag = Some(DragSession {
            size,
            page_x: event.page_x,
            page_y: event.page_y,
        });
        tracing::debug!("Resize started at {}", size);

        if let Some(callback) = self.on_resize_started.as_mut() {
            callback(event, size);
        }
        true
    }

    pub fn responder_move(&mut self, event: &PointerEvent) {
        let Some(session) = self.drag else {
            return;
        };

        let size = self.compute_size(&session, event);
        if self.prev_pane_size == Some(size) {
            tracing::trace!("Pane size unchanged at {}", size);
            return;
        }

        self.prev_pane_size = Some(size);
        self.pane_size = Some(size);
        tracing::trace!("Pane resized to {}", size);

        if let Some(callback) = self.on_change.as_mut() {
            callback(event, size);
        }
    }

    /// Pointer released. Reports the size recomputed from the session; the
    /// rendered size stays whatever the last move produced.
    pub fn responder_release(&mut self, event: &PointerEvent) {
        let Some(session) = self.drag else {
            return;
        };

        let size = self.compute_size(&session, event);
        tracing::debug!("Resize finished at {}", size);

        if let Some(callback) = self.on_resize_finished.as_mut() {
            callback(event, size);
        }

        self.drag = None;
    }

    /// Host took the gesture away; ends the drag like a release.
    pub fn responder_terminate(&mut self, event: &PointerEvent) {
        self.responder_release(event);
    }

    fn compute_size(&self, session: &DragSession, event: &PointerEvent) -> f64 {
        let axis = self.axis();
        let offset = axis.project(event.page_x - session.page_x, event.page_y - session.page_y);
        let coefficient = match self.primary {
            Primary::First => 1.0,
            Primary::Last => -1.0,
        };
        let candidate = session.size + coefficient * offset;

        let content = self.content_size();
        let min = self.min_size.resolve(content);
        let max = self
            .max_size
            .unwrap_or(Dimension::Absolute(content))
            .resolve(content);

        if candidate < min {
            return min;
        }
        if candidate > max {
            return max;
        }

        // stepping runs after the bounds check, so a snapped size can land past a bound
        match convert_dimension(self.step, content) {
            Some(step) if step > 0.0 => {
                let prev = self.prev_pane_size.unwrap_or(0.0);
                if (candidate - prev).abs() >= step {
                    (candidate / step).round() * step
                } else {
                    prev
                }
            }
            _ => candidate,
        }
    }

    /// Compose the view tree. The first child fills pane 1, every other child
    /// goes into pane 2.
    pub fn render(&self, children: Vec<ViewNode>) -> ViewNode {
        let dragging = self.is_dragging();
        let mut children = children.into_iter();
        let first: Vec<ViewNode> = children.next().into_iter().collect();
        let rest: Vec<ViewNode> = children.collect();

        let column = Style::new().with_flex_direction(FlexDirection::Column);
        let row = Style::new().with_flex_direction(FlexDirection::Row);
        let no_select = Style::new().with_user_select(UserSelect::None);
        let container_style = Style::compose([
            Some(&column),
            self.horizontal.then_some(&row),
            dragging.then_some(&no_select),
            Some(&self.style),
        ]);

        let dimension = self.primary_dimension();
        let resize_style = match self.axis() {
            Axis::Horizontal => Style::new().with_width(dimension),
            Axis::Vertical => Style::new().with_height(dimension),
        }
        .with_flex(-1.0);

        let pane1 = ViewNode::new(Style::compose([
            Some(&self.pane_style),
            Some(&self.pane1_style),
            (self.primary == Primary::First).then_some(&resize_style),
        ]))
        .with_test_id(self.part_id("pane1"))
        .with_children(first);

        let pane2 = ViewNode::new(Style::compose([
            Some(&self.pane_style),
            Some(&self.pane2_style),
            (self.primary == Primary::Last).then_some(&resize_style),
        ]))
        .with_test_id(self.part_id("pane2"))
        .with_children(rest);

        let full_height = Style::new().with_height(Dimension::Percent(100.0));
        let cursor = Style::new().with_cursor(self.cursor());
        let active = Style::new().with_opacity(ACTIVE_OPACITY);
        let resizer = self.resizer.render(ResizerProps {
            style: Style::compose([
                Some(if self.horizontal { &full_height } else { &row }),
                Some(&cursor),
                dragging.then_some(&active),
                Some(&self.resizer_style),
            ]),
            test_id: self.part_id("resizer"),
            responder: true,
            layout_target: LayoutTarget::Resizer,
        });

        ViewNode {
            test_id: self.test_id.clone(),
            style: container_style,
            pointer_events: if dragging {
                PointerEvents::BoxNone
            } else {
                PointerEvents::Auto
            },
            layout_target: Some(LayoutTarget::Container),
            children: vec![pane1, resizer, pane2],
            ..ViewNode::default()
        }
    }

    fn part_id(&self, part: &str) -> Option<String> {
        self.test_id.as_ref().map(|id| format!("{}-{}", id, part))
    }
}

/// Equality where NaN matches NaN, so a malformed controlled size is applied once.
fn same_value(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
        _ => false,
    }
}

impl Default for SplitPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SplitPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPanel")
            .field("horizontal", &self.horizontal)
            .field("primary", &self.primary)
            .field("allow_resize", &self.allow_resize)
            .field("size", &self.size)
            .field("default_size", &self.default_size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("step", &self.step)
            .field("pane_size", &self.pane_size)
            .field("drag", &self.drag)
            .field("container_rect", &self.container_rect)
            .field("resizer_rect", &self.resizer_rect)
            .finish_non_exhaustive()
    }
}
