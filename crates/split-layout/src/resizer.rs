// ABOUTME: The draggable divider between the two panes.
// ABOUTME: Replaceable through the Resizer trait; DefaultResizer draws a grip with three dots.

use split_core::{Align, Color, Dimension, FlexDirection, Style};

use crate::view::{LayoutTarget, ViewNode};

/// What the container hands to a divider implementation.
///
/// A substitute has to put `layout_target` on the view whose extent should be
/// excluded from the pane budget and `responder` on the view that is dragged,
/// otherwise the divider is drawn but cannot be moved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizerProps {
    pub style: Style,
    pub test_id: Option<String>,
    pub responder: bool,
    pub layout_target: LayoutTarget,
}

pub trait Resizer {
    fn render(&self, props: ResizerProps) -> ViewNode;
}

impl<F> Resizer for F
where
    F: Fn(ResizerProps) -> ViewNode,
{
    fn render(&self, props: ResizerProps) -> ViewNode {
        self(props)
    }
}

const DOT_SIZE: f32 = 4.0;
const WRAPPER_PADDING: f32 = 4.0;
const HAIRLINE: f32 = 1.0;

/// Rounded hit target with three grip dots inside a padded wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResizer;

impl DefaultResizer {
    fn handle_style() -> Style {
        Style {
            flex_direction: Some(FlexDirection::Column),
            gap: Some(4.0),
            border_radius: Some(6.0),
            min_height: Some(Dimension::Absolute(12.0)),
            min_width: Some(Dimension::Absolute(12.0)),
            align_items: Some(Align::Center),
            justify_content: Some(Align::Center),
            background_color: Some(Color::HANDLE),
            border_width: Some(HAIRLINE),
            border_color: Some(Color::HANDLE_BORDER),
            ..Style::default()
        }
    }

    fn dot() -> ViewNode {
        ViewNode::new(Style {
            width: Some(Dimension::Absolute(DOT_SIZE as f64)),
            height: Some(Dimension::Absolute(DOT_SIZE as f64)),
            border_radius: Some(DOT_SIZE),
            background_color: Some(Color::GRIP),
            ..Style::default()
        })
    }
}

impl Resizer for DefaultResizer {
    fn render(&self, props: ResizerProps) -> ViewNode {
        let handle = ViewNode {
            test_id: props.test_id,
            style: Self::handle_style().merge(&props.style),
            responder: props.responder,
            children: vec![Self::dot(), Self::dot(), Self::dot()],
            ..ViewNode::default()
        };

        ViewNode {
            style: Style {
                padding: Some(WRAPPER_PADDING),
                ..Style::default()
            },
            layout_target: Some(props.layout_target),
            children: vec![handle],
            ..ViewNode::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> ResizerProps {
        ResizerProps {
            style: Style::new().with_opacity(0.75),
            test_id: Some("split-resizer".to_string()),
            responder: true,
            layout_target: LayoutTarget::Resizer,
        }
    }

    #[test]
    fn default_resizer_forwards_bindings() {
        let node = DefaultResizer.render(props());

        assert_eq!(node.layout_target, Some(LayoutTarget::Resizer));
        let handle = node.find_responder().unwrap();
        assert_eq!(handle.test_id.as_deref(), Some("split-resizer"));
        assert_eq!(handle.children.len(), 3);
    }

    #[test]
    fn caller_style_overrides_handle_style() {
        let mut props = props();
        props.style.background_color = Some(Color::rgb(1.0, 0.0, 0.0));
        let node = DefaultResizer.render(props);
        let handle = node.find_by_test_id("split-resizer").unwrap();

        assert_eq!(handle.style.background_color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(handle.style.opacity, Some(0.75));
        assert_eq!(handle.style.border_radius, Some(6.0));
    }

    #[test]
    fn closures_can_replace_the_divider() {
        let custom = |props: ResizerProps| ViewNode {
            test_id: props.test_id,
            responder: props.responder,
            layout_target: Some(props.layout_target),
            label: Some("custom".to_string()),
            ..ViewNode::default()
        };
        let node = custom.render(props());

        assert_eq!(node.label.as_deref(), Some("custom"));
        assert!(node.responder);
    }
}
