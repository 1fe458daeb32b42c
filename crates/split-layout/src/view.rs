// ABOUTME: Minimal view tree produced by rendering a split container.
// ABOUTME: Hosts walk it to apply styles and to find the divider's responder.

use split_core::{PointerEvents, Style};

/// Which measured extent a view reports back to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTarget {
    Container,
    Resizer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewNode {
    pub test_id: Option<String>,
    pub style: Style,
    pub pointer_events: PointerEvents,
    /// Receives grant/move/release when pressed
    pub responder: bool,
    /// Reports its layout rectangle to the container
    pub layout_target: Option<LayoutTarget>,
    /// Host content for leaf views
    pub label: Option<String>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Leaf carrying host content
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_test_id(mut self, test_id: Option<String>) -> Self {
        self.test_id = test_id;
        self
    }

    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children = children;
        self
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.find(&|node: &ViewNode| node.test_id.as_deref() == Some(test_id))
    }

    /// First view that takes part in the responder protocol
    pub fn find_responder(&self) -> Option<&ViewNode> {
        self.find(&|node: &ViewNode| node.responder)
    }

    pub fn find_layout_target(&self, target: LayoutTarget) -> Option<&ViewNode> {
        self.find(&|node: &ViewNode| node.layout_target == Some(target))
    }

    fn find(&self, predicate: &dyn Fn(&ViewNode) -> bool) -> Option<&ViewNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_depth_first() {
        let tree = ViewNode::new(Style::new()).with_children(vec![
            ViewNode::text("a").with_children(vec![ViewNode {
                responder: true,
                test_id: Some("deep".to_string()),
                ..ViewNode::default()
            }]),
            ViewNode {
                responder: true,
                test_id: Some("shallow".to_string()),
                ..ViewNode::default()
            },
        ]);

        assert_eq!(tree.find_responder().unwrap().test_id.as_deref(), Some("deep"));
        assert!(tree.find_by_test_id("shallow").is_some());
        assert!(tree.find_layout_target(LayoutTarget::Resizer).is_none());
    }
}
