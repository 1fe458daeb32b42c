// ABOUTME: Style fragments for the container, panes, and divider.
// ABOUTME: Fragments merge left to right; later fragments override earlier ones.

use serde::{Deserialize, Serialize};

use crate::{Color, CursorAffordance, Dimension};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    Column,
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSelect {
    Auto,
    None,
}

/// Which element of a subtree may become the target of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEvents {
    #[default]
    Auto,
    /// The view itself is never a target, its children still are
    BoxNone,
}

/// A partial style. Unset fields defer to whatever the fragment is merged onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorAffordance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_select: Option<UserSelect>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default pane style: fill the remaining space.
    pub fn pane() -> Self {
        Self::new().with_flex(1.0)
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            flex: other.flex.or(self.flex),
            flex_direction: other.flex_direction.or(self.flex_direction),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            min_width: other.min_width.or(self.min_width),
            min_height: other.min_height.or(self.min_height),
            padding: other.padding.or(self.padding),
            gap: other.gap.or(self.gap),
            align_items: other.align_items.or(self.align_items),
            justify_content: other.justify_content.or(self.justify_content),
            border_radius: other.border_radius.or(self.border_radius),
            border_width: other.border_width.or(self.border_width),
            border_color: other.border_color.or(self.border_color),
            background_color: other.background_color.or(self.background_color),
            opacity: other.opacity.or(self.opacity),
            cursor: other.cursor.or(self.cursor),
            user_select: other.user_select.or(self.user_select),
        }
    }

    /// Merge a list of fragments, skipping absent ones.
    pub fn compose<'a>(fragments: impl IntoIterator<Item = Option<&'a Style>>) -> Style {
        fragments
            .into_iter()
            .flatten()
            .fold(Style::default(), |acc, fragment| acc.merge(fragment))
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn with_flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_cursor(mut self, cursor: CursorAffordance) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_user_select(mut self, user_select: UserSelect) -> Self {
        self.user_select = Some(user_select);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_fragment_wins() {
        let base = Style::pane().with_opacity(1.0);
        let over = Style::new().with_opacity(0.5);
        let merged = base.merge(&over);
        assert_eq!(merged.flex, Some(1.0));
        assert_eq!(merged.opacity, Some(0.5));
    }

    #[test]
    fn compose_skips_absent_fragments() {
        let row = Style::new().with_flex_direction(FlexDirection::Row);
        let red = Style::new().with_background(Color::rgb(1.0, 0.0, 0.0));
        let composed = Style::compose([Some(&row), None, Some(&red)]);
        assert_eq!(composed.flex_direction, Some(FlexDirection::Row));
        assert_eq!(composed.background_color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(composed.flex, None);
    }
}
