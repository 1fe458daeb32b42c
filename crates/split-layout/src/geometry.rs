// ABOUTME: Measured rectangles and the axis the divider moves along.
// ABOUTME: Splits a container rectangle into first pane, divider, and second pane.

/// Position and size of a rendered region, as reported by the host after layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Width / x: panes sit side by side
    Horizontal,
    /// Height / y: panes are stacked
    Vertical,
}

impl Axis {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Size of `rect` along this axis
    pub fn extent(&self, rect: &LayoutRect) -> f64 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// Project a point onto this axis
    pub fn project(&self, x: f64, y: f64) -> f64 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }
}

/// Absolute rectangles of the three parts of a split container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneRects {
    pub first: LayoutRect,
    pub resizer: LayoutRect,
    pub second: LayoutRect,
}

/// Lay out `first`, divider, `second` along `axis` inside `rect`.
///
/// Extents are clamped so nothing goes negative or past the container.
pub(crate) fn split_rect(rect: LayoutRect, axis: Axis, first: f64, resizer: f64) -> PaneRects {
    let total = axis.extent(&rect).max(0.0);
    let resizer = resizer.max(0.0).min(total);
    let first = first.max(0.0).min(total - resizer);
    let second = (total - first - resizer).max(0.0);

    match axis {
        Axis::Horizontal => PaneRects {
            first: LayoutRect::new(rect.x, rect.y, first, rect.height),
            resizer: LayoutRect::new(rect.x + first, rect.y, resizer, rect.height),
            second: LayoutRect::new(rect.x + first + resizer, rect.y, second, rect.height),
        },
        Axis::Vertical => PaneRects {
            first: LayoutRect::new(rect.x, rect.y, rect.width, first),
            resizer: LayoutRect::new(rect.x, rect.y + first, rect.width, resizer),
            second: LayoutRect::new(rect.x, rect.y + first + resizer, rect.width, second),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_split_places_parts_left_to_right() {
        let rects = split_rect(
            LayoutRect::new(10.0, 0.0, 200.0, 50.0),
            Axis::Horizontal,
            80.0,
            20.0,
        );

        assert_eq!(rects.first, LayoutRect::new(10.0, 0.0, 80.0, 50.0));
        assert_eq!(rects.resizer, LayoutRect::new(90.0, 0.0, 20.0, 50.0));
        assert_eq!(rects.second, LayoutRect::new(110.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn oversized_first_pane_is_clamped() {
        let rects = split_rect(LayoutRect::new(0.0, 0.0, 40.0, 100.0), Axis::Vertical, 500.0, 10.0);

        assert_eq!(rects.first.height, 90.0);
        assert_eq!(rects.resizer.y, 90.0);
        assert_eq!(rects.second.height, 0.0);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = LayoutRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(0.0, 9.9));
        assert!(!rect.contains(10.0, 5.0));
    }
}
