// ABOUTME: Cursor affordance shown over the split divider.
// ABOUTME: Depends only on the platform, whether resizing is allowed, and the axis.

use serde::{Deserialize, Serialize};

/// Host platform family. Only pointer platforms show cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Web,
    Ios,
    Android,
}

impl Platform {
    /// Platform of the current compile target
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }

    pub fn has_pointer(&self) -> bool {
        matches!(self, Platform::Desktop | Platform::Web)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CursorAffordance {
    #[default]
    Auto,
    NotAllowed,
    ColResize,
    RowResize,
}

impl CursorAffordance {
    /// CSS cursor keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorAffordance::Auto => "auto",
            CursorAffordance::NotAllowed => "not-allowed",
            CursorAffordance::ColResize => "col-resize",
            CursorAffordance::RowResize => "row-resize",
        }
    }
}

/// Cursor for the divider: neutral on touch platforms, `not-allowed` when
/// resizing is disabled, otherwise the resize cursor for the axis.
pub fn resizer_cursor(allow_resize: bool, horizontal: bool, platform: Platform) -> CursorAffordance {
    if !platform.has_pointer() {
        return CursorAffordance::Auto;
    }

    if !allow_resize {
        return CursorAffordance::NotAllowed;
    }

    if horizontal {
        CursorAffordance::ColResize
    } else {
        CursorAffordance::RowResize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_platforms_are_neutral() {
        for platform in [Platform::Ios, Platform::Android] {
            for allow in [true, false] {
                for horizontal in [true, false] {
                    assert_eq!(resizer_cursor(allow, horizontal, platform), CursorAffordance::Auto);
                }
            }
        }
    }

    #[test]
    fn disabled_resize_is_not_allowed() {
        assert_eq!(
            resizer_cursor(false, true, Platform::Web),
            CursorAffordance::NotAllowed
        );
        assert_eq!(
            resizer_cursor(false, false, Platform::Desktop),
            CursorAffordance::NotAllowed
        );
    }

    #[test]
    fn axis_selects_resize_cursor() {
        assert_eq!(resizer_cursor(true, true, Platform::Web), CursorAffordance::ColResize);
        assert_eq!(resizer_cursor(true, false, Platform::Web), CursorAffordance::RowResize);
        assert_eq!(CursorAffordance::RowResize.as_str(), "row-resize");
    }
}
