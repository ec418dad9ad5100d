#![allow(dead_code)]

use serde::{Deserialize, Serialize};

pub const TOOLTIP_WIDTH: f64 = 140.0;
pub const TOOLTIP_HEIGHT: f64 = 90.0;
pub const TOOLTIP_PADDING: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Assumed tooltip box. Not measured from the rendered tooltip, so content
/// much larger than this can still overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for TooltipGeometry {
    fn default() -> Self {
        Self {
            width: TOOLTIP_WIDTH,
            height: TOOLTIP_HEIGHT,
            padding: TOOLTIP_PADDING,
        }
    }
}

impl TooltipGeometry {
    /// Places the tooltip below-right of the pointer, flipping left/up when it
    /// would cross the right/bottom edge. Only a negative `x` is clamped.
    pub fn place(&self, pointer: PointerEvent, viewport: Viewport) -> (f64, f64) {
        debug_assert!(
            pointer.x.is_finite() && pointer.y.is_finite(),
            "pointer coordinates must be finite"
        );

        let mut x = pointer.x + self.padding;
        let mut y = pointer.y + self.padding;

        if x + self.width > viewport.width {
            x = pointer.x - self.width - self.padding;
        }
        if y + self.height > viewport.height {
            y = pointer.y - self.height - self.padding;
        }
        if x < 0.0 {
            x = self.padding;
        }

        (x, y)
    }
}

pub fn compute_position(
    pointer_x: f64,
    pointer_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> (f64, f64) {
    TooltipGeometry::default().place(
        PointerEvent::new(pointer_x, pointer_y),
        Viewport::new(viewport_width, viewport_height),
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipVariant {
    #[default]
    Default,
    Info,
    Warning,
    Danger,
}

impl TooltipVariant {
    pub fn class(&self) -> &'static str {
        match self {
            TooltipVariant::Default => "tooltip tooltip-default",
            TooltipVariant::Info => "tooltip tooltip-info",
            TooltipVariant::Warning => "tooltip tooltip-warning",
            TooltipVariant::Danger => "tooltip tooltip-danger",
        }
    }
}

/// Tooltip record owned by the caller; [`show`] and [`hide`] only write into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState<C> {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub content: C,
    pub variant: TooltipVariant,
}

pub fn show<C>(
    state: &mut TooltipState<C>,
    event: PointerEvent,
    viewport: Viewport,
    content: C,
    variant: Option<TooltipVariant>,
) {
    let (x, y) = TooltipGeometry::default().place(event, viewport);
    *state = TooltipState {
        visible: true,
        x,
        y,
        content,
        variant: variant.unwrap_or_default(),
    };
}

/// Hides without clearing: position and content stay until the next [`show`].
pub fn hide<C>(state: &mut TooltipState<C>) {
    state.visible = false;
}
