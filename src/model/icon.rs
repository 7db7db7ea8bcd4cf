//! Pure geometry and colors for the mouse icon glyph.
//!
//! An [`IconSpec`] describes everything the renderer needs to draw one
//! icon: a rounded mouse body, the two button regions, the wheel and an
//! optional scroll chevron, with the region matching the event
//! highlighted. Building the spec is a pure function of [`IconKind`],
//! which keeps icon selection testable without a render target.

use super::effect::IconKind;

/// RGB color, components normalised to [0, 1].
pub type Color = (f32, f32, f32);

/// Mouse body fill (light gray).
pub const BODY_FILL: Color = (0.827, 0.827, 0.827);

/// Outline stroke for body, buttons and wheel (dark gray).
pub const OUTLINE: Color = (0.663, 0.663, 0.663);

/// Un-highlighted button/wheel fill (white).
pub const PLAIN_FILL: Color = (1.0, 1.0, 1.0);

/// Highlight fill for the active button or wheel click (deep pink).
pub const HIGHLIGHT_FILL: Color = (1.0, 0.078, 0.576);

/// Scroll-up accent (orange).
pub const SCROLL_UP_ACCENT: Color = (1.0, 0.647, 0.0);

/// Scroll-down accent (cyan).
pub const SCROLL_DOWN_ACCENT: Color = (0.0, 1.0, 1.0);

/// Axis-aligned rectangle in icon-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// How the wheel ellipse is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelFill {
    Plain,
    Highlight,
    ScrollUp,
    ScrollDown,
}

impl WheelFill {
    pub fn color(&self) -> Color {
        match self {
            WheelFill::Plain => PLAIN_FILL,
            WheelFill::Highlight => HIGHLIGHT_FILL,
            WheelFill::ScrollUp => SCROLL_UP_ACCENT,
            WheelFill::ScrollDown => SCROLL_DOWN_ACCENT,
        }
    }
}

/// Direction of the scroll chevron overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

impl ArrowDirection {
    pub fn accent(&self) -> Color {
        match self {
            ArrowDirection::Up => SCROLL_UP_ACCENT,
            ArrowDirection::Down => SCROLL_DOWN_ACCENT,
        }
    }
}

/// Complete drawing description for one icon glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    pub body: RectF,
    pub corner_radius: f32,
    pub left_button: RectF,
    pub left_highlighted: bool,
    pub right_button: RectF,
    pub right_highlighted: bool,
    pub wheel: RectF,
    pub wheel_fill: WheelFill,
    pub arrow: Option<ArrowDirection>,
}

/// Build the glyph description for an icon kind.
pub fn icon_spec(kind: IconKind) -> IconSpec {
    IconSpec {
        body: RectF {
            x: 8.0,
            y: 24.0,
            w: 48.0,
            h: 48.0,
        },
        corner_radius: 12.5,
        left_button: RectF {
            x: 8.0,
            y: 24.0,
            w: 20.0,
            h: 28.0,
        },
        left_highlighted: kind == IconKind::LeftButton,
        right_button: RectF {
            x: 36.0,
            y: 24.0,
            w: 20.0,
            h: 28.0,
        },
        right_highlighted: kind == IconKind::RightButton,
        wheel: RectF {
            x: 24.0,
            y: 30.0,
            w: 16.0,
            h: 10.0,
        },
        wheel_fill: match kind {
            IconKind::WheelButton => WheelFill::Highlight,
            IconKind::ScrollUp => WheelFill::ScrollUp,
            IconKind::ScrollDown => WheelFill::ScrollDown,
            _ => WheelFill::Plain,
        },
        arrow: match kind {
            IconKind::ScrollUp => Some(ArrowDirection::Up),
            IconKind::ScrollDown => Some(ArrowDirection::Down),
            _ => None,
        },
    }
}

/// Triangle vertices for the double-chevron scroll arrow, in icon-local
/// coordinates. Two stacked triangles centered on the mouse body.
pub fn arrow_triangles(direction: ArrowDirection) -> [[(f32, f32); 3]; 2] {
    const CENTER_X: f32 = 32.0;
    const HALF_W: f32 = 12.0;
    const TRI_H: f32 = 12.0;
    const GAP: f32 = 6.0;
    const TOP: f32 = 36.0;

    let upper_base = TOP + TRI_H;
    let lower_base = upper_base + GAP + TRI_H;

    match direction {
        ArrowDirection::Up => [
            [
                (CENTER_X, TOP),
                (CENTER_X - HALF_W, upper_base),
                (CENTER_X + HALF_W, upper_base),
            ],
            [
                (CENTER_X, upper_base + GAP),
                (CENTER_X - HALF_W, lower_base),
                (CENTER_X + HALF_W, lower_base),
            ],
        ],
        ArrowDirection::Down => [
            [
                (CENTER_X - HALF_W, TOP),
                (CENTER_X + HALF_W, TOP),
                (CENTER_X, upper_base),
            ],
            [
                (CENTER_X - HALF_W, upper_base + GAP),
                (CENTER_X + HALF_W, upper_base + GAP),
                (CENTER_X, lower_base),
            ],
        ],
    }
}
