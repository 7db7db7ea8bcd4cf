//! Direct2D drawing for the mouse icon glyph.
//!
//! Interprets the pure [`IconSpec`] geometry at paint time. Like the
//! rest of the pipeline this is immediate-mode: brushes and geometry are
//! created per frame and dropped with the render target.

use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_COLOR_F, D2D1_FIGURE_BEGIN_FILLED, D2D1_FIGURE_END_CLOSED, D2D_RECT_F, D2D_SIZE_F,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1Factory, ID2D1PathGeometry, ID2D1RenderTarget, ID2D1SolidColorBrush, D2D1_ARC_SEGMENT,
    D2D1_ARC_SIZE_SMALL, D2D1_ELLIPSE, D2D1_ROUNDED_RECT, D2D1_SWEEP_DIRECTION_CLOCKWISE,
};
use windows_numerics::Vector2;

use crate::model::icon::{
    arrow_triangles, icon_spec, Color, IconSpec, RectF, BODY_FILL, HIGHLIGHT_FILL, OUTLINE,
    PLAIN_FILL,
};
use crate::model::IconKind;

/// Outline stroke width for the glyph parts.
const OUTLINE_WIDTH: f32 = 1.0;

/// Draw the icon glyph for `kind` with its top-left corner at (x, y).
pub fn draw_icon(
    rt: &ID2D1RenderTarget,
    factory: &ID2D1Factory,
    kind: IconKind,
    x: f32,
    y: f32,
    alpha: f32,
) {
    let spec = icon_spec(kind);

    unsafe {
        let Ok(outline) = solid_brush(rt, OUTLINE, alpha) else {
            return;
        };

        // Mouse body
        let body = rounded_rect(&spec.body, spec.corner_radius, x, y);
        if let Ok(fill) = solid_brush(rt, BODY_FILL, alpha) {
            rt.FillRoundedRectangle(&body, &fill);
        }
        rt.DrawRoundedRectangle(&body, &outline, OUTLINE_WIDTH, None);

        // Button regions, outer top corner rounded to follow the body
        let left_fill = button_fill(spec.left_highlighted);
        if let Some(geometry) = button_geometry(factory, &spec, true, x, y) {
            if let Ok(fill) = solid_brush(rt, left_fill, alpha) {
                rt.FillGeometry(&geometry, &fill, None);
            }
            rt.DrawGeometry(&geometry, &outline, OUTLINE_WIDTH, None);
        }

        let right_fill = button_fill(spec.right_highlighted);
        if let Some(geometry) = button_geometry(factory, &spec, false, x, y) {
            if let Ok(fill) = solid_brush(rt, right_fill, alpha) {
                rt.FillGeometry(&geometry, &fill, None);
            }
            rt.DrawGeometry(&geometry, &outline, OUTLINE_WIDTH, None);
        }

        // Wheel
        let wheel = D2D1_ELLIPSE {
            point: Vector2::new(
                x + spec.wheel.x + spec.wheel.w / 2.0,
                y + spec.wheel.y + spec.wheel.h / 2.0,
            ),
            radiusX: spec.wheel.w / 2.0,
            radiusY: spec.wheel.h / 2.0,
        };
        if let Ok(fill) = solid_brush(rt, spec.wheel_fill.color(), alpha) {
            rt.FillEllipse(&wheel, &fill);
        }
        rt.DrawEllipse(&wheel, &outline, OUTLINE_WIDTH, None);

        // Scroll chevrons
        if let Some(direction) = spec.arrow {
            if let Ok(accent) = solid_brush(rt, direction.accent(), alpha) {
                for triangle in arrow_triangles(direction) {
                    if let Some(geometry) = triangle_geometry(factory, &triangle, x, y) {
                        rt.FillGeometry(&geometry, &accent, None);
                    }
                }
            }
        }
    }
}

fn button_fill(highlighted: bool) -> Color {
    if highlighted {
        HIGHLIGHT_FILL
    } else {
        PLAIN_FILL
    }
}

unsafe fn solid_brush(
    rt: &ID2D1RenderTarget,
    (r, g, b): Color,
    alpha: f32,
) -> windows::core::Result<ID2D1SolidColorBrush> {
    rt.CreateSolidColorBrush(&D2D1_COLOR_F { r, g, b, a: alpha }, None)
}

fn rounded_rect(rect: &RectF, radius: f32, x: f32, y: f32) -> D2D1_ROUNDED_RECT {
    D2D1_ROUNDED_RECT {
        rect: D2D_RECT_F {
            left: x + rect.x,
            top: y + rect.y,
            right: x + rect.x + rect.w,
            bottom: y + rect.y + rect.h,
        },
        radiusX: radius,
        radiusY: radius,
    }
}

/// Build one button region: a rectangle whose outer top corner follows
/// the body's rounding.
unsafe fn button_geometry(
    factory: &ID2D1Factory,
    spec: &IconSpec,
    left: bool,
    x: f32,
    y: f32,
) -> Option<ID2D1PathGeometry> {
    let rect = if left {
        spec.left_button
    } else {
        spec.right_button
    };
    let r = spec.corner_radius;

    let x0 = x + rect.x;
    let y0 = y + rect.y;
    let x1 = x0 + rect.w;
    let y1 = y0 + rect.h;

    let geometry: ID2D1PathGeometry = factory.CreatePathGeometry().ok()?;
    let sink = geometry.Open().ok()?;

    let arc = |end: Vector2| D2D1_ARC_SEGMENT {
        point: end,
        size: D2D_SIZE_F {
            width: r,
            height: r,
        },
        rotationAngle: 0.0,
        sweepDirection: D2D1_SWEEP_DIRECTION_CLOCKWISE,
        arcSize: D2D1_ARC_SIZE_SMALL,
    };

    if left {
        sink.BeginFigure(Vector2::new(x0, y0 + r), D2D1_FIGURE_BEGIN_FILLED);
        sink.AddArc(&arc(Vector2::new(x0 + r, y0)));
        sink.AddLine(Vector2::new(x1, y0));
        sink.AddLine(Vector2::new(x1, y1));
        sink.AddLine(Vector2::new(x0, y1));
    } else {
        sink.BeginFigure(Vector2::new(x0, y0), D2D1_FIGURE_BEGIN_FILLED);
        sink.AddLine(Vector2::new(x1 - r, y0));
        sink.AddArc(&arc(Vector2::new(x1, y0 + r)));
        sink.AddLine(Vector2::new(x1, y1));
        sink.AddLine(Vector2::new(x0, y1));
    }
    sink.EndFigure(D2D1_FIGURE_END_CLOSED);
    sink.Close().ok()?;

    Some(geometry)
}

unsafe fn triangle_geometry(
    factory: &ID2D1Factory,
    points: &[(f32, f32); 3],
    x: f32,
    y: f32,
) -> Option<ID2D1PathGeometry> {
    let geometry: ID2D1PathGeometry = factory.CreatePathGeometry().ok()?;
    let sink = geometry.Open().ok()?;

    sink.BeginFigure(
        Vector2::new(x + points[0].0, y + points[0].1),
        D2D1_FIGURE_BEGIN_FILLED,
    );
    sink.AddLine(Vector2::new(x + points[1].0, y + points[1].1));
    sink.AddLine(Vector2::new(x + points[2].0, y + points[2].1));
    sink.EndFigure(D2D1_FIGURE_END_CLOSED);
    sink.Close().ok()?;

    Some(geometry)
}
