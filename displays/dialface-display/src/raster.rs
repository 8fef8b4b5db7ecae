//! Rasterization helpers
//!
//! Thin wrappers over embedded-graphics primitives that take the core's
//! geometry types. Degenerate shapes (negative radius, empty rectangle, zero
//! width) draw nothing.

use dialface_core::angle::{Angle, HALF_TURN};
use dialface_core::geometry::{Point, Rect};
use dialface_core::trig;
use dialface_core::Color;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::primitives::{
    Circle, Line, PointsIter, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
    RoundedRectangle, StrokeAlignment, Triangle,
};
use embedded_graphics::{Drawable, Pixel};

type EgPoint = embedded_graphics::geometry::Point;
type EgSize = embedded_graphics::geometry::Size;

fn point(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

fn rectangle(rect: Rect) -> Option<Rectangle> {
    if rect.size.is_empty() {
        return None;
    }
    Some(Rectangle::new(
        point(rect.origin),
        EgSize::new(rect.size.width as u32, rect.size.height as u32),
    ))
}

/// Circle containing every pixel within `radius` of `center`
fn circle(center: Point, radius: i32) -> Option<Circle> {
    let radius = u32::try_from(radius).ok()?;
    Some(Circle::with_center(point(center), 2 * radius + 1))
}

/// Fill the whole target
pub fn fill_screen<D>(target: &mut D, color: Color) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let area = target.bounding_box();
    target.fill_solid(&area, color)
}

pub fn fill_circle<D>(target: &mut D, center: Point, radius: i32, color: Color) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let Some(circle) = circle(center, radius) else {
        return Ok(false);
    };
    circle.into_styled(PrimitiveStyle::with_fill(color)).draw(target)?;
    Ok(true)
}

/// Stroke centered on the circle's edge
pub fn stroke_circle<D>(
    target: &mut D,
    center: Point,
    radius: i32,
    width: u32,
    color: Color,
) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let Some(circle) = circle(center, radius).filter(|_| width > 0) else {
        return Ok(false);
    };
    circle
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(target)?;
    Ok(true)
}

pub fn fill_rounded_rect<D>(
    target: &mut D,
    rect: Rect,
    corner_radius: u32,
    color: Color,
) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let Some(rectangle) = rectangle(rect) else {
        return Ok(false);
    };
    RoundedRectangle::with_equal_corners(rectangle, EgSize::new(corner_radius, corner_radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)?;
    Ok(true)
}

/// Frame `width` pixels wide drawn inward from the edge of `rect`, as nested
/// one-pixel rectangles
pub fn stroke_frame<D>(target: &mut D, rect: Rect, width: u32, color: Color) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    let mut drawn = false;
    for ring in 0..width as i32 {
        let Some(rectangle) = rectangle(rect.inset(ring)) else {
            break;
        };
        rectangle.into_styled(style).draw(target)?;
        drawn = true;
    }
    Ok(drawn)
}

pub fn stroke_line<D>(target: &mut D, from: Point, to: Point, width: u32, color: Color) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    if width == 0 {
        return Ok(false);
    }
    Line::new(point(from), point(to))
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(target)?;
    Ok(true)
}

/// Fill the band from `along.0` to `along.1` along `angle`, spanning
/// `across.0` to `across.1` perpendicular to it (positive is clockwise)
pub fn fill_band<D>(
    target: &mut D,
    center: Point,
    angle: Angle,
    along: (i32, i32),
    across: (i32, i32),
    color: Color,
) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let ((inner, outer), (left, right)) = (along, across);
    if outer <= inner || right <= left {
        return Ok(false);
    }

    let corners = [
        center.oriented(angle, inner, left),
        center.oriented(angle, outer, left),
        center.oriented(angle, outer, right),
        center.oriented(angle, inner, right),
    ]
    .map(point);

    let style = PrimitiveStyle::with_fill(color);
    Triangle::new(corners[0], corners[1], corners[2])
        .into_styled(style)
        .draw(target)?;
    Triangle::new(corners[0], corners[2], corners[3])
        .into_styled(style)
        .draw(target)?;
    Ok(true)
}

/// Whether offset `(dx, dy)` from the center lies in the clockwise sweep
/// from 12 o'clock to `end`
fn in_sweep(dx: i64, dy: i64, end: Angle) -> bool {
    let sin = trig::sin(end) as i64;
    let cos = trig::cos(end) as i64;
    // Non-negative when the point is at or counter-clockwise of `end`
    let before_end = -(dx * cos + dy * sin) >= 0;
    if end.raw() <= HALF_TURN {
        dx >= 0 && before_end
    } else {
        !(dx < 0 && !before_end)
    }
}

/// Fill the part of a disc swept clockwise from 12 o'clock to `end`
///
/// A zero sweep draws nothing.
pub fn fill_sector<D>(
    target: &mut D,
    center: Point,
    radius: i32,
    end: Angle,
    color: Color,
) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Color>,
{
    let Some(circle) = circle(center, radius).filter(|_| end != Angle::ZERO) else {
        return Ok(false);
    };
    let pixels = circle
        .points()
        .filter(|p| in_sweep((p.x - center.x) as i64, (p.y - center.y) as i64, end))
        .map(|p| Pixel(p, color));
    target.draw_iter(pixels)?;
    Ok(true)
}
