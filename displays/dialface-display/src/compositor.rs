//! Layer compositor
//!
//! Turns a face variant, the time and the theme into pixels. Rendering is
//! stateless: every call clears the target and draws the whole layer list,
//! then the border.
//!
//! # Frame order
//!
//! ```text
//! clear(Background) -> layers[0] -> layers[1] -> ... -> border
//! ```
//!
//! A layer that cannot be drawn (missing glyph, degenerate geometry) is
//! skipped and counted; the rest of the frame still renders.

use dialface_core::angle::{Angle, HandAngles, Phase, TimeSample};
use dialface_core::boundary::BoundaryShape;
use dialface_core::config::{DisplayProfile, Theme};
use dialface_core::face::{
    Area, FaceVariant, GlyphAnchor, GlyphTone, Layer, MarkerEdge, MarkerSpan, Outline,
    BORDER_WIDTH, PLATE_CORNER_RADIUS,
};
use dialface_core::geometry::Point;
use dialface_core::palette::{ColorRole, ThemeResolver};
use dialface_core::Color;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point as EgPoint;
use embedded_graphics::Pixel;

use crate::glyph::{GlyphSource, NoGlyphs};
use crate::raster;

static NO_GLYPHS: NoGlyphs = NoGlyphs;

/// What one render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderStats {
    /// Layers drawn, border included
    pub layers: u8,
    /// Layers skipped
    pub skipped: u8,
}

impl RenderStats {
    fn record(&mut self, drawn: bool) {
        if drawn {
            self.layers = self.layers.saturating_add(1);
        } else {
            self.skipped = self.skipped.saturating_add(1);
        }
    }
}

/// Per-frame inputs shared by every layer
struct Frame<'t> {
    hands: HandAngles,
    colors: ThemeResolver<'t>,
    tone: GlyphTone,
}

/// Draws faces for one display
pub struct Compositor<'g> {
    profile: DisplayProfile,
    screen: BoundaryShape,
    glyphs: &'g dyn GlyphSource,
}

impl Compositor<'static> {
    /// Compositor without glyph images
    pub fn new(profile: DisplayProfile) -> Self {
        Self {
            profile,
            screen: BoundaryShape::for_screen(profile.size, profile.caps.shape),
            glyphs: &NO_GLYPHS,
        }
    }
}

impl<'g> Compositor<'g> {
    /// Use `glyphs` for numeral layers
    pub fn with_glyphs<'a>(self, glyphs: &'a dyn GlyphSource) -> Compositor<'a> {
        Compositor {
            profile: self.profile,
            screen: self.screen,
            glyphs,
        }
    }

    pub fn profile(&self) -> &DisplayProfile {
        &self.profile
    }

    /// Render one frame
    pub fn render<D>(
        &self,
        target: &mut D,
        variant: &FaceVariant,
        time: TimeSample,
        theme: &Theme,
    ) -> Result<RenderStats, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let frame = Frame {
            hands: HandAngles::at(time, variant.hour_policy()),
            colors: ThemeResolver::new(theme, variant.palette(), &self.profile.caps),
            tone: GlyphTone::for_inverted(theme.invert),
        };
        let layout = variant.layout(&self.profile, theme);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Render {} at {}:{} ({} layers)",
            variant.name(),
            time.hour(),
            time.minute(),
            layout.layers.len()
        );

        raster::fill_screen(target, frame.colors.resolve(ColorRole::Background))?;

        let mut stats = RenderStats {
            skipped: layout.dropped,
            ..RenderStats::default()
        };
        for layer in layout.layers.iter() {
            let drawn = self.draw_layer(target, layer, &frame)?;
            stats.record(drawn);
        }

        if let Some(border) = layout.border {
            let color = frame.colors.resolve(border.role);
            let drawn = self.stroke_outline(target, border.outline, BORDER_WIDTH, color)?;
            stats.record(drawn);
        }

        Ok(stats)
    }

    fn draw_layer<D>(&self, target: &mut D, layer: &Layer, frame: &Frame<'_>) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        match *layer {
            Layer::Fill { area, role } => {
                let color = frame.colors.resolve(role);
                match area {
                    Area::Screen => raster::fill_screen(target, color).map(|()| true),
                    Area::Circle { center, radius } => raster::fill_circle(target, center, radius, color),
                    Area::RoundedRect {
                        rect,
                        corner_radius,
                    } => raster::fill_rounded_rect(target, rect, corner_radius, color),
                }
            }
            Layer::Stroke {
                outline,
                width,
                role,
            } => self.stroke_outline(target, outline, width, frame.colors.resolve(role)),
            Layer::RadialSplit {
                center,
                radius,
                hand_reach,
                hand_width,
            } => self.draw_split(target, frame, center, radius, hand_reach, hand_width),
            Layer::Marker {
                hand,
                span,
                thickness,
                role,
                edge,
            } => self.draw_marker(
                target,
                hand.angle(&frame.hands),
                span,
                thickness,
                frame.colors.resolve(role),
                edge.map(|MarkerEdge { width, role }| (width, frame.colors.resolve(role))),
            ),
            Layer::HandLine {
                hand,
                center,
                from,
                to,
                width,
                role,
            } => {
                let angle = hand.angle(&frame.hands);
                let start = center.polar(angle, self.clamp_reach(angle, from));
                let end = center.polar(angle, self.clamp_reach(angle, to));
                raster::stroke_line(target, start, end, width, frame.colors.resolve(role))
            }
            Layer::Spokes {
                hours,
                outline,
                width,
                role,
            } => {
                let color = frame.colors.resolve(role);
                let mut drawn = false;
                for hour in hours.iter() {
                    let angle = Angle::hour_mark(hour);
                    let reach = (outline.distance_to_boundary(angle) as i32).min(self.screen_reach(angle));
                    let end = outline.point_at(angle, reach);
                    drawn |= raster::stroke_line(target, outline.center(), end, width, color)?;
                }
                Ok(drawn)
            }
            Layer::Dots {
                hours,
                outline,
                radius,
                role,
            } => {
                let color = frame.colors.resolve(role);
                let mut drawn = false;
                for hour in hours.iter() {
                    let dot = outline.project(Angle::hour_mark(hour));
                    drawn |= raster::fill_circle(target, dot, radius, color)?;
                }
                Ok(drawn)
            }
            Layer::Glyph { anchor, backing } => {
                self.draw_glyph(target, anchor, frame.tone, frame.colors.resolve(backing))
            }
        }
    }

    fn stroke_outline<D>(&self, target: &mut D, outline: Outline, width: u32, color: Color) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        match outline {
            Outline::Circle { center, radius } => raster::stroke_circle(target, center, radius, width, color),
            Outline::Frame { rect } => raster::stroke_frame(target, rect, width, color),
        }
    }

    /// Base disc, the wedge up to the hour hand, then the minute hand in
    /// whichever split color it does not lie over
    fn draw_split<D>(
        &self,
        target: &mut D,
        frame: &Frame<'_>,
        center: Point,
        radius: i32,
        hand_reach: i32,
        hand_width: u32,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let light = frame.colors.resolve(ColorRole::SplitLight);
        let dark = frame.colors.resolve(ColorRole::SplitDark);
        let (base, wedge) = match frame.hands.phase {
            Phase::Day => (dark, light),
            Phase::Night => (light, dark),
        };
        let HandAngles { hour, minute, .. } = frame.hands;

        if !raster::fill_circle(target, center, radius, base)? {
            return Ok(false);
        }
        raster::fill_sector(target, center, radius, hour, wedge)?;

        let hand = if minute.within_sweep(Angle::ZERO, hour) {
            base
        } else {
            wedge
        };
        let start = center.polar(minute, self.clamp_reach(minute, radius));
        let end = center.polar(minute, self.clamp_reach(minute, hand_reach));
        raster::stroke_line(target, start, end, hand_width, hand)?;
        Ok(true)
    }

    fn draw_marker<D>(
        &self,
        target: &mut D,
        angle: Angle,
        span: MarkerSpan,
        thickness: i32,
        color: Color,
        edge: Option<(i32, Color)>,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let center = self.profile.size.center();
        let along = span.resolve(angle);
        let half = thickness.max(0) / 2;

        if let Some((width, edge_color)) = edge {
            raster::fill_band(target, center, angle, along, (half, half + width), edge_color)?;
        }
        raster::fill_band(target, center, angle, along, (-half, half), color)
    }

    fn draw_glyph<D>(
        &self,
        target: &mut D,
        anchor: GlyphAnchor,
        tone: GlyphTone,
        backing: Color,
    ) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = Color>,
    {
        let numeral = anchor.numeral();
        let Some(size) = self.glyphs.size(numeral, tone) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Glyph {} unavailable, layer skipped", numeral);
            return Ok(false);
        };
        let placement = anchor.place(size);

        raster::fill_rounded_rect(target, placement.plate, PLATE_CORNER_RADIUS, backing)?;

        let origin = placement.image.origin;
        let glyphs = self.glyphs;
        let pixels = (0..size.height).flat_map(move |y| {
            (0..size.width).filter_map(move |x| {
                glyphs
                    .pixel(numeral, tone, x, y)
                    .map(|color| Pixel(EgPoint::new(origin.x + x, origin.y + y), color))
            })
        });
        target.draw_iter(pixels)?;
        Ok(true)
    }

    /// Distance from the screen center to the screen edge along `angle`
    fn screen_reach(&self, angle: Angle) -> i32 {
        self.screen.distance_to_boundary(angle) as i32
    }

    /// Clamp a signed distance along `angle` to the screen; negative
    /// distances run behind the center
    fn clamp_reach(&self, angle: Angle, distance: i32) -> i32 {
        if distance >= 0 {
            distance.min(self.screen_reach(angle))
        } else {
            -(-distance).min(self.screen_reach(angle.opposite()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::glyph::DigitGlyphs;
    use dialface_core::angle::{HourPolicy, QUARTER_TURN};

    type RectBuffer = FrameBuffer<144, 168>;
    type RoundBuffer = FrameBuffer<180, 180>;

    fn at(hour: u8, minute: u8) -> TimeSample {
        TimeSample::new(hour, minute).unwrap()
    }

    fn render_rect(variant: &FaceVariant, time: TimeSample, theme: &Theme) -> (RectBuffer, RenderStats) {
        let mut fb = RectBuffer::new();
        let stats = Compositor::new(DisplayProfile::RECT_COLOR)
            .render(&mut fb, variant, time, theme)
            .unwrap();
        (fb, stats)
    }

    #[test]
    fn test_midnight_background() {
        let theme = Theme::default();
        let hands = HandAngles::at(at(0, 0), FaceVariant::BINARY.hour_policy());
        assert_eq!(hands.hour, Angle::ZERO);
        assert_eq!(hands.minute, Angle::ZERO);

        let (fb, stats) = render_rect(&FaceVariant::BINARY, at(0, 0), &theme);
        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(143, 167), Some(Color::WHITE));
        // Day with zero sweep: the whole disc stays dark
        assert_eq!(fb.pixel(72 + 30, 84 + 10), Some(Color::BLACK));
        assert_eq!(stats, RenderStats { layers: 2, skipped: 0 });
    }

    #[test]
    fn test_split_afternoon_minute_on_white() {
        let theme = Theme::default();
        let hands = HandAngles::at(at(15, 30), HourPolicy::Discrete);
        assert_eq!(hands.hour.raw(), QUARTER_TURN);
        assert_eq!(hands.minute.raw(), 2 * QUARTER_TURN);

        let (fb, _) = render_rect(&FaceVariant::BINARY, at(15, 30), &theme);
        // Night: dark wedge from 12 to 3, light elsewhere
        assert_eq!(fb.pixel(72 + 20, 84 - 20), Some(Color::BLACK));
        assert_eq!(fb.pixel(72 - 20, 84 + 20), Some(Color::WHITE));
        // Minute hand points down over the light region, stroked dark
        assert_eq!(fb.pixel(72, 84 + 60), Some(Color::BLACK));
    }

    #[test]
    fn test_split_morning_minute_on_black() {
        let theme = Theme::default();
        let (fb, _) = render_rect(&FaceVariant::BINARY, at(3, 30), &theme);
        // Day: light wedge from 12 to 3, dark elsewhere
        assert_eq!(fb.pixel(72 + 20, 84 - 20), Some(Color::WHITE));
        assert_eq!(fb.pixel(72 - 20, 84 + 20), Some(Color::BLACK));
        assert_eq!(fb.pixel(72, 84 + 60), Some(Color::WHITE));
    }

    #[test]
    fn test_split_minute_inside_wedge() {
        let theme = Theme::default();
        // 21:05, hour at 9, minute at 1 inside the dark wedge
        let (fb, _) = render_rect(&FaceVariant::BINARY, at(21, 5), &theme);
        let tip = Point::new(72, 84).polar(Angle::from_fraction(5, 60), 60);
        let near = [tip.x - 1, tip.x, tip.x + 1].map(|x| fb.pixel(x, tip.y));
        assert!(near.contains(&Some(Color::WHITE)), "{:?}", near);
    }

    #[test]
    fn test_binary_border() {
        let theme = Theme::default();
        let (fb, _) = render_rect(&FaceVariant::BINARY, at(0, 0), &theme);
        // Circle of radius 71 around (72, 84)
        assert_eq!(fb.pixel(72, 84 - 71), Some(Color::LIGHT_GRAY));

        let alternate = Theme {
            alternate_shape: true,
            ..Theme::default()
        };
        let (fb, _) = render_rect(&FaceVariant::BINARY, at(0, 0), &alternate);
        assert_eq!(fb.pixel(0, 84), Some(Color::LIGHT_GRAY));
        assert_eq!(fb.pixel(1, 84), Some(Color::LIGHT_GRAY));
        assert_eq!(fb.pixel(143, 0), Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn test_mono_border_contrasts_background() {
        let mut fb = RectBuffer::new();
        let theme = Theme::default();
        Compositor::new(DisplayProfile::RECT_MONO)
            .render(&mut fb, &FaceVariant::BINARY, at(0, 0), &theme)
            .unwrap();
        assert_eq!(fb.pixel(72, 84 - 71), Some(Color::BLACK));
        assert_eq!(fb.count(Color::LIGHT_GRAY), 0);
    }

    #[test]
    fn test_eclipse_round() {
        let mut fb = RoundBuffer::new();
        let theme = Theme::default();
        let stats = Compositor::new(DisplayProfile::ROUND_COLOR)
            .render(&mut fb, &FaceVariant::ECLIPSE, at(3, 0), &theme)
            .unwrap();
        assert_eq!(stats, RenderStats { layers: 6, skipped: 0 });
        // Center stays black, ring is white at 9 o'clock
        assert_eq!(fb.pixel(90, 90), Some(Color::BLACK));
        assert_eq!(fb.pixel(90 - 77, 90), Some(Color::WHITE));
        // Hour marker at 3 o'clock covers the ring in white, minute marker at
        // 12 o'clock in dark gray
        assert_eq!(fb.pixel(90 + 77, 90 - 2), Some(Color::WHITE));
        assert_eq!(fb.pixel(90, 90 - 77), Some(Color::DARK_GRAY));
        // Light gray edge on the clockwise side of the hour marker (below it)
        assert_eq!(fb.pixel(90 + 77, 90 + 7), Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn test_eclipse_rect_alternate() {
        let theme = Theme {
            alternate_shape: true,
            ..Theme::default()
        };
        let (fb, stats) = render_rect(&FaceVariant::ECLIPSE, at(6, 0), &theme);
        assert_eq!(stats, RenderStats { layers: 7, skipped: 0 });
        // Ring band along the left edge, 2..17 px in
        assert_eq!(fb.pixel(1, 84), Some(Color::DARK_GRAY));
        assert_eq!(fb.pixel(9, 84), Some(Color::WHITE));
        assert_eq!(fb.pixel(72, 84), Some(Color::BLACK));
        // Hour marker at 6 o'clock crosses the bottom band
        assert_eq!(fb.pixel(72, 168 - 9), Some(Color::WHITE));
    }

    #[test]
    fn test_inverted_eclipse() {
        let theme = Theme {
            invert: true,
            ..Theme::default()
        };
        let mut fb = RoundBuffer::new();
        Compositor::new(DisplayProfile::ROUND_COLOR)
            .render(&mut fb, &FaceVariant::ECLIPSE, at(3, 0), &theme)
            .unwrap();
        assert_eq!(fb.pixel(90, 90), Some(Color::WHITE));
        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(fb.pixel(90 - 77, 90), Some(Color::BLACK));
    }

    #[test]
    fn test_hollow_overlay_color() {
        let mut fb = RoundBuffer::new();
        let theme = Theme::default();
        Compositor::new(DisplayProfile::ROUND_COLOR)
            .render(&mut fb, &FaceVariant::HOLLOW, at(3, 0), &theme)
            .unwrap();
        // Hour hand at 3 o'clock: black from the rim in to 60, with the
        // malachite overlay back out to 80
        assert_eq!(fb.pixel(90 + 85, 90), Some(Color::BLACK));
        assert_eq!(fb.pixel(90 + 70, 90), Some(Color::MALACHITE));
        assert_eq!(fb.pixel(90 + 20, 90), Some(Color::WHITE));
    }

    #[test]
    fn test_trio_without_glyphs_skips_only_glyphs() {
        let theme = Theme::default();
        let (fb, stats) = render_rect(&FaceVariant::TRIO, at(10, 10), &theme);
        assert_eq!(stats, RenderStats { layers: 7, skipped: 3 });
        // White center cap inside the red rim
        assert_eq!(fb.pixel(72, 84), Some(Color::WHITE));
    }

    #[test]
    fn test_trio_with_glyphs() {
        let glyphs = DigitGlyphs::default();
        let theme = Theme::default();
        let mut fb = RectBuffer::new();
        let stats = Compositor::new(DisplayProfile::RECT_COLOR)
            .with_glyphs(&glyphs)
            .render(&mut fb, &FaceVariant::TRIO, at(10, 10), &theme)
            .unwrap();
        assert_eq!(stats, RenderStats { layers: 10, skipped: 0 });
        // Bottom row of the "6" glyph is inked
        let six = glyphs.size(dialface_core::face::Numeral::Six, GlyphTone::Dark).unwrap();
        let top = 168 - six.height - 12;
        assert_eq!(fb.pixel(72 - six.width / 2 + 2, top + six.height - 1), Some(Color::BLACK));
    }

    #[test]
    fn test_trio_mono_hands() {
        let mut fb = RectBuffer::new();
        let theme = Theme::default();
        Compositor::new(DisplayProfile::RECT_MONO)
            .render(&mut fb, &FaceVariant::TRIO, at(3, 0), &theme)
            .unwrap();
        assert_eq!(fb.count(Color::RED), 0);
        assert_eq!(fb.count(Color::DARK_CANDY_APPLE_RED), 0);
        // Minute hand at 12 o'clock in the accent color
        assert_eq!(fb.pixel(72, 84 - 40), Some(Color::BLACK));
    }

    #[test]
    fn test_background_override() {
        let mut theme = Theme::default();
        theme.overrides.set(ColorRole::Background, Some(Color::MALACHITE));
        let (fb, _) = render_rect(&FaceVariant::HOLLOW, at(0, 0), &theme);
        assert_eq!(fb.pixel(0, 0), Some(Color::MALACHITE));
    }

    #[test]
    fn test_hand_reach_clamped() {
        let compositor = Compositor::new(DisplayProfile::RECT_COLOR);
        assert_eq!(compositor.clamp_reach(Angle::ZERO, 500), 84);
        assert_eq!(compositor.clamp_reach(Angle::ZERO, -500), -84);
        assert_eq!(compositor.clamp_reach(Angle::from_raw(QUARTER_TURN), 500), 72);
        assert_eq!(compositor.clamp_reach(Angle::ZERO, -16), -16);
    }
}
