//! Face variants
//!
//! Each variant is geometry constants, a palette and an hour policy. Its
//! `layout` turns those into the ordered layer list for one display and
//! theme; nothing here draws.

use crate::angle::HourPolicy;
use crate::boundary::BoundaryShape;
use crate::color::Color;
use crate::config::{DisplayProfile, ScreenShape, Theme};
use crate::face::glyph::{GlyphAnchor, Numeral};
use crate::face::layer::{
    Area, Border, HandRef, HourSet, Layer, LayerList, MarkerEdge, MarkerSpan, Outline,
};
use crate::geometry::{Rect, Size};
use crate::palette::{ColorRole, Fallback, Palette, PaletteEntry};

/// Layers for one display and theme
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaceLayout {
    pub layers: LayerList,
    /// Drawn after every layer
    pub border: Option<Border>,
    /// Layers that did not fit in the list
    pub dropped: u8,
}

impl FaceLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer on top of the existing ones
    pub fn push(&mut self, layer: Layer) -> &mut Self {
        if self.layers.push(layer).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
        self
    }

    /// Set the border
    pub fn border(&mut self, outline: Outline, role: ColorRole) -> &mut Self {
        self.border = Some(Border { outline, role });
        self
    }
}

/// Solid radial split: the dial fills clockwise from 12 o'clock up to the
/// hour, swapping light and dark at noon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BinaryFace {
    /// Minute hand runs from the dial edge inward to this distance
    pub minute_hand_reach: i32,
    pub hand_width: u32,
    /// How far the dial extends past the screen in the rectangular layout
    pub rect_overscan: i32,
}

impl BinaryFace {
    pub const DEFAULT: BinaryFace = BinaryFace {
        minute_hand_reach: 50,
        hand_width: 2,
        rect_overscan: 40,
    };
}

/// Ring with an hour and a minute marker crossing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EclipseFace {
    /// Width of the dark rings either side of the light ring
    pub border: i32,
    pub round_ring: i32,
    pub rect_ring: i32,
    /// Ring thickness on screens at least `large_screen_width` wide
    pub large_ring: i32,
    pub large_screen_width: i32,
    pub minute_thickness: i32,
    pub hour_thickness: i32,
    pub edge_width: i32,
    /// Markers start this far outside the inner edge of the ring (negative
    /// values reach into the inner border)
    pub inner_offset: i32,
    /// Markers end this far past the outer edge of the ring
    pub outer_offset: i32,
    pub corner_radius: u32,
}

impl EclipseFace {
    pub const DEFAULT: EclipseFace = EclipseFace {
        border: 2,
        round_ring: 20,
        rect_ring: 15,
        large_ring: 25,
        large_screen_width: 200,
        minute_thickness: 10,
        hour_thickness: 12,
        edge_width: 2,
        inner_offset: -2,
        outer_offset: 3,
        corner_radius: 8,
    };

    /// Ring thickness for a display
    pub fn ring_thickness(&self, profile: &DisplayProfile) -> i32 {
        if profile.size.width >= self.large_screen_width {
            self.large_ring
        } else {
            match profile.caps.shape {
                ScreenShape::Round => self.round_ring,
                ScreenShape::Rect => self.rect_ring,
            }
        }
    }
}

/// Hands drawn from the dial edge inward, leaving the center empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HollowFace {
    pub hour_length: i32,
    pub minute_length: i32,
    /// Overlay stroke continues this far past the hand's inner end
    pub overlay_length: i32,
    pub hand_width: u32,
    pub overlay_width: u32,
    pub rect_overscan: i32,
}

impl HollowFace {
    pub const DEFAULT: HollowFace = HollowFace {
        hour_length: 60,
        minute_length: 40,
        overlay_length: 20,
        hand_width: 4,
        overlay_width: 2,
        rect_overscan: 40,
    };
}

/// Three marked hours with numerals, dots elsewhere, classic center hands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrioFace {
    pub line_width: u32,
    pub dot_radius: i32,
    /// Gap between the dots and the screen edge
    pub dot_margin: i32,
    pub glyph_margin_rect: i32,
    pub glyph_margin_round: i32,
    pub bottom_margin: i32,
    pub hand_width: u32,
    /// Hands extend this far behind the center
    pub tail: i32,
    /// Hour hand stops this far short of half the screen width
    pub hour_inset_rect: i32,
    pub hour_inset_round: i32,
    pub minute_inset_rect: i32,
    pub minute_inset_round: i32,
    pub rim_radius: i32,
    pub rim_width: u32,
    pub cap_radius: i32,
}

impl TrioFace {
    pub const DEFAULT: TrioFace = TrioFace {
        line_width: 1,
        dot_radius: 1,
        dot_margin: 6,
        glyph_margin_rect: 6,
        glyph_margin_round: 12,
        bottom_margin: 12,
        hand_width: 3,
        tail: 16,
        hour_inset_rect: 28,
        hour_inset_round: 44,
        minute_inset_rect: 8,
        minute_inset_round: 22,
        rim_radius: 4,
        rim_width: 2,
        cap_radius: 3,
    };

    /// Hours marked with spokes and numerals
    pub const MARKED_HOURS: HourSet = HourSet::of(&[10, 2, 6]);
}

static BINARY_PALETTE: [PaletteEntry; 4] = [
    PaletteEntry::new(ColorRole::Background, Color::WHITE),
    PaletteEntry::new(ColorRole::SplitLight, Color::WHITE),
    PaletteEntry::new(ColorRole::SplitDark, Color::BLACK),
    PaletteEntry::new(ColorRole::Border, Color::LIGHT_GRAY)
        .mono(Fallback::ContrastOf(ColorRole::Background)),
];

static ECLIPSE_PALETTE: [PaletteEntry; 8] = [
    PaletteEntry::new(ColorRole::Background, Color::BLACK),
    PaletteEntry::new(ColorRole::RingOuter, Color::DARK_GRAY),
    PaletteEntry::new(ColorRole::Ring, Color::WHITE),
    PaletteEntry::new(ColorRole::RingInner, Color::DARK_GRAY),
    PaletteEntry::new(ColorRole::Center, Color::BLACK),
    PaletteEntry::new(ColorRole::MinuteHand, Color::DARK_GRAY).mono(Fallback::Color(Color::BLACK)),
    PaletteEntry::new(ColorRole::HourHand, Color::WHITE).mono(Fallback::Color(Color::DARK_GRAY)),
    PaletteEntry::new(ColorRole::MarkerEdge, Color::LIGHT_GRAY),
];

static HOLLOW_PALETTE: [PaletteEntry; 6] = [
    PaletteEntry::new(ColorRole::Background, Color::WHITE),
    PaletteEntry::new(ColorRole::HourHand, Color::BLACK),
    PaletteEntry::new(ColorRole::MinuteHand, Color::BLACK),
    PaletteEntry::new(ColorRole::HourOverlay, Color::MALACHITE)
        .mono(Fallback::ContrastOf(ColorRole::HourHand)),
    PaletteEntry::new(ColorRole::MinuteOverlay, Color::MALACHITE)
        .mono(Fallback::ContrastOf(ColorRole::MinuteHand)),
    PaletteEntry::new(ColorRole::Border, Color::LIGHT_GRAY)
        .mono(Fallback::ContrastOf(ColorRole::Background)),
];

static TRIO_PALETTE: [PaletteEntry; 7] = [
    PaletteEntry::new(ColorRole::Background, Color::WHITE),
    PaletteEntry::new(ColorRole::Line, Color::LIGHT_GRAY).mono(Fallback::Color(Color::BLACK)),
    PaletteEntry::new(ColorRole::Accent, Color::BLACK),
    PaletteEntry::new(ColorRole::HourHand, Color::DARK_CANDY_APPLE_RED)
        .mono(Fallback::Role(ColorRole::Accent)),
    PaletteEntry::new(ColorRole::MinuteHand, Color::RED).mono(Fallback::Role(ColorRole::Accent)),
    PaletteEntry::new(ColorRole::CenterRim, Color::RED).mono(Fallback::Role(ColorRole::Accent)),
    PaletteEntry::new(ColorRole::Center, Color::WHITE).fixed(),
];

/// One of the built-in faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceVariant {
    Binary(BinaryFace),
    Eclipse(EclipseFace),
    Hollow(HollowFace),
    Trio(TrioFace),
}

impl FaceVariant {
    pub const BINARY: FaceVariant = FaceVariant::Binary(BinaryFace::DEFAULT);
    pub const ECLIPSE: FaceVariant = FaceVariant::Eclipse(EclipseFace::DEFAULT);
    pub const HOLLOW: FaceVariant = FaceVariant::Hollow(HollowFace::DEFAULT);
    pub const TRIO: FaceVariant = FaceVariant::Trio(TrioFace::DEFAULT);

    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            FaceVariant::Binary(_) => "binary",
            FaceVariant::Eclipse(_) => "eclipse",
            FaceVariant::Hollow(_) => "hollow",
            FaceVariant::Trio(_) => "trio",
        }
    }

    /// How this face's hour hand moves
    pub const fn hour_policy(&self) -> HourPolicy {
        match self {
            FaceVariant::Binary(_) => HourPolicy::Discrete,
            FaceVariant::Eclipse(_) | FaceVariant::Hollow(_) | FaceVariant::Trio(_) => {
                HourPolicy::Continuous
            }
        }
    }

    /// Role table
    pub fn palette(&self) -> Palette {
        match self {
            FaceVariant::Binary(_) => Palette::new(&BINARY_PALETTE),
            FaceVariant::Eclipse(_) => Palette::new(&ECLIPSE_PALETTE),
            FaceVariant::Hollow(_) => Palette::new(&HOLLOW_PALETTE),
            FaceVariant::Trio(_) => Palette::new(&TRIO_PALETTE),
        }
    }

    /// Ordered layers for a display and theme
    pub fn layout(&self, profile: &DisplayProfile, theme: &Theme) -> FaceLayout {
        let mut layout = FaceLayout::new();
        match self {
            FaceVariant::Binary(face) => binary_layout(face, profile, theme, &mut layout),
            FaceVariant::Eclipse(face) => eclipse_layout(face, profile, theme, &mut layout),
            FaceVariant::Hollow(face) => hollow_layout(face, profile, theme, &mut layout),
            FaceVariant::Trio(face) => trio_layout(face, profile, &mut layout),
        }
        layout
    }
}

/// Dial radius shared by the split and hollow faces
fn dial_radius(size: Size, alternate: bool, overscan: i32) -> i32 {
    if alternate {
        size.height / 2 + overscan
    } else {
        (size.width - 2) / 2
    }
}

/// Circle at the dial edge, or a frame around the screen
fn dial_border(layout: &mut FaceLayout, size: Size, radius: i32, alternate: bool) {
    let outline = if alternate {
        Outline::Frame {
            rect: Rect::screen(size),
        }
    } else {
        Outline::Circle {
            center: size.center(),
            radius,
        }
    };
    layout.border(outline, ColorRole::Border);
}

fn binary_layout(face: &BinaryFace, profile: &DisplayProfile, theme: &Theme, layout: &mut FaceLayout) {
    let alternate = theme.uses_alternate_shape(&profile.caps);
    let radius = dial_radius(profile.size, alternate, face.rect_overscan);

    layout.push(Layer::RadialSplit {
        center: profile.size.center(),
        radius,
        hand_reach: face.minute_hand_reach,
        hand_width: face.hand_width,
    });
    dial_border(layout, profile.size, radius, alternate);
}

fn hollow_layout(face: &HollowFace, profile: &DisplayProfile, theme: &Theme, layout: &mut FaceLayout) {
    let alternate = theme.uses_alternate_shape(&profile.caps);
    let radius = dial_radius(profile.size, alternate, face.rect_overscan);
    let center = profile.size.center();

    let hands = [
        (HandRef::Hour, face.hour_length, ColorRole::HourHand, ColorRole::HourOverlay),
        (HandRef::Minute, face.minute_length, ColorRole::MinuteHand, ColorRole::MinuteOverlay),
    ];
    for (hand, length, role, overlay) in hands {
        layout
            .push(Layer::HandLine {
                hand,
                center,
                from: radius,
                to: length,
                width: face.hand_width,
                role,
            })
            .push(Layer::HandLine {
                hand,
                center,
                from: length,
                to: length + face.overlay_length,
                width: face.overlay_width,
                role: overlay,
            });
    }
    dial_border(layout, profile.size, radius, alternate);
}

fn eclipse_layout(face: &EclipseFace, profile: &DisplayProfile, theme: &Theme, layout: &mut FaceLayout) {
    let size = profile.size;
    let ring = face.ring_thickness(profile);
    let border = face.border;

    let (span, inner_fill) = if theme.uses_alternate_shape(&profile.caps) {
        let screen = Rect::screen(size);
        let corner_radius = face.corner_radius;
        let rounded = |inset: i32| Area::RoundedRect {
            rect: screen.inset(inset),
            corner_radius,
        };

        layout
            .push(Layer::Fill {
                area: rounded(0),
                role: ColorRole::RingOuter,
            })
            .push(Layer::Fill {
                area: rounded(border),
                role: ColorRole::Ring,
            })
            .push(Layer::Fill {
                area: rounded(border + ring),
                role: ColorRole::RingInner,
            })
            .push(Layer::Fill {
                area: rounded(2 * border + ring),
                role: ColorRole::Center,
            });

        let span = MarkerSpan::Band {
            bounds: screen,
            inner_inset: border + ring,
            outer_inset: border,
            inner_offset: face.inner_offset,
            outer_offset: face.outer_offset,
        };
        // The band's inner end pokes into the center; cover it again
        (span, Some(rounded(2 * border + ring)))
    } else {
        let center = size.center();
        let outer = center.x.min(center.y) - 1;
        let ring_outer = outer - border;
        let ring_inner = ring_outer - ring;
        let circle = |radius| Area::Circle { center, radius };

        layout
            .push(Layer::Fill {
                area: circle(outer),
                role: ColorRole::RingOuter,
            })
            .push(Layer::Fill {
                area: circle(ring_outer),
                role: ColorRole::Ring,
            })
            .push(Layer::Fill {
                area: circle(ring_inner),
                role: ColorRole::RingInner,
            })
            .push(Layer::Fill {
                area: circle(ring_inner - border),
                role: ColorRole::Center,
            });

        let span = MarkerSpan::Fixed {
            inner: ring_inner + face.inner_offset,
            outer: ring_outer + face.outer_offset,
        };
        (span, None)
    };

    // Minute marker sits underneath the hour marker
    layout
        .push(Layer::Marker {
            hand: HandRef::Minute,
            span,
            thickness: face.minute_thickness,
            role: ColorRole::MinuteHand,
            edge: None,
        })
        .push(Layer::Marker {
            hand: HandRef::Hour,
            span,
            thickness: face.hour_thickness,
            role: ColorRole::HourHand,
            edge: Some(MarkerEdge {
                width: face.edge_width,
                role: ColorRole::MarkerEdge,
            }),
        });

    if let Some(area) = inner_fill {
        layout.push(Layer::Fill {
            area,
            role: ColorRole::Center,
        });
    }
}

fn trio_layout(face: &TrioFace, profile: &DisplayProfile, layout: &mut FaceLayout) {
    let size = profile.size;
    let center = size.center();
    let shape = profile.caps.shape;
    let round = profile.caps.is_round();

    let dot_outline = match shape {
        ScreenShape::Round => BoundaryShape::Circle {
            center,
            radius: size.width / 2 - face.dot_margin - 2 * face.dot_radius,
        },
        ScreenShape::Rect => BoundaryShape::RoundedRect {
            bounds: Rect::screen(size),
            inset: face.dot_margin,
        },
    };
    let glyph_margin = if round {
        face.glyph_margin_round
    } else {
        face.glyph_margin_rect
    };

    layout
        .push(Layer::Spokes {
            hours: TrioFace::MARKED_HOURS,
            outline: BoundaryShape::for_screen(size, shape),
            width: face.line_width,
            role: ColorRole::Line,
        })
        .push(Layer::Dots {
            hours: TrioFace::MARKED_HOURS.complement(),
            outline: dot_outline,
            radius: face.dot_radius,
            role: ColorRole::Accent,
        });

    for numeral in [Numeral::Ten, Numeral::Two] {
        layout.push(Layer::Glyph {
            anchor: GlyphAnchor::Radial {
                numeral,
                screen: size,
                shape,
                margin: glyph_margin,
            },
            backing: ColorRole::Background,
        });
    }
    layout.push(Layer::Glyph {
        anchor: GlyphAnchor::Bottom {
            numeral: Numeral::Six,
            screen: size,
            margin: face.bottom_margin,
        },
        backing: ColorRole::Background,
    });

    let (hour_inset, minute_inset) = if round {
        (face.hour_inset_round, face.minute_inset_round)
    } else {
        (face.hour_inset_rect, face.minute_inset_rect)
    };
    let hands = [
        (HandRef::Hour, hour_inset, ColorRole::HourHand),
        (HandRef::Minute, minute_inset, ColorRole::MinuteHand),
    ];
    for (hand, inset, role) in hands {
        layout.push(Layer::HandLine {
            hand,
            center,
            from: -face.tail,
            to: size.width / 2 - inset,
            width: face.hand_width,
            role,
        });
    }

    layout
        .push(Layer::Stroke {
            outline: Outline::Circle {
                center,
                radius: face.rim_radius,
            },
            width: face.rim_width,
            role: ColorRole::CenterRim,
        })
        .push(Layer::Fill {
            area: Area::Circle {
                center,
                radius: face.cap_radius,
            },
            role: ColorRole::Center,
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorDepth;
    use crate::palette::ThemeResolver;

    const PROFILES: [DisplayProfile; 4] = [
        DisplayProfile::RECT_MONO,
        DisplayProfile::RECT_COLOR,
        DisplayProfile::ROUND_COLOR,
        DisplayProfile::LARGE_RECT_COLOR,
    ];

    const VARIANTS: [FaceVariant; 4] = [
        FaceVariant::BINARY,
        FaceVariant::ECLIPSE,
        FaceVariant::HOLLOW,
        FaceVariant::TRIO,
    ];

    fn alternate() -> Theme {
        Theme {
            alternate_shape: true,
            ..Theme::default()
        }
    }

    #[test]
    fn test_declared_hour_policies() {
        assert_eq!(FaceVariant::BINARY.hour_policy(), HourPolicy::Discrete);
        assert_eq!(FaceVariant::ECLIPSE.hour_policy(), HourPolicy::Continuous);
        assert_eq!(FaceVariant::HOLLOW.hour_policy(), HourPolicy::Continuous);
        assert_eq!(FaceVariant::TRIO.hour_policy(), HourPolicy::Continuous);
    }

    #[test]
    fn test_every_layout_fits() {
        for variant in VARIANTS {
            for profile in PROFILES {
                for theme in [Theme::default(), alternate()] {
                    let layout = variant.layout(&profile, &theme);
                    assert_eq!(layout.dropped, 0, "{} {:?}", variant.name(), profile);
                    assert!(!layout.layers.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_every_used_role_is_declared() {
        for variant in VARIANTS {
            let palette = variant.palette();
            assert!(palette.entry(ColorRole::Background).is_some());
            for profile in PROFILES {
                let layout = variant.layout(&profile, &alternate());
                for layer in layout.layers.iter() {
                    let role = match *layer {
                        Layer::Fill { role, .. }
                        | Layer::Stroke { role, .. }
                        | Layer::Marker { role, .. }
                        | Layer::HandLine { role, .. }
                        | Layer::Spokes { role, .. }
                        | Layer::Dots { role, .. } => role,
                        Layer::RadialSplit { .. } => ColorRole::SplitLight,
                        Layer::Glyph { backing, .. } => backing,
                    };
                    assert!(palette.entry(role).is_some(), "{} {:?}", variant.name(), role);
                }
            }
        }
    }

    #[test]
    fn test_binary_radius() {
        let layout = FaceVariant::BINARY.layout(&DisplayProfile::RECT_COLOR, &Theme::default());
        assert!(matches!(
            layout.layers[0],
            Layer::RadialSplit { radius: 71, hand_reach: 50, .. }
        ));
        assert!(matches!(
            layout.border,
            Some(Border {
                outline: Outline::Circle { radius: 71, .. },
                ..
            })
        ));

        let layout = FaceVariant::BINARY.layout(&DisplayProfile::RECT_COLOR, &alternate());
        assert!(matches!(layout.layers[0], Layer::RadialSplit { radius: 124, .. }));
        assert!(matches!(
            layout.border,
            Some(Border {
                outline: Outline::Frame { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_alternate_shape_ignored_on_round() {
        let plain = FaceVariant::ECLIPSE.layout(&DisplayProfile::ROUND_COLOR, &Theme::default());
        let alt = FaceVariant::ECLIPSE.layout(&DisplayProfile::ROUND_COLOR, &alternate());
        assert_eq!(plain, alt);
    }

    #[test]
    fn test_eclipse_ring_thickness() {
        let face = EclipseFace::DEFAULT;
        assert_eq!(face.ring_thickness(&DisplayProfile::RECT_COLOR), 15);
        assert_eq!(face.ring_thickness(&DisplayProfile::ROUND_COLOR), 20);
        assert_eq!(face.ring_thickness(&DisplayProfile::LARGE_RECT_COLOR), 25);
    }

    #[test]
    fn test_eclipse_round_geometry() {
        let layout = FaceVariant::ECLIPSE.layout(&DisplayProfile::ROUND_COLOR, &Theme::default());
        // outer 89, ring 87..67, center 65
        assert!(matches!(
            layout.layers[0],
            Layer::Fill { area: Area::Circle { radius: 89, .. }, role: ColorRole::RingOuter }
        ));
        assert!(matches!(
            layout.layers[3],
            Layer::Fill { area: Area::Circle { radius: 65, .. }, role: ColorRole::Center }
        ));
        match layout.layers[4] {
            Layer::Marker { hand, span, thickness, .. } => {
                assert_eq!(hand, HandRef::Minute);
                assert_eq!(thickness, 10);
                assert_eq!(span, MarkerSpan::Fixed { inner: 65, outer: 90 });
            }
            other => panic!("unexpected layer {:?}", other),
        }
        assert!(matches!(
            layout.layers[5],
            Layer::Marker { hand: HandRef::Hour, edge: Some(_), .. }
        ));
        assert_eq!(layout.border, None);
    }

    #[test]
    fn test_eclipse_rect_mode_recovers_center() {
        let layout = FaceVariant::ECLIPSE.layout(&DisplayProfile::RECT_COLOR, &alternate());
        assert_eq!(layout.layers.len(), 7);
        assert!(matches!(
            layout.layers[6],
            Layer::Fill { area: Area::RoundedRect { .. }, role: ColorRole::Center }
        ));
    }

    #[test]
    fn test_hollow_hand_order() {
        let layout = FaceVariant::HOLLOW.layout(&DisplayProfile::ROUND_COLOR, &Theme::default());
        let roles: heapless::Vec<ColorRole, 4> = layout
            .layers
            .iter()
            .filter_map(|layer| match *layer {
                Layer::HandLine { role, .. } => Some(role),
                _ => None,
            })
            .collect();
        assert_eq!(
            roles.as_slice(),
            &[
                ColorRole::HourHand,
                ColorRole::HourOverlay,
                ColorRole::MinuteHand,
                ColorRole::MinuteOverlay
            ]
        );
    }

    #[test]
    fn test_trio_hand_lengths() {
        let rect = FaceVariant::TRIO.layout(&DisplayProfile::RECT_COLOR, &Theme::default());
        let round = FaceVariant::TRIO.layout(&DisplayProfile::ROUND_COLOR, &Theme::default());
        let reach = |layout: &FaceLayout, wanted: HandRef| {
            layout.layers.iter().find_map(|layer| match *layer {
                Layer::HandLine { hand, from, to, .. } if hand == wanted => Some((from, to)),
                _ => None,
            })
        };
        assert_eq!(reach(&rect, HandRef::Hour), Some((-16, 44)));
        assert_eq!(reach(&rect, HandRef::Minute), Some((-16, 64)));
        assert_eq!(reach(&round, HandRef::Hour), Some((-16, 46)));
        assert_eq!(reach(&round, HandRef::Minute), Some((-16, 68)));
    }

    #[test]
    fn test_trio_mono_hands_collapse_to_accent() {
        let mono = DisplayProfile::RECT_MONO;
        let theme = Theme::default();
        let resolver = ThemeResolver::new(&theme, FaceVariant::TRIO.palette(), &mono.caps);
        assert_eq!(resolver.resolve(ColorRole::HourHand), Color::BLACK);
        assert_eq!(resolver.resolve(ColorRole::MinuteHand), Color::BLACK);

        let color = DisplayProfile::RECT_COLOR;
        let resolver = ThemeResolver::new(&theme, FaceVariant::TRIO.palette(), &color.caps);
        assert_eq!(resolver.resolve(ColorRole::HourHand), Color::DARK_CANDY_APPLE_RED);
        assert_eq!(resolver.resolve(ColorRole::MinuteHand), Color::RED);
        assert_eq!(color.caps.depth, ColorDepth::Color);
    }

    #[test]
    fn test_eclipse_inverted_palette() {
        let theme = Theme {
            invert: true,
            ..Theme::default()
        };
        let caps = DisplayProfile::ROUND_COLOR.caps;
        let resolver = ThemeResolver::new(&theme, FaceVariant::ECLIPSE.palette(), &caps);
        assert_eq!(resolver.resolve(ColorRole::Background), Color::WHITE);
        assert_eq!(resolver.resolve(ColorRole::Ring), Color::BLACK);
        assert_eq!(resolver.resolve(ColorRole::RingOuter), Color::LIGHT_GRAY);
        assert_eq!(resolver.resolve(ColorRole::MarkerEdge), Color::DARK_GRAY);
    }
}
