//! Beatmap skin configuration carried into the legacy `[Colours]` section.

/// An RGBA colour as stored in `.osu` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Immutable skin values decoded from a beatmap.
///
/// Combo colours and named custom colours (`SliderTrackOverride`,
/// `SliderBorder`, ...) both keep their file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacySkin {
    pub combo_colours: Vec<Colour>,
    pub custom_colours: Vec<(String, Colour)>,
}

impl LegacySkin {
    pub fn new(combo_colours: Vec<Colour>, custom_colours: Vec<(String, Colour)>) -> Self {
        Self {
            combo_colours,
            custom_colours,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.combo_colours.is_empty() && self.custom_colours.is_empty()
    }
}
