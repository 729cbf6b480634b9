//! Reads and writes the beatmap-level skin configuration (`[Colours]`).

use crate::error::{ConvertError, ConvertResult};
use crate::models::{Colour, LegacySkin};
use rosu_map::section::colors::{Color, Colors, CustomColor};

/// Decodes the `[Colours]` section of `.osu` text into a [`LegacySkin`].
///
/// Lines `rosu_map` cannot parse are skipped.
pub fn decode_skin(bytes: &[u8]) -> ConvertResult<LegacySkin> {
    let colors: Colors = rosu_map::from_bytes(bytes)
        .map_err(|e| ConvertError::Decode(format!("rosu_map colours parse failed: {}", e)))?;

    let skin = LegacySkin::new(
        colors.custom_combo_colors.into_iter().map(colour).collect(),
        colors
            .custom_colors
            .into_iter()
            .map(|custom| (custom.name, colour(custom.color)))
            .collect(),
    );

    if skin.is_empty() {
        log::debug!("SKIN: no colours, legacy defaults apply");
    }

    Ok(skin)
}

fn colour(color: Color) -> Colour {
    Colour::rgba(color.red(), color.green(), color.blue(), color.alpha())
}

fn color(colour: Colour) -> Color {
    Color::new(colour.r, colour.g, colour.b, colour.a)
}

/// The skin in the shape `rosu_map` encodes: combo colours and named colours.
pub(crate) fn legacy_colors(skin: &LegacySkin) -> (Vec<Color>, Vec<CustomColor>) {
    let combo = skin.combo_colours.iter().copied().map(color).collect();
    let custom = skin
        .custom_colours
        .iter()
        .map(|(name, c)| CustomColor {
            name: name.clone(),
            color: color(*c),
        })
        .collect();

    (combo, custom)
}
