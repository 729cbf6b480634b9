//! Decodes `.osu` text into [`BeatmapContent`] using `rosu_map`.

use crate::error::{ConvertError, ConvertResult};
use crate::legacy::path::from_control_points;
use crate::models::{BeatmapContent, ControlPoint, ControlPointKind, HitObject, Metadata};
use rosu_map::Beatmap;
use rosu_map::section::hit_objects::HitObjectKind;

/// The decoded `rosu_map` beatmap a chart came from.
///
/// Holds every section the conversion does not rewrite (general, editor,
/// difficulty, events, hit samples) until the encoder serializes it again.
#[derive(Debug, Clone)]
pub struct LegacyDocument {
    beatmap: Beatmap,
}

impl LegacyDocument {
    pub(crate) fn into_beatmap(self) -> Beatmap {
        self.beatmap
    }
}

/// Decodes chart bytes into content plus the document it was read from.
pub fn decode_chart(bytes: &[u8]) -> ConvertResult<(BeatmapContent, LegacyDocument)> {
    let beatmap = Beatmap::from_bytes(bytes)
        .map_err(|e| ConvertError::Decode(format!("rosu_map parse failed: {}", e)))?;

    let metadata = Metadata {
        title: beatmap.title.clone(),
        artist: beatmap.artist.clone(),
        creator: beatmap.creator.clone(),
        version: beatmap.version.clone(),
        audio_file: beatmap.audio_file.clone(),
    };

    let mut content = BeatmapContent::new(metadata);

    let points = &beatmap.control_points;
    content.control_points.extend(
        points
            .timing_points
            .iter()
            .map(|p| ControlPoint::new(p.time, ControlPointKind::Timing)),
    );
    content.control_points.extend(
        points
            .difficulty_points
            .iter()
            .map(|p| ControlPoint::new(p.time, ControlPointKind::Difficulty)),
    );
    content.control_points.extend(
        points
            .effect_points
            .iter()
            .map(|p| ControlPoint::new(p.time, ControlPointKind::Effect)),
    );
    content.control_points.extend(
        points
            .sample_points
            .iter()
            .map(|p| ControlPoint::new(p.time, ControlPointKind::Sample)),
    );

    content.hit_objects = beatmap.hit_objects.iter().map(convert_hit_object).collect();

    log::debug!(
        "DECODE: {} ({} control points, {} hit objects)",
        content.display_name(),
        content.control_points.len(),
        content.hit_objects.len()
    );

    Ok((content, LegacyDocument { beatmap }))
}

fn convert_hit_object(object: &rosu_map::section::hit_objects::HitObject) -> HitObject {
    match &object.kind {
        HitObjectKind::Slider(slider) => HitObject::with_path(
            object.start_time,
            from_control_points(slider.path.control_points(), slider.path.expected_dist()),
        ),
        HitObjectKind::Spinner(spinner) => {
            HitObject::with_duration(object.start_time, spinner.duration)
        }
        HitObjectKind::Hold(hold) => HitObject::with_duration(object.start_time, hold.duration),
        _ => HitObject::point(object.start_time),
    }
}
