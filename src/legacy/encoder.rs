//! Serializes normalized content into legacy `.osu` text.
//!
//! The heavy lifting is done by the `rosu_map` encoder: normalized values
//! and the skin's colours are written back into the decoded document, which
//! is then encoded.

use crate::error::{ConvertError, ConvertResult};
use crate::legacy::decoder::LegacyDocument;
use crate::legacy::path::to_control_points;
use crate::legacy::skin::legacy_colors;
use crate::models::{BeatmapContent, ControlPointKind, HitObject, LegacySkin, Metadata};
use rosu_map::Beatmap;
use rosu_map::section::hit_objects::{HitObjectKind, SliderPath};
use std::io::Cursor;

pub struct LegacyEncoder<'a> {
    skin: &'a LegacySkin,
}

impl<'a> LegacyEncoder<'a> {
    pub fn new(skin: &'a LegacySkin) -> Self {
        Self { skin }
    }

    /// Encodes the content into a buffer positioned at its start.
    pub fn encode(
        &self,
        content: &BeatmapContent,
        document: LegacyDocument,
    ) -> ConvertResult<Cursor<Vec<u8>>> {
        let text = self.encode_to_string(content, document)?;
        Ok(Cursor::new(text.into_bytes()))
    }

    pub fn encode_to_string(
        &self,
        content: &BeatmapContent,
        document: LegacyDocument,
    ) -> ConvertResult<String> {
        let mut beatmap = document.into_beatmap();

        apply_metadata(&mut beatmap, &content.metadata);
        apply_control_points(&mut beatmap, content)?;
        apply_hit_objects(&mut beatmap, content)?;
        apply_skin(&mut beatmap, self.skin);

        beatmap
            .encode_to_string()
            .map_err(|e| ConvertError::Encoding(format!("rosu_map encode failed: {}", e)))
    }
}

fn apply_metadata(beatmap: &mut Beatmap, metadata: &Metadata) {
    beatmap.title = metadata.title.clone();
    beatmap.artist = metadata.artist.clone();
    beatmap.creator = metadata.creator.clone();
    beatmap.version = metadata.version.clone();
    beatmap.audio_file = metadata.audio_file.clone();
}

/// Copies the times of one control point family back into the document.
fn sync_times<T, F>(
    kind: ControlPointKind,
    target: &mut [T],
    content: &BeatmapContent,
    time_of: F,
) -> ConvertResult<()>
where
    F: Fn(&mut T) -> &mut f64,
{
    let times: Vec<f64> = content.control_points_of(kind).map(|cp| cp.time).collect();

    if times.len() != target.len() {
        return Err(ConvertError::Encoding(format!(
            "{:?} control point count changed ({} in content, {} in document)",
            kind,
            times.len(),
            target.len()
        )));
    }

    for (point, time) in target.iter_mut().zip(times) {
        *time_of(point) = time;
    }

    Ok(())
}

fn apply_control_points(beatmap: &mut Beatmap, content: &BeatmapContent) -> ConvertResult<()> {
    let points = &mut beatmap.control_points;

    sync_times(ControlPointKind::Timing, &mut points.timing_points, content, |p| {
        &mut p.time
    })?;
    sync_times(
        ControlPointKind::Difficulty,
        &mut points.difficulty_points,
        content,
        |p| &mut p.time,
    )?;
    sync_times(ControlPointKind::Effect, &mut points.effect_points, content, |p| {
        &mut p.time
    })?;
    sync_times(ControlPointKind::Sample, &mut points.sample_points, content, |p| {
        &mut p.time
    })?;

    Ok(())
}

fn apply_hit_objects(beatmap: &mut Beatmap, content: &BeatmapContent) -> ConvertResult<()> {
    if content.hit_objects.len() != beatmap.hit_objects.len() {
        return Err(ConvertError::Encoding(format!(
            "hit object count changed ({} in content, {} in document)",
            content.hit_objects.len(),
            beatmap.hit_objects.len()
        )));
    }

    let mode = beatmap.mode;

    for (index, (object, legacy)) in content
        .hit_objects
        .iter()
        .zip(beatmap.hit_objects.iter_mut())
        .enumerate()
    {
        legacy.start_time = object.start_time;

        match &mut legacy.kind {
            HitObjectKind::Slider(slider) => {
                let Some(path) = object.path.as_ref() else {
                    return Err(ConvertError::Encoding(format!(
                        "slider #{} has no path",
                        index
                    )));
                };

                slider.path = SliderPath::new(mode, to_control_points(path), path.expected_distance);
            }
            HitObjectKind::Spinner(spinner) => {
                spinner.duration = required_duration(index, object)?;
            }
            HitObjectKind::Hold(hold) => {
                hold.duration = required_duration(index, object)?;
            }
            _ => {
                if object.has_duration() || object.has_path() {
                    return Err(ConvertError::Encoding(format!(
                        "hit object #{} cannot carry a duration or path in legacy format",
                        index
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Duration of a spinner or hold note, which must not carry a path.
fn required_duration(index: usize, object: &HitObject) -> ConvertResult<f64> {
    if object.has_path() {
        return Err(ConvertError::Encoding(format!(
            "hit object #{} has a path but is not a slider",
            index
        )));
    }

    object.duration.ok_or_else(|| {
        ConvertError::Encoding(format!("hit object #{} lost its duration", index))
    })
}

fn apply_skin(beatmap: &mut Beatmap, skin: &LegacySkin) {
    let (combo, custom) = legacy_colors(skin);
    beatmap.custom_combo_colors = combo;
    beatmap.custom_colors = custom;
}
