//! Truncation of time values to the integer milliseconds legacy charts store.

use crate::models::BeatmapContent;

/// Floors every control point time and hit object start time.
///
/// Objects with a duration and no path get their duration recomputed as
/// `floor(end) - floor(start)` from the untruncated start, so the legacy end
/// time lands on the floor of the original one. Slider durations come from
/// their path and are left alone.
pub fn truncate_times(content: &mut BeatmapContent) {
    for control_point in &mut content.control_points {
        control_point.time = control_point.time.floor();
    }

    for object in &mut content.hit_objects {
        // end time depends on start time, so it must be read first
        if object.path.is_none() {
            if let Some(end_time) = object.end_time() {
                object.duration = Some(end_time.floor() - object.start_time.floor());
            }
        }

        object.start_time = object.start_time.floor();
    }

    log::debug!(
        "TIME: truncated {} control points and {} hit objects",
        content.control_points.len(),
        content.hit_objects.len()
    );
}
