//! Sound event extraction from an animation export

use serde::Serialize;

use crate::document::ExportDocument;
use crate::error::Result;
use crate::sequence::{AnimSequenceInfo, TIME_PRECISION};
use crate::types::NotifyTime;

/// Notify name of weapon sound events
pub const WEAPON_SOUND_NOTIFY: &str = "WeaponSound";

/// One extracted sound event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundEventRow {
    /// Notify time in seconds; float times are rounded to four places
    #[serde(rename = "Time (sec)")]
    pub time_sec: NotifyTime,
    /// Frame index at the sequence frame rate
    #[serde(rename = "Frame")]
    pub frame: i64,
    /// Audio event name
    #[serde(rename = "Sound")]
    pub sound: String,
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// `NotifyName` of the events to extract
    pub notify_name: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            notify_name: WEAPON_SOUND_NOTIFY.to_string(),
        }
    }
}

/// Extract `WeaponSound` notify rows from a document
pub fn extract_sound_events(document: &ExportDocument) -> Result<Vec<SoundEventRow>> {
    extract_sound_events_with(document, &ExtractOptions::default())
}

/// Extract notify rows with custom options
///
/// Rows follow the order of the sequence's `Notifies` list. Only the time of
/// a matching notify is interpreted, so other notifies may carry any value.
pub fn extract_sound_events_with(
    document: &ExportDocument,
    options: &ExtractOptions,
) -> Result<Vec<SoundEventRow>> {
    let (object, props) = document.anim_sequence()?;
    let info = AnimSequenceInfo::from_properties(object.name.clone(), &props)?;
    let index = document.weapon_sound_index();

    log::debug!(
        "Sequence {}: {} frames over {}s ({} fps), {} notifies, {} sound objects",
        info.name.as_deref().unwrap_or("<unnamed>"),
        info.num_frames,
        info.sequence_length,
        info.fps,
        props.notifies.len(),
        index.len()
    );

    let rows: Vec<SoundEventRow> = props
        .notifies
        .iter()
        .filter(|notify| notify.notify_name.as_deref() == Some(options.notify_name.as_str()))
        .map(|notify| {
            let time = notify.effective_time()?;
            let key = notify.notify_object_name();
            let sound = index.sound_name(key);
            if index.get(key).is_none() {
                log::debug!("Unresolved notify reference '{key}'");
            }

            Ok(SoundEventRow {
                time_sec: time.rounded(TIME_PRECISION),
                frame: info.frame_at(time.as_f64()),
                sound,
            })
        })
        .collect::<Result<_>>()?;

    log::info!("Extracted {} sound events", rows.len());
    Ok(rows)
}
