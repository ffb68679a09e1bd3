//! Weapon sound notify lookup and audio event name resolution

use std::collections::HashMap;

use crate::types::{ExportObject, WEAPON_SOUND_TYPE, WeaponSoundProperties};

/// Sound name used when a notify cannot be resolved to an audio event
pub const UNKNOWN_SOUND: &str = "Unknown";

const AK_AUDIO_EVENT_PREFIX: &str = "AkAudioEvent'";

/// Build the reference key a notify uses to point at its weapon sound object
///
/// # Examples
///
/// ```
/// use ue_anim_notify::reference_key;
///
/// assert_eq!(
///     reference_key("AS_Rifle_Fire", "AnimNotify_WeaponSound_0"),
///     "AnimNotify_WeaponSound'AS_Rifle_Fire:AnimNotify_WeaponSound_0'"
/// );
/// ```
pub fn reference_key(outer: &str, name: &str) -> String {
    format!("{WEAPON_SOUND_TYPE}'{outer}:{name}'")
}

/// Strip the `AkAudioEvent'...'` class wrapper from an object name
///
/// Names without the wrapper are returned unchanged.
pub fn strip_event_wrapper(raw: &str) -> &str {
    match raw.strip_prefix(AK_AUDIO_EVENT_PREFIX) {
        Some(inner) => inner.trim_matches('\''),
        None => raw,
    }
}

/// Resolve the audio event name of a weapon sound object
///
/// The first-person event is preferred; empty names fall through to the
/// third-person event and finally to [`UNKNOWN_SOUND`].
pub fn resolve_sound_name(props: &WeaponSoundProperties) -> String {
    [&props.event_fp, &props.event_tp]
        .into_iter()
        .flatten()
        .filter_map(|reference| reference.object_name.as_deref())
        .find(|name| !name.is_empty())
        .map_or_else(
            || UNKNOWN_SOUND.to_string(),
            |name| strip_event_wrapper(name).to_string(),
        )
}

/// Lookup table from reference key to weapon sound properties
#[derive(Debug, Clone, Default)]
pub struct WeaponSoundIndex {
    entries: HashMap<String, WeaponSoundProperties>,
}

impl WeaponSoundIndex {
    /// Index every `AnimNotify_WeaponSound` object; later duplicates win
    pub fn build<'a, I>(objects: I) -> Self
    where
        I: IntoIterator<Item = &'a ExportObject>,
    {
        let mut entries = HashMap::new();

        for object in objects {
            if !object.is_kind(WEAPON_SOUND_TYPE) {
                continue;
            }

            let (Some(outer), Some(name)) = (object.outer.as_deref(), object.name.as_deref())
            else {
                log::warn!("Skipping {WEAPON_SOUND_TYPE} without Outer/Name");
                continue;
            };

            let props = match serde_json::from_value::<WeaponSoundProperties>(
                object.properties.clone(),
            ) {
                Ok(props) => props,
                Err(err) => {
                    log::warn!("Unreadable properties on {outer}:{name}: {err}");
                    WeaponSoundProperties::default()
                }
            };

            let key = reference_key(outer, name);
            if entries.insert(key.clone(), props).is_some() {
                log::debug!("Duplicate weapon sound object {key}, keeping the later one");
            }
        }

        Self { entries }
    }

    /// Properties for a reference key
    pub fn get(&self, key: &str) -> Option<&WeaponSoundProperties> {
        self.entries.get(key)
    }

    /// Sound name for a reference key, [`UNKNOWN_SOUND`] when unresolved
    pub fn sound_name(&self, key: &str) -> String {
        self.get(key)
            .map_or_else(|| UNKNOWN_SOUND.to_string(), resolve_sound_name)
    }

    /// Number of indexed objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
