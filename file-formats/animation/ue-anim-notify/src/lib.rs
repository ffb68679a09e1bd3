//! Reader for exported Unreal Engine animation sequences.
//!
//! Exports are JSON arrays of objects discriminated by `Type`. This crate
//! finds the `AnimSequence` clip, converts its `WeaponSound` notify times to
//! frame indices and resolves each notify to the Wwise audio event named by
//! its `AnimNotify_WeaponSound` object.
//!
//! # Examples
//!
//! ```
//! use ue_anim_notify::{ExportDocument, extract_sound_events};
//!
//! let json = r#"[
//!     {"Type": "AnimSequence", "Name": "AS_Fire", "Properties": {
//!         "NumFrames": 30, "SequenceLength": 1.0,
//!         "Notifies": [{"NotifyName": "WeaponSound", "Time": 0.1,
//!             "Notify": {"ObjectName": "AnimNotify_WeaponSound'AS_Fire:N_0'"}}]}},
//!     {"Type": "AnimNotify_WeaponSound", "Name": "N_0", "Outer": "AS_Fire", "Properties": {
//!         "Event_FP": {"ObjectName": "AkAudioEvent'Play_Fire'"}}}
//! ]"#;
//!
//! let document = ExportDocument::from_json_str(json)?;
//! let rows = extract_sound_events(&document)?;
//! assert_eq!(rows[0].frame, 3);
//! assert_eq!(rows[0].sound, "Play_Fire");
//! # Ok::<(), ue_anim_notify::NotifyError>(())
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod sequence;
pub mod sound;
pub mod types;

pub use document::ExportDocument;
pub use error::{NotifyError, Result};
pub use export::{
    CSV_HEADERS, CsvOptions, DEFAULT_OUTPUT_SUFFIX, output_path_for, write_csv, write_csv_file,
};
pub use extract::{
    ExtractOptions, SoundEventRow, WEAPON_SOUND_NOTIFY, extract_sound_events,
    extract_sound_events_with,
};
pub use sequence::{AnimSequenceInfo, TIME_PRECISION, round_to};
pub use sound::{
    UNKNOWN_SOUND, WeaponSoundIndex, reference_key, resolve_sound_name, strip_event_wrapper,
};
pub use types::{
    ANIM_SEQUENCE_TYPE, AnimNotifyEvent, AnimSequenceProperties, ExportObject, NotifyTime,
    ObjectReference, WEAPON_SOUND_TYPE, WeaponSoundProperties,
};
