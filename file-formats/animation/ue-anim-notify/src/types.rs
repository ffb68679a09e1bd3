//! Serde models for exported animation objects
//!
//! Exports are arrays of loosely typed objects sharing a `Type`, `Name`,
//! `Outer` and `Properties` layout. Only the fields needed for notify
//! resolution are modelled; everything else is ignored on deserialization.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::{NotifyError, Result};
use crate::sequence::round_to;

/// `Type` of the animation clip export
pub const ANIM_SEQUENCE_TYPE: &str = "AnimSequence";

/// `Type` of the weapon sound notify objects referenced by the clip
pub const WEAPON_SOUND_TYPE: &str = "AnimNotify_WeaponSound";

/// A single object of the exported array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportObject {
    /// Object class discriminator (`Type`)
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,

    /// Object name
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    /// Name of the owning object
    #[serde(rename = "Outer", default)]
    pub outer: Option<String>,

    /// Raw property bag, decoded on demand per object kind
    #[serde(rename = "Properties", default)]
    pub properties: Value,
}

impl ExportObject {
    /// Check the `Type` discriminator
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }
}

/// Reference to another object (`ObjectName`/`ObjectPath` pair)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectReference {
    /// Class-qualified object name, e.g. `AkAudioEvent'Play_Fire'`
    #[serde(rename = "ObjectName", default)]
    pub object_name: Option<String>,

    /// Package path of the referenced object
    #[serde(rename = "ObjectPath", default)]
    pub object_path: Option<String>,
}

/// Properties of an `AnimSequence` export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimSequenceProperties {
    /// Number of sampled frames
    #[serde(rename = "NumFrames", default)]
    pub num_frames: Option<f64>,

    /// Clip length in seconds
    #[serde(rename = "SequenceLength", default)]
    pub sequence_length: Option<f64>,

    /// Notify events in clip order
    #[serde(rename = "Notifies", default, deserialize_with = "null_as_empty")]
    pub notifies: Vec<AnimNotifyEvent>,
}

/// One entry of `AnimSequence.Properties.Notifies`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimNotifyEvent {
    /// Notify name, `WeaponSound` for weapon audio
    #[serde(rename = "NotifyName", default)]
    pub notify_name: Option<String>,

    /// Trigger time in seconds, kept raw until the notify is used
    #[serde(rename = "Time", default)]
    pub time: Option<Value>,

    /// Linked time, present when `Time` is not exported
    #[serde(rename = "LinkValue", default)]
    pub link_value: Option<Value>,

    /// Notify object this event instantiates
    #[serde(rename = "Notify", default)]
    pub notify: Option<ObjectReference>,
}

impl AnimNotifyEvent {
    /// Trigger time: `Time`, then `LinkValue`, then integer zero
    ///
    /// Fails when the chosen value is not a JSON number.
    pub fn effective_time(&self) -> Result<NotifyTime> {
        match self.time.as_ref().or(self.link_value.as_ref()) {
            Some(value) => NotifyTime::from_json(value).ok_or_else(|| {
                NotifyError::InvalidNotifyTime {
                    value: value.to_string(),
                }
            }),
            None => Ok(NotifyTime::Int(0)),
        }
    }

    /// `Notify.ObjectName`, or an empty string when absent
    pub fn notify_object_name(&self) -> &str {
        self.notify
            .as_ref()
            .and_then(|n| n.object_name.as_deref())
            .unwrap_or("")
    }
}

/// A notify time that remembers whether it was exported as an integer
///
/// Integer times are written without a fractional part, float times always
/// carry one (`1` vs `1.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotifyTime {
    /// Integral JSON number
    Int(i64),
    /// Any other JSON number
    Float(f64),
}

impl NotifyTime {
    /// Classify a JSON number; `None` for non-numbers
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            _ => None,
        }
    }

    /// Seconds as a float
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Round float times to `places` decimals; integers are unchanged
    pub fn rounded(self, places: usize) -> Self {
        match self {
            Self::Int(_) => self,
            Self::Float(v) => Self::Float(round_to(v, places)),
        }
    }
}

impl Serialize for NotifyTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Self::Int(v) => serializer.serialize_i64(v),
            Self::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl fmt::Display for NotifyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

/// Properties of an `AnimNotify_WeaponSound` export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponSoundProperties {
    /// First-person audio event
    #[serde(rename = "Event_FP", default)]
    pub event_fp: Option<ObjectReference>,

    /// Third-person audio event
    #[serde(rename = "Event_TP", default)]
    pub event_tp: Option<ObjectReference>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_time_preference() {
        let event: AnimNotifyEvent =
            serde_json::from_str(r#"{"Time": 0.5, "LinkValue": 0.75}"#).unwrap();
        assert_eq!(event.effective_time().unwrap(), NotifyTime::Float(0.5));

        let event: AnimNotifyEvent = serde_json::from_str(r#"{"LinkValue": 2}"#).unwrap();
        assert_eq!(event.effective_time().unwrap(), NotifyTime::Int(2));

        let event: AnimNotifyEvent = serde_json::from_str(r#"{"Time": null}"#).unwrap();
        assert_eq!(event.effective_time().unwrap(), NotifyTime::Int(0));
    }

    #[test]
    fn test_non_numeric_time() {
        let event: AnimNotifyEvent = serde_json::from_str(r#"{"Time": "x"}"#).unwrap();
        assert!(matches!(
            event.effective_time(),
            Err(NotifyError::InvalidNotifyTime { .. })
        ));
    }

    #[test]
    fn test_notify_time_format() {
        assert_eq!(NotifyTime::Int(1).to_string(), "1");
        assert_eq!(NotifyTime::Float(1.0).to_string(), "1.0");
        assert_eq!(NotifyTime::Int(3).rounded(4), NotifyTime::Int(3));
        assert_eq!(NotifyTime::Float(0.123456).rounded(4), NotifyTime::Float(0.1235));
        assert_eq!(
            NotifyTime::from_json(&serde_json::json!(1.0)),
            Some(NotifyTime::Float(1.0))
        );
        assert_eq!(NotifyTime::from_json(&serde_json::json!(true)), None);
    }

    #[test]
    fn test_notify_object_name() {
        let event: AnimNotifyEvent = serde_json::from_str(
            r#"{"Notify": {"ObjectName": "AnimNotify_WeaponSound'AS_Fire:N_0'"}}"#,
        )
        .unwrap();
        assert_eq!(event.notify_object_name(), "AnimNotify_WeaponSound'AS_Fire:N_0'");

        let event = AnimNotifyEvent::default();
        assert_eq!(event.notify_object_name(), "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let object: ExportObject = serde_json::from_str(
            r#"{"Type": "AnimSequence", "Name": "AS_Fire", "Flags": "RF_Public", "Properties": {"NumFrames": 30}}"#,
        )
        .unwrap();
        assert!(object.is_kind(ANIM_SEQUENCE_TYPE));
        assert_eq!(object.name.as_deref(), Some("AS_Fire"));
        assert!(object.outer.is_none());
    }

    #[test]
    fn test_null_notifies() {
        let props: AnimSequenceProperties =
            serde_json::from_str(r#"{"NumFrames": 30, "Notifies": null}"#).unwrap();
        assert!(props.notifies.is_empty());
    }
}
