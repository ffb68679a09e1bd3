//! Frame rate and frame index computation for animation sequences

use crate::error::{NotifyError, Result};
use crate::types::AnimSequenceProperties;

/// Decimal places kept for frame rates and notify times
pub const TIME_PRECISION: usize = 4;

/// Timing information of an `AnimSequence` export
#[derive(Debug, Clone, PartialEq)]
pub struct AnimSequenceInfo {
    /// Export name of the sequence, if present
    pub name: Option<String>,
    /// Number of sampled frames
    pub num_frames: f64,
    /// Clip length in seconds
    pub sequence_length: f64,
    /// Frames per second, rounded to [`TIME_PRECISION`] places
    pub fps: f64,
}

impl AnimSequenceInfo {
    /// Validate the timing fields of a sequence
    ///
    /// Both `NumFrames` and `SequenceLength` must be present and non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ue_anim_notify::{AnimSequenceInfo, AnimSequenceProperties};
    ///
    /// let props = AnimSequenceProperties {
    ///     num_frames: Some(60.0),
    ///     sequence_length: Some(2.0),
    ///     ..Default::default()
    /// };
    /// let info = AnimSequenceInfo::from_properties(None, &props).unwrap();
    /// assert_eq!(info.fps, 30.0);
    /// assert_eq!(info.frame_at(0.5), 15);
    /// ```
    pub fn from_properties(name: Option<String>, props: &AnimSequenceProperties) -> Result<Self> {
        match (props.num_frames, props.sequence_length) {
            (Some(num_frames), Some(sequence_length))
                if num_frames != 0.0 && sequence_length != 0.0 =>
            {
                let fps = round_to(num_frames / sequence_length, TIME_PRECISION);
                Ok(Self {
                    name,
                    num_frames,
                    sequence_length,
                    fps,
                })
            }
            (num_frames, sequence_length) => Err(NotifyError::InsufficientAnimationData {
                num_frames,
                sequence_length,
            }),
        }
    }

    /// Frame index for a time in seconds, rounding halves to even
    pub fn frame_at(&self, time_sec: f64) -> i64 {
        (time_sec * self.fps).round_ties_even() as i64
    }
}

/// Round to a number of decimal places
///
/// Rounds on the exact binary value, so `2.675` becomes `2.67` and exact
/// halves go to the even digit.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}
