//! Speech planning for reading captions aloud.
//!
//! Builds the utterance sequence for a meme's captions: voice selection from
//! the platform's voice list, volume-slider normalization, and the icon-level
//! bucketing for the volume indicator. Audio playback belongs to the caller's
//! speech-synthesis service; this module only decides what to say, with which
//! voice, at what volume.
//!
//! # Example
//!
//! ```
//! use memelayout::speech::{ReadAloud, Voice, select_voice};
//!
//! let voices = [
//!     Voice { name: "Alice", lang: "en-US", is_default: true },
//!     Voice { name: "Bram", lang: "nl-NL", is_default: false },
//! ];
//!
//! let plan = ReadAloud::new("TOP TEXT", "BOTTOM TEXT")
//!     .voice(select_voice(&voices, "Bram").copied())
//!     .volume_slider(80);
//!
//! let [first, second] = plan.utterances();
//! assert_eq!(first.text, "TOP TEXT");
//! assert_eq!(second.text, "BOTTOM TEXT");
//! assert_eq!(first.voice.unwrap().name, "Bram");
//! ```

#[cfg(feature = "alloc")]
use alloc::{format, string::String};

/// A speech-synthesis voice as reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Voice<'a> {
    /// Platform voice name, used for selection.
    pub name: &'a str,
    /// BCP 47 language tag.
    pub lang: &'a str,
    /// Whether the platform reports this as its default voice.
    pub is_default: bool,
}

impl Voice<'_> {
    /// Display label for a voice picker: `"Name (lang)"`, with a
    /// `" -- DEFAULT"` suffix on the platform default.
    #[cfg(feature = "alloc")]
    pub fn label(&self) -> String {
        if self.is_default {
            format!("{} ({}) -- DEFAULT", self.name, self.lang)
        } else {
            format!("{} ({})", self.name, self.lang)
        }
    }
}

/// Find a voice by exact name.
///
/// `None` means the caller should let the platform default apply.
pub fn select_voice<'a, 'v>(voices: &'a [Voice<'v>], name: &str) -> Option<&'a Voice<'v>> {
    voices.iter().find(|v| v.name == name)
}

/// Normalize a 0–100 volume slider to the `[0.0, 1.0]` range speech APIs
/// expect. Values above 100 clamp.
pub fn normalized_volume(slider: u8) -> f32 {
    slider.min(100) as f32 / 100.0
}

/// Volume-indicator icon bucket for a 0–100 slider value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    /// Slider at 0.
    Muted,
    /// Slider 1–33.
    Low,
    /// Slider 34–66.
    Medium,
    /// Slider 67–100.
    High,
}

impl VolumeLevel {
    /// Bucket a slider value. Values above 100 clamp to [`High`](Self::High).
    pub fn from_slider(slider: u8) -> Self {
        match slider {
            0 => Self::Muted,
            1..=33 => Self::Low,
            34..=66 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// One utterance to hand to the speech service.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Utterance<'a> {
    /// Text to speak.
    pub text: &'a str,
    /// Selected voice, or `None` for the platform default.
    pub voice: Option<Voice<'a>>,
    /// Volume in `[0.0, 1.0]`.
    pub volume: f32,
}

/// Read-aloud plan for a meme's two captions.
///
/// Produces the utterances in on-screen order: top caption first, then
/// bottom, both with the same voice and volume. Empty captions are still
/// spoken (as silence) so the sequence length is stable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReadAloud<'a> {
    top: &'a str,
    bottom: &'a str,
    voice: Option<Voice<'a>>,
    slider: u8,
}

impl<'a> ReadAloud<'a> {
    /// Plan for the given captions, with default voice and full volume.
    pub fn new(top: &'a str, bottom: &'a str) -> Self {
        Self {
            top,
            bottom,
            voice: None,
            slider: 100,
        }
    }

    /// Set the selected voice (`None` keeps the platform default).
    pub fn voice(mut self, voice: Option<Voice<'a>>) -> Self {
        self.voice = voice;
        self
    }

    /// Set the volume slider position (0–100).
    pub fn volume_slider(mut self, slider: u8) -> Self {
        self.slider = slider;
        self
    }

    /// Volume-indicator bucket for the current slider position.
    pub fn volume_level(&self) -> VolumeLevel {
        VolumeLevel::from_slider(self.slider)
    }

    /// Build the utterance sequence: top caption, then bottom.
    pub fn utterances(&self) -> [Utterance<'a>; 2] {
        let volume = normalized_volume(self.slider);
        [
            Utterance {
                text: self.top,
                voice: self.voice,
                volume,
            },
            Utterance {
                text: self.bottom,
                voice: self.voice,
                volume,
            },
        ]
    }
}
