//! Audio classification.

use crate::compose::{AudioEntry, TagAccumulator, TrackClassifier};
use crate::format::{canonical_audio_format, channels_from_count, channels_from_layout};
use crate::language::audio_language;
use crate::track::{AudioTrack, Track};

/// Classifier that turns audio tracks into `(LANG, "FORMAT CHANNELS")` entries.
///
/// Entries are recorded in encounter order, duplicates included; merging
/// languages that share a description happens when the tag is finalized.
pub struct AudioClassifier {
    _private: (),
}

impl AudioClassifier {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Entry for a single audio track.
    pub fn entry(&self, track: &AudioTrack) -> AudioEntry {
        let channels = match track.channel_layout.as_deref() {
            Some(layout) if track.has_channel_layout() => channels_from_layout(layout),
            _ => channels_from_count(track.channel_s.unwrap_or(0)),
        };
        let format = canonical_audio_format(&track.format, track.format_profile.as_deref());

        AudioEntry::new(audio_language(track), format!("{} {}", format, channels))
    }
}

impl Default for AudioClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackClassifier for AudioClassifier {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn classify(&self, track: &Track, tags: &mut TagAccumulator) -> bool {
        let Track::Audio(audio) = track else {
            return false;
        };

        let entry = self.entry(audio);
        tracing::debug!(
            language = %entry.language,
            description = %entry.description,
            "classified audio track"
        );
        tags.push_audio(entry);
        true
    }
}
