//! Subtitle classification.

use crate::compose::{TagAccumulator, TrackClassifier};
use crate::language::{is_non_hearing, subtitle_code, NON_HEARING_PREFIX};
use crate::track::{TextTrack, Track};

/// Classifier that records a language code per subtitle track.
///
/// SDH / closed caption tracks get an `NU` prefix ("NUENG"). Tracks whose
/// language cannot be recovered contribute nothing.
pub struct SubtitleClassifier {
    _private: (),
}

impl SubtitleClassifier {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Code for a single subtitle track, if any.
    pub fn code(&self, track: &TextTrack) -> Option<String> {
        let code = subtitle_code(track)?;
        if track.has_title() && is_non_hearing(track.title.as_deref()) {
            Some(format!("{}{}", NON_HEARING_PREFIX, code))
        } else {
            Some(code)
        }
    }
}

impl Default for SubtitleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackClassifier for SubtitleClassifier {
    fn name(&self) -> &'static str {
        "subtitle"
    }

    fn classify(&self, track: &Track, tags: &mut TagAccumulator) -> bool {
        let Track::Text(text) = track else {
            return false;
        };

        match self.code(text) {
            Some(code) => {
                tracing::debug!(%code, "classified subtitle track");
                tags.push_subtitle(code);
            }
            None => {
                tracing::warn!(
                    language = ?text.language,
                    title = ?text.title,
                    "subtitle track has no recognizable language, skipping it"
                );
            }
        }
        true
    }
}
