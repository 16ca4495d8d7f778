//! Core types for tag composition.

use std::fmt;

/// One classified audio track: its language and `format channels` description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioEntry {
    pub language: String,
    pub description: String,
}

impl AudioEntry {
    pub fn new(language: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            description: description.into(),
        }
    }
}

/// Tag fragments collected while walking the tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAccumulator {
    /// Resolution and codec of the last video track seen
    pub video_tag: String,
    /// Audio entries in encounter order, duplicates included
    pub audio_entries: Vec<AudioEntry>,
    /// Subtitle codes in encounter order, possibly `NU`-prefixed
    pub subtitle_codes: Vec<String>,
}

impl TagAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the video tag. Releases carry one video stream, so the last one wins.
    pub fn set_video(&mut self, tag: impl Into<String>) {
        self.video_tag = tag.into();
    }

    pub fn push_audio(&mut self, entry: AudioEntry) {
        self.audio_entries.push(entry);
    }

    pub fn push_subtitle(&mut self, code: impl Into<String>) {
        self.subtitle_codes.push(code.into());
    }
}

/// Languages sharing one audio description, e.g. "ITA ENG AC3 5.1".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGroup {
    pub description: String,
    /// Distinct languages in first-seen order
    pub languages: Vec<String>,
}

impl ChannelGroup {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            languages: Vec::new(),
        }
    }

    /// Add a language unless the group already has it.
    pub fn add_language(&mut self, language: &str) {
        if !self.languages.iter().any(|l| l == language) {
            self.languages.push(language.to_string());
        }
    }
}

impl fmt::Display for ChannelGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for language in &self.languages {
            write!(f, "{} ", language)?;
        }
        write!(f, "{}", self.description)
    }
}

/// The subtitle segment of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleSummary {
    /// No subtitle tracks with a usable language
    Empty,
    /// Distinct codes in first-seen order, rendered "Sub ITA ENG"
    Listed(Vec<String>),
    /// Too many languages to list
    MultiSub,
}

impl fmt::Display for SubtitleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtitleSummary::Empty => Ok(()),
            SubtitleSummary::Listed(codes) => write!(f, "Sub {}", codes.join(" ")),
            SubtitleSummary::MultiSub => write!(f, "MultiSub"),
        }
    }
}

/// A finalized release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    /// e.g. "1080p H264" or "SD XviD"
    pub video: String,
    /// Merged audio entries, e.g. ["ITA ENG AC3 5.1", "ENG DTS 5.1"]
    pub audio: Vec<String>,
    pub subtitles: SubtitleSummary,
}

impl ReleaseTag {
    /// Render the tag.
    ///
    /// Segments are always joined by a single space, so an empty audio or
    /// subtitle segment leaves a double space. `collapse_whitespace` drops
    /// empty segments instead.
    pub fn render(&self, collapse_whitespace: bool) -> String {
        let audio = self.audio.join(" ");
        let subtitles = self.subtitles.to_string();
        let segments = [self.video.as_str(), audio.as_str(), subtitles.as_str()];

        if collapse_whitespace {
            segments
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            segments.join(" ")
        }
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
