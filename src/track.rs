//! Track records and the input boundary.
//!
//! Track records come from an external media inspection engine. They can be
//! built directly or converted from a JSON dump of the engine's output.
//! Two dump shapes are recognized:
//!
//! - pymediainfo `to_data()`: `{"tracks": [{"track_type": "Video", ...}]}`
//! - mediainfo CLI `--Output=JSON`: `{"media": {"track": [{"@type": "Video", ...}]}}`

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::Error;

/// The kind of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Video,
    Audio,
    Text,
    Other,
}

impl TrackKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Video => "Video",
            TrackKind::Audio => "Audio",
            TrackKind::Text => "Text",
            TrackKind::Other => "Other",
        }
    }

    /// Parse a track type as reported by mediainfo.
    ///
    /// Anything that is not a video, audio or text stream maps to `Other`.
    pub fn from_type(s: &str) -> Self {
        match s {
            "Video" => TrackKind::Video,
            "Audio" => TrackKind::Audio,
            "Text" => TrackKind::Text,
            _ => TrackKind::Other,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Video stream metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoTrack {
    /// Frame width in pixels
    pub width: u32,
    /// Codec name as reported by mediainfo (e.g. "AVC", "HEVC")
    pub format: String,
    /// Scan type (e.g. "Progressive", "Interlaced")
    pub scan_type: Option<String>,
}

impl VideoTrack {
    pub fn new(width: u32, format: impl Into<String>) -> Self {
        Self {
            width,
            format: format.into(),
            scan_type: None,
        }
    }

    pub fn with_scan_type(mut self, scan_type: impl Into<String>) -> Self {
        self.scan_type = Some(scan_type.into());
        self
    }

    /// Whether the stream is interlaced. Only the exact value "Interlaced" counts.
    pub fn is_interlaced(&self) -> bool {
        self.scan_type.as_deref() == Some("Interlaced")
    }
}

/// Audio stream metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioTrack {
    /// Codec name (e.g. "AC-3", "E-AC-3", "MPEG Audio")
    pub format: String,
    /// Codec profile (e.g. "Layer 3")
    pub format_profile: Option<String>,
    /// Space separated channel positions (e.g. "L R C LFE Ls Rs")
    pub channel_layout: Option<String>,
    /// Channel count, used when no layout is reported.
    ///
    /// Dumps sometimes report several counts ("8 / 6"); such values are
    /// not a count and load as `None`, which renders as "0.0".
    pub channel_s: Option<u32>,
    /// Short code or full language name
    pub language: Option<String>,
    /// Alternate language representations; index 3 usually holds the ISO 639-2 code
    pub other_language: Vec<String>,
}

impl AudioTrack {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    pub fn with_format_profile(mut self, profile: impl Into<String>) -> Self {
        self.format_profile = Some(profile.into());
        self
    }

    pub fn with_channel_layout(mut self, layout: impl Into<String>) -> Self {
        self.channel_layout = Some(layout.into());
        self
    }

    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channel_s = Some(channels);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_other_language<I, S>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_language = other.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_other_language(&self) -> bool {
        !self.other_language.is_empty()
    }

    pub fn has_channel_layout(&self) -> bool {
        self.channel_layout.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Subtitle stream metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTrack {
    /// Short code, `NU`-prefixed code or full language name
    pub language: Option<String>,
    /// Alternate language representations
    pub other_language: Vec<String>,
    /// Free text track title (may hint at "SDH" or "CC")
    pub title: Option<String>,
}

impl TextTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_other_language<I, S>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_language = other.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn has_other_language(&self) -> bool {
        !self.other_language.is_empty()
    }

    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// A single media stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Track {
    Video(VideoTrack),
    Audio(AudioTrack),
    Text(TextTrack),
    /// General, menu, image and other streams the composer ignores
    Other,
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        match self {
            Track::Video(_) => TrackKind::Video,
            Track::Audio(_) => TrackKind::Audio,
            Track::Text(_) => TrackKind::Text,
            Track::Other => TrackKind::Other,
        }
    }

    /// Build a track from one entry of a JSON dump.
    ///
    /// Fails only when the entry is not an object. Missing or malformed
    /// fields are treated as absent.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::InvalidInput(format!("track entry is not an object: {}", value)))?;

        let kind = match text(obj, TRACK_TYPE) {
            Some(t) => TrackKind::from_type(&t),
            None => {
                tracing::warn!("track entry without a type, ignoring it");
                TrackKind::Other
            }
        };

        let track = match kind {
            TrackKind::Video => Track::Video(VideoTrack {
                width: number(obj, WIDTH).unwrap_or(0),
                format: text(obj, FORMAT).unwrap_or_default(),
                scan_type: text(obj, SCAN_TYPE),
            }),
            TrackKind::Audio => Track::Audio(AudioTrack {
                format: text(obj, FORMAT).unwrap_or_default(),
                format_profile: text(obj, FORMAT_PROFILE),
                channel_layout: text(obj, CHANNEL_LAYOUT),
                channel_s: number(obj, CHANNELS),
                language: text(obj, LANGUAGE),
                other_language: list(obj, OTHER_LANGUAGE),
            }),
            TrackKind::Text => Track::Text(TextTrack {
                language: text(obj, LANGUAGE),
                other_language: list(obj, OTHER_LANGUAGE),
                title: text(obj, TITLE),
            }),
            TrackKind::Other => Track::Other,
        };

        Ok(track)
    }
}

// =============================================================================
// INPUT BOUNDARY
// =============================================================================

/// Anything the composer can pull track records from.
///
/// Implementations must reject inputs that are not a recognized track
/// collection with [`Error::InvalidInput`].
pub trait TrackSource {
    fn tracks(&self) -> Result<Cow<'_, [Track]>, Error>;
}

impl TrackSource for [Track] {
    fn tracks(&self) -> Result<Cow<'_, [Track]>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl TrackSource for Vec<Track> {
    fn tracks(&self) -> Result<Cow<'_, [Track]>, Error> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl TrackSource for Value {
    fn tracks(&self) -> Result<Cow<'_, [Track]>, Error> {
        parse_tracks(self).map(Cow::Owned)
    }
}

/// Convert a JSON dump into track records, preserving track order.
pub fn parse_tracks(value: &Value) -> Result<Vec<Track>, Error> {
    track_entries(value)?.iter().map(Track::from_json).collect()
}

/// Parse JSON text and convert it into track records.
pub fn tracks_from_json(json: &str) -> Result<Vec<Track>, Error> {
    let value: Value = serde_json::from_str(json)?;
    parse_tracks(&value)
}

fn track_entries(value: &Value) -> Result<&[Value], Error> {
    let entries = if let Some(tracks) = value.get("tracks") {
        tracks
    } else if let Some(tracks) = value.get("media").and_then(|m| m.get("track")) {
        tracks
    } else {
        return Err(Error::InvalidInput(
            "expected an object with `tracks` or `media.track`".to_string(),
        ));
    };

    entries
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::InvalidInput("track list is not an array".to_string()))
}

// =============================================================================
// FIELD ACCESS
// =============================================================================

/// A field name in both dump dialects: (pymediainfo, mediainfo CLI).
type Field = (&'static str, &'static str);

const TRACK_TYPE: Field = ("track_type", "@type");
const WIDTH: Field = ("width", "Width");
const FORMAT: Field = ("format", "Format");
const SCAN_TYPE: Field = ("scan_type", "ScanType");
const FORMAT_PROFILE: Field = ("format_profile", "Format_Profile");
const CHANNEL_LAYOUT: Field = ("channel_layout", "ChannelLayout");
const CHANNELS: Field = ("channel_s", "Channels");
const LANGUAGE: Field = ("language", "Language");
const OTHER_LANGUAGE: Field = ("other_language", "OtherLanguage");
const TITLE: Field = ("title", "Title");

fn lookup<'a>(obj: &'a Map<String, Value>, (key, alias): Field) -> Option<&'a Value> {
    obj.get(key).or_else(|| obj.get(alias))
}

/// String field. Empty strings count as absent.
fn text(obj: &Map<String, Value>, field: Field) -> Option<String> {
    match lookup(obj, field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Unsigned integer field, accepting numbers and numeric strings.
fn number(obj: &Map<String, Value>, field: Field) -> Option<u32> {
    let parsed = match lookup(obj, field)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    if parsed.is_none() {
        tracing::warn!(field = field.0, "unparseable numeric field, treating it as absent");
    }
    parsed
}

/// List of strings. Non-string items are skipped.
fn list(obj: &Map<String, Value>, field: Field) -> Vec<String> {
    match lookup(obj, field) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
