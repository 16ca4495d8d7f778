//! Codec, resolution and channel normalization.
//!
//! Turns raw mediainfo values into the tokens used in release tags:
//! resolution buckets, canonical codec names and `count.lfe` channel notation.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Resolution buckets a computed height snaps to.
pub const RESOLUTIONS: [u32; 4] = [576, 720, 1080, 2160];

/// Heights at or below this are tagged "SD".
pub const SD_MAX_HEIGHT: u32 = 576;

/// Default snapping tolerance in pixels (exclusive).
pub const DEFAULT_SNAP_TOLERANCE: u32 = 10;

// Quoted 2-3 letter language code, e.g. 'ITA'
static QUOTED_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([A-Z]{2,3})'").unwrap());

/// Height of the 16:9 frame with the given width, truncated.
///
/// Releases are tagged by their 16:9 equivalent, so a 1920x800 scope
/// encode is still "1080p".
pub fn fake_height(width: u32) -> u32 {
    (u64::from(width) * 9 / 16) as u32
}

/// Snap a height to the nearest resolution bucket closer than `tolerance`.
pub fn snap_height(height: u32, tolerance: u32) -> u32 {
    RESOLUTIONS
        .iter()
        .copied()
        .filter(|res| res.abs_diff(height) < tolerance)
        .min_by_key(|res| res.abs_diff(height))
        .unwrap_or(height)
}

/// Canonical release token for a mediainfo video format. Unknown formats pass through.
pub fn canonical_video_codec(format: &str) -> &str {
    match format {
        "MPEG Video" => "MPEG2",
        "MPEG-4 Visual" => "XviD",
        "AVC" => "H264",
        "HEVC" => "H265",
        "VP08" => "VP8",
        "VP09" => "VP9",
        other => other,
    }
}

/// Scan suffix: "i" for interlaced, "p" otherwise.
pub fn scan_suffix(interlaced: bool) -> &'static str {
    if interlaced {
        "i"
    } else {
        "p"
    }
}

/// Channel notation from a layout like "L R C LFE Ls Rs" -> "5.1".
pub fn channels_from_layout(layout: &str) -> String {
    let tokens: Vec<&str> = layout.split_whitespace().collect();
    let lfe = usize::from(tokens.iter().any(|t| *t == "LFE"));
    format!("{}.{}", tokens.len().saturating_sub(lfe), lfe)
}

/// Channel notation from a bare channel count: 2 -> "2.0".
pub fn channels_from_count(count: u32) -> String {
    format!("{}.0", count)
}

/// Canonical audio format token: MPEG Layer 3 becomes "MP3", hyphens are dropped.
pub fn canonical_audio_format(format: &str, profile: Option<&str>) -> String {
    if format == "MPEG Audio" && profile == Some("Layer 3") {
        return "MP3".to_string();
    }
    format.replace('-', "")
}

/// Remove quotes around uppercase 2-3 letter codes: `'ITA'` -> `ITA`.
pub fn strip_quoted_codes(s: &str) -> Cow<'_, str> {
    QUOTED_CODE_PATTERN.replace_all(s, "$1")
}
