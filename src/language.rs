//! Language code recovery for audio and subtitle tracks.
//!
//! mediainfo reports languages inconsistently: ISO 639-1 codes, full names,
//! `NU`-prefixed codes for non-hearing subtitles, or a list of alternate
//! spellings where index 3 is usually the ISO 639-2 code. These helpers
//! recover a 2-3 letter uppercase code from whatever is available.

use crate::track::{AudioTrack, TextTrack};

/// Code used for audio tracks with no language information.
pub const UNDETERMINED: &str = "UND";

/// Prefix marking non-hearing (SDH/CC) subtitles.
pub const NON_HEARING_PREFIX: &str = "NU";

// Index of the ISO 639-2 code in mediainfo's alternate language list
const OTHER_LANGUAGE_CODE_INDEX: usize = 3;

// Title markers for subtitles aimed at deaf and hard-of-hearing viewers.
// "Forced" is not one of them.
const NON_HEARING_MARKERS: [&str; 2] = ["SDH", "CC"];

// ISO 639-2/B codes for the most common full language names
const LANGUAGE_NAMES: [(&str, &str); 24] = [
    ("italian", "ITA"),
    ("english", "ENG"),
    ("french", "FRA"),
    ("spanish", "SPA"),
    ("german", "GER"),
    ("portuguese", "POR"),
    ("russian", "RUS"),
    ("chinese", "CHI"),
    ("japanese", "JPN"),
    ("korean", "KOR"),
    ("arabic", "ARA"),
    ("dutch", "DUT"),
    ("swedish", "SWE"),
    ("norwegian", "NOR"),
    ("danish", "DAN"),
    ("finnish", "FIN"),
    ("polish", "POL"),
    ("czech", "CZE"),
    ("hungarian", "HUN"),
    ("turkish", "TUR"),
    ("greek", "GRE"),
    ("hebrew", "HEB"),
    ("thai", "THA"),
    ("hindi", "HIN"),
];

/// Look up the code for a full language name, case-insensitively.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    LANGUAGE_NAMES
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, code)| *code)
}

/// Uppercase language of an audio track, `UND` when unknown.
pub fn audio_language(track: &AudioTrack) -> String {
    let iso_code = if track.has_other_language() {
        track.other_language.get(OTHER_LANGUAGE_CODE_INDEX)
    } else {
        None
    };

    let lang = match iso_code {
        Some(code) => code.as_str(),
        None => track
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNDETERMINED),
    };
    lang.to_uppercase()
}

/// Recover the subtitle language code of a text track.
///
/// Tried in order: the ISO code slot of the alternate list, the first
/// 3-letter alternate, the `language` field (with any `NU` prefix removed),
/// then the full-name table or a short raw value. Returns `None` when
/// nothing usable is found.
pub fn subtitle_code(track: &TextTrack) -> Option<String> {
    let from_alternates = if !track.has_other_language() {
        None
    } else if track.other_language.len() > OTHER_LANGUAGE_CODE_INDEX {
        Some(track.other_language[OTHER_LANGUAGE_CODE_INDEX].to_uppercase())
    } else {
        track
            .other_language
            .iter()
            .find(|l| l.chars().count() == 3)
            .map(|l| l.to_uppercase())
    };

    let language = track.language.as_deref().filter(|l| !l.is_empty());

    from_alternates
        .filter(|code| !code.is_empty())
        .or_else(|| language.and_then(strip_non_hearing_prefix))
        .or_else(|| language.and_then(name_or_short_code))
}

/// Uppercase a language value, removing a `NU` / `NU-` prefix.
///
/// "nu-eng" and "NUENG" both give "ENG"; a bare "NU" gives nothing.
fn strip_non_hearing_prefix(language: &str) -> Option<String> {
    let upper = language.to_uppercase();
    if !upper.starts_with(NON_HEARING_PREFIX) {
        return Some(upper);
    }

    let code = if upper.contains('-') {
        upper.split('-').nth(1).unwrap_or_default()
    } else {
        &upper[NON_HEARING_PREFIX.len()..]
    };

    (!code.is_empty()).then(|| code.to_string())
}

fn name_or_short_code(language: &str) -> Option<String> {
    code_for_name(language)
        .map(str::to_string)
        .or_else(|| (language.chars().count() <= 3).then(|| language.to_uppercase()))
}

/// Whether a subtitle title marks the track as SDH / closed captions.
pub fn is_non_hearing(title: Option<&str>) -> bool {
    title.is_some_and(|t| {
        let upper = t.to_uppercase();
        NON_HEARING_MARKERS.iter().any(|m| upper.contains(m))
    })
}
