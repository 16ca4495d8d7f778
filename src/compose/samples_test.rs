//! Sample-based regression tests for the tag composer.
//!
//! Each sample is a track dump as produced by mediainfo for a real-world
//! release layout, with the name the established naming scheme gives it.

use crate::compose::TagComposer;
use crate::config::ComposeOptions;
use crate::Error;
use serde_json::{json, Value};
use std::sync::LazyLock;

static COMPOSER: LazyLock<TagComposer> = LazyLock::new(TagComposer::new);

fn alternates(name: &str, two: &str, three: &str) -> Value {
    json!([name, name, two, three, two])
}

#[test]
fn sample_001() {
    // Single AVC video, AC-3 4.0+LFE English, no subtitles
    let dump = json!({
        "tracks": [
            { "track_type": "General", "format": "Matroska" },
            { "track_type": "Video", "width": 1920, "format": "AVC" },
            {
                "track_type": "Audio",
                "format": "AC-3",
                "language": "eng",
                "channel_layout": "L R C LFE"
            }
        ]
    });
    let name = COMPOSER.compose(&dump, "Movie", "2020", "GRP").unwrap();
    assert_eq!(name, "Movie (2020) 1080p H264 ENG AC3 3.1  [GRP]");
}

#[test]
fn sample_002() {
    // Italian Blu-ray: dual DTS 5.1, Italian subs and English SDH
    let dump = json!({
        "tracks": [
            { "track_type": "General" },
            { "track_type": "Video", "width": 1920, "format": "AVC", "scan_type": "Progressive" },
            {
                "track_type": "Audio",
                "format": "DTS",
                "format_profile": "MA / Core",
                "channel_layout": "C L R Ls Rs LFE",
                "channel_s": 6,
                "language": "it",
                "other_language": alternates("Italian", "it", "ita")
            },
            {
                "track_type": "Audio",
                "format": "DTS",
                "channel_layout": "C L R Ls Rs LFE",
                "channel_s": 6,
                "language": "en",
                "other_language": alternates("English", "en", "eng")
            },
            {
                "track_type": "Text",
                "language": "it",
                "other_language": alternates("Italian", "it", "ita")
            },
            {
                "track_type": "Text",
                "language": "en",
                "other_language": alternates("English", "en", "eng"),
                "title": "English SDH"
            }
        ]
    });
    let name = COMPOSER.compose(&dump, "Film", "2019", "CREW").unwrap();
    assert_eq!(name, "Film (2019) 1080p H264 ITA ENG DTS 5.1 Sub ITA NUENG [CREW]");
}

#[test]
fn sample_003() {
    // UHD with many subtitle languages
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 3840, "format": "HEVC" },
            {
                "track_type": "Audio",
                "format": "E-AC-3",
                "channel_layout": "L R C LFE Ls Rs",
                "language": "en",
                "other_language": alternates("English", "en", "eng")
            },
            { "track_type": "Text", "language": "ita" },
            { "track_type": "Text", "language": "eng" },
            { "track_type": "Text", "language": "fra" },
            { "track_type": "Text", "language": "ger" },
            { "track_type": "Text", "language": "spa" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Show", "2022", "").unwrap();
    assert_eq!(name, "Show (2022) 2160p H265 ENG EAC3 5.1 MultiSub");
}

#[test]
fn sample_004() {
    // Interlaced DVD with stereo AC-3 and no channel layout
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 720, "format": "MPEG Video", "scan_type": "Interlaced" },
            { "track_type": "Audio", "format": "AC-3", "channel_s": 2, "language": "ita" },
            { "track_type": "Menu" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Vecchio Film", "1985", "").unwrap();
    assert_eq!(name, "Vecchio Film (1985) SD MPEG2 ITA AC3 2.0 ");
}

#[test]
fn sample_005() {
    // AVI era: XviD with MP3 and a non-hearing Italian subtitle
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 640, "format": "MPEG-4 Visual" },
            {
                "track_type": "Audio",
                "format": "MPEG Audio",
                "format_profile": "Layer 3",
                "channel_s": 2,
                "language": "en"
            },
            { "track_type": "Text", "language": "nu-ita", "title": "SDH" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Old", "2003", "XviD-GRP").unwrap();
    assert_eq!(name, "Old (2003) SD XviD EN MP3 2.0 Sub NUITA [XviD-GRP]");
}

#[test]
fn sample_006() {
    // Interlaced broadcast capture with untagged audio
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 1920, "format": "AVC", "scan_type": "Interlaced" },
            { "track_type": "Audio", "format": "AAC", "channel_layout": "L R" }
        ]
    });
    let name = COMPOSER.compose(&dump, "News", "2010", "").unwrap();
    assert_eq!(name, "News (2010) 1080i H264 UND AAC 2.0 ");
}

#[test]
fn sample_007() {
    // Main tracks plus stereo commentaries in both languages
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 1916, "format": "AVC" },
            { "track_type": "Audio", "format": "AC-3", "channel_layout": "L R C LFE Ls Rs", "language": "ita" },
            { "track_type": "Audio", "format": "AC-3", "channel_layout": "L R C LFE Ls Rs", "language": "eng" },
            { "track_type": "Audio", "format": "AAC", "channel_layout": "L R", "language": "ita" },
            { "track_type": "Audio", "format": "AAC", "channel_layout": "L R", "language": "eng" },
            { "track_type": "Text", "language": "ita" },
            { "track_type": "Text", "language": "ita", "title": "Forced" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Film", "2015", "G").unwrap();
    assert_eq!(
        name,
        "Film (2015) 1080p H264 ITA ENG AC3 5.1 ITA ENG AAC 2.0 Sub ITA [G]"
    );
}

#[test]
fn sample_008() {
    // mediainfo CLI dump
    let dump = json!({
        "media": {
            "@ref": "anime.mkv",
            "track": [
                { "@type": "General", "Format": "Matroska" },
                { "@type": "Video", "Width": "1280", "Format": "HEVC" },
                { "@type": "Audio", "Format": "Opus", "Channels": "2", "Language": "ja" },
                { "@type": "Text", "Language": "en", "Title": "Full" }
            ]
        }
    });
    let name = COMPOSER.compose(&dump, "Anime", "2023", "Subs").unwrap();
    assert_eq!(name, "Anime (2023) 720p H265 JA Opus 2.0 Sub EN [Subs]");
}

#[test]
fn sample_009() {
    // Video only: both empty segments leave their separators
    let dump = json!({
        "tracks": [{ "track_type": "Video", "width": 1920, "format": "VP09" }]
    });
    assert_eq!(
        COMPOSER.compose(&dump, "Clip", "2024", "").unwrap(),
        "Clip (2024) 1080p VP9  "
    );
    assert_eq!(
        COMPOSER.compose(&dump, "Clip", "2024", "X").unwrap(),
        "Clip (2024) 1080p VP9   [X]"
    );
}

#[test]
fn sample_010() {
    // Quoted codes in the title are unquoted
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 1280, "format": "AVC" },
            { "track_type": "Audio", "format": "AAC", "channel_s": 2, "language": "ita" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Il 'ITA' Film", "2001", "").unwrap();
    assert_eq!(name, "Il ITA Film (2001) 720p H264 ITA AAC 2.0 ");
}

#[test]
fn sample_011() {
    // Subtitle without any language information is skipped
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 1920, "format": "AVC" },
            { "track_type": "Audio", "format": "FLAC", "channel_layout": "L R", "language": "en" },
            { "track_type": "Text", "title": "Signs" },
            { "track_type": "Text", "language": "en", "title": "Closed Captions CC" }
        ]
    });
    let name = COMPOSER.compose(&dump, "Doc", "2018", "").unwrap();
    assert_eq!(name, "Doc (2018) 1080p H264 EN FLAC 2.0 Sub NUEN");
}

#[test]
fn sample_012() {
    // Same release with whitespace collapsing enabled
    let composer = TagComposer::with_options(ComposeOptions {
        collapse_whitespace: true,
        ..ComposeOptions::default()
    });
    let dump = json!({
        "tracks": [
            { "track_type": "Video", "width": 720, "format": "MPEG Video" },
            { "track_type": "Audio", "format": "AC-3", "channel_s": 2, "language": "ita" }
        ]
    });
    assert_eq!(
        composer.compose(&dump, "Vecchio Film", "1985", "").unwrap(),
        "Vecchio Film (1985) SD MPEG2 ITA AC3 2.0"
    );
    assert_eq!(
        composer.compose(&dump, "Vecchio Film", "1985", "GRP").unwrap(),
        "Vecchio Film (1985) SD MPEG2 ITA AC3 2.0 [GRP]"
    );
}

#[test]
fn sample_013() {
    // Not a track dump
    let err = COMPOSER
        .compose(&json!({ "format": "Matroska" }), "Movie", "2020", "")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "{:?}", err);
}
