//! Makerelease - release name composer
//!
//! Derives a standardized release tag from the technical metadata of a media
//! file (video resolution and codec, audio languages and channels, subtitle
//! languages) and composes a name of the form `{title} ({year}) {tag} [{crew}]`.
//!
//! # Architecture
//!
//! The media inspection engine is external: this crate consumes the track
//! records it produces, either typed ([`Track`]) or as a JSON dump. Each track
//! is passed through an ordered list of classifiers:
//! 1. Video: resolution bucket and canonical codec
//! 2. Audio: language and `format channels` description
//! 3. Subtitle: recovered language code, with non-hearing (`NU`) marking
//!
//! The collected entries are then merged, deduplicated and assembled.
//!
//! # Example
//!
//! ```
//! use makerelease::{compose, AudioTrack, Track, VideoTrack};
//!
//! let tracks = vec![
//!     Track::Video(VideoTrack::new(1920, "AVC")),
//!     Track::Audio(
//!         AudioTrack::new("AC-3")
//!             .with_language("eng")
//!             .with_channel_layout("L R C LFE"),
//!     ),
//! ];
//!
//! let name = compose(&tracks, "Movie", "2020", "GRP").unwrap();
//! assert_eq!(name, "Movie (2020) 1080p H264 ENG AC3 3.1  [GRP]");
//! ```

pub use compose::{ReleaseTag, SubtitleSummary, TagAccumulator, TagComposer, TrackClassifier};
pub use config::ComposeOptions;
pub use error::Error;
pub use track::{
    parse_tracks, tracks_from_json, AudioTrack, TextTrack, Track, TrackKind, TrackSource,
    VideoTrack,
};

// Tag composition pipeline
pub mod compose;

// Composer options
pub mod config;

// Codec, resolution and channel normalization
pub mod format;

// Language code recovery
pub mod language;

// Track records and the input boundary
pub mod track;

mod error {
    use thiserror::Error;

    /// Errors surfaced by the composer and its input boundary.
    #[derive(Debug, Error)]
    pub enum Error {
        /// The track source is not a recognized metadata structure
        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        /// Malformed options file
        #[error("Config error: {0}")]
        Config(#[from] toml::de::Error),
    }
}

/// Compose a release name with the default options.
///
/// Shorthand for `TagComposer::new().compose(...)`.
pub fn compose<S: TrackSource + ?Sized>(
    source: &S,
    title: &str,
    year: &str,
    crew: &str,
) -> Result<String, Error> {
    TagComposer::new().compose(source, title, year, crew)
}
