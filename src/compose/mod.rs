//! Tag composition.
//!
//! The composer walks the tracks once, in order, handing each track to its
//! classifiers until one claims it. The collected fragments are then merged
//! and assembled into `{title} ({year}) {tag} [{crew}]`.
//!
//! # Example
//!
//! ```
//! use makerelease::{AudioTrack, ComposeOptions, TagComposer, TextTrack, Track, VideoTrack};
//!
//! let composer = TagComposer::with_options(ComposeOptions {
//!     collapse_whitespace: true,
//!     ..ComposeOptions::default()
//! });
//!
//! let tracks = vec![
//!     Track::Video(VideoTrack::new(1280, "HEVC")),
//!     Track::Audio(AudioTrack::new("AAC").with_language("ita").with_channels(2)),
//!     Track::Audio(AudioTrack::new("AAC").with_language("eng").with_channels(2)),
//!     Track::Text(TextTrack::new().with_language("ita")),
//! ];
//!
//! let name = composer.compose(&tracks, "Movie", "2021", "").unwrap();
//! assert_eq!(name, "Movie (2021) 720p H265 ITA ENG AAC 2.0 Sub ITA");
//! ```

mod classifier;
pub mod classifiers;
mod types;

#[cfg(test)]
mod samples_test;

pub use classifier::TrackClassifier;
pub use classifiers::{AudioClassifier, SubtitleClassifier, VideoClassifier};
pub use types::{AudioEntry, ChannelGroup, ReleaseTag, SubtitleSummary, TagAccumulator};

use crate::config::ComposeOptions;
use crate::format::strip_quoted_codes;
use crate::track::{Track, TrackSource};
use crate::Error;

/// Composes release names from track records.
pub struct TagComposer {
    classifiers: Vec<Box<dyn TrackClassifier>>,
    options: ComposeOptions,
}

impl TagComposer {
    /// Create a composer with the default classifiers and options.
    pub fn new() -> Self {
        Self::with_options(ComposeOptions::default())
    }

    /// Create a composer with the default classifiers configured from `options`.
    ///
    /// Classifiers: VideoClassifier → AudioClassifier → SubtitleClassifier
    pub fn with_options(options: ComposeOptions) -> Self {
        let video = VideoClassifier::new().with_snap_tolerance(options.snap_tolerance);
        let mut composer = Self::with_classifiers(Vec::new(), options);
        composer.add_classifier(video);
        composer.add_classifier(AudioClassifier::new());
        composer.add_classifier(SubtitleClassifier::new());
        composer
    }

    /// Create a composer with the given classifiers.
    pub fn with_classifiers(
        classifiers: Vec<Box<dyn TrackClassifier>>,
        options: ComposeOptions,
    ) -> Self {
        Self {
            classifiers,
            options,
        }
    }

    /// Add a classifier to the end of the list.
    pub fn add_classifier<C: TrackClassifier + 'static>(&mut self, classifier: C) {
        self.classifiers.push(Box::new(classifier));
    }

    /// Get the number of classifiers.
    pub fn classifier_count(&self) -> usize {
        self.classifiers.len()
    }

    /// Run every track through the classifiers, in track order.
    pub fn accumulate(&self, tracks: &[Track]) -> TagAccumulator {
        let mut tags = TagAccumulator::new();

        for (index, track) in tracks.iter().enumerate() {
            let claimed_by = self
                .classifiers
                .iter()
                .find(|c| c.classify(track, &mut tags))
                .map(|c| c.name());

            match claimed_by {
                Some(name) => tracing::trace!(
                    index,
                    kind = %track.kind(),
                    classifier = name,
                    "track classified"
                ),
                None => tracing::trace!(index, kind = %track.kind(), "track ignored"),
            }
        }

        tags
    }

    /// Merge and finalize the collected fragments.
    pub fn finalize(&self, tags: TagAccumulator) -> ReleaseTag {
        ReleaseTag {
            video: tags.video_tag,
            audio: merge_audio(&tags.audio_entries),
            subtitles: summarize_subtitles(&tags.subtitle_codes, self.options.multisub_threshold),
        }
    }

    /// Build the release tag for a track source.
    pub fn build_tag<S: TrackSource + ?Sized>(&self, source: &S) -> Result<ReleaseTag, Error> {
        let tracks = source.tracks()?;
        Ok(self.finalize(self.accumulate(&tracks)))
    }

    /// Compose the full release name: `{title} ({year}) {tag} [{crew}]`.
    ///
    /// The crew suffix is omitted when `crew` is empty. Fails only when the
    /// source is not a recognized track collection.
    pub fn compose<S: TrackSource + ?Sized>(
        &self,
        source: &S,
        title: &str,
        year: &str,
        crew: &str,
    ) -> Result<String, Error> {
        let tag = self.build_tag(source)?;
        let name = self.assemble(&tag, title, year, crew);
        tracing::debug!(%name, "composed release name");
        Ok(name)
    }

    /// Assemble a finalized tag with the title, year and crew.
    pub fn assemble(&self, tag: &ReleaseTag, title: &str, year: &str, crew: &str) -> String {
        let mut tag = tag.render(self.options.collapse_whitespace);
        if !crew.is_empty() {
            tag.push_str(&format!(" [{}]", crew));
        }

        let name = format!("{} ({}) {}", title, year, tag);
        if self.options.strip_quoted_codes {
            strip_quoted_codes(&name).into_owned()
        } else {
            name
        }
    }
}

impl Default for TagComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge audio entries sharing a description: "ITA AC3 5.1" + "ENG AC3 5.1"
/// become "ITA ENG AC3 5.1".
///
/// Groups keep the order their description was first seen in, languages keep
/// first-seen order within a group, and identical results are emitted once.
pub fn merge_audio(entries: &[AudioEntry]) -> Vec<String> {
    let mut groups: Vec<ChannelGroup> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|g| g.description == entry.description) {
            Some(group) => group.add_language(&entry.language),
            None => {
                let mut group = ChannelGroup::new(entry.description.as_str());
                group.add_language(&entry.language);
                groups.push(group);
            }
        }
    }

    let mut merged: Vec<String> = Vec::new();
    for group in groups {
        let rendered = group.to_string();
        if !merged.contains(&rendered) {
            merged.push(rendered);
        }
    }
    tracing::trace!(?merged, "merged audio entries");
    merged
}

/// Deduplicate subtitle codes, collapsing to `MultiSub` above `threshold`.
pub fn summarize_subtitles(codes: &[String], threshold: usize) -> SubtitleSummary {
    let mut distinct: Vec<String> = Vec::new();
    for code in codes {
        if !distinct.contains(code) {
            distinct.push(code.clone());
        }
    }

    if distinct.len() > threshold {
        SubtitleSummary::MultiSub
    } else if distinct.is_empty() {
        SubtitleSummary::Empty
    } else {
        SubtitleSummary::Listed(distinct)
    }
}
