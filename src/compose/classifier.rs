//! Classifier trait.

use crate::track::Track;

use super::TagAccumulator;

/// A per-kind step of the tag composer.
///
/// Each classifier examines a track and either:
/// - Claims it, recording its tag fragment in the accumulator, and returns `true`
/// - Returns `false` to pass the track to the next classifier
///
/// Classifiers never fail: missing or odd metadata degrades to a default
/// value or to the track contributing nothing.
pub trait TrackClassifier: Send + Sync {
    /// The name of this classifier (for logging).
    fn name(&self) -> &'static str;

    /// Classify one track into `tags`.
    fn classify(&self, track: &Track, tags: &mut TagAccumulator) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingClassifier;

    impl TrackClassifier for CountingClassifier {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn classify(&self, _track: &Track, tags: &mut TagAccumulator) -> bool {
            tags.push_subtitle("XXX");
            true
        }
    }

    #[test]
    fn test_classifier_trait() {
        let classifier = CountingClassifier;
        let mut tags = TagAccumulator::new();

        assert_eq!(classifier.name(), "counting");
        assert!(classifier.classify(&Track::Other, &mut tags));
        assert_eq!(tags.subtitle_codes, vec!["XXX"]);
    }
}
