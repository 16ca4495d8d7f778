//! Video classification.

use crate::compose::{TagAccumulator, TrackClassifier};
use crate::format::{
    canonical_video_codec, fake_height, scan_suffix, snap_height, DEFAULT_SNAP_TOLERANCE,
    SD_MAX_HEIGHT,
};
use crate::track::{Track, VideoTrack};

/// Classifier that tags video tracks as "1080p H264", "2160p H265", "SD XviD", ...
///
/// The height is derived from the width as if the frame were 16:9, so
/// letterboxed encodes land in the same bucket as full-frame ones.
pub struct VideoClassifier {
    /// Distance (exclusive) within which a height snaps to a standard resolution.
    snap_tolerance: u32,
}

impl VideoClassifier {
    pub fn new() -> Self {
        Self {
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }

    pub fn with_snap_tolerance(mut self, tolerance: u32) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Tag for a single video track.
    pub fn tag(&self, track: &VideoTrack) -> String {
        let height = snap_height(fake_height(track.width), self.snap_tolerance);
        let codec = canonical_video_codec(&track.format);

        if height <= SD_MAX_HEIGHT {
            format!("SD {}", codec)
        } else {
            format!("{}{} {}", height, scan_suffix(track.is_interlaced()), codec)
        }
    }
}

impl Default for VideoClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackClassifier for VideoClassifier {
    fn name(&self) -> &'static str {
        "video"
    }

    fn classify(&self, track: &Track, tags: &mut TagAccumulator) -> bool {
        let Track::Video(video) = track else {
            return false;
        };

        let tag = self.tag(video);
        tracing::debug!(width = video.width, format = %video.format, %tag, "classified video track");
        tags.set_video(tag);
        true
    }
}
