//! Built-in track classifiers.
//!
//! - `VideoClassifier`: resolution bucket and canonical codec
//! - `AudioClassifier`: language and `format channels` description
//! - `SubtitleClassifier`: recovered language code with non-hearing marking

mod audio;
mod subtitle;
mod video;

pub use audio::AudioClassifier;
pub use subtitle::SubtitleClassifier;
pub use video::VideoClassifier;
