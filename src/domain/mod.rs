mod artifact;
mod file_name;
mod podcast_id;
mod presenter;
mod script;

pub use artifact::{AUDIO_EXTENSION, PodcastArtifact};
pub use file_name::sanitize_filename;
pub use podcast_id::PodcastId;
pub use presenter::{
    PRESENTER_COUNT, Presenter, PresenterError, PresenterName, VoiceMap, validate_presenter_names,
};
pub use script::{Script, ScriptLine};
