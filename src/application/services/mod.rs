mod podcast_service;
mod transient_files;

pub use podcast_service::{
    AudioDelivery, AudioOutcome, PodcastError, PodcastOutcome, PodcastService,
};
pub use transient_files::TransientFiles;
