mod audio;
mod download_url;
mod error;
mod files;
mod health;
pub mod podcast_types;
mod podcast;
mod script;

pub use audio::generate_audio_from_script_handler;
pub use download_url::download_url;
pub use error::{ErrorResponse, error_response, podcast_error_response};
pub use files::file_handler;
pub use health::{health_handler, root_handler, speech_health_handler};
pub use podcast::generate_podcast_handler;
pub use script::generate_script_handler;
