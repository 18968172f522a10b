pub mod audio_decoder;
mod mp3_assembler;

pub use audio_decoder::{DecodeError, DecodedAudio, decode_audio};
pub use mp3_assembler::Mp3Assembler;
