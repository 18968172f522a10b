mod audio_assembler;
mod script_generator;
mod speech_synthesizer;

pub use audio_assembler::{AssemblyError, AudioAssembler};
pub use script_generator::{ScriptGenerator, ScriptGeneratorError};
pub use speech_synthesizer::{ConnectivityStatus, SpeechSynthesizer, SynthesisError};
