use std::io::Cursor;

use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Summary of a fully decoded clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAudio {
    pub packets: usize,
    pub frames: u64,
    pub sample_rate: Option<u32>,
}

impl DecodedAudio {
    pub fn duration_secs(&self) -> Option<f64> {
        self.sample_rate
            .filter(|rate| *rate > 0)
            .map(|rate| self.frames as f64 / rate as f64)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("audio decoding failed: {0}")]
pub struct DecodeError(String);

/// Decodes every packet of `data` to prove it is playable audio.
///
/// `extension` is a container hint such as `"mp3"`.
pub fn decode_audio(data: &[u8], extension: &str) -> Result<DecodedAudio, DecodeError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(extension);

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| DecodeError(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| DecodeError("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| DecodeError(format!("codec: {}", e)))?;

    let mut packets = 0usize;
    let mut frames = 0u64;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => return Err(DecodeError(format!("packet: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }
        packets += 1;

        match decoder.decode(&packet) {
            Ok(decoded) => frames += decoded.frames() as u64,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
            }
            Err(e) => return Err(DecodeError(format!("decode: {}", e))),
        }
    }

    if packets == 0 {
        return Err(DecodeError("no audio packets found".to_string()));
    }

    Ok(DecodedAudio {
        packets,
        frames,
        sample_rate: codec_params.sample_rate,
    })
}
