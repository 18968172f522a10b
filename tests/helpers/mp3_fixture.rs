/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, mono, no CRC, no padding.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0xC0];
const FRAME_LEN: usize = 417;

/// Builds `frames` silent MP3 frames (zeroed side info and main data).
pub fn silent_mp3(frames: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        let mut frame = [0u8; FRAME_LEN];
        frame[..FRAME_HEADER.len()].copy_from_slice(&FRAME_HEADER);
        data.extend_from_slice(&frame);
    }
    data
}
