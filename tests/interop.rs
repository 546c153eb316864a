//! Cross-implementation checks against `lz4_flex`: frames produced here
//! must decode with an independent implementation, and vice versa.

use std::io::{Read, Write};

use lz4opt::{compress, decompress, CompressPrefs};

fn compress_to_vec(data: &[u8], prefs: &CompressPrefs) -> Vec<u8> {
    let mut out = Vec::new();
    compress(&mut &data[..], &mut out, prefs).unwrap();
    out
}

fn lcg_bytes(n: usize, mut state: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.push((state >> 24) as u8);
    }
    out
}

fn samples() -> Vec<(Vec<u8>, u32)> {
    vec![
        (Vec::new(), 9),
        (b"interop sample".to_vec(), 9),
        (b"repetition repetition repetition repetition".repeat(100), 9),
        (vec![0u8; 10_000], 9),
        (lcg_bytes(50_000, 3), 9),
        // Multi-block with cross-block matches (linked history).
        (
            {
                let mut v = Vec::with_capacity(5 << 20);
                while v.len() < (5 << 20) {
                    v.extend_from_slice(b"linked block history material --- ");
                }
                v
            },
            2,
        ),
    ]
}

#[test]
fn our_frames_decode_with_lz4_flex() {
    for (data, level) in samples() {
        let stream = compress_to_vec(&data, &CompressPrefs::from_level(level));
        let mut decoder = lz4_flex::frame::FrameDecoder::new(&stream[..]);
        let mut restored = Vec::new();
        decoder.read_to_end(&mut restored).unwrap();
        assert_eq!(restored, data, "level {} input {} bytes", level, data.len());
    }
}

#[test]
fn lz4_flex_frames_decode_with_us() {
    for (data, _) in samples() {
        let mut encoder = lz4_flex::frame::FrameEncoder::new(Vec::new());
        encoder.write_all(&data).unwrap();
        let stream = encoder.finish().unwrap();

        let mut restored = Vec::new();
        decompress(&mut &stream[..], &mut restored).unwrap();
        assert_eq!(restored, data, "input {} bytes", data.len());
    }
}

#[test]
fn lz4_flex_frames_with_checksums_decode_with_us() {
    // Checksums are read and discarded, never verified.
    let data = b"checksummed frame contents ".repeat(300);
    let mut info = lz4_flex::frame::FrameInfo::new();
    info.content_checksum = true;
    info.block_checksums = true;
    let mut encoder = lz4_flex::frame::FrameEncoder::with_frame_info(info, Vec::new());
    encoder.write_all(&data).unwrap();
    let stream = encoder.finish().unwrap();

    let mut restored = Vec::new();
    decompress(&mut &stream[..], &mut restored).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn lz4_flex_block_round_trips_our_block_payload() {
    // The payload of a compressed modern block is a raw LZ4 block; the
    // block-level decoder of lz4_flex must accept it directly.
    let data = b"block level interop block level interop block level interop".to_vec();
    let stream = compress_to_vec(&data, &CompressPrefs::from_level(9));
    let tag = u32::from_le_bytes(stream[7..11].try_into().unwrap());
    assert_eq!(tag & 0x8000_0000, 0, "expected a compressed block");
    let payload = &stream[11..11 + tag as usize];
    let restored = lz4_flex::block::decompress(payload, data.len()).unwrap();
    assert_eq!(restored, data);
}
