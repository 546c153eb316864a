//! Decoder error paths and encoder I/O failure propagation.

use std::io::{self, Read, Write};

use lz4opt::{compress, decompress, CompressPrefs, DecompressError};

fn decode(stream: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::new();
    decompress(&mut &stream[..], &mut out)?;
    Ok(out)
}

#[test]
fn wrong_endianness_magic_is_invalid_signature() {
    // The modern magic written big-endian.
    let stream = [0x18, 0x4D, 0x22, 0x04];
    assert!(matches!(
        decode(&stream),
        Err(DecompressError::InvalidSignature)
    ));
}

#[test]
fn arbitrary_garbage_is_invalid_signature() {
    assert!(matches!(
        decode(b"PK\x03\x04rest of a zip file"),
        Err(DecompressError::InvalidSignature)
    ));
}

#[test]
fn dictionary_flag_is_unsupported_feature() {
    let stream = [0x04, 0x22, 0x4D, 0x18, 0x41, 0x70, 0x00, 0, 0, 0, 0];
    assert!(matches!(
        decode(&stream),
        Err(DecompressError::UnsupportedFeature)
    ));
}

#[test]
fn zero_distance_is_invalid_offset() {
    let mut stream = vec![0x04, 0x22, 0x4D, 0x18, 0x40, 0x70, 0xDF];
    stream.extend_from_slice(&9u32.to_le_bytes());
    // token: 1 literal, match nibble 0; literal; distance 00 00.
    stream.extend_from_slice(&[0x10, b'A', 0x00, 0x00, 0x10, b'B', 0x50, 0, 0]);
    stream.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        decode(&stream),
        Err(DecompressError::InvalidOffset)
    ));
}

#[test]
fn truncation_at_every_point_is_detected() {
    // Build a small valid stream, then cut it at every byte boundary.
    let data = b"truncation probe truncation probe truncation probe";
    let mut stream = Vec::new();
    compress(&mut &data[..], &mut stream, &CompressPrefs::from_level(9)).unwrap();
    assert_eq!(decode(&stream).unwrap(), data);

    for cut in 0..stream.len() {
        match decode(&stream[..cut]) {
            Err(DecompressError::OutOfData) => {}
            Err(other) => panic!("cut at {}: unexpected error {:?}", cut, other),
            Ok(_) => panic!("cut at {}: decoded successfully", cut),
        }
    }
}

#[test]
fn literal_overrun_is_truncated_block() {
    let mut stream = vec![0x04, 0x22, 0x4D, 0x18, 0x40, 0x70, 0xDF];
    stream.extend_from_slice(&2u32.to_le_bytes());
    stream.extend_from_slice(&[0x70, b'x']); // promises 7 literals in a 2-byte block
    stream.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        decode(&stream),
        Err(DecompressError::TruncatedBlock)
    ));
}

#[test]
fn match_descriptor_overrun_is_truncated_block() {
    // Block of 3: token + 1 literal leaves no room for the 2-byte distance.
    let mut stream = vec![0x04, 0x22, 0x4D, 0x18, 0x40, 0x70, 0xDF];
    stream.extend_from_slice(&3u32.to_le_bytes());
    stream.extend_from_slice(&[0x14, b'a', 0x01]);
    stream.extend_from_slice(&[0, 0, 0, 0]);
    assert!(matches!(
        decode(&stream),
        Err(DecompressError::TruncatedBlock)
    ));
}

// ── I/O failure propagation ──────────────────────────────────────────────────

/// A sink that fails after accepting a few bytes.
struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        self.budget -= buf.len();
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A source that fails mid-stream.
struct FailingReader {
    budget: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::other("source died"));
        }
        let n = buf.len().min(self.budget);
        buf[..n].fill(b'm');
        self.budget -= n;
        Ok(n)
    }
}

#[test]
fn compress_propagates_sink_errors() {
    let data: Vec<u8> = b"sink failure probe ".repeat(5_000);
    let mut src: &[u8] = &data;
    let mut dst = FailingWriter { budget: 16 };
    let err = compress(&mut src, &mut dst, &CompressPrefs::from_level(2)).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
}

#[test]
fn compress_propagates_source_errors() {
    let mut src = FailingReader { budget: 300_000 };
    let mut dst = Vec::new();
    assert!(compress(&mut src, &mut dst, &CompressPrefs::from_level(1)).is_err());
}

#[test]
fn decompress_propagates_sink_errors() {
    // Needs a history flush mid-stream, so the output must exceed 64 KiB.
    let data: Vec<u8> = b"writable no more ".repeat(12_000);
    let mut stream = Vec::new();
    compress(&mut &data[..], &mut stream, &CompressPrefs::from_level(2)).unwrap();

    let mut dst = FailingWriter { budget: 0 };
    let err = decompress(&mut &stream[..], &mut dst).unwrap_err();
    assert!(matches!(err, DecompressError::Io(_)));
}

#[test]
fn errors_format_for_humans() {
    assert_eq!(
        DecompressError::InvalidSignature.to_string(),
        "invalid signature"
    );
    assert_eq!(DecompressError::OutOfData.to_string(), "out of data");
    assert_eq!(
        DecompressError::TruncatedBlock.to_string(),
        "truncated block"
    );
}
