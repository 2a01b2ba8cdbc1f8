//! Container codec integration tests, including cross-validation against
//! the independent `hound` WAV implementation.

use std::io::Cursor;

use wavescore::{Error, HeaderError, read_wave_header, wav, write_wave_header};

fn valid_header(num_samples: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_wave_header(&mut bytes, num_samples).unwrap();
    bytes
}

fn read_back(bytes: &[u8]) -> Result<u32, Error> {
    read_wave_header(&mut Cursor::new(bytes))
}

#[test]
fn test_round_trip_preserves_sample_count() {
    for count in [0u32, 1, 4, 44_100, 2_000_000] {
        assert_eq!(read_back(&valid_header(count)).unwrap(), count);
    }
}

#[test]
fn test_corrupt_riff_tag() {
    let mut bytes = valid_header(8);
    bytes[0..4].copy_from_slice(b"RIFX");
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::MissingRiff)
    ));
}

#[test]
fn test_corrupt_wave_tag() {
    let mut bytes = valid_header(8);
    bytes[8..12].copy_from_slice(b"EVAW");
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::MissingWave)
    ));
}

#[test]
fn test_corrupt_fmt_tag() {
    let mut bytes = valid_header(8);
    bytes[12..16].copy_from_slice(b"fmt?");
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::MissingFmt)
    ));
}

#[test]
fn test_corrupt_fmt_chunk_size() {
    let mut bytes = valid_header(8);
    bytes[16] = 18;
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::BadFmtChunkSize { found: 18 })
    ));
}

#[test]
fn test_corrupt_audio_format() {
    let mut bytes = valid_header(8);
    bytes[20] = 3; // IEEE float
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::NotPcm { found: 3 })
    ));
}

#[test]
fn test_corrupt_channel_count() {
    let mut bytes = valid_header(8);
    bytes[22] = 1; // mono
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::BadChannelCount { found: 1 })
    ));
}

#[test]
fn test_corrupt_sample_rate() {
    let mut bytes = valid_header(8);
    bytes[24..28].copy_from_slice(&48_000u32.to_le_bytes());
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::BadSampleRate { found: 48_000 })
    ));
}

#[test]
fn test_corrupt_bits_per_sample() {
    let mut bytes = valid_header(8);
    bytes[34] = 8;
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::BadBitsPerSample { found: 8 })
    ));
}

#[test]
fn test_corrupt_data_tag() {
    let mut bytes = valid_header(8);
    bytes[36..40].copy_from_slice(b"atad");
    assert!(matches!(
        read_back(&bytes).unwrap_err(),
        Error::Header(HeaderError::MissingData)
    ));
}

#[test]
fn test_ignored_fields_are_not_validated() {
    // overall chunk size, byte rate, and block alignment are read but
    // never checked
    let mut bytes = valid_header(8);
    bytes[4..8].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes()); // chunk size
    bytes[28..32].copy_from_slice(&1u32.to_le_bytes()); // byte rate
    bytes[32..34].copy_from_slice(&7u16.to_le_bytes()); // block align
    assert_eq!(read_back(&bytes).unwrap(), 8);
}

#[test]
fn test_hound_accepts_our_output() {
    let samples: Vec<i16> = vec![0, 100, -100, 32_000, -32_000, 1, -1, 7];
    let mut bytes = Vec::new();
    write_wave_header(&mut bytes, samples.len() as u32 / 2).unwrap();
    wav::write_samples(&mut bytes, &samples).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded, samples);
}

#[test]
fn test_we_accept_hound_output() {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    let samples: Vec<i16> = vec![5, -5, 10, -10, 15, -15];
    for &sample in &samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let bytes = cursor.into_inner();
    let mut reader = Cursor::new(&bytes);
    let num_samples = read_wave_header(&mut reader).unwrap();
    assert_eq!(num_samples, 3);
    let decoded = wav::read_samples(&mut reader, num_samples as usize * 2).unwrap();
    assert_eq!(decoded, samples);
}
