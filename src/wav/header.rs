//! Canonical 44-byte WAV header: deterministic write, strict validate-on-read.

use std::io::{Read, Write};

use super::io::{read_bytes, read_u16, read_u32, write_bytes, write_u16, write_u32};
use super::{BITS_PER_SAMPLE, BYTES_PER_SAMPLE, NUM_CHANNELS, SAMPLE_RATE};
use crate::error::{HeaderError, Result};

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

const FMT_CHUNK_SIZE: u32 = 16;
const PCM_FORMAT: u16 = 1;

/// Writes the container header for a file of `num_samples` stereo frames.
///
/// Emits the RIFF chunk descriptor, the 16-byte `fmt ` sub-chunk describing
/// the fixed PCM parameters, and the start of the `data` sub-chunk. The
/// samples themselves are written separately by the caller. A pure function
/// of `num_samples`.
pub fn write_wave_header<W: Write>(out: &mut W, num_samples: u32) -> Result<()> {
    let byte_rate = SAMPLE_RATE * u32::from(NUM_CHANNELS) * BYTES_PER_SAMPLE;
    let block_align = NUM_CHANNELS * (BITS_PER_SAMPLE / 8);
    // Subchunk2Size is the total amount of sample data
    let subchunk2_size = num_samples * u32::from(NUM_CHANNELS) * BYTES_PER_SAMPLE;
    let chunk_size = 4 + (8 + FMT_CHUNK_SIZE) + (8 + subchunk2_size);

    write_bytes(out, RIFF_TAG)?;
    write_u32(out, chunk_size)?;
    write_bytes(out, WAVE_TAG)?;

    write_bytes(out, FMT_TAG)?;
    write_u32(out, FMT_CHUNK_SIZE)?;
    write_u16(out, PCM_FORMAT)?;
    write_u16(out, NUM_CHANNELS)?;
    write_u32(out, SAMPLE_RATE)?;
    write_u32(out, byte_rate)?;
    write_u16(out, block_align)?;
    write_u16(out, BITS_PER_SAMPLE)?;

    write_bytes(out, DATA_TAG)?;
    write_u32(out, subchunk2_size)?;
    Ok(())
}

/// Reads and validates a container header, returning the declared number of
/// stereo frames.
///
/// Every fixed field is checked and rejected with a [`HeaderError`] naming
/// the offending field. Overall chunk size, byte rate, and block alignment
/// are read but ignored. The returned count is derived from the `data`
/// sub-chunk length and is not cross-checked against the stream's actual
/// remaining length.
pub fn read_wave_header<R: Read>(input: &mut R) -> Result<u32> {
    let tag: [u8; 4] = read_bytes(input)?;
    if &tag != RIFF_TAG {
        return Err(HeaderError::MissingRiff.into());
    }

    let _chunk_size = read_u32(input)?; // ignored

    let tag: [u8; 4] = read_bytes(input)?;
    if &tag != WAVE_TAG {
        return Err(HeaderError::MissingWave.into());
    }

    let tag: [u8; 4] = read_bytes(input)?;
    if &tag != FMT_TAG {
        return Err(HeaderError::MissingFmt.into());
    }

    let fmt_chunk_size = read_u32(input)?;
    if fmt_chunk_size != FMT_CHUNK_SIZE {
        return Err(HeaderError::BadFmtChunkSize {
            found: fmt_chunk_size,
        }
        .into());
    }

    let audio_format = read_u16(input)?;
    if audio_format != PCM_FORMAT {
        return Err(HeaderError::NotPcm {
            found: audio_format,
        }
        .into());
    }

    let num_channels = read_u16(input)?;
    if num_channels != NUM_CHANNELS {
        return Err(HeaderError::BadChannelCount {
            found: num_channels,
        }
        .into());
    }

    let sample_rate = read_u32(input)?;
    if sample_rate != SAMPLE_RATE {
        return Err(HeaderError::BadSampleRate { found: sample_rate }.into());
    }

    let _byte_rate = read_u32(input)?; // ignored
    let _block_align = read_u16(input)?; // ignored

    let bits_per_sample = read_u16(input)?;
    if bits_per_sample != BITS_PER_SAMPLE {
        return Err(HeaderError::BadBitsPerSample {
            found: bits_per_sample,
        }
        .into());
    }

    let tag: [u8; 4] = read_bytes(input)?;
    if &tag != DATA_TAG {
        return Err(HeaderError::MissingData.into());
    }

    let subchunk2_size = read_u32(input)?;
    Ok(subchunk2_size / u32::from(NUM_CHANNELS) / BYTES_PER_SAMPLE)
}
