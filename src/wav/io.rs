//! Little-endian binary primitives over byte streams.
//!
//! The substrate for the container codec: fixed-width integers and byte
//! runs read from or written to a caller-owned stream. A failing stream is
//! unrecoverable; the error propagates immediately and aborts the run.

use std::io::{Read, Write};

use crate::error::Result;

/// Writes a single byte.
pub fn write_byte<W: Write>(out: &mut W, value: u8) -> Result<()> {
    out.write_all(&[value])?;
    Ok(())
}

/// Writes a run of bytes.
pub fn write_bytes<W: Write>(out: &mut W, data: &[u8]) -> Result<()> {
    out.write_all(data)?;
    Ok(())
}

/// Writes an unsigned 16-bit integer, least significant byte first.
pub fn write_u16<W: Write>(out: &mut W, value: u16) -> Result<()> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes an unsigned 32-bit integer, least significant byte first.
pub fn write_u32<W: Write>(out: &mut W, value: u32) -> Result<()> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a signed 16-bit integer, least significant byte first.
pub fn write_i16<W: Write>(out: &mut W, value: i16) -> Result<()> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a signed 32-bit integer, least significant byte first.
pub fn write_i32<W: Write>(out: &mut W, value: i32) -> Result<()> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Writes a run of interleaved 16-bit samples.
pub fn write_samples<W: Write>(out: &mut W, samples: &[i16]) -> Result<()> {
    for &sample in samples {
        write_i16(out, sample)?;
    }
    Ok(())
}

/// Reads a single byte.
pub fn read_byte<R: Read>(input: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Reads a fixed-size run of bytes.
pub fn read_bytes<R: Read, const N: usize>(input: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    input.read_exact(&mut buf)?;
    Ok(buf)
}

/// Reads a little-endian unsigned 16-bit integer.
pub fn read_u16<R: Read>(input: &mut R) -> Result<u16> {
    Ok(u16::from_le_bytes(read_bytes(input)?))
}

/// Reads a little-endian unsigned 32-bit integer.
pub fn read_u32<R: Read>(input: &mut R) -> Result<u32> {
    Ok(u32::from_le_bytes(read_bytes(input)?))
}

/// Reads a little-endian signed 16-bit integer.
pub fn read_i16<R: Read>(input: &mut R) -> Result<i16> {
    Ok(i16::from_le_bytes(read_bytes(input)?))
}

/// Reads a little-endian signed 32-bit integer.
pub fn read_i32<R: Read>(input: &mut R) -> Result<i32> {
    Ok(i32::from_le_bytes(read_bytes(input)?))
}

/// Reads `count` interleaved 16-bit samples.
pub fn read_samples<R: Read>(input: &mut R, count: usize) -> Result<Vec<i16>> {
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        samples.push(read_i16(input)?);
    }
    Ok(samples)
}
