//! Error types surfaced by the crate.
//!
//! Every fatal condition is a typed error propagated to the caller; the
//! library never terminates the process. The driver binaries decide exit
//! status.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for rendering, codec, and interpretation failures.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte stream failed during a read or write. Stream
    /// errors are unrecoverable: they abort the whole run immediately.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input did not carry a valid fixed-format WAV header.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The score text could not be interpreted.
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// A voice code outside the closed set {0, 1, 2}.
    #[error("Invalid wave: 0 (sine), 1 (square), 2 (sawtooth)")]
    InvalidVoice { code: u32 },

    /// An echo delay longer than the clip it is applied to.
    #[error("Delay longer than entire clip")]
    DelayTooLong { delay: usize, clip: usize },
}

/// Field-specific WAV header validation failures.
///
/// Each validated field of the header has its own variant so a corrupted
/// input is rejected with a message naming exactly what was wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Bad wave header (no RIFF label)")]
    MissingRiff,

    #[error("Bad wave header (no WAVE label)")]
    MissingWave,

    #[error("Bad wave header (no 'fmt ' subchunk ID)")]
    MissingFmt,

    #[error("Bad wave header (Subchunk1Size was not 16)")]
    BadFmtChunkSize { found: u32 },

    #[error("Bad wave header (AudioFormat is not PCM)")]
    NotPcm { found: u16 },

    #[error("Bad wave header (NumChannels is not 2)")]
    BadChannelCount { found: u16 },

    #[error("Bad wave header (Unexpected sample rate)")]
    BadSampleRate { found: u32 },

    #[error("Bad wave header (Unexpected bits per sample)")]
    BadBitsPerSample { found: u16 },

    #[error("Bad wave header (no 'data' subchunk ID)")]
    MissingData,
}

/// Score-syntax failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// The leading total-samples / samples-per-beat pair was missing or
    /// unparseable.
    #[error("Malformed Input (expected total sample count and samples per beat)")]
    MalformedHeader,

    /// A directive group began with something other than N, C, P, V, or A.
    #[error("Malformed Input (unknown directive '{0}')")]
    UnknownDirective(String),

    /// A numeric token failed to parse.
    #[error("Malformed Input (invalid number '{0}')")]
    InvalidNumber(String),

    /// The score ended in the middle of a directive group, e.g. a chord
    /// missing its 999 terminator.
    #[error("Malformed Input (unexpected end of score)")]
    UnexpectedEnd,

    /// The rendered duration outran the declared total sample count.
    #[error("score renders {required} stereo frames but only {declared} were declared")]
    BufferOverrun { required: usize, declared: usize },
}
