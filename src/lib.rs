//! Wavescore - batch waveform synthesis rendered to WAV.
//!
//! This library generates periodic signals (sine, square, sawtooth) into
//! stereo 16-bit sample buffers, interprets a small textual score format
//! into a timeline of rendered segments, and serializes the result into a
//! fixed-parameter WAV container (44.1 kHz, 16-bit signed, two channels).

pub mod effects;
pub mod error;
pub mod music;
pub mod oscillators;
pub mod score;
pub mod wav;

// Re-export commonly used types at the crate root
pub use effects::apply_echo;
pub use error::{Error, HeaderError, Result, ScoreError};
pub use music::Frequency;
pub use oscillators::{Channel, Voice, render_voice, render_voice_stereo};
pub use score::render_score;
pub use wav::{BITS_PER_SAMPLE, NUM_CHANNELS, SAMPLE_RATE, read_wave_header, write_wave_header};
