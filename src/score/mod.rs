//! Textual score interpreter.
//!
//! A score is a stream of whitespace-delimited tokens: a two-integer header
//! (total sample count, samples per beat) followed by directive groups:
//!
//! ```text
//! N <beats> <note>            play one note
//! C <beats> <note>... 999     play a chord; 999 terminates the note list
//! P <beats>                   pause
//! V <code>                    switch voice (0 sine, 1 square, 2 sawtooth)
//! A <level>                   set amplitude
//! ```
//!
//! Directives are rendered into consecutive segments of a single owned
//! sample buffer and streamed to the output as each segment completes. The
//! interpreter carries the current voice (initially sine) and amplitude
//! (initially 0.1) across directives and never rewinds.

use std::io::{Read, Write};
use std::str::SplitWhitespace;

use log::debug;

use crate::error::{Result, ScoreError};
use crate::music::Frequency;
use crate::oscillators::{Voice, render_voice_stereo};
use crate::wav::{write_samples, write_wave_header};

/// Sentinel note number terminating a chord's note list.
const CHORD_END: u32 = 999;

/// Amplitude in effect before any `A` directive.
const DEFAULT_AMPLITUDE: f32 = 0.1;

/// One parsed directive group.
///
/// Directives are produced one at a time and consumed immediately; a score
/// is never materialized as a whole.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Directive {
    /// Play a single note for a number of beats.
    Note { beats: f32, note: u32 },
    /// Play several notes summed into the same segment.
    Chord { beats: f32, notes: Vec<u32> },
    /// Hold silence for a number of beats.
    Pause { beats: f32 },
    /// Switch the voice used by subsequent renders.
    VoiceChange(Voice),
    /// Set the amplitude used by subsequent renders.
    AmplitudeChange(f32),
}

/// Token-stream reader over the score text.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    fn expect(&mut self) -> Result<&'a str> {
        self.next().ok_or_else(|| ScoreError::UnexpectedEnd.into())
    }

    fn expect_u32(&mut self) -> Result<u32> {
        let token = self.expect()?;
        token
            .parse()
            .map_err(|_| ScoreError::InvalidNumber(token.to_string()).into())
    }

    fn expect_f32(&mut self) -> Result<f32> {
        let token = self.expect()?;
        token
            .parse()
            .map_err(|_| ScoreError::InvalidNumber(token.to_string()).into())
    }
}

/// Reads one header integer; both header values share one error case.
fn header_value(tokens: &mut Tokens<'_>) -> Result<u32> {
    let token = tokens.next().ok_or(ScoreError::MalformedHeader)?;
    token.parse().map_err(|_| ScoreError::MalformedHeader.into())
}

/// Reads the next directive group, or `None` at the end of the score.
///
/// Unknown voice codes in a `V` directive are rejected here, before any
/// rendering happens.
fn next_directive(tokens: &mut Tokens<'_>) -> Result<Option<Directive>> {
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    let directive = match head {
        "N" => Directive::Note {
            beats: tokens.expect_f32()?,
            note: tokens.expect_u32()?,
        },
        "C" => {
            let beats = tokens.expect_f32()?;
            let mut notes = Vec::new();
            loop {
                let note = tokens.expect_u32()?;
                if note == CHORD_END {
                    break;
                }
                notes.push(note);
            }
            Directive::Chord { beats, notes }
        }
        "P" => Directive::Pause {
            beats: tokens.expect_f32()?,
        },
        "V" => Directive::VoiceChange(Voice::from_code(tokens.expect_u32()?)?),
        "A" => Directive::AmplitudeChange(tokens.expect_f32()?),
        other => return Err(ScoreError::UnknownDirective(other.to_string()).into()),
    };
    Ok(Some(directive))
}

/// Interpreter state carried across directives.
struct Interpreter {
    voice: Voice,
    amplitude: f32,
    samples_per_beat: u32,
    buf: Vec<i16>,
    /// Index of the next unwritten slot in `buf`; advances monotonically.
    cursor: usize,
}

impl Interpreter {
    fn new(total_samples: u32, samples_per_beat: u32) -> Self {
        Self {
            voice: Voice::default(),
            amplitude: DEFAULT_AMPLITUDE,
            samples_per_beat,
            buf: vec![0; total_samples as usize * 2],
            cursor: 0,
        }
    }

    /// Beats to whole samples, truncating toward zero.
    fn beats_to_samples(&self, beats: f32) -> usize {
        (beats * self.samples_per_beat as f32) as usize
    }

    /// Claims the next `num_samples` stereo frames, failing if the score
    /// has outrun the declared total.
    fn claim_segment(&mut self, num_samples: usize) -> Result<&mut [i16]> {
        let end = self.cursor + num_samples * 2;
        if end > self.buf.len() {
            return Err(ScoreError::BufferOverrun {
                required: end / 2,
                declared: self.buf.len() / 2,
            }
            .into());
        }
        Ok(&mut self.buf[self.cursor..end])
    }

    /// Writes the segment just rendered at the cursor and advances past it.
    fn flush_segment<W: Write>(&mut self, num_samples: usize, output: &mut W) -> Result<()> {
        let end = self.cursor + num_samples * 2;
        write_samples(output, &self.buf[self.cursor..end])?;
        self.cursor = end;
        Ok(())
    }

    fn apply<W: Write>(&mut self, directive: Directive, output: &mut W) -> Result<()> {
        match directive {
            Directive::Note { beats, note } => {
                let num_samples = self.beats_to_samples(beats);
                let freq = Frequency::from_midi(note);
                let (voice, amplitude) = (self.voice, self.amplitude);
                debug!("note {note} ({} Hz) for {num_samples} frames", freq.as_f32());
                let segment = self.claim_segment(num_samples)?;
                render_voice_stereo(segment, num_samples, freq.as_f32(), amplitude, voice);
                self.flush_segment(num_samples, output)
            }
            Directive::Chord { beats, notes } => {
                let num_samples = self.beats_to_samples(beats);
                let (voice, amplitude) = (self.voice, self.amplitude);
                debug!("chord of {} notes for {num_samples} frames", notes.len());
                let segment = self.claim_segment(num_samples)?;
                for note in notes {
                    let freq = Frequency::from_midi(note);
                    render_voice_stereo(segment, num_samples, freq.as_f32(), amplitude, voice);
                }
                self.flush_segment(num_samples, output)
            }
            Directive::Pause { beats } => {
                let num_samples = self.beats_to_samples(beats);
                let voice = self.voice;
                debug!("pause for {num_samples} frames");
                let segment = self.claim_segment(num_samples)?;
                render_voice_stereo(segment, num_samples, 0.0, 0.0, voice);
                self.flush_segment(num_samples, output)
            }
            Directive::VoiceChange(voice) => {
                self.voice = voice;
                Ok(())
            }
            Directive::AmplitudeChange(level) => {
                self.amplitude = level;
                Ok(())
            }
        }
    }

    /// Flushes the unrendered remainder of the declared total as silence,
    /// so the payload always matches the header.
    fn finish<W: Write>(self, output: &mut W) -> Result<()> {
        let remaining = &self.buf[self.cursor..];
        if !remaining.is_empty() {
            debug!(
                "score left {} declared frames unrendered; flushing silence",
                remaining.len() / 2
            );
            write_samples(output, remaining)?;
        }
        Ok(())
    }
}

/// Interprets a complete score, writing the finished WAV stream to `output`.
///
/// Reads the two-integer score header, sizes the sample buffer from the
/// declared total, writes the container header, then renders each directive
/// into the next buffer segment and streams it out. A score whose rendered
/// duration exceeds the declared total fails with
/// [`ScoreError::BufferOverrun`] rather than writing out of bounds.
pub fn render_score<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = Tokens::new(&text);

    let total_samples = header_value(&mut tokens)?;
    let samples_per_beat = header_value(&mut tokens)?;
    debug!("score declares {total_samples} frames at {samples_per_beat} samples per beat");

    write_wave_header(output, total_samples)?;
    let mut interpreter = Interpreter::new(total_samples, samples_per_beat);
    while let Some(directive) = next_directive(&mut tokens)? {
        interpreter.apply(directive, output)?;
    }
    interpreter.finish(output)
}
