//! Renders a single steady tone to a WAV file.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result, bail};
use log::info;
use wavescore::{Voice, render_voice_stereo, wav};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        bail!("Usage: render_tone voice(0, 1, 2) frequency(hz) amplitude num_samples wavfileout");
    }
    let voice = Voice::from_code(args[0].parse().context("voice must be an integer code")?)?;
    let freq_hz: f32 = args[1].parse().context("frequency must be a number")?;
    let amplitude: f32 = args[2].parse().context("amplitude must be a number")?;
    let num_samples: usize = args[3].parse().context("sample count must be an integer")?;

    info!("rendering {num_samples} frames of {voice:?} at {freq_hz} Hz");
    let mut buf = vec![0i16; num_samples * 2];
    render_voice_stereo(&mut buf, num_samples, freq_hz, amplitude, voice);

    let file =
        File::create(&args[4]).with_context(|| format!("failed to create {}", args[4]))?;
    let mut out = BufWriter::new(file);
    wav::write_wave_header(&mut out, num_samples as u32)?;
    wav::write_samples(&mut out, &buf)?;
    Ok(())
}
