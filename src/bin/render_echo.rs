//! Adds a delayed echo to an existing WAV clip.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result, bail};
use log::info;
use wavescore::{apply_echo, wav};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("Usage: render_echo wavfilein wavfileout delay amplitude");
    }
    let delay: usize = args[2].parse().context("delay must be an integer")?;
    let amplitude: f32 = args[3].parse().context("amplitude must be a number")?;

    let file = File::open(&args[0]).with_context(|| format!("failed to open {}", args[0]))?;
    let mut input = BufReader::new(file);
    let num_samples = wav::read_wave_header(&mut input)?;
    info!("input clip declares {num_samples} frames");
    let mut buf = wav::read_samples(&mut input, num_samples as usize * 2)?;

    apply_echo(&mut buf, delay, amplitude)?;

    let file = File::create(&args[1]).with_context(|| format!("failed to create {}", args[1]))?;
    let mut output = BufWriter::new(file);
    wav::write_wave_header(&mut output, num_samples)?;
    wav::write_samples(&mut output, &buf)?;
    Ok(())
}
