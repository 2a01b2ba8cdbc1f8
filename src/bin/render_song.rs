//! Renders a textual score to a WAV file.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result, bail};
use wavescore::render_score;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        bail!("Usage: render_song songinput wavfileout");
    }
    let mut input =
        File::open(&args[0]).with_context(|| format!("failed to open {}", args[0]))?;
    let file =
        File::create(&args[1]).with_context(|| format!("failed to create {}", args[1]))?;
    let mut output = BufWriter::new(file);

    render_score(&mut input, &mut output)?;
    Ok(())
}
