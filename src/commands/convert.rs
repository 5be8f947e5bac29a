//! Default command: convert input to the selected format

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use ansi2::cli::ConvertArgs;
use ansi2::config::RenderConfig;
use ansi2::{convert, font, Config};

/// Convert the input named by `args` and write the result to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let settings = args.merge(&config.render);
    let input = read_input(args.input.as_deref())?;

    let output = run(&input, &settings)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;
    Ok(())
}

/// Convert raw input bytes with merged settings.
pub(crate) fn run(input: &[u8], settings: &RenderConfig) -> Result<String> {
    let text = String::from_utf8_lossy(input);
    let mut options = settings.to_options();
    options.font = settings.font.as_deref().map(font::resolve).transpose()?;

    debug!(format = ?settings.format, bytes = input.len(), "Converting");
    Ok(convert(&text, settings.format, &options)?)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(path) = path {
        return fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path));
    }
    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pass a file or pipe text into ansi2 (see --help)");
    }
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read standard input")?;
    Ok(buf)
}
