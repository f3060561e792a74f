//! Save command handlers
//!
//! Payloads go to stdout (or `--output`); status lines go to stderr so
//! piped output stays clean.

use anyhow::{Context, Result};
use std::path::Path;

use borbot::{convert, Save, SaveRecord, Scheme};

use crate::file_io;

/// Handle `borbot detect`
pub fn detect(input: Option<&Path>) -> Result<()> {
    let blob = file_io::read_input(input)?;
    let scheme =
        borbot::detect_scheme(blob.trim()).context("Failed to detect save scheme")?;
    println!("{}", scheme);
    Ok(())
}

/// Handle `borbot decode`
pub fn decode(input: Option<&Path>, output: Option<&Path>, pretty: bool) -> Result<()> {
    let blob = file_io::read_input(input)?;
    let save = Save::decode(blob.trim()).context("Failed to decode save")?;

    eprintln!("Scheme: {}", save.scheme);

    let json = if pretty {
        serde_json::to_string_pretty(&save.data)
    } else {
        serde_json::to_string(&save.data)
    }
    .context("Failed to serialize record")?;

    file_io::write_output(output, &json)
}

/// Handle `borbot encode`
pub fn encode(input: Option<&Path>, output: Option<&Path>, scheme: Scheme) -> Result<()> {
    let json = file_io::read_input(input)?;
    let record: SaveRecord =
        serde_json::from_str(&json).context("Failed to parse JSON record")?;
    let blob = record.encode(scheme).context("Failed to encode save")?;
    file_io::write_output(output, &blob)
}

/// Handle `borbot convert`
pub fn convert_save(
    input: Option<&Path>,
    output: Option<&Path>,
    scheme: Option<Scheme>,
) -> Result<()> {
    let blob = file_io::read_input(input)?;
    let save = Save::decode(blob.trim()).context("Failed to decode save")?;

    let converted = convert(&save.data);

    eprintln!("Current save format: {}", save.data.platform.to_uppercase());
    eprintln!("Converted to: {}", converted.platform.to_uppercase());
    eprintln!("Rubies before conversion: {}", save.data.rubies);
    eprintln!("Rubies after conversion: {}", converted.rubies);

    let target_scheme = scheme.unwrap_or(save.scheme);
    let blob = converted
        .encode(target_scheme)
        .context("Failed to encode converted save")?;
    file_io::write_output(output, &blob)
}
