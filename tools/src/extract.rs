//! Extracting preset metadata as JSON

use crate::{config::Config, json};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use sf2::{PresetEntry, SoundFont};
use std::{io::Write, path::PathBuf};
use tracing::debug;

/// Arguments for extracting presets
#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the .sf2 file
    #[clap(long)]
    pub(crate) file: PathBuf,
}

/// The name and MIDI address of a single preset, as written to the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetRecord {
    pub name: String,
    pub preset: u16,
    pub bank: u16,
}

/// Turn preset header entries into output records, dropping the terminal record
pub fn project<'a, I>(entries: I) -> impl Iterator<Item = PresetRecord> + 'a
where
    I: IntoIterator<Item = &'a PresetEntry>,
    I::IntoIter: 'a,
{
    entries.into_iter().filter_map(|entry| match entry {
        PresetEntry::Preset(header) => Some(PresetRecord {
            name: header.name.decode().into_owned(),
            preset: header.preset,
            bank: header.bank,
        }),
        PresetEntry::Terminal(_) => None,
    })
}

/// Read the presets of the configured SoundFont, in file order
pub fn extract(config: &Config) -> Result<Vec<PresetRecord>> {
    let path = &config.file_path;

    // The file is opened and closed again within from_path
    let soundfont = SoundFont::from_path(path)
        .with_context(|| format!("Parsing the SoundFont at {} failed", path.display()))?;

    let records: Vec<_> = project(soundfont.entries()).collect();
    debug!("Found {} presets in {}", records.len(), path.display());

    Ok(records)
}

/// Extract the presets and write them to `writer` as a single line of JSON
///
/// The JSON is fully built before anything is written, so on failure `writer` is left untouched.
pub fn run<W>(config: &Config, mut writer: W) -> Result<()>
where
    W: Write,
{
    let records = extract(config)?;
    let json = json::to_string(&records).context("Serializing the presets to JSON failed")?;

    writeln!(writer, "{json}").context("Writing the presets failed")?;
    writer.flush().context("Writing the presets failed")?;

    Ok(())
}
