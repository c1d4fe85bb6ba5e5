//! Preset headers (`phdr`)

use crate::name::Name;
use std::io::{self, Read};

/// A single record from the `phdr` sub-chunk of the hydra
///
/// Every preset in a SoundFont is addressed MIDI-style by a bank and a preset (program) number.
/// The remaining fields point into the preset zone list (`pbag`) or are reserved by the
/// specification for future use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetHeader {
    /// The name of the preset
    pub name: Name,

    /// The MIDI preset (program) number
    pub preset: u16,

    /// The MIDI bank number
    pub bank: u16,

    /// Index of the first zone of this preset in `pbag`
    pub bag_index: u16,

    /// Reserved
    pub library: u32,

    /// Reserved
    pub genre: u32,

    /// Reserved
    pub morphology: u32,
}

impl PresetHeader {
    /// The number of bytes taken up by a single record
    pub const LEN: usize = 38;

    /// Read a preset header from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> io::Result<Self>
    where
        R: Read,
    {
        let name = {
            let mut bytes = [0; Name::LEN];
            reader.read_exact(&mut bytes)?;
            // The field is exactly Name::LEN bytes, so this can't be too long
            Name::from_bytes(&bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?
        };

        Ok(Self {
            name,
            preset: read_u16(&mut reader)?,
            bank: read_u16(&mut reader)?,
            bag_index: read_u16(&mut reader)?,
            library: read_u32(&mut reader)?,
            genre: read_u32(&mut reader)?,
            morphology: read_u32(&mut reader)?,
        })
    }
}

/// An entry in the ordered list of preset headers
///
/// The `phdr` list always ends in a terminal record (usually named `EOP`), which only exists so
/// the last real preset knows where its zones end. It looks like any other record on disk, but
/// it is not a preset, so it gets its own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEntry {
    /// A real preset
    Preset(PresetHeader),

    /// The sentinel record closing the list
    Terminal(PresetHeader),
}

impl PresetEntry {
    /// The header, if this entry is a real preset
    pub fn as_preset(&self) -> Option<&PresetHeader> {
        match self {
            PresetEntry::Preset(header) => Some(header),
            PresetEntry::Terminal(_) => None,
        }
    }
}

fn read_u16<R>(mut reader: R) -> io::Result<u16>
where
    R: Read,
{
    let mut bytes = [0; 2];
    reader.read_exact(&mut bytes)?;
    Ok(u16::from_le_bytes(bytes))
}

fn read_u32<R>(mut reader: R) -> io::Result<u32>
where
    R: Read,
{
    let mut bytes = [0; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}
