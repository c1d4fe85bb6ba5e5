//! The `.sf2` container

use crate::preset::{PresetEntry, PresetHeader};
use riff::{Chunk, ChunkId, LIST_ID, RIFF_ID};
use std::{
    fs::File,
    io::{self, BufReader, Cursor, Read, Seek, SeekFrom},
    path::Path,
};
use thiserror::Error;
use tracing::debug;

/// The preset headers of a SoundFont 2 file
///
/// A SoundFont is a RIFF file of form type `sfbk`. Its top-level lists are `INFO` (metadata),
/// `sdta` (sample data) and `pdta`, the "hydra" of nine sub-chunks describing presets,
/// instruments and samples. [`SoundFont`] reads only the first of those sub-chunks, `phdr`,
/// and keeps its records in file order.
///
/// ```no_run
/// # use sf2::SoundFont;
/// # use std::fs::File;
/// // Load a SoundFont from a path on disk
/// let soundfont = SoundFont::from_path("GeneralUser.sf2")?;
///
/// // Load a SoundFont from an arbitrary seekable reader
/// let soundfont = SoundFont::from_reader(File::open("GeneralUser.sf2")?)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundFont {
    entries: Vec<PresetEntry>,
}

impl SoundFont {
    /// Deserialize the preset headers from an arbitrary seekable I/O reader
    ///
    /// Chunks other than the `pdta` list are skipped without being read, so sample data never
    /// gets loaded into memory. Every chunk is checked to lie within its parent (and the RIFF
    /// chunk within the stream) before it is walked, so truncated files fail cleanly.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read + Seek,
    {
        let stream_len = reader.seek(SeekFrom::End(0))?;

        let riff = Chunk::read(&mut reader, 0)?;
        if riff.id() != RIFF_ID {
            return Err(FromReaderError::NotRiff(fourcc(&riff.id())));
        }

        let form = riff.read_type(&mut reader)?;
        if form.value != *b"sfbk" {
            return Err(FromReaderError::NotSoundFont(fourcc(&form)));
        }

        let riff_end = chunk_end(0, &riff);
        if riff_end > stream_len {
            return Err(FromReaderError::Truncated {
                id: fourcc(&riff.id()),
                end: riff_end,
                limit: stream_len,
            });
        }

        let mut entries = None;

        for (pos, chunk) in read_children(&mut reader, 0, &riff)? {
            if chunk.id() != LIST_ID {
                debug!("Skipping top-level chunk '{}'", fourcc(&chunk.id()));
                continue;
            }

            let list_type = chunk.read_type(&mut reader)?;
            match &list_type.value {
                b"pdta" => {
                    entries = Some(read_hydra(&mut reader, pos, &chunk)?);
                }
                b"INFO" | b"sdta" => (),
                _ => debug!("Skipping unknown list '{}'", fourcc(&list_type)),
            }
        }

        let entries = entries.ok_or(FromReaderError::MissingPdta)?;
        debug!("Read {} preset header records", entries.len());

        Ok(Self { entries })
    }

    /// Deserialize the preset headers from a path on disk (.sf2)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }

    /// Every record in the preset header list, including the terminal record
    pub fn entries(&self) -> &[PresetEntry] {
        &self.entries
    }

    /// Only the real presets, in file order
    pub fn presets(&self) -> impl Iterator<Item = &PresetHeader> + '_ {
        self.entries.iter().filter_map(PresetEntry::as_preset)
    }
}

/// The offset right after a chunk's payload (excluding the pad byte)
fn chunk_end(pos: u64, chunk: &Chunk) -> u64 {
    pos + 8 + chunk.len() as u64
}

/// Read the sub-chunks of a RIFF or LIST chunk at `pos`, along with their offsets
///
/// The parent must already be known to fit in the stream. Any child claiming to extend past
/// the end of its parent is an error.
fn read_children<R>(
    reader: &mut R,
    pos: u64,
    parent: &Chunk,
) -> Result<Vec<(u64, Chunk)>, FromReaderError>
where
    R: Read + Seek,
{
    let end = chunk_end(pos, parent);
    let mut children = Vec::new();

    // Skip the parent's header and its 4-byte form/list type
    let mut cur = pos + 12;

    // Trailing bytes too short for a chunk header are ignored
    while cur + 8 <= end {
        let chunk = Chunk::read(reader, cur)?;
        let len = chunk.len() as u64;
        let child_end = cur + 8 + len;

        if child_end > end {
            return Err(FromReaderError::Truncated {
                id: fourcc(&chunk.id()),
                end: child_end,
                limit: end,
            });
        }

        children.push((cur, chunk));

        // Chunks are padded to an even length
        cur = child_end + len % 2;
    }

    Ok(children)
}

/// Find the `phdr` sub-chunk in the hydra and decode its records
fn read_hydra<R>(
    reader: &mut R,
    pos: u64,
    pdta: &Chunk,
) -> Result<Vec<PresetEntry>, FromReaderError>
where
    R: Read + Seek,
{
    let (_, phdr) = read_children(reader, pos, pdta)?
        .into_iter()
        .find(|(_, chunk)| chunk.id().value == *b"phdr")
        .ok_or(FromReaderError::MissingPresetHeaders)?;

    let bytes = phdr.read_contents(reader)?;
    decode_preset_headers(&bytes)
}

/// Decode a `phdr` payload into entries, marking the last record as the terminal one
fn decode_preset_headers(bytes: &[u8]) -> Result<Vec<PresetEntry>, FromReaderError> {
    if bytes.len() % PresetHeader::LEN != 0 {
        return Err(FromReaderError::MisalignedPresetHeaders { len: bytes.len() });
    }

    let count = bytes.len() / PresetHeader::LEN;
    let mut reader = Cursor::new(bytes);
    let mut entries = Vec::with_capacity(count);

    for index in 0..count {
        let header = PresetHeader::from_reader(&mut reader)?;

        if index + 1 == count {
            entries.push(PresetEntry::Terminal(header));
        } else {
            entries.push(PresetEntry::Preset(header));
        }
    }

    Ok(entries)
}

fn fourcc(id: &ChunkId) -> String {
    String::from_utf8_lossy(&id.value).into_owned()
}

/// Errors that might be returned from [`SoundFont::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O, including truncated chunks
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The file does not start with a RIFF chunk
    #[error("Expected a RIFF file, but the first chunk is '{0}'")]
    NotRiff(String),

    /// The file is a RIFF file, but not a SoundFont
    #[error("Expected a RIFF form of type 'sfbk', found '{0}'")]
    NotSoundFont(String),

    /// There is no `pdta` list among the top-level chunks
    #[error("The file contains no preset data ('pdta') list")]
    MissingPdta,

    /// The `pdta` list has no `phdr` sub-chunk
    #[error("The preset data contains no preset headers ('phdr')")]
    MissingPresetHeaders,

    /// A chunk claims to extend past the end of its parent, or of the file itself
    #[error("Chunk '{id}' ends at byte {end}, past the end of its container at byte {limit}")]
    Truncated { id: String, end: u64, limit: u64 },

    /// The `phdr` sub-chunk does not consist of whole records
    #[error("The preset headers are {len} bytes long, which is not a multiple of 38")]
    MisalignedPresetHeaders { len: usize },
}

/// Errors that might be returned from [`SoundFont::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Could not open the file for reading
    #[error("Could not open the file for reading")]
    FileOpen(#[from] io::Error),

    /// Deserialization from the file failed
    #[error("Reading the SoundFont from file failed")]
    Read(#[from] FromReaderError),
}
