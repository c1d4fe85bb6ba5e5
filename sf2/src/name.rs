//! A null-terminated/length-restricted preset name
use encoding_rs::WINDOWS_1252;
use std::{borrow::Cow, fmt};
use thiserror::Error;

/// A null-terminated/length-restricted preset name
///
/// Preset, instrument and sample headers in the SoundFont hydra all start with a 20-byte name
/// field. The name ends at the first 0 byte, or fills the whole field when no terminator is
/// present. Anything after the terminator is garbage left behind by the authoring tool.
///
/// The SoundFont specification asks for ASCII, but real-world files contain Latin-1 style
/// bytes as well, which is why [`Name::decode`] treats the field as Windows-1252.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    bytes: [u8; Self::LEN],
}

impl Name {
    /// The size in bytes of a name field in a hydra record
    pub const LEN: usize = 20;

    /// Try to convert a byte slice to a name
    ///
    /// This function fails if the bytes are longer than the name field. Shorter slices
    /// are padded with 0's.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FromBytesError> {
        if bytes.len() > Self::LEN {
            return Err(FromBytesError::TooLong);
        }

        let mut dest = [0; Self::LEN];
        dest[..bytes.len()].copy_from_slice(bytes);

        Ok(Self { bytes: dest })
    }

    /// Access the underlying bytes that make up the name
    ///
    /// This includes any amount of 0's (or garbage following them) of the raw field
    pub fn bytes(&self) -> &[u8; Self::LEN] {
        &self.bytes
    }

    /// The number of bytes up to the null-termination (or [`Name::LEN`])
    pub fn len(&self) -> usize {
        self.bytes.iter().position(|c| *c == 0).unwrap_or(Self::LEN)
    }

    /// Are there _any_ characters in the name?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the name up to its terminator
    ///
    /// Every byte maps to a character in Windows-1252, so this never fails. Pure ASCII
    /// names are borrowed without copying.
    pub fn decode(&self) -> Cow<'_, str> {
        WINDOWS_1252.decode_without_bom_handling(&self.bytes[..self.len()]).0
    }
}

impl Default for Name {
    fn default() -> Self {
        Self {
            bytes: [0; Self::LEN],
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

impl<'a> TryFrom<&'a [u8]> for Name {
    type Error = FromBytesError;

    #[inline]
    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Errors that can result from trying to convert a byte slice to a [`Name`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromBytesError {
    /// Error case for when the source slice is too big to fit in the [`Name`] field
    #[error("The slice did not fit in the name field")]
    TooLong,
}
