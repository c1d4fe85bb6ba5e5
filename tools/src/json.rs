//! JSON output in the compact, space-separated style

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Serialize a value on a single line, as `[{"key": value}, ...]`
///
/// Everything outside of ASCII is escaped as `\uXXXX`, so the output is plain ASCII regardless
/// of what the preset names contain.
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut bytes = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut bytes, SpacedFormatter);
    value.serialize(&mut serializer)?;

    // SpacedFormatter escapes every non-ASCII character, so this is lossless
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;

        for (index, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }

            writer.write_all(fragment[start..index].as_bytes())?;

            let mut units = [0; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }

            start = index + c.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}
