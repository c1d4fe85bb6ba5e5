//! # SF2 Tools
//!
//! [SoundFont 2](https://en.wikipedia.org/wiki/SoundFont) files bundle sampled instruments into
//! presets, each addressed MIDI-style by a bank and a preset (program) number. When building
//! patch lists for a synth or a sampler, you usually need nothing but those addresses and the
//! preset names, which is exactly what this crate's command-line utility prints.
//!
//! ## Usage
//!
//! ```console
//! sf2-tools 0.1.0
//! Stijn Frishert <info@stijnfrishert.com>
//! Print the presets of a SoundFont 2 file as JSON
//!
//! USAGE:
//!     parse-sf2 --file <FILE>
//!
//! OPTIONS:
//!         --file <FILE>    Path to the .sf2 file
//!     -h, --help           Print help information
//!     -V, --version        Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > parse-sf2 --file piano_strings.sf2
//! [{"name": "Grand Piano", "preset": 0, "bank": 0}, {"name": "Strings", "preset": 48, "bank": 0}]
//! ```
//!
//! The output is a single line of JSON with one object per preset, in the order the presets
//! appear in the file. Non-ASCII characters in names are escaped. When anything goes wrong, the
//! error is printed to stderr, nothing is printed to stdout, and the exit code is 1.
//!
//! Set `RUST_LOG=debug` to see which chunks were read.

pub mod config;
pub mod extract;
pub(crate) mod json;
