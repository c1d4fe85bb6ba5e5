//! Reading preset metadata from SoundFont 2 (`.sf2`) files
//!
//! A SoundFont is a RIFF container of form type `sfbk`, holding an `INFO` list, sample data
//! (`sdta`) and the "hydra" (`pdta`), which describes presets, instruments and samples. This
//! crate only walks as far as the preset headers (`phdr`): sample data is never loaded, and
//! zones, generators and modulators are not decoded.
//!
//! ```no_run
//! # use sf2::SoundFont;
//! let soundfont = SoundFont::from_path("GeneralUser.sf2")?;
//!
//! for preset in soundfont.presets() {
//!     println!("{:03}:{:03} {}", preset.bank, preset.preset, preset.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod name;
pub mod preset;
pub mod soundfont;

pub use preset::{PresetEntry, PresetHeader};
pub use soundfont::SoundFont;
