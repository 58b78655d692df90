//! Reading reference structures and writing trajectory frames.
//!
//! | Format | Read (structure) | Write (frame) |
//! |--------|------------------|---------------|
//! | gro    | yes              | yes           |
//! | g96    | no               | yes           |
//! | xyz    | yes              | yes           |
//!
//! Every writer emits newline-terminated lines, so frames can be written
//! back to back into one trajectory file.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use crate::model::record::{FrameRecord, G96Frame};
use crate::model::structure::{GroStructure, Structure, XyzStructure};

pub mod error;
pub(crate) mod util;

mod g96;
mod gro;
mod reorder;
mod xyz;

pub use error::Error;
pub use reorder::read_reorder_indices;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Gro,
    G96,
    Xyz,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Gro, Format::G96, Format::Xyz];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Gro => "gro",
            Format::G96 => "g96",
            Format::Xyz => "xyz",
        }
    }

    pub fn from_path(path: &Path) -> Option<Format> {
        path.extension()?.to_str()?.parse().ok()
    }

    /// Whether frames of this format need a reference structure.
    pub fn needs_structure(self) -> bool {
        matches!(self, Format::Gro | Format::Xyz)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Gro => write!(f, "GRO"),
            Format::G96 => write!(f, "G96"),
            Format::Xyz => write!(f, "XYZ"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gro" => Ok(Format::Gro),
            "g96" => Ok(Format::G96),
            "xyz" => Ok(Format::Xyz),
            other => Err(format!("unknown format '{other}' (use gro, g96 or xyz)")),
        }
    }
}

/// Reads a reference structure in `format` from `reader`.
pub fn read_structure<R: BufRead>(reader: R, format: Format) -> Result<Structure, Error> {
    match format {
        Format::Gro => gro::reader::read(reader).map(Structure::Gro),
        Format::Xyz => xyz::reader::read(reader).map(Structure::Xyz),
        Format::G96 => Err(Error::UnsupportedReadFormat(format)),
    }
}

/// Loads a reference structure in `format` from the file at `path`.
pub fn load_structure(path: &Path, format: Format) -> Result<Structure, Error> {
    let file = File::open(path)?;
    read_structure(BufReader::new(file), format)
}

pub fn write_gro<W: Write>(writer: W, frame: &GroStructure) -> Result<(), Error> {
    gro::writer::write(writer, frame)
}

pub fn write_g96<W: Write>(writer: W, frame: &G96Frame) -> Result<(), Error> {
    g96::writer::write(writer, frame)
}

pub fn write_xyz<W: Write>(writer: W, frame: &XyzStructure) -> Result<(), Error> {
    xyz::writer::write(writer, frame)
}

pub fn write_frame<W: Write>(writer: W, record: &FrameRecord) -> Result<(), Error> {
    match record {
        FrameRecord::Gro(frame) => write_gro(writer, frame),
        FrameRecord::G96(frame) => write_g96(writer, frame),
        FrameRecord::Xyz(frame) => write_xyz(writer, frame),
    }
}

/// Writes `records` back to back and flushes `writer`.
pub fn write_trajectory<W: Write>(mut writer: W, records: &[FrameRecord]) -> Result<(), Error> {
    for record in records {
        write_frame(&mut writer, record)?;
    }
    writer.flush()?;
    Ok(())
}
