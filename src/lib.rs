//! Conversion of VENUS96 classical-trajectory output into GROMACS-readable
//! coordinate files.
//!
//! A VENUS96 log prints, for every integration cycle, the Cartesian
//! positions (Angstrom) and momenta of every atom. This crate extracts those
//! records into per-trajectory segments, converts them to nm and nm/ps, and
//! writes them as gro, g96 or xyz trajectories.
//!
//! # Features
//!
//! - **Log extraction**: anchor-driven scanning of VENUS96 output with a
//!   configurable [`LogLayout`] (TOML) for patched builds
//! - **Unit conversion**: Angstrom to nm, momentum to velocity, VENUS time
//!   units to ps
//! - **Reference structures**: residue and atom labels read from gro or xyz
//! - **Atom reordering**: optional permutation applied to every frame
//! - **Writers**: gro (positions and velocities), g96 (full precision) and
//!   xyz (Angstrom)
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use venus_trjconv::{Format, convert, io, venus};
//!
//! let log = "\
//!  NUMBER OF ATOMS =     2
//!  MASSES OF ATOMS
//!  ---------------
//!     1.00000   2.00000
//!  ***** TRAJECTORY NUMBER     1 *****
//!  THE CYCLE COUNT IS      0  TIME   100.0
//!  h
//!  h
//!  h
//!  h
//!      0.0   0.0   0.0   1.0   0.0   0.0
//!     10.0   0.0   0.0   4.0   0.0   0.0
//! ";
//! let gro = "\
//! HF
//! 2
//!     1HF       H    1   0.000   0.000   0.000
//!     1HF       F    2   0.000   0.000   0.000
//!    0.00000   0.00000   0.00000
//! ";
//! let structure = io::read_structure(Cursor::new(gro), Format::Gro)?;
//!
//! let trajectories = venus::extract(log)?;
//! let records = convert::project(&trajectories[0], Format::Gro, Some(&structure))?;
//!
//! let mut out = Vec::new();
//! io::write_trajectory(&mut out, &records)?;
//! let text = String::from_utf8(out)?;
//! assert!(text.starts_with("HF, t= 1.0000 ps\n2\n"));
//! assert!(text.contains("   1.000   0.000   0.000 20.0000  0.0000  0.0000"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`venus`]: log scanning and the [`LogLayout`] configuration
//! - [`convert`]: atom reordering and projection onto output records
//! - [`io`]: structure readers, frame writers and reorder files
//! - [`model`]: frames, trajectories, structures and unit conversions

pub mod convert;
pub mod io;
pub mod model;
pub mod venus;

pub use io::Format;
pub use model::frame::{Frame, Trajectory};
pub use model::record::{FrameRecord, G96Frame};
pub use model::structure::{GroAtom, GroStructure, Structure, XyzAtom, XyzStructure};
pub use venus::LogLayout;

pub use convert::Error as ConvertError;
pub use io::Error as IoError;
pub use venus::Error as VenusError;
