//! Extraction of trajectories from VENUS96 output.
//!
//! A VENUS96 log interleaves free-text headers with fixed per-atom records.
//! Four anchor phrases locate the structurally significant lines:
//!
//! - `NUMBER OF ATOMS`: declares the atom count (value after the last `=`)
//! - `MASSES OF ATOMS`: the atomic masses follow two lines below
//! - `TRAJECTORY NUMBER`: opens a trajectory segment (4th field)
//! - `THE CYCLE COUNT IS`: opens a frame; cycle in field 5, time in field 7,
//!   then four header lines and one `x y z px py pz` line per atom
//!
//! Coordinates are converted from Å to nm, momenta to velocities in nm/ps
//! and times to ps (see [`crate::model::units`]). The anchors and field
//! positions come from a [`LogLayout`], which defaults to stock VENUS96.
//!
//! ```
//! use venus_trjconv::venus;
//!
//! let log = "\
//!  NUMBER OF ATOMS =     1
//!  MASSES OF ATOMS
//!  ---------------
//!     2.00000
//!  ***** TRAJECTORY NUMBER     1 *****
//!  THE CYCLE COUNT IS      0  TIME   250.0
//!  header
//!  header
//!  header
//!  header
//!     10.0  20.0  30.0   2.0   0.0   0.0
//! ";
//! let trajectories = venus::extract(log)?;
//! assert_eq!(trajectories.len(), 1);
//! let frame = &trajectories[0].frames[0];
//! assert!((frame.time - 2.5).abs() < 1e-12);
//! assert!((frame.positions[0][2] - 3.0).abs() < 1e-12);
//! assert!((frame.velocities[0][0] - 10.0).abs() < 1e-12);
//! # Ok::<(), venus::Error>(())
//! ```

mod error;
mod layout;
mod scanner;

pub use error::Error;
pub use layout::{Anchors, FieldLayout, LogLayout};

use crate::model::frame::Trajectory;
use log::info;
use scanner::Scanner;

/// Extracts all trajectories from a VENUS96 log using the stock layout.
pub fn extract(source: &str) -> Result<Vec<Trajectory>, Error> {
    extract_with(source, LogLayout::venus96())
}

/// Extracts all trajectories from a VENUS96 log using `layout`.
///
/// Trajectories are returned in order of first appearance. A trajectory
/// number seen before does not open a new segment, and the cycles after it
/// are added to the last segment opened.
pub fn extract_with(source: &str, layout: &LogLayout) -> Result<Vec<Trajectory>, Error> {
    let mut scanner = Scanner::new(layout);
    for (i, text) in source.lines().enumerate() {
        scanner.feed(i + 1, text)?;
    }
    let trajectories = scanner.finish()?;

    info!(
        "Extracted {} trajectories ({} frames)",
        trajectories.len(),
        trajectories.iter().map(Trajectory::frame_count).sum::<usize>()
    );

    Ok(trajectories)
}
