//! Error types for trajectory conversion.

use crate::io::Format;
use thiserror::Error;

/// Errors raised while combining trajectories with reference structures.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference structure and a trajectory segment disagree on size.
    #[error(
        "trajectory {trajectory} has {trajectory_atoms} atoms but the structure has {structure_atoms}"
    )]
    AtomCountMismatch {
        /// VENUS trajectory number of the segment.
        trajectory: usize,
        /// Atoms per frame in the segment.
        trajectory_atoms: usize,
        /// Atoms in the reference structure.
        structure_atoms: usize,
    },

    /// The reorder indices do not form a permutation of the atoms.
    #[error("invalid reorder map: {0}")]
    InvalidReorderMap(String),

    /// The output format needs a reference structure and none was given.
    #[error("{0} output requires a reference structure")]
    MissingStructure(Format),

    /// The reference structure is in a different format than the output.
    #[error("{output} output cannot use a {structure} reference structure")]
    StructureFormatMismatch {
        /// Requested output format.
        output: Format,
        /// Format of the supplied structure.
        structure: Format,
    },
}
