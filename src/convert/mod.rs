//! Turning extracted trajectories into output frame records.
//!
//! A trajectory holds only numbers; the residue and atom labels of gro and
//! xyz output come from a reference [`Structure`](crate::model::structure::Structure)
//! with the same atom count. An optional [`ReorderMap`] permutes the atoms
//! of every frame before projection.

mod error;
mod project;
mod reorder;

pub use error::Error;
pub use project::{check_atom_count, project, project_g96, project_gro, project_xyz};
pub use reorder::{ReorderMap, reorder};
