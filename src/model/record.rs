use super::structure::{GroStructure, XyzStructure};

/// One frame of a g96 trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct G96Frame {
    pub title: String,
    /// Zero-based frame index within the trajectory.
    pub step: usize,
    /// Time in ps.
    pub time: f64,
    /// Positions in nm.
    pub positions: Vec<[f64; 3]>,
    /// Velocities in nm/ps.
    pub velocities: Vec<[f64; 3]>,
    /// Box edge lengths in nm, zero when unknown.
    pub box_vector: [f64; 3],
}

impl G96Frame {
    pub fn new(step: usize, time: f64, positions: Vec<[f64; 3]>, velocities: Vec<[f64; 3]>) -> Self {
        Self {
            title: String::new(),
            step,
            time,
            positions,
            velocities,
            box_vector: [0.0; 3],
        }
    }
}

/// A frame ready to be serialized, tagged by output format.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameRecord {
    Gro(GroStructure),
    G96(G96Frame),
    Xyz(XyzStructure),
}

impl FrameRecord {
    pub fn atom_count(&self) -> usize {
        match self {
            FrameRecord::Gro(r) => r.atom_count(),
            FrameRecord::G96(r) => r.positions.len(),
            FrameRecord::Xyz(r) => r.atom_count(),
        }
    }
}
