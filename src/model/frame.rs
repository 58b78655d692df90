/// One VENUS96 cycle: positions and velocities of every atom at one time.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Cycle counter as printed by VENUS96.
    pub cycle: u64,
    /// Simulation time in ps.
    pub time: f64,
    /// Positions in nm.
    pub positions: Vec<[f64; 3]>,
    /// Velocities in nm/ps.
    pub velocities: Vec<[f64; 3]>,
}

impl Frame {
    pub fn new(cycle: u64, time: f64) -> Self {
        Self {
            cycle,
            time,
            positions: Vec::new(),
            velocities: Vec::new(),
        }
    }

    pub fn with_capacity(cycle: u64, time: f64, atom_count: usize) -> Self {
        Self {
            cycle,
            time,
            positions: Vec::with_capacity(atom_count),
            velocities: Vec::with_capacity(atom_count),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn push_atom(&mut self, position: [f64; 3], velocity: [f64; 3]) {
        self.positions.push(position);
        self.velocities.push(velocity);
    }
}

/// Frames belonging to one "TRAJECTORY NUMBER" block of the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// Trajectory number as printed by VENUS96.
    pub index: usize,
    pub frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            frames: Vec::new(),
        }
    }

    /// Atom count shared by all frames, `None` while the segment is empty.
    #[inline]
    pub fn atom_count(&self) -> Option<usize> {
        self.frames.first().map(Frame::atom_count)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// First and last frame times in ps.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let first = self.frames.first()?;
        let last = self.frames.last()?;
        Some((first.time, last.time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_tracks_atom_count() {
        let mut frame = Frame::with_capacity(10, 0.1, 2);
        assert_eq!(frame.atom_count(), 0);
        frame.push_atom([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        frame.push_atom([0.1, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(frame.atom_count(), 2);
        assert_eq!(frame.velocities.len(), 2);
    }

    #[test]
    fn empty_trajectory_has_no_atom_count_or_span() {
        let traj = Trajectory::new(1);
        assert!(traj.is_empty());
        assert_eq!(traj.atom_count(), None);
        assert_eq!(traj.time_span(), None);
    }

    #[test]
    fn time_span_covers_first_and_last_frame() {
        let mut traj = Trajectory::new(3);
        traj.frames.push(Frame::new(0, 0.0));
        traj.frames.push(Frame::new(50, 0.5));
        traj.frames.push(Frame::new(100, 1.0));
        assert_eq!(traj.frame_count(), 3);
        assert_eq!(traj.time_span(), Some((0.0, 1.0)));
    }
}
