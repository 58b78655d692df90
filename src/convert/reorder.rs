use super::error::Error;
use crate::model::frame::{Frame, Trajectory};
use log::debug;

/// A permutation of atom indices.
///
/// Entry `i` names the source atom that moves to position `i`, so applying
/// the map gathers `new[i] = old[map[i]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderMap {
    order: Vec<usize>,
}

impl ReorderMap {
    /// Builds a map from 1-based atom indices, as written in reorder files.
    pub fn from_one_based(indices: Vec<usize>) -> Result<Self, Error> {
        let n = indices.len();
        if n == 0 {
            return Err(Error::InvalidReorderMap("no atom indices given".into()));
        }

        let mut seen = vec![false; n];
        let mut order = Vec::with_capacity(n);
        for (position, &index) in indices.iter().enumerate() {
            if index == 0 || index > n {
                return Err(Error::InvalidReorderMap(format!(
                    "index {index} at position {} is outside 1..={n}",
                    position + 1
                )));
            }
            let zero_based = index - 1;
            if seen[zero_based] {
                return Err(Error::InvalidReorderMap(format!(
                    "index {index} appears more than once"
                )));
            }
            seen[zero_based] = true;
            order.push(zero_based);
        }

        Ok(Self { order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based source indices in output order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Returns a reordered copy of `frame`.
    ///
    /// Fails when the frame does not hold exactly one position and one
    /// velocity per map entry.
    pub fn apply(&self, frame: &Frame) -> Result<Frame, Error> {
        let n = self.len();
        if frame.positions.len() != n || frame.velocities.len() != n {
            return Err(Error::InvalidReorderMap(format!(
                "map has {n} entries but frame at cycle {} has {} positions and {} velocities",
                frame.cycle,
                frame.positions.len(),
                frame.velocities.len()
            )));
        }

        Ok(Frame {
            cycle: frame.cycle,
            time: frame.time,
            positions: self.order.iter().map(|&i| frame.positions[i]).collect(),
            velocities: self.order.iter().map(|&i| frame.velocities[i]).collect(),
        })
    }
}

/// Reorders every frame of `trajectory` in place.
pub fn reorder(trajectory: &mut Trajectory, map: &ReorderMap) -> Result<(), Error> {
    let Some(atom_count) = trajectory.atom_count() else {
        return Ok(());
    };
    if map.len() != atom_count {
        return Err(Error::InvalidReorderMap(format!(
            "map has {} entries but trajectory {} has {atom_count} atoms",
            map.len(),
            trajectory.index
        )));
    }

    trajectory.frames = trajectory
        .frames
        .iter()
        .map(|frame| map.apply(frame))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "Reordered {} frames of trajectory {}",
        trajectory.frame_count(),
        trajectory.index
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(cycle: u64, offset: f64) -> Frame {
        let mut frame = Frame::new(cycle, cycle as f64 * 0.01);
        for i in 0..3 {
            let x = offset + i as f64;
            frame.push_atom([x, 0.0, 0.0], [0.0, x, 0.0]);
        }
        frame
    }

    #[test]
    fn one_based_indices_become_zero_based() {
        let map = ReorderMap::from_one_based(vec![2, 1, 3]).unwrap();
        assert_eq!(map.as_slice(), &[1, 0, 2]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(matches!(
            ReorderMap::from_one_based(vec![]),
            Err(Error::InvalidReorderMap(_))
        ));
        assert!(matches!(
            ReorderMap::from_one_based(vec![1, 0]),
            Err(Error::InvalidReorderMap(_))
        ));
        assert!(matches!(
            ReorderMap::from_one_based(vec![1, 3]),
            Err(Error::InvalidReorderMap(_))
        ));
        match ReorderMap::from_one_based(vec![2, 2, 1]) {
            Err(Error::InvalidReorderMap(details)) => {
                assert!(details.contains("more than once"), "{details}")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn apply_gathers_positions_and_velocities() {
        let map = ReorderMap::from_one_based(vec![3, 1, 2]).unwrap();
        let original = frame(5, 0.0);
        let moved = map.apply(&original).unwrap();

        assert_eq!(moved.cycle, 5);
        assert_eq!(moved.time, original.time);
        assert_eq!(
            moved.positions,
            vec![[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]
        );
        assert_eq!(
            moved.velocities,
            vec![[0.0, 2.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn swap_applies_to_every_frame() {
        let mut trajectory = Trajectory::new(1);
        trajectory.frames = vec![frame(0, 0.0), frame(10, 100.0)];
        let map = ReorderMap::from_one_based(vec![2, 1, 3]).unwrap();

        reorder(&mut trajectory, &map).unwrap();

        for (frame, offset) in trajectory.frames.iter().zip([0.0, 100.0]) {
            assert_eq!(frame.positions[0], [offset + 1.0, 0.0, 0.0]);
            assert_eq!(frame.positions[1], [offset, 0.0, 0.0]);
            assert_eq!(frame.positions[2], [offset + 2.0, 0.0, 0.0]);
            assert_eq!(frame.velocities[0], [0.0, offset + 1.0, 0.0]);
            assert_eq!(frame.velocities[1], [0.0, offset, 0.0]);
        }
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let mut trajectory = Trajectory::new(4);
        trajectory.frames.push(frame(0, 0.0));
        let map = ReorderMap::from_one_based(vec![2, 1]).unwrap();
        let before = trajectory.clone();

        assert!(matches!(
            reorder(&mut trajectory, &map),
            Err(Error::InvalidReorderMap(_))
        ));
        assert_eq!(trajectory, before);
    }

    #[test]
    fn apply_rejects_frame_of_other_size() {
        let map = ReorderMap::from_one_based(vec![4, 3, 2, 1]).unwrap();
        match map.apply(&frame(7, 0.0)) {
            Err(Error::InvalidReorderMap(details)) => {
                assert!(details.contains("cycle 7"), "{details}");
                assert!(details.contains("3 positions"), "{details}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn short_later_frame_leaves_trajectory_unchanged() {
        let mut short = Frame::new(20, 0.2);
        short.push_atom([0.0; 3], [0.0; 3]);
        let mut trajectory = Trajectory::new(1);
        trajectory.frames = vec![frame(0, 0.0), short];
        let map = ReorderMap::from_one_based(vec![2, 1, 3]).unwrap();
        let before = trajectory.clone();

        assert!(matches!(
            reorder(&mut trajectory, &map),
            Err(Error::InvalidReorderMap(_))
        ));
        assert_eq!(trajectory, before);
    }

    #[test]
    fn empty_trajectory_is_left_alone() {
        let mut trajectory = Trajectory::new(2);
        let map = ReorderMap::from_one_based(vec![1]).unwrap();
        assert!(reorder(&mut trajectory, &map).is_ok());
    }
}
