use super::error::Error;
use crate::io::Format;
use crate::model::frame::{Frame, Trajectory};
use crate::model::record::{FrameRecord, G96Frame};
use crate::model::structure::{GroAtom, GroStructure, Structure, XyzAtom, XyzStructure};
use crate::model::units::nm_to_angstrom;

fn frame_title(title: &str, frame: &Frame) -> String {
    format!("{}, t= {:.4} ps", title, frame.time)
}

fn structure_format(structure: &Structure) -> Format {
    match structure {
        Structure::Gro(_) => Format::Gro,
        Structure::Xyz(_) => Format::Xyz,
    }
}

/// Verifies that every frame of `trajectory` matches the structure size.
pub fn check_atom_count(trajectory: &Trajectory, structure_atoms: usize) -> Result<(), Error> {
    match trajectory
        .frames
        .iter()
        .map(Frame::atom_count)
        .find(|&n| n != structure_atoms)
    {
        Some(trajectory_atoms) => Err(Error::AtomCountMismatch {
            trajectory: trajectory.index,
            trajectory_atoms,
            structure_atoms,
        }),
        None => Ok(()),
    }
}

/// Builds one gro frame per trajectory frame, reusing the structure's
/// residue and atom labels.
pub fn project_gro(
    trajectory: &Trajectory,
    structure: &GroStructure,
) -> Result<Vec<GroStructure>, Error> {
    check_atom_count(trajectory, structure.atom_count())?;

    Ok(trajectory
        .frames
        .iter()
        .map(|frame| {
            let atoms = structure
                .atoms
                .iter()
                .zip(frame.positions.iter().zip(&frame.velocities))
                .map(|(label, (&position, &velocity))| {
                    GroAtom::new(
                        label.residue_number,
                        label.residue_name.as_str(),
                        label.atom_name.as_str(),
                        label.atom_serial,
                        position,
                    )
                    .with_velocity(velocity)
                })
                .collect();
            GroStructure::new(frame_title(&structure.title, frame), atoms)
        })
        .collect())
}

/// Builds one g96 frame per trajectory frame, numbered from zero.
pub fn project_g96(trajectory: &Trajectory) -> Vec<G96Frame> {
    trajectory
        .frames
        .iter()
        .enumerate()
        .map(|(step, frame)| {
            G96Frame::new(
                step,
                frame.time,
                frame.positions.clone(),
                frame.velocities.clone(),
            )
        })
        .collect()
}

/// Builds one xyz frame per trajectory frame with positions in Angstrom.
pub fn project_xyz(
    trajectory: &Trajectory,
    structure: &XyzStructure,
) -> Result<Vec<XyzStructure>, Error> {
    check_atom_count(trajectory, structure.atom_count())?;

    Ok(trajectory
        .frames
        .iter()
        .map(|frame| {
            let atoms = structure
                .atoms
                .iter()
                .zip(&frame.positions)
                .map(|(label, &position)| {
                    XyzAtom::new(label.name.as_str(), nm_to_angstrom(position))
                })
                .collect();
            XyzStructure::new(frame_title(&structure.title, frame), atoms)
        })
        .collect())
}

/// Projects `trajectory` into records of `format`.
///
/// gro and xyz need a `structure` of the same format; g96 ignores it.
pub fn project(
    trajectory: &Trajectory,
    format: Format,
    structure: Option<&Structure>,
) -> Result<Vec<FrameRecord>, Error> {
    match (format, structure) {
        (Format::G96, _) => Ok(project_g96(trajectory)
            .into_iter()
            .map(FrameRecord::G96)
            .collect()),
        (Format::Gro, Some(Structure::Gro(gro))) => Ok(project_gro(trajectory, gro)?
            .into_iter()
            .map(FrameRecord::Gro)
            .collect()),
        (Format::Xyz, Some(Structure::Xyz(xyz))) => Ok(project_xyz(trajectory, xyz)?
            .into_iter()
            .map(FrameRecord::Xyz)
            .collect()),
        (output, Some(other)) => Err(Error::StructureFormatMismatch {
            output,
            structure: structure_format(other),
        }),
        (output, None) => Err(Error::MissingStructure(output)),
    }
}
