use crate::io::{error::Error, util::fit_left};
use crate::model::structure::GroStructure;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, frame: &GroStructure) -> Result<(), Error> {
    writeln!(writer, "{}", frame.title)?;
    writeln!(writer, "{}", frame.atoms.len())?;

    for atom in &frame.atoms {
        let [x, y, z] = atom.position;
        let [vx, vy, vz] = atom.velocity;
        writeln!(
            writer,
            "{:>5}{}{}{:>5}{:>8.3}{:>8.3}{:>8.3}{:>8.4}{:>8.4}{:>8.4}",
            atom.residue_number,
            fit_left(&atom.residue_name, 5),
            fit_left(&atom.atom_name, 5),
            atom.atom_serial,
            x,
            y,
            z,
            vx,
            vy,
            vz,
        )?;
    }

    let [bx, by, bz] = frame.box_vector;
    writeln!(writer, "{:>10.6}{:>10.6}{:>10.6}", bx, by, bz)?;
    Ok(())
}
