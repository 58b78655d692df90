use crate::io::error::Error;
use crate::model::structure::XyzStructure;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, frame: &XyzStructure) -> Result<(), Error> {
    writeln!(writer, "{}", frame.atoms.len())?;
    writeln!(writer, "{}", frame.title)?;

    for atom in &frame.atoms {
        let [x, y, z] = atom.position;
        writeln!(
            writer,
            "{:<4}{:>13.8}{:>13.8}{:>13.8}",
            atom.name,
            x,
            y,
            z
        )?;
    }
    Ok(())
}
