use crate::io::{Format, error::Error, util};
use crate::model::structure::{GroAtom, GroStructure};
use std::io::BufRead;

const POSITION_COLUMNS: (usize, usize) = (20, 44);
const VELOCITY_FIELD_WIDTH: usize = 8;

pub fn read<R: BufRead>(reader: R) -> Result<GroStructure, Error> {
    let lines = util::collect_lines(reader)?;

    let title = lines
        .first()
        .ok_or_else(|| Error::parse(Format::Gro, 1, "missing title line"))?
        .trim_end()
        .to_string();

    let count_line = lines
        .get(1)
        .ok_or_else(|| Error::parse(Format::Gro, 2, "missing atom count line"))?;
    let atom_count: usize = util::parse_field(count_line, Format::Gro, 2, "atom count")?;

    let atom_start = 2;
    let box_index = atom_start + atom_count;
    if lines.len() <= box_index {
        return Err(Error::parse(
            Format::Gro,
            lines.len() + 1,
            format!("file ended before {atom_count} atoms and the box line were read"),
        ));
    }

    let atoms = lines[atom_start..box_index]
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_atom(atom_start + i + 1, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let box_vector = parse_box(box_index + 1, &lines[box_index])?;

    Ok(GroStructure {
        title,
        atoms,
        box_vector,
    })
}

fn parse_atom(line: usize, raw: &str) -> Result<GroAtom, Error> {
    let raw = raw.trim_end();

    let residue_number = util::parse_field(
        util::columns(raw, 0, 5),
        Format::Gro,
        line,
        "residue number",
    )?;
    let residue_name = util::columns(raw, 5, 10).trim();
    let atom_name = util::columns(raw, 10, 15).trim();
    let atom_serial = util::parse_field(
        util::columns(raw, 15, 20),
        Format::Gro,
        line,
        "atom serial",
    )?;

    let (start, end) = POSITION_COLUMNS;
    let position = util::parse_vec3(
        util::columns(raw, start, end).split_whitespace(),
        Format::Gro,
        line,
        "position",
    )?;

    let velocity = if raw.len() > end {
        let field = |k: usize| {
            let from = end + k * VELOCITY_FIELD_WIDTH;
            util::columns(raw, from, from + VELOCITY_FIELD_WIDTH)
        };
        util::parse_vec3([field(0), field(1), field(2)], Format::Gro, line, "velocity")?
    } else {
        [0.0; 3]
    };

    Ok(
        GroAtom::new(residue_number, residue_name, atom_name, atom_serial, position)
            .with_velocity(velocity),
    )
}

fn parse_box(line: usize, raw: &str) -> Result<[f64; 3], Error> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(Error::parse(
            Format::Gro,
            line,
            format!("box line needs at least 3 values, found {}", fields.len()),
        ));
    }
    util::parse_vec3(fields[..3].iter().copied(), Format::Gro, line, "box vector")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "\
Water, t= 0.0
3
    1SOL     OW    1   0.126   1.624   1.679  0.1227 -0.0580  0.0434
    1SOL    HW1    2   0.190   1.661   1.747  0.8085  0.3191 -0.7791
    1SOL    HW2    3   0.177   1.568   1.613 -0.9045 -2.6469  1.3180
   1.86206   1.86206   1.86206
";

    #[test]
    fn reads_atoms_with_velocities() {
        let gro = read(Cursor::new(WATER)).expect("read gro");
        assert_eq!(gro.title, "Water, t= 0.0");
        assert_eq!(gro.atom_count(), 3);

        let ow = &gro.atoms[0];
        assert_eq!(ow.residue_number, 1);
        assert_eq!(ow.residue_name, "SOL");
        assert_eq!(ow.atom_name, "OW");
        assert_eq!(ow.atom_serial, 1);
        assert_eq!(ow.position, [0.126, 1.624, 1.679]);
        assert_eq!(ow.velocity, [0.1227, -0.0580, 0.0434]);

        assert_eq!(gro.atoms[2].atom_name, "HW2");
        assert_eq!(gro.atoms[2].velocity, [-0.9045, -2.6469, 1.3180]);
        assert_eq!(gro.box_vector, [1.86206, 1.86206, 1.86206]);
    }

    #[test]
    fn missing_velocity_columns_read_as_zero() {
        let text = "\
HCl
2
    1HCL      H    1   0.000   0.000   0.000
    1HCL     CL    2   0.127   0.000   0.000
   0.00000   0.00000   0.00000
";
        let gro = read(Cursor::new(text)).expect("read gro");
        assert_eq!(gro.atoms[0].velocity, [0.0; 3]);
        assert_eq!(gro.atoms[1].velocity, [0.0; 3]);
        assert_eq!(gro.atoms[1].position, [0.127, 0.0, 0.0]);
    }

    #[test]
    fn triclinic_box_keeps_diagonal() {
        let text = "t\n0\n   2.0 3.0 4.0 0.0 0.0 0.5 0.0 0.5 0.5\n";
        let gro = read(Cursor::new(text)).expect("read gro");
        assert_eq!(gro.box_vector, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn truncated_file_is_rejected() {
        let text = "t\n2\n    1SOL     OW    1   0.126   1.624   1.679\n";
        match read(Cursor::new(text)) {
            Err(Error::Parse { format, line, .. }) => {
                assert_eq!(format, Format::Gro);
                assert_eq!(line, 4);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn bad_residue_number_reports_line() {
        let text = "t\n1\n    xSOL     OW    1   0.126   1.624   1.679\n 1 1 1\n";
        match read(Cursor::new(text)) {
            Err(Error::Parse { line, details, .. }) => {
                assert_eq!(line, 3);
                assert!(details.contains("residue number"), "{details}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_box_values_are_rejected() {
        let text = "t\n1\n    1SOL     OW    1   0.126   1.624   1.679\n 1.0 1.0\n";
        assert!(matches!(
            read(Cursor::new(text)),
            Err(Error::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn invalid_atom_count_is_rejected() {
        assert!(matches!(
            read(Cursor::new("t\nmany\n")),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read(Cursor::new("")),
            Err(Error::Parse { line: 1, .. })
        ));
    }
}
