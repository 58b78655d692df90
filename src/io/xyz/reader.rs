use crate::io::{Format, error::Error, util};
use crate::model::structure::{XyzAtom, XyzStructure};
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<XyzStructure, Error> {
    let lines = util::collect_lines(reader)?;

    let count_line = lines
        .first()
        .ok_or_else(|| Error::parse(Format::Xyz, 1, "missing atom count line"))?;
    let atom_count: usize = util::parse_field(count_line, Format::Xyz, 1, "atom count")?;

    let title = lines
        .get(1)
        .ok_or_else(|| Error::parse(Format::Xyz, 2, "missing comment line"))?
        .trim_end()
        .to_string();

    let mut atoms = Vec::with_capacity(atom_count);
    for k in 0..atom_count {
        let line_no = k + 3;
        let raw = lines.get(k + 2).ok_or_else(|| {
            Error::parse(
                Format::Xyz,
                line_no,
                format!("expected {atom_count} atoms, found {k}"),
            )
        })?;

        let mut fields = raw.split_whitespace();
        let name = fields
            .next()
            .ok_or_else(|| Error::parse(Format::Xyz, line_no, "empty atom line"))?;
        let coords: Vec<&str> = fields.take(3).collect();
        let position = util::parse_vec3(coords, Format::Xyz, line_no, "position")?;

        atoms.push(XyzAtom::new(name, position));
    }

    Ok(XyzStructure { title, atoms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_names_and_positions() {
        let text = "\
3
water molecule
O    0.000000   0.000000   0.117300
H    0.000000   0.757200  -0.469200
H    0.000000  -0.757200  -0.469200
";
        let xyz = read(Cursor::new(text)).expect("read xyz");
        assert_eq!(xyz.title, "water molecule");
        assert_eq!(xyz.atom_count(), 3);
        assert_eq!(xyz.atoms[0].name, "O");
        assert_eq!(xyz.atoms[2].position, [0.0, -0.7572, -0.4692]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let text = "1\n\nC 1.0 2.0 3.0 -0.25 extra\n";
        let xyz = read(Cursor::new(text)).expect("read xyz");
        assert_eq!(xyz.title, "");
        assert_eq!(xyz.atoms[0].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn lines_after_declared_atoms_are_ignored() {
        let text = "1\nframe 0\nC 0 0 0\n1\nframe 1\nC 1 1 1\n";
        let xyz = read(Cursor::new(text)).expect("read xyz");
        assert_eq!(xyz.atom_count(), 1);
        assert_eq!(xyz.atoms[0].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn missing_atoms_are_rejected() {
        let text = "2\nt\nC 0 0 0\n";
        match read(Cursor::new(text)) {
            Err(Error::Parse { format, line, details }) => {
                assert_eq!(format, Format::Xyz);
                assert_eq!(line, 4);
                assert!(details.contains("found 1"), "{details}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn short_coordinates_are_rejected() {
        let text = "1\nt\nC 0.0 1.0\n";
        assert!(matches!(
            read(Cursor::new(text)),
            Err(Error::Parse { line: 3, .. })
        ));
    }
}
