use crate::io::error::Error;
use crate::model::record::G96Frame;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, frame: &G96Frame) -> Result<(), Error> {
    if frame.velocities.len() != frame.positions.len() {
        return Err(Error::Conversion(format!(
            "g96 frame has {} positions but {} velocities",
            frame.positions.len(),
            frame.velocities.len()
        )));
    }

    writeln!(writer, "TITLE")?;
    writeln!(writer, "{}", frame.title)?;
    writeln!(writer, "END")?;

    writeln!(writer, "TIMESTEP")?;
    writeln!(writer, "{:>15}{:>15.6}", frame.step, frame.time)?;
    writeln!(writer, "END")?;

    write_block(&mut writer, "POSITIONRED", &frame.positions)?;
    write_block(&mut writer, "VELOCITYRED", &frame.velocities)?;
    write_block(&mut writer, "BOX", std::slice::from_ref(&frame.box_vector))?;
    Ok(())
}

fn write_block<W: Write>(writer: &mut W, name: &str, rows: &[[f64; 3]]) -> Result<(), Error> {
    writeln!(writer, "{name}")?;
    for [x, y, z] in rows {
        writeln!(writer, "{:>15.9}{:>15.9}{:>15.9}", x, y, z)?;
    }
    writeln!(writer, "END")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_all_blocks() {
        let frame = G96Frame::new(
            3,
            1.0,
            vec![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]],
            vec![[10.0, 0.0, 0.0], [-2.5, 0.0, 0.0]],
        );
        let mut buf = Vec::new();
        write(&mut buf, &frame).expect("write g96");
        let text = String::from_utf8(buf).unwrap();
        let expected = "\
TITLE

END
TIMESTEP
              3       1.000000
END
POSITIONRED
    0.000000000    0.000000000    0.000000000
    0.100000000    0.000000000    0.000000000
END
VELOCITYRED
   10.000000000    0.000000000    0.000000000
   -2.500000000    0.000000000    0.000000000
END
BOX
    0.000000000    0.000000000    0.000000000
END
";
        assert_eq!(text, expected);
    }

    #[test]
    fn title_and_box_are_carried() {
        let mut frame = G96Frame::new(0, 0.25, vec![[1.0, 2.0, 3.0]], vec![[0.0; 3]]);
        frame.title = "run 7".into();
        frame.box_vector = [4.0, 4.0, 4.0];
        let mut buf = Vec::new();
        write(&mut buf, &frame).expect("write g96");
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "run 7");
        assert_eq!(lines[4], "              0       0.250000");
        assert_eq!(lines[lines.len() - 2], "    4.000000000    4.000000000    4.000000000");
    }

    #[test]
    fn mismatched_blocks_are_rejected() {
        let frame = G96Frame::new(0, 0.0, vec![[0.0; 3]; 2], vec![[0.0; 3]]);
        assert!(matches!(
            write(&mut Vec::<u8>::new(), &frame),
            Err(Error::Conversion(_))
        ));
    }
}
