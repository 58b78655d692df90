use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();
    let mut typed = false;

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<venus_trjconv::VenusError>() {
            venus_hints(e, &mut hints);
            typed = true;
        } else if let Some(e) = cause.downcast_ref::<venus_trjconv::IoError>() {
            io_hints(e, &mut hints);
            typed = true;
        } else if let Some(e) = cause.downcast_ref::<venus_trjconv::ConvertError>() {
            convert_hints(e, &mut hints);
            typed = true;
        } else if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            std_io_hints(e, &mut hints);
            typed = true;
        }
        if typed {
            break;
        }
    }

    if !typed {
        fallback_hints(err, &mut hints);
    }
    hints
}

fn venus_hints(err: &venus_trjconv::VenusError, hints: &mut Vec<String>) {
    use venus_trjconv::VenusError as E;

    if let Some(line) = err.line() {
        hints.push(format!("Inspect the log around line {line}"));
    }

    match err {
        E::LayoutParse(_) => {
            hints.push("The --layout file has invalid TOML syntax".into());
            hints.push("Only [anchors] and [fields] tables are recognised".into());
        }
        E::InvalidLayout(_) => {
            hints.push("Anchor phrases must be non-empty".into());
            hints.push("Token positions and the masses offset start at 1".into());
        }
        E::MalformedInput { .. } => {
            hints.push("Atom records need exactly six numbers: x y z px py pz".into());
            hints.push("If the log comes from a patched VENUS build, describe its layout with --layout".into());
        }
        E::MissingMasses { .. } | E::MissingAtomCount { .. } => {
            hints.push("The log header appears to be missing or truncated".into());
            hints.push("Pass the complete VENUS96 output, not an excerpt of the cycles".into());
        }
        E::OrphanCycle { .. } => {
            hints.push("No TRAJECTORY NUMBER line was seen before this cycle".into());
        }
        E::UnexpectedEndOfInput { .. } => {
            hints.push("The run may have been interrupted while writing the log".into());
            hints.push("Truncate the log after the last complete cycle".into());
        }
        E::InconsistentAtomCount { expected, found, .. } => {
            hints.push(format!("The header declares {expected} atoms but {found} were found"));
        }
    }
}

fn io_hints(err: &venus_trjconv::IoError, hints: &mut Vec<String>) {
    use venus_trjconv::IoError as E;

    match err {
        E::Io { source } => std_io_hints(source, hints),
        E::Parse { format, line, .. } => {
            hints.push(format!("The {format} file looks malformed near line {line}"));
            match format {
                venus_trjconv::Format::Gro => {
                    hints.push("gro atom lines use fixed columns: 5+5+5+5 chars, then coordinates".into());
                }
                venus_trjconv::Format::Xyz => {
                    hints.push("xyz files start with the atom count, then a comment line".into());
                }
                venus_trjconv::Format::G96 => {}
            }
        }
        E::UnsupportedReadFormat(format) => {
            hints.push(format!("{format} files cannot be used as a reference structure"));
            hints.push("Use a gro or xyz structure with -s".into());
        }
        E::Conversion(_) => {
            hints.push("A frame could not be written consistently".into());
        }
        E::Reorder { line, .. } => {
            hints.push(format!("Check the reorder file near line {line}"));
            hints.push("Each entry must be a 1-based atom index; # starts a comment".into());
        }
    }
}

fn convert_hints(err: &venus_trjconv::ConvertError, hints: &mut Vec<String>) {
    use venus_trjconv::ConvertError as E;

    match err {
        E::AtomCountMismatch { .. } => {
            hints.push("The structure given with -s must describe the simulated system".into());
            hints.push("Atoms must appear in the same order as in the VENUS input".into());
        }
        E::InvalidReorderMap(_) => {
            hints.push("The reorder file must list every atom index from 1 to N exactly once".into());
        }
        E::MissingStructure(format) => {
            hints.push(format!("{format} output needs atom names: pass a structure with -s"));
            hints.push("g96 output can be written without a structure".into());
        }
        E::StructureFormatMismatch { output, .. } => {
            hints.push(format!("Use a {} structure for {output} output", output.extension()));
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("The file is not valid UTF-8 text".into());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {
            hints.push("Check file path, permissions and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let msg = err
        .chain()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    if msg.contains("extension") {
        hints.push("Output files must end in .gro, .g96 or .xyz".into());
    } else if msg.contains("structure") {
        hints.push("gro and xyz output need -s with a structure of the same format".into());
    }
}
