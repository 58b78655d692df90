use super::{Format, error::Error};
use std::io::BufRead;
use std::str::FromStr;

pub fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>, Error> {
    reader
        .lines()
        .map(|line| line.map_err(|e| Error::Io { source: e }))
        .collect()
}

/// Byte columns `start..end` of `line`, clipped to the line length.
pub fn columns(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

pub fn parse_field<T: FromStr>(
    raw: &str,
    format: Format,
    line: usize,
    what: &str,
) -> Result<T, Error> {
    let raw = raw.trim();
    raw.parse::<T>()
        .map_err(|_| Error::parse(format, line, format!("invalid {what} '{raw}'")))
}

pub fn parse_vec3<'s>(
    fields: impl IntoIterator<Item = &'s str>,
    format: Format,
    line: usize,
    what: &str,
) -> Result<[f64; 3], Error> {
    let fields: Vec<&str> = fields.into_iter().collect();
    if fields.len() != 3 {
        return Err(Error::parse(
            format,
            line,
            format!("{what} needs 3 components, found {}", fields.len()),
        ));
    }
    let mut v = [0.0; 3];
    for (slot, raw) in v.iter_mut().zip(fields) {
        *slot = parse_field(raw, format, line, what)?;
    }
    Ok(v)
}

/// Left-justifies `text` in a field of `width`, truncating overlong names.
pub fn fit_left(text: &str, width: usize) -> String {
    let mut s = text.trim().to_string();
    if s.len() > width {
        let mut cut = width;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn fit_left_pads_and_truncates() {
        assert_eq!(fit_left("OW", 5), "OW   ");
        assert_eq!(fit_left(" SOL ", 5), "SOL  ");
        assert_eq!(fit_left("LONGNAME", 5), "LONGN");
        assert_eq!(fit_left("", 4), "    ");
    }

    #[test]
    fn columns_are_clipped_to_line() {
        let line = "    1SOL     OW";
        assert_eq!(columns(line, 0, 5), "    1");
        assert_eq!(columns(line, 5, 10), "SOL  ");
        assert_eq!(columns(line, 10, 20), "   OW");
        assert_eq!(columns(line, 20, 44), "");
    }

    #[test]
    fn vec3_requires_three_numbers() {
        assert_eq!(
            parse_vec3(["1.0", " 2.5", "-3"], Format::Gro, 1, "position").unwrap(),
            [1.0, 2.5, -3.0]
        );
        assert!(parse_vec3(["1.0", "2.0"], Format::Gro, 4, "position").is_err());
        match parse_vec3(["1.0", "x", "3"], Format::Xyz, 9, "position") {
            Err(Error::Parse { line, details, .. }) => {
                assert_eq!(line, 9);
                assert!(details.contains("'x'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn collects_all_lines() {
        let lines = collect_lines(Cursor::new("a\nb\r\n\nc")).unwrap();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }
}
