use super::{error::Error, util};
use std::io::BufRead;

/// Reads 1-based atom indices separated by whitespace or newlines.
///
/// Text after `#` on a line is ignored. Values are returned as written;
/// range and permutation checks belong to [`crate::convert::ReorderMap`].
pub fn read_reorder_indices<R: BufRead>(reader: R) -> Result<Vec<usize>, Error> {
    let lines = util::collect_lines(reader)?;
    let mut indices = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let content = raw.split('#').next().unwrap_or("");
        for token in content.split_whitespace() {
            let value = parse_index(token)
                .ok_or_else(|| Error::reorder(i + 1, format!("invalid atom index '{token}'")))?;
            indices.push(value);
        }
    }

    Ok(indices)
}

fn parse_index(token: &str) -> Option<usize> {
    if let Ok(value) = token.parse::<usize>() {
        return Some(value);
    }
    // Integral floats such as `3.0` or `1e1`.
    let value = token.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}
