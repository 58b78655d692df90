use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const VENUS96_LAYOUT_TOML: &str = include_str!("../../resources/venus96.layout.toml");

static VENUS96_LAYOUT: OnceLock<LogLayout> = OnceLock::new();

/// Where the structurally significant lines and fields sit in a VENUS96 log.
///
/// The built-in layout matches stock VENUS96 output. A TOML document may
/// override any subset of the fields; the rest keep their stock values.
///
/// ```
/// use venus_trjconv::venus::LogLayout;
///
/// let layout = LogLayout::from_toml(r#"
///     [anchors]
///     cycle = "CYCLE COUNT"
/// "#)?;
/// assert_eq!(layout.anchors.cycle, "CYCLE COUNT");
/// assert_eq!(layout.anchors.masses, "MASSES OF ATOMS");
/// # Ok::<(), venus_trjconv::venus::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogLayout {
    #[serde(default)]
    pub anchors: Anchors,
    #[serde(default)]
    pub fields: FieldLayout,
}

/// Marker phrases locating header lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Anchors {
    #[serde(default = "default_atom_count_anchor")]
    pub atom_count: String,
    #[serde(default = "default_masses_anchor")]
    pub masses: String,
    #[serde(default = "default_trajectory_anchor")]
    pub trajectory: String,
    #[serde(default = "default_cycle_anchor")]
    pub cycle: String,
}

fn default_atom_count_anchor() -> String {
    "NUMBER OF ATOMS".to_string()
}
fn default_masses_anchor() -> String {
    "MASSES OF ATOMS".to_string()
}
fn default_trajectory_anchor() -> String {
    "TRAJECTORY NUMBER".to_string()
}
fn default_cycle_anchor() -> String {
    "THE CYCLE COUNT IS".to_string()
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            atom_count: default_atom_count_anchor(),
            masses: default_masses_anchor(),
            trajectory: default_trajectory_anchor(),
            cycle: default_cycle_anchor(),
        }
    }
}

/// Line offsets and 1-based token positions relative to anchor lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldLayout {
    /// Lines between the masses anchor and the line holding the masses.
    #[serde(default = "default_masses_line_offset")]
    pub masses_line_offset: usize,
    #[serde(default = "default_trajectory_index_token")]
    pub trajectory_index_token: usize,
    #[serde(default = "default_cycle_index_token")]
    pub cycle_index_token: usize,
    #[serde(default = "default_cycle_time_token")]
    pub cycle_time_token: usize,
    /// Lines skipped between a cycle anchor and its first atom record.
    #[serde(default = "default_cycle_header_lines")]
    pub cycle_header_lines: usize,
}

fn default_masses_line_offset() -> usize {
    2
}
fn default_trajectory_index_token() -> usize {
    4
}
fn default_cycle_index_token() -> usize {
    5
}
fn default_cycle_time_token() -> usize {
    7
}
fn default_cycle_header_lines() -> usize {
    4
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            masses_line_offset: default_masses_line_offset(),
            trajectory_index_token: default_trajectory_index_token(),
            cycle_index_token: default_cycle_index_token(),
            cycle_time_token: default_cycle_time_token(),
            cycle_header_lines: default_cycle_header_lines(),
        }
    }
}

impl LogLayout {
    /// The stock VENUS96 layout.
    pub fn venus96() -> &'static LogLayout {
        VENUS96_LAYOUT.get_or_init(|| {
            toml::from_str(VENUS96_LAYOUT_TOML)
                .expect("Failed to parse embedded VENUS96 layout. This is a library bug.")
        })
    }

    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        let layout: LogLayout = toml::from_str(toml)?;
        layout.validate()?;
        Ok(layout)
    }

    fn validate(&self) -> Result<(), Error> {
        let anchors = [
            ("atom_count", &self.anchors.atom_count),
            ("masses", &self.anchors.masses),
            ("trajectory", &self.anchors.trajectory),
            ("cycle", &self.anchors.cycle),
        ];
        for (name, phrase) in anchors {
            if phrase.trim().is_empty() {
                return Err(Error::InvalidLayout(format!("anchor '{name}' is empty")));
            }
        }

        if self.fields.masses_line_offset == 0 {
            return Err(Error::InvalidLayout(
                "masses_line_offset must be at least 1".into(),
            ));
        }

        let tokens = [
            ("trajectory_index_token", self.fields.trajectory_index_token),
            ("cycle_index_token", self.fields.cycle_index_token),
            ("cycle_time_token", self.fields.cycle_time_token),
        ];
        for (name, position) in tokens {
            if position == 0 {
                return Err(Error::InvalidLayout(format!(
                    "{name} is a 1-based token position and cannot be 0"
                )));
            }
        }

        Ok(())
    }
}

impl Default for LogLayout {
    fn default() -> Self {
        Self::venus96().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layout_matches_serde_defaults() {
        let embedded = LogLayout::venus96();
        assert_eq!(embedded.anchors, Anchors::default());
        assert_eq!(embedded.fields, FieldLayout::default());
        assert!(embedded.validate().is_ok());
    }

    #[test]
    fn stock_anchor_phrases() {
        let layout = LogLayout::default();
        assert_eq!(layout.anchors.atom_count, "NUMBER OF ATOMS");
        assert_eq!(layout.anchors.masses, "MASSES OF ATOMS");
        assert_eq!(layout.anchors.trajectory, "TRAJECTORY NUMBER");
        assert_eq!(layout.anchors.cycle, "THE CYCLE COUNT IS");
        assert_eq!(layout.fields.cycle_time_token, 7);
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let layout = LogLayout::from_toml(
            r#"
            [fields]
            cycle_header_lines = 2
            "#,
        )
        .expect("valid layout");
        assert_eq!(layout.fields.cycle_header_lines, 2);
        assert_eq!(layout.fields.masses_line_offset, 2);
        assert_eq!(layout.anchors, Anchors::default());
    }

    #[test]
    fn empty_document_is_stock_layout() {
        let layout = LogLayout::from_toml("").expect("empty layout");
        assert_eq!(&layout, LogLayout::venus96());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = LogLayout::from_toml("[anchors]\nbogus = \"X\"\n").expect_err("unknown key");
        assert!(matches!(err, Error::LayoutParse(_)));
    }

    #[test]
    fn rejects_zero_token_position() {
        let err = LogLayout::from_toml("[fields]\ncycle_time_token = 0\n").expect_err("zero token");
        match err {
            Error::InvalidLayout(msg) => assert!(msg.contains("cycle_time_token")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_anchor() {
        let err = LogLayout::from_toml("[anchors]\nmasses = \"  \"\n").expect_err("blank anchor");
        assert!(matches!(err, Error::InvalidLayout(_)));
    }
}
