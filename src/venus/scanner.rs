use super::error::Error;
use super::layout::LogLayout;
use crate::model::frame::{Frame, Trajectory};
use crate::model::units;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Looking for anchor lines.
    Seeking,
    /// Skipping down to the line that holds the masses.
    AwaitingMasses { anchor_line: usize, remaining: usize },
    /// Skipping the fixed header that follows a cycle anchor.
    InCycleHeader { remaining: usize },
    /// Consuming one atom record per line.
    InAtomBlock { remaining: usize },
}

#[derive(Debug)]
struct PendingFrame {
    line: usize,
    expected_atoms: usize,
    frame: Frame,
}

/// Single-pass line scanner turning a VENUS96 log into trajectories.
pub(super) struct Scanner<'a> {
    layout: &'a LogLayout,
    state: State,
    declared_atom_count: Option<usize>,
    masses: Option<Vec<f64>>,
    /// New frames always go to the last segment.
    trajectories: Vec<Trajectory>,
    pending: Option<PendingFrame>,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(layout: &'a LogLayout) -> Self {
        Self {
            layout,
            state: State::Seeking,
            declared_atom_count: None,
            masses: None,
            trajectories: Vec::new(),
            pending: None,
        }
    }

    /// Feeds the next line; `line` is its 1-based number.
    pub(super) fn feed(&mut self, line: usize, text: &str) -> Result<(), Error> {
        match self.state {
            State::Seeking => self.seek(line, text),
            State::AwaitingMasses {
                anchor_line,
                remaining,
            } => {
                if remaining > 1 {
                    self.state = State::AwaitingMasses {
                        anchor_line,
                        remaining: remaining - 1,
                    };
                } else {
                    self.masses = Some(parse_masses(line, text)?);
                    self.state = State::Seeking;
                }
                Ok(())
            }
            State::InCycleHeader { remaining } => {
                if remaining > 1 {
                    self.state = State::InCycleHeader {
                        remaining: remaining - 1,
                    };
                } else {
                    self.enter_atom_block();
                }
                Ok(())
            }
            State::InAtomBlock { remaining } => {
                self.read_atom(line, text)?;
                if remaining > 1 {
                    self.state = State::InAtomBlock {
                        remaining: remaining - 1,
                    };
                } else {
                    self.finish_frame();
                }
                Ok(())
            }
        }
    }

    pub(super) fn finish(self) -> Result<Vec<Trajectory>, Error> {
        match self.state {
            State::Seeking => Ok(self.trajectories),
            State::AwaitingMasses { anchor_line, .. } => Err(Error::UnexpectedEndOfInput {
                line: anchor_line,
                context: "masses block",
            }),
            State::InCycleHeader { .. } | State::InAtomBlock { .. } => {
                Err(Error::UnexpectedEndOfInput {
                    line: self.pending.map(|p| p.line).unwrap_or_default(),
                    context: "cycle block",
                })
            }
        }
    }

    fn seek(&mut self, line: usize, text: &str) -> Result<(), Error> {
        let layout = self.layout;

        if text.contains(layout.anchors.atom_count.as_str()) {
            self.declared_atom_count = Some(parse_atom_count(line, text)?);
        }

        if text.contains(layout.anchors.masses.as_str()) {
            self.state = State::AwaitingMasses {
                anchor_line: line,
                remaining: layout.fields.masses_line_offset.max(1),
            };
            return Ok(());
        }

        if text.contains(layout.anchors.trajectory.as_str()) {
            self.open_trajectory(line, text)?;
        }

        if text.contains(layout.anchors.cycle.as_str()) {
            self.open_cycle(line, text)?;
        }

        Ok(())
    }

    fn open_trajectory(&mut self, line: usize, text: &str) -> Result<(), Error> {
        let raw = token(
            text,
            self.layout.fields.trajectory_index_token,
            line,
            "trajectory number",
        )?;
        let index = raw
            .parse::<usize>()
            .map_err(|_| Error::malformed(line, format!("invalid trajectory number '{raw}'")))?;

        if self.trajectories.iter().any(|t| t.index == index) {
            debug!("Trajectory {index} repeated at line {line}");
        } else {
            info!("Trajectory: {index}");
            self.trajectories.push(Trajectory::new(index));
        }

        Ok(())
    }

    fn open_cycle(&mut self, line: usize, text: &str) -> Result<(), Error> {
        let Some(masses) = self.masses.as_ref() else {
            return Err(Error::MissingMasses { line });
        };
        let Some(atom_count) = self.declared_atom_count else {
            return Err(Error::MissingAtomCount { line });
        };
        let Some(trajectory) = self.trajectories.last() else {
            return Err(Error::OrphanCycle { line });
        };

        if masses.len() != atom_count {
            return Err(Error::InconsistentAtomCount {
                line,
                expected: atom_count,
                found: masses.len(),
            });
        }
        if let Some(existing) = trajectory.atom_count().filter(|&n| n != atom_count) {
            return Err(Error::InconsistentAtomCount {
                line,
                expected: existing,
                found: atom_count,
            });
        }

        let layout = self.layout;
        let fields = &layout.fields;
        let raw_cycle = token(text, fields.cycle_index_token, line, "cycle count")?;
        let cycle = raw_cycle
            .parse::<u64>()
            .map_err(|_| Error::malformed(line, format!("invalid cycle count '{raw_cycle}'")))?;
        let raw_time = token(text, fields.cycle_time_token, line, "cycle time")?;
        let time = parse_real(raw_time)
            .map(units::venus_time_to_ps)
            .ok_or_else(|| Error::malformed(line, format!("invalid cycle time '{raw_time}'")))?;

        debug!("Cycle: {cycle} Time: {time:.3} ps");

        self.pending = Some(PendingFrame {
            line,
            expected_atoms: atom_count,
            frame: Frame::with_capacity(cycle, time, atom_count),
        });

        if fields.cycle_header_lines > 0 {
            self.state = State::InCycleHeader {
                remaining: fields.cycle_header_lines,
            };
        } else {
            self.enter_atom_block();
        }

        Ok(())
    }

    fn enter_atom_block(&mut self) {
        match self.pending.as_ref().map(|p| p.expected_atoms) {
            Some(n) if n > 0 => self.state = State::InAtomBlock { remaining: n },
            _ => self.finish_frame(),
        }
    }

    fn read_atom(&mut self, line: usize, text: &str) -> Result<(), Error> {
        let Some(pending) = self.pending.as_mut() else {
            return Err(Error::malformed(line, "atom record outside of a cycle block"));
        };
        let Some(masses) = self.masses.as_ref() else {
            return Err(Error::MissingMasses { line: pending.line });
        };

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(Error::malformed(
                line,
                format!(
                    "atom record must hold 3 coordinates and 3 momenta, found {} fields",
                    fields.len()
                ),
            ));
        }

        let mut values = [0.0; 6];
        for (slot, raw) in values.iter_mut().zip(&fields) {
            *slot = parse_real(raw)
                .ok_or_else(|| Error::malformed(line, format!("invalid number '{raw}' in atom record")))?;
        }

        let atom = pending.frame.atom_count();
        let mass = masses
            .get(atom)
            .copied()
            .ok_or(Error::InconsistentAtomCount {
                line,
                expected: masses.len(),
                found: atom + 1,
            })?;

        let position = units::angstrom_to_nm([values[0], values[1], values[2]]);
        let velocity = units::momentum_to_velocity([values[3], values[4], values[5]], mass);
        pending.frame.push_atom(position, velocity);

        Ok(())
    }

    fn finish_frame(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Some(trajectory) = self.trajectories.last_mut() {
                trajectory.frames.push(pending.frame);
            }
        }
        self.state = State::Seeking;
    }
}

fn token<'t>(text: &'t str, position: usize, line: usize, what: &str) -> Result<&'t str, Error> {
    text.split_whitespace()
        .nth(position.saturating_sub(1))
        .ok_or_else(|| Error::malformed(line, format!("missing {what} (field {position})")))
}

fn parse_atom_count(line: usize, text: &str) -> Result<usize, Error> {
    let raw = match text.rsplit_once('=') {
        Some((_, value)) => value.split_whitespace().next(),
        None => text.split_whitespace().last(),
    }
    .unwrap_or_default();
    raw.parse::<usize>()
        .map_err(|_| Error::malformed(line, format!("invalid number of atoms '{raw}'")))
}

fn parse_masses(line: usize, text: &str) -> Result<Vec<f64>, Error> {
    let masses = text
        .split_whitespace()
        .map(|raw| {
            parse_real(raw)
                .ok_or_else(|| Error::malformed(line, format!("invalid atomic mass '{raw}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if masses.is_empty() {
        return Err(Error::malformed(line, "no atomic masses found"));
    }
    if let Some(bad) = masses.iter().find(|&&m| m.is_nan() || m <= 0.0) {
        return Err(Error::malformed(
            line,
            format!("atomic mass {bad} must be positive"),
        ));
    }

    Ok(masses)
}

/// Parses a Fortran real, accepting `D` exponents.
fn parse_real(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .or_else(|| raw.replace(['D', 'd'], "E").parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fortran_reals() {
        assert_eq!(parse_real("1.5"), Some(1.5));
        assert_eq!(parse_real("-2.0E+01"), Some(-20.0));
        assert_eq!(parse_real("1.0D+02"), Some(100.0));
        assert_eq!(parse_real("2.5d-1"), Some(0.25));
        assert_eq!(parse_real("abc"), None);
    }

    #[test]
    fn atom_count_is_read_after_last_equals_sign() {
        assert_eq!(parse_atom_count(1, " NUMBER OF ATOMS =     3").unwrap(), 3);
        assert_eq!(parse_atom_count(1, " NUMBER OF ATOMS  12").unwrap(), 12);
        assert_eq!(parse_atom_count(1, " NUMBER OF ATOMS =  4 ***").unwrap(), 4);
        assert!(matches!(
            parse_atom_count(7, " NUMBER OF ATOMS = many"),
            Err(Error::MalformedInput { line: 7, .. })
        ));
    }

    #[test]
    fn masses_must_be_positive() {
        assert_eq!(parse_masses(1, "  1.008  35.453").unwrap(), vec![1.008, 35.453]);
        assert!(parse_masses(1, "  1.008  0.0").is_err());
        assert!(parse_masses(1, "   ").is_err());
    }

    #[test]
    fn token_positions_are_one_based() {
        let text = " THE CYCLE COUNT IS  10  TIME  250.0";
        assert_eq!(token(text, 5, 1, "cycle").unwrap(), "10");
        assert_eq!(token(text, 7, 1, "time").unwrap(), "250.0");
        assert!(token(text, 8, 1, "extra").is_err());
    }

    #[test]
    fn header_lines_are_not_scanned_for_anchors() {
        let layout = LogLayout::default();
        let mut scanner = Scanner::new(&layout);
        let lines = [
            " NUMBER OF ATOMS = 1",
            " MASSES OF ATOMS",
            "",
            "  2.0",
            " TRAJECTORY NUMBER IS 1",
            " THE CYCLE COUNT IS 1 TIME 10.0",
            " NUMBER OF ATOMS = 5",
            " TRAJECTORY NUMBER IS 9",
            " h3",
            " h4",
            " 1.0 2.0 3.0 2.0 0.0 0.0",
        ];
        for (i, text) in lines.iter().enumerate() {
            scanner.feed(i + 1, text).expect("feed");
            if i == 5 {
                assert_eq!(scanner.state, State::InCycleHeader { remaining: 4 });
            }
        }
        assert_eq!(scanner.state, State::Seeking);
        assert_eq!(scanner.declared_atom_count, Some(1));

        let trajectories = scanner.finish().expect("finish");
        assert_eq!(trajectories.len(), 1);
        assert_eq!(trajectories[0].frames[0].atom_count(), 1);
    }

    #[test]
    fn zero_header_lines_go_straight_to_atoms() {
        let mut layout = LogLayout::default();
        layout.fields.cycle_header_lines = 0;
        let mut scanner = Scanner::new(&layout);
        for (i, text) in [
            " NUMBER OF ATOMS = 1",
            " MASSES OF ATOMS",
            "",
            "  2.0",
            " TRAJECTORY NUMBER IS 1",
            " THE CYCLE COUNT IS 1 TIME 10.0",
        ]
        .iter()
        .enumerate()
        {
            scanner.feed(i + 1, text).expect("feed");
        }
        assert_eq!(scanner.state, State::InAtomBlock { remaining: 1 });
    }
}
