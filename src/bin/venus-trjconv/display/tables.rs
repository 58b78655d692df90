use std::io::{self, Write};

use venus_trjconv::{Structure, Trajectory};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const MAX_ROWS: usize = 15;

pub fn print_input_summary(structure: Option<&Structure>, reorder_len: Option<usize>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = Vec::new();
    match structure {
        Some(s) => {
            rows.push(("Structure", s.title().to_string()));
            rows.push(("Structure Atoms", s.atom_count().to_string()));
        }
        None => rows.push(("Structure", "none".to_string())),
    }
    if let Some(n) = reorder_len {
        rows.push(("Reorder Map", format!("{n} atoms")));
    }

    print_kv_table(&mut out, "Input Summary", &rows);
}

pub fn print_trajectory_summary(trajectories: &[Trajectory]) {
    if trajectories.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let traj_w = 6usize;
    let frames_w = 8usize;
    let atoms_w = 7usize;
    let sep_overhead = 9;
    let span_w = SAFE_TABLE_WIDTH.saturating_sub(traj_w + frames_w + atoms_w + sep_overhead);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(traj_w + 2),
            "─".repeat(frames_w + 2),
            "─".repeat(atoms_w + 2),
            "─".repeat(span_w + 2),
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ Trajectory Segments ─┐");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<traj_w$} │ {:>frames_w$} │ {:>atoms_w$} │ {:<span_w$} │",
        "Traj", "Frames", "Atoms", "Time span (ps)",
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for trajectory in trajectories.iter().take(MAX_ROWS) {
        let atoms = trajectory
            .atom_count()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        let span = trajectory
            .time_span()
            .map(|(start, end)| format!("{start:.4} → {end:.4}"))
            .unwrap_or_else(|| "empty".to_string());
        let _ = writeln!(
            out,
            "{INDENT}│ {:<traj_w$} │ {:>frames_w$} │ {:>atoms_w$} │ {:<span_w$} │",
            trajectory.index,
            trajectory.frame_count(),
            atoms,
            truncate(&span, span_w),
        );
    }

    if trajectories.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<traj_w$} │ {:>frames_w$} │ {:>atoms_w$} │ {:<span_w$} │",
            "...",
            "...",
            "...",
            format!("({} more segments)", trajectories.len() - MAX_ROWS),
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
