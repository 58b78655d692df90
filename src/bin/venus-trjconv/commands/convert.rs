use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};

use venus_trjconv::convert::{self, ReorderMap};
use venus_trjconv::{Format, LogLayout, Structure, Trajectory, io as vio, venus};

use crate::cli::Cli;
use crate::display::{
    Context as DisplayContext, Progress, print_input_summary, print_trajectory_summary,
};
use crate::io::{backup_existing, create_output, open_input, read_text};
use crate::util::path::{file_name, numbered};

const TOTAL_STEPS: u8 = 3;

/// Checked command line: formats resolved and input files present.
struct Plan {
    traj: PathBuf,
    output: PathBuf,
    format: Format,
    structure: Option<PathBuf>,
    reorder: Option<PathBuf>,
    layout: Option<PathBuf>,
    backup: bool,
}

pub fn run_convert(args: Cli, ctx: DisplayContext) -> Result<()> {
    let plan = resolve_plan(args)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading inputs");
    let structure = plan
        .structure
        .as_deref()
        .map(|path| load_structure(path, plan.format))
        .transpose()?;
    let reorder_map = plan.reorder.as_deref().map(load_reorder_map).transpose()?;
    let layout = plan.layout.as_deref().map(load_layout).transpose()?;
    progress.complete_step("Reading inputs", &input_substeps(&plan, structure.as_ref()));

    if ctx.interactive {
        print_input_summary(structure.as_ref(), reorder_map.as_ref().map(ReorderMap::len));
    }

    progress.step("Extracting trajectories");
    let mut trajectories = extract(&plan.traj, layout.as_ref())?;
    let frames: usize = trajectories.iter().map(Trajectory::frame_count).sum();
    progress.complete_step(
        "Extracting trajectories",
        &[format!(
            "{} trajectories, {} frames",
            trajectories.len(),
            frames
        )],
    );

    if trajectories.is_empty() {
        warn!(
            "No trajectory found in {}; nothing to write",
            plan.traj.display()
        );
    }
    if ctx.interactive {
        print_trajectory_summary(&trajectories);
    }

    progress.step("Writing trajectories");
    let mut written = Vec::with_capacity(trajectories.len());
    for (k, trajectory) in trajectories.iter_mut().enumerate() {
        let path = numbered(&plan.output, k + 1);
        progress.detail(&format!("Writing {}", file_name(&path)));

        write_segment(
            trajectory,
            &path,
            &plan,
            structure.as_ref(),
            reorder_map.as_ref(),
        )?;
        written.push(format!(
            "Write {} → {} ({} frames)",
            plan.format,
            file_name(&path),
            trajectory.frame_count()
        ));
    }
    progress.complete_step("Writing trajectories", &written);

    progress.finish(written.len());
    Ok(())
}

fn resolve_plan(args: Cli) -> Result<Plan> {
    let output = args.io.output;
    let Some(format) = Format::from_path(&output) else {
        bail!(
            "Cannot infer the output format from '{}': the extension must be gro, g96 or xyz",
            output.display()
        );
    };

    if !args.io.traj.is_file() {
        bail!("VENUS96 log '{}' does not exist", args.io.traj.display());
    }

    let structure = match (args.io.structure, format.needs_structure()) {
        (Some(path), true) => {
            if Format::from_path(&path) != Some(format) {
                bail!(
                    "{} output needs a .{} structure, got '{}'",
                    format,
                    format.extension(),
                    path.display()
                );
            }
            if !path.is_file() {
                bail!("Structure file '{}' does not exist", path.display());
            }
            Some(path)
        }
        (None, true) => bail!(
            "{} output needs a reference structure: pass a .{} file with -s",
            format,
            format.extension()
        ),
        (Some(path), false) => {
            warn!(
                "{} output carries no atom names; ignoring structure '{}'",
                format,
                path.display()
            );
            None
        }
        (None, false) => None,
    };

    for (what, path) in [
        ("Reorder file", &args.processing.reorder),
        ("Layout file", &args.processing.layout),
    ] {
        if let Some(path) = path {
            if !path.is_file() {
                bail!("{} '{}' does not exist", what, path.display());
            }
        }
    }

    Ok(Plan {
        traj: args.io.traj,
        output,
        format,
        structure,
        reorder: args.processing.reorder,
        layout: args.processing.layout,
        backup: !args.io.no_backup,
    })
}

fn input_substeps(plan: &Plan, structure: Option<&Structure>) -> Vec<String> {
    let mut steps = Vec::new();
    match structure {
        Some(s) => steps.push(format!("Structure: {s}")),
        None => steps.push(format!("No structure needed for {} output", plan.format)),
    }
    if let Some(path) = &plan.reorder {
        steps.push(format!("Reorder map from {}", file_name(path)));
    }
    match &plan.layout {
        Some(path) => steps.push(format!("Log layout from {}", file_name(path))),
        None => steps.push("Stock VENUS96 log layout".to_string()),
    }
    steps
}

fn load_structure(path: &Path, format: Format) -> Result<Structure> {
    vio::load_structure(path, format)
        .with_context(|| format!("Failed to read structure from {}", path.display()))
}

fn load_reorder_map(path: &Path) -> Result<ReorderMap> {
    let indices = vio::read_reorder_indices(open_input(path)?)
        .with_context(|| format!("Failed to read reorder file {}", path.display()))?;
    ReorderMap::from_one_based(indices)
        .with_context(|| format!("Reorder file {} is not a permutation", path.display()))
}

fn load_layout(path: &Path) -> Result<LogLayout> {
    let text = read_text(path)?;
    LogLayout::from_toml(&text)
        .with_context(|| format!("Failed to load log layout from {}", path.display()))
}

fn extract(path: &Path, layout: Option<&LogLayout>) -> Result<Vec<Trajectory>> {
    let log = read_text(path)?;
    let result = match layout {
        Some(layout) => venus::extract_with(&log, layout),
        None => venus::extract(&log),
    };
    result.with_context(|| format!("Failed to extract trajectories from {}", path.display()))
}

fn write_segment(
    trajectory: &mut Trajectory,
    path: &Path,
    plan: &Plan,
    structure: Option<&Structure>,
    reorder_map: Option<&ReorderMap>,
) -> Result<()> {
    let index = trajectory.index;

    if let Some(structure) = structure {
        convert::check_atom_count(trajectory, structure.atom_count())
            .with_context(|| format!("Trajectory {index} does not match the structure"))?;
    }
    if let Some(map) = reorder_map {
        convert::reorder(trajectory, map)
            .with_context(|| format!("Failed to reorder trajectory {index}"))?;
    }

    let records = convert::project(trajectory, plan.format, structure)
        .with_context(|| format!("Failed to convert trajectory {index}"))?;

    if plan.backup {
        backup_existing(path)?;
    }
    let writer = create_output(path)?;
    vio::write_trajectory(writer, &records)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Wrote {} frames of trajectory {} to {}",
        records.len(),
        index,
        path.display()
    );
    Ok(())
}
