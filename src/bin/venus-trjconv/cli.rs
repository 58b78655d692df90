use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(
    name = "venus-trjconv",
    about = "Convert VENUS96 trajectories to gro, g96 or xyz",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub processing: ProcessingOptions,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Input and output files.
#[derive(Args)]
pub struct IoOptions {
    /// VENUS96 output log
    #[arg(short = 'f', long = "traj", value_name = "FILE")]
    pub traj: PathBuf,

    /// Reference structure (gro or xyz, matching the output format)
    #[arg(short, long, value_name = "FILE")]
    pub structure: Option<PathBuf>,

    /// Output trajectory; one file per segment is written as <stem>_<k>.<ext>
    #[arg(short, long, value_name = "FILE", default_value = "traj.gro")]
    pub output: PathBuf,

    /// Overwrite existing output files instead of renaming them to #name.N#
    #[arg(long)]
    pub no_backup: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options changing how the log is read and frames are built.
#[derive(Args)]
#[command(next_help_heading = "Processing")]
pub struct ProcessingOptions {
    /// File of 1-based atom indices giving the new atom order
    #[arg(short, long, value_name = "FILE")]
    pub reorder: Option<PathBuf>,

    /// TOML file overriding the VENUS96 log layout
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_defaults_to_gro() {
        let cli = Cli::try_parse_from(["venus-trjconv", "-f", "run.log"]).unwrap();
        assert_eq!(cli.io.traj, PathBuf::from("run.log"));
        assert_eq!(cli.io.output, PathBuf::from("traj.gro"));
        assert!(cli.io.structure.is_none());
        assert!(!cli.io.no_backup);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn gmx_style_flags_are_accepted() {
        let cli = Cli::try_parse_from([
            "venus-trjconv",
            "-f",
            "run.log",
            "-s",
            "mol.xyz",
            "-o",
            "out/mol.xyz",
            "-r",
            "order.dat",
            "--layout",
            "patched.toml",
            "--no-backup",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.io.structure, Some(PathBuf::from("mol.xyz")));
        assert_eq!(cli.processing.reorder, Some(PathBuf::from("order.dat")));
        assert_eq!(cli.processing.layout, Some(PathBuf::from("patched.toml")));
        assert!(cli.io.no_backup);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn log_file_is_required() {
        assert!(Cli::try_parse_from(["venus-trjconv", "-o", "a.g96"]).is_err());
    }
}
