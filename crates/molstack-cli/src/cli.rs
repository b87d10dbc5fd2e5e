use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "molstack",
    version,
    about = "molstack - Stack multiple molecular geometries with combinatorial ordering and rotations.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// XYZ geometry files to stack. Each becomes one library molecule.
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub input_files: Vec<PathBuf>,

    // --- Stack Geometry ---
    /// Total height of the stack in layers [default: 2]
    #[arg(short = 'n', long = "num-layers", alias = "num_layers", value_name = "INT")]
    pub num_layers: Option<usize>,

    /// Vertical distance between consecutive layers in Angstroms [default: 6.0]
    #[arg(
        long = "z-dist",
        alias = "z_dist",
        value_name = "FLOAT",
        allow_hyphen_values = true
    )]
    pub z_dist: Option<f64>,

    /// Horizontal offset between consecutive layers in Angstroms [default: 0.0]
    #[arg(
        long = "x-dist",
        alias = "x_dist",
        value_name = "FLOAT",
        allow_hyphen_values = true
    )]
    pub x_dist: Option<f64>,

    /// Rotation interval in degrees [default: 30]
    #[arg(long = "rot-step", alias = "rot_step", value_name = "DEGREES")]
    pub rot_step: Option<u32>,

    // --- Output ---
    /// Directory that receives one sub-directory per molecule order [default: stacked_geometries]
    #[arg(short, long = "output-dir", value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Optional configuration file in TOML format. Command-line flags take precedence.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the confirmation prompt for runs above 10000 files.
    #[arg(short, long)]
    pub yes: bool,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
