//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use pemd_domain::model::{InputMode, RawFields};
use pemd_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pemd")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Diagnostic PEMD - estimate material masses from volumes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Material catalog TOML file (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Volume input mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Direct,
    Dimensions,
    Surface,
    Unit,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Direct => InputMode::DirectVolume,
            ModeArg::Dimensions => InputMode::Dimensions,
            ModeArg::Surface => InputMode::Surface,
            ModeArg::Unit => InputMode::Unit,
        }
    }
}

/// Raw numeric fields; only those of the selected mode are used
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Volume (m³), direct mode
    #[arg(long)]
    pub volume: Option<f64>,

    /// Length (m), dimensions mode
    #[arg(long)]
    pub length: Option<f64>,

    /// Width (m), dimensions mode
    #[arg(long)]
    pub width: Option<f64>,

    /// Height (m), dimensions mode
    #[arg(long)]
    pub height: Option<f64>,

    /// Surface (m²), surface mode
    #[arg(long)]
    pub surface: Option<f64>,

    /// Thickness (m, at least 0.03), surface mode
    #[arg(long)]
    pub thickness: Option<f64>,

    /// Volume per unit (m³), unit mode
    #[arg(long)]
    pub unit_volume: Option<f64>,

    /// Number of identical elements (default 1)
    #[arg(long, short = 'x')]
    pub multiplier: Option<f64>,
}

impl From<FieldArgs> for RawFields {
    fn from(args: FieldArgs) -> Self {
        RawFields {
            volume: args.volume,
            length: args.length,
            width: args.width,
            height: args.height,
            surface: args.surface,
            thickness: args.thickness,
            unit_volume: args.unit_volume,
            multiplier: args.multiplier,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the material catalog
    Materials,

    /// Compute a volume (and mass with --material) without recording it
    Volume {
        /// Input mode
        #[arg(value_enum)]
        mode: ModeArg,

        /// Material name, to also compute the mass
        #[arg(long, short = 'm')]
        material: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Add every entry of a TOML file and export the CSV report
    Batch {
        /// Path to the entries file ([[entries]] tables)
        entries: PathBuf,

        /// Output CSV path (default: diagnostic-pemd-<date>.csv in the export dir)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the CSV report to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Interactive session reading commands from stdin
    Session,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set material catalog TOML file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set export directory
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
