//! Command handlers

use std::io::{self, Write};
use std::path::PathBuf;

use pemd_app::export::{export_to_dir, export_to_file, now};
use pemd_app::{logging, Config, EstimateSession};
use pemd_domain::model::{InputMode, RawFields};
use pemd_types::{Error, ExportError, OutputFormat, Result};
use tracing::debug;

use crate::batch::{commit_entries, load_entries};
use crate::cli::{Cli, Commands, FieldArgs, ModeArg};
use crate::output::{write_materials, write_preview, write_summary};
use crate::shell;

pub fn execute(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    let format = cli.format.unwrap_or(config.output_format);
    debug!(?config, %format, "configuration loaded");

    match cli.command {
        Commands::Materials => cmd_materials(&config, format),
        Commands::Volume {
            mode,
            material,
            fields,
        } => cmd_volume(&config, format, mode, material, fields),
        Commands::Batch {
            entries,
            output,
            stdout,
        } => cmd_batch(&config, format, entries, output, stdout),
        Commands::Session => cmd_session(&config, format),
        Commands::Config {
            show,
            set_catalog,
            set_export_dir,
            set_output,
            reset,
        } => cmd_config(show, set_catalog, set_export_dir, set_output, reset),
    }
}

fn cmd_materials(config: &Config, format: OutputFormat) -> Result<()> {
    let session = EstimateSession::open(config)?;
    write_materials(&mut io::stdout().lock(), format, session.catalog())
}

fn cmd_volume(
    config: &Config,
    format: OutputFormat,
    mode: ModeArg,
    material: Option<String>,
    fields: FieldArgs,
) -> Result<()> {
    let session = EstimateSession::open(config)?;
    let input = RawFields::from(fields).into_input(InputMode::from(mode))?;

    let (volume, mass) = match material.as_deref() {
        Some(name) => {
            let (volume, mass) = session.preview_mass(name, &input)?;
            (volume, Some(mass))
        }
        None => (session.preview(&input)?, None),
    };

    write_preview(
        &mut io::stdout().lock(),
        format,
        material.as_deref(),
        volume,
        mass,
    )
}

fn cmd_batch(
    config: &Config,
    format: OutputFormat,
    entries: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let mut session = EstimateSession::open(config)?;
    let entries = load_entries(&entries)?;
    let total = entries.len();

    for rejected in commit_entries(&mut session, entries) {
        if rejected.error.is_silent() {
            debug!(position = rejected.position, "zero volume entry skipped");
            continue;
        }
        eprintln!(
            "Entrée {}/{} ({}) ignorée: {}",
            rejected.position, total, rejected.material, rejected.error
        );
    }

    let generated_at = now();

    if stdout {
        match session.export_report(generated_at) {
            Ok(csv) => {
                let mut out = io::stdout().lock();
                out.write_all(csv.as_bytes())?;
                out.flush()?;
            }
            Err(ExportError::Empty) => eprintln!("{}", ExportError::Empty),
            Err(e) => return Err(e.into()),
        }
        return Ok(());
    }

    write_summary(&mut io::stdout().lock(), format, &session)?;

    let result = match output {
        Some(path) => export_to_file(&session, &path, generated_at).map(|_| path),
        None => export_to_dir(&session, &config.export_dir(), generated_at),
    };
    match result {
        Ok(path) => println!("\nRapport exporté: {}", path.display()),
        Err(Error::Export(ExportError::Empty)) => println!("{}", ExportError::Empty),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn cmd_session(config: &Config, format: OutputFormat) -> Result<()> {
    let mut session = EstimateSession::open(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(
        &mut session,
        format,
        &config.export_dir(),
        stdin.lock(),
        &mut stdout,
    )
}

fn cmd_config(
    show: bool,
    set_catalog: Option<PathBuf>,
    set_export_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        Config::default()
    } else {
        Config::load()?
    };

    let mut modified = reset;

    if let Some(path) = set_catalog {
        // Fail now rather than on the next run
        EstimateSession::open(&Config {
            catalog_path: Some(path.clone()),
            ..Config::default()
        })?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
