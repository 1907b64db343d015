//! Line-oriented interactive session
//!
//! ```text
//! add "Béton armé" dimensions 2 1 0.2 x3
//! add Acier direct 0.05 x3
//! add Béton surface 10 0.03
//! add Bois unit 0.02 x40
//! list | total | materials | export [path] | help | quit
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use pemd_app::export::{export_to_dir, export_to_file, now};
use pemd_app::EstimateSession;
use pemd_domain::model::{InputMode, RawFields, VolumeInput};
use pemd_types::{Error, EstimateError, ExportError, OutputFormat, Result};
use tracing::warn;

use crate::output::{write_added, write_materials, write_summary};

const HELP: &str = "\
Commandes:
  add <matériau> direct <volume> [xN]
  add <matériau> dimensions <longueur> <largeur> <hauteur> [xN]
  add <matériau> surface <surface> <épaisseur> [xN]
  add <matériau> unit <volume par unité> [xN]
  list                 récapitulatif
  total                totaux
  materials            catalogue
  export [fichier]     export CSV
  help
  quit";

/// Slots filled positionally for each mode, in typing order
fn positional_slots(
    raw: &mut RawFields,
    mode: InputMode,
) -> Vec<(&'static str, &mut Option<f64>)> {
    match mode {
        InputMode::DirectVolume => vec![("volume", &mut raw.volume)],
        InputMode::Dimensions => vec![
            ("length", &mut raw.length),
            ("width", &mut raw.width),
            ("height", &mut raw.height),
        ],
        InputMode::Surface => vec![
            ("surface", &mut raw.surface),
            ("thickness", &mut raw.thickness),
        ],
        InputMode::Unit => vec![("unit_volume", &mut raw.unit_volume)],
    }
}

fn parse_number(field: &'static str, token: &str) -> std::result::Result<f64, EstimateError> {
    token
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| EstimateError::invalid(field, format!("'{}' is not a number", token)))
}

/// Parse the arguments of `add`: material, mode, values, optional `xN`
pub fn parse_add(args: &[String]) -> std::result::Result<(String, VolumeInput), EstimateError> {
    let material = args
        .first()
        .ok_or_else(|| EstimateError::invalid("material", "required field is missing"))?;
    let mode: InputMode = args
        .get(1)
        .ok_or_else(|| EstimateError::invalid("mode", "required field is missing"))?
        .parse()?;

    let mut raw = RawFields::default();
    let mut multiplier = None;
    {
        let mut slots = positional_slots(&mut raw, mode).into_iter();
        for token in &args[2..] {
            if let Some(count) = token.strip_prefix('x').or_else(|| token.strip_prefix('×')) {
                multiplier = Some(parse_number("multiplier", count)?);
                continue;
            }
            match slots.next() {
                Some((field, slot)) => *slot = Some(parse_number(field, token)?),
                None => {
                    return Err(EstimateError::invalid(
                        "input",
                        format!("unexpected value '{}'", token),
                    ))
                }
            }
        }
    }
    raw.multiplier = multiplier;

    Ok((material.clone(), raw.into_input(mode)?))
}

/// Run the session until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut EstimateSession,
    format: OutputFormat,
    export_dir: &Path,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Diagnostic PEMD - tapez 'help' pour la liste des commandes")?;

    for line in input.lines() {
        let line = line?;
        let tokens = match shell_words::split(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(out, "Saisie invalide: {}", e)?;
                continue;
            }
        };
        let Some((command, args)) = tokens.split_first() else {
            continue;
        };

        match command.as_str() {
            "add" => match parse_add(args) {
                Ok((material, volume_input)) => match session.commit(&material, volume_input) {
                    Ok(estimate) => write_added(out, estimate)?,
                    Err(e) if e.is_silent() => {}
                    Err(e) => writeln!(out, "{}", e)?,
                },
                Err(e) => writeln!(out, "{}", e)?,
            },
            "list" => write_summary(out, format, session)?,
            "total" => {
                let totals = session.aggregates();
                writeln!(out, "Volume total:   {:.3} m³", totals.total_volume)?;
                writeln!(out, "Masse totale:   {:.2} kg", totals.total_mass)?;
                writeln!(out, "Éléments:       {}", totals.count)?;
            }
            "materials" => write_materials(out, format, session.catalog())?,
            "export" => {
                let result = match args.first() {
                    Some(path) => {
                        let path = Path::new(path).to_path_buf();
                        export_to_file(session, &path, now()).map(|_| path)
                    }
                    None => export_to_dir(session, export_dir, now()),
                };
                match result {
                    Ok(path) => writeln!(out, "Rapport exporté: {}", path.display())?,
                    Err(Error::Export(ExportError::Empty)) => {
                        writeln!(out, "{}", ExportError::Empty)?
                    }
                    Err(e) => {
                        warn!(error = %e, "export failed");
                        writeln!(out, "Échec de l'export: {}", e)?
                    }
                }
            }
            "help" | "?" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Commande inconnue: {} (tapez 'help')", other)?,
        }
    }

    Ok(())
}
