//! Output formatting module

use std::io::Write;

use pemd_app::session::SummaryRow;
use pemd_app::EstimateSession;
use pemd_domain::model::{Estimate, MaterialCatalog};
use pemd_types::{OutputFormat, Result};
use serde_json::json;

pub fn write_materials<W: Write>(
    out: &mut W,
    format: OutputFormat,
    catalog: &MaterialCatalog,
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog.materials())?)?;
        return Ok(());
    }

    writeln!(out, "{:<24} {:>24}", "Matériau", "Masse volumique (kg/m³)")?;
    writeln!(out, "{}", "-".repeat(49))?;
    for material in catalog.materials() {
        writeln!(out, "{:<24} {:>24.0}", material.name, material.density)?;
    }
    Ok(())
}

pub fn write_preview<W: Write>(
    out: &mut W,
    format: OutputFormat,
    material: Option<&str>,
    volume: f64,
    mass: Option<f64>,
) -> Result<()> {
    if format == OutputFormat::Json {
        let value = json!({
            "material": material,
            "volume": volume,
            "mass": mass,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    if let Some(name) = material {
        writeln!(out, "Matériau:       {}", name)?;
    }
    writeln!(out, "Volume:         {:.3} m³", volume)?;
    if let Some(mass) = mass {
        writeln!(out, "Masse:          {:.2} kg", mass)?;
    }
    Ok(())
}

pub fn write_added<W: Write>(out: &mut W, estimate: &Estimate) -> Result<()> {
    writeln!(
        out,
        "{} ajouté avec succès ({:.3} m³, {:.2} kg)",
        estimate.material_name(),
        estimate.volume(),
        estimate.mass()
    )?;
    Ok(())
}

/// Recap table followed by the three totals
pub fn write_summary<W: Write>(
    out: &mut W,
    format: OutputFormat,
    session: &EstimateSession,
) -> Result<()> {
    let totals = session.aggregates();

    if format == OutputFormat::Json {
        let value = json!({
            "estimates": session.summary_rows(),
            "total_volume": totals.total_volume,
            "total_mass": totals.total_mass,
            "count": totals.count,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    if session.is_empty() {
        writeln!(
            out,
            "Aucun matériau ajouté. Utilisez la commande add pour commencer."
        )?;
        return Ok(());
    }

    writeln!(out, "\nRécapitulatif PEMD")?;
    writeln!(out, "==================")?;
    writeln!(
        out,
        "{:>3} {:<24} {:>8} {:>12} {:>12} {:>10}",
        "N°", "Matériau", "Facteur", "Volume (m³)", "Masse (kg)", "kg/m³"
    )?;
    writeln!(out, "{}", "-".repeat(74))?;
    for (i, row) in session.summary_rows().iter().enumerate() {
        write_summary_row(out, i + 1, row)?;
    }
    writeln!(out, "{}", "-".repeat(74))?;
    writeln!(out, "Volume total:   {:.3} m³", totals.total_volume)?;
    writeln!(out, "Masse totale:   {:.2} kg", totals.total_mass)?;
    writeln!(out, "Éléments:       {}", totals.count)?;
    Ok(())
}

fn write_summary_row<W: Write>(out: &mut W, index: usize, row: &SummaryRow) -> Result<()> {
    writeln!(
        out,
        "{:>3} {:<24} {:>8} {:>12.3} {:>12.2} {:>10.0}",
        index,
        truncate_str(&row.material, 24),
        row.multiplier,
        row.volume,
        row.mass,
        row.density
    )?;
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
