pub mod csv;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use crate::generator::TableOutcome;
use crate::models::{Parameters, ProteinTable};
use crate::validation::Violation;

pub use self::csv::{serialize_csv, CsvExporter, CSV_MEDIA_TYPE};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("le tableau contient des erreurs ({} à corriger)", .0.len())]
    Invalid(Vec<Violation>),
    #[error("échec de la sérialisation CSV : {0}")]
    Csv(#[from] ::csv::Error),
    #[error("erreur d’écriture : {0}")]
    Io(#[from] std::io::Error),
}

pub trait Exporter {
    fn export(&self, table: &ProteinTable, path: &Path) -> Result<(), ExportError>;
}

/// `besoins-proteines_{min}-{max}kg_{rows}lignes.csv`, numbers in shortest form.
pub fn export_file_name(params: &Parameters) -> String {
    format!(
        "besoins-proteines_{}-{}kg_{}lignes.csv",
        params.min_weight, params.max_weight, params.row_count
    )
}

/// Writes the outcome's table into `dir` and returns the file path.
/// Refuses to write while the form has violations.
pub fn export_table(
    exporter: &dyn Exporter,
    outcome: &TableOutcome,
    params: &Parameters,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    if !outcome.is_valid() {
        warn!("Export blocked by {} violation(s)", outcome.violations.len());
        return Err(ExportError::Invalid(outcome.violations.clone()));
    }

    let path = dir.join(export_file_name(params));
    exporter.export(&outcome.table, &path)?;
    info!("Exported {} rows to {}", outcome.table.rows.len(), path.display());

    Ok(path)
}
