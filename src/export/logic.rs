// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::models::work_log::WorkLog;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every interval of the log. Returns the number of rows written.
    pub fn export(log: &WorkLog, format: ExportFormat, file: &str, force: bool) -> AppResult<usize> {
        let path = Path::new(file);

        let rows = flatten(log);
        if rows.is_empty() {
            warning("No intervals to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        tracing::info!(format = format.as_str(), path = %path.display(), rows = rows.len(), "export done");
        Ok(rows.len())
    }
}
