use crate::errors::AppResult;
use crate::export::model::{IntervalExport, get_headers, interval_to_row};
use crate::export::notify_export_success;
use csv::Writer;
use std::fs;
use std::path::Path;

pub(crate) fn export_csv(rows: &[IntervalExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for r in rows {
        wtr.write_record(interval_to_row(r))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path, rows.len());
    Ok(())
}

pub(crate) fn export_json(rows: &[IntervalExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    notify_export_success("JSON", path, rows.len());
    Ok(())
}
