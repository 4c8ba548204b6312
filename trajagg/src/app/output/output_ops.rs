use std::{fs::File, path::Path};

use serde::Serialize;

use super::{GridRow, SegmentRow};
use crate::app::{config::StyleConfig, AppError, GridLayer, SegmentLayer};

pub const SEGMENTS_FILENAME: &str = "segments.csv";
pub const GRID_FILENAME: &str = "grid.csv";

/// writes the styled segments of every layer, layers in order and segments
/// in the order they were first walked.
///
/// # Returns
///
/// * number of rows written
pub fn write_segments(
    path: &Path,
    layers: &[SegmentLayer],
    style: &StyleConfig,
) -> Result<usize, AppError> {
    let rows = layers.iter().flat_map(|layer| {
        let range = layer.counts.range().unwrap_or_default();
        layer.counts.iter().map(move |(segment, count)| {
            SegmentRow::new(
                &layer.vehicle_type,
                segment,
                *count,
                style.style(*count, range),
            )
        })
    });
    write_rows(path, rows)
}

/// writes every cell of every grid layer in long format, layers in order and
/// cells in row-major order.
///
/// # Returns
///
/// * number of rows written
pub fn write_grids(path: &Path, layers: &[GridLayer]) -> Result<usize, AppError> {
    let rows = layers.iter().flat_map(|layer| {
        layer.grid.cells().map(|(row, col, count)| GridRow {
            layer: layer.name.clone(),
            row,
            col,
            count,
        })
    });
    write_rows(path, rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: impl Iterator<Item = T>) -> Result<usize, AppError> {
    let filepath = path.to_string_lossy().to_string();
    let write_error = |source: csv::Error| AppError::OutputWriteError {
        filepath: filepath.clone(),
        source,
    };
    let mut writer: csv::Writer<File> = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(write_error)?;
    let mut n_rows = 0;
    for row in rows {
        writer.serialize(row).map_err(write_error)?;
        n_rows += 1;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))?;
    log::info!("wrote {n_rows} rows to {filepath}");
    Ok(n_rows)
}
