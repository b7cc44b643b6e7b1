use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, RosterError};
use crate::model::{CellValue, Roster, Student};

/// Resolved header positions for the columns the loader cares about.
///
/// Detection lower-cases and trims each header cell, then matches the name,
/// teacher, and class roles on a substring of the text and the id role on an
/// exact match. The checks are independent, so a single header can fill
/// several roles at once, and a later header matching a role overwrites an
/// earlier assignment. Roles never matched stay unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub id: Option<usize>,
    pub teacher: Option<usize>,
    pub class: Option<usize>,
}

impl ColumnMap {
    /// Scans a header row and records the position of each recognised label.
    pub fn detect(header: &[DataType]) -> Self {
        let mut columns = ColumnMap::default();

        for (index, cell) in header.iter().enumerate() {
            let label = cell_text(cell).to_lowercase();
            if label.contains("nombre") {
                columns.name = Some(index);
            }
            if label == "id" {
                columns.id = Some(index);
            }
            if label.contains("profesor") {
                columns.teacher = Some(index);
            }
            if label.contains("clase") {
                columns.class = Some(index);
            }
        }

        columns
    }
}

/// Reads the first worksheet of the workbook at `path` and groups its data
/// rows by (teacher, class).
///
/// Rows whose teacher or class cell is absent contribute to no group and are
/// skipped silently. A row with both grouping cells present but no name cell
/// aborts the whole load.
pub fn read_roster(path: &Path) -> Result<Roster> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RosterError::InvalidWorkbook("workbook has no sheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| RosterError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(RosterError::from)?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| RosterError::InvalidWorkbook("missing header row".into()))?;
    let columns = ColumnMap::detect(header);

    let mut roster = Roster::new();
    for (offset, row) in rows.enumerate() {
        let Some(teacher) = text_cell(row, columns.teacher) else {
            continue;
        };
        let Some(class) = text_cell(row, columns.class) else {
            continue;
        };

        let name = text_cell(row, columns.name).ok_or_else(|| RosterError::MissingCell {
            row: offset + 2,
            column: "nombre".into(),
        })?;
        let id = id_cell(row, columns.id).into_id();

        roster.push(teacher, class, Student { name, id });
    }

    Ok(roster)
}

fn id_cell(row: &[DataType], column: Option<usize>) -> CellValue {
    match column.and_then(|index| row.get(index)) {
        Some(DataType::String(value)) => CellValue::Text(value.clone()),
        Some(DataType::Float(value)) => CellValue::Number(*value),
        Some(DataType::Int(value)) => CellValue::Number(*value as f64),
        Some(DataType::Empty) | None => CellValue::Empty,
        Some(other) => CellValue::Other(other.to_string()),
    }
}

fn text_cell(row: &[DataType], column: Option<usize>) -> Option<String> {
    match column.and_then(|index| row.get(index)) {
        Some(DataType::Empty) | None => None,
        Some(cell) => Some(cell_text(cell)),
    }
}

fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.trim().to_string(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
