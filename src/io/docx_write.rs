use std::fs::File;
use std::path::Path;

use docx_rs::{
    AlignmentType, BreakType, Docx, HeightRule, PageMargin, Paragraph, Run, ShdType, Shading,
    Table, TableCell, TableRow, WidthType,
};

use crate::error::Result;
use crate::model::{Student, display_class};

/// Page margin applied to all four sides, in twentieths of a point.
const PAGE_MARGIN: i32 = 720;
/// Title font size, in half-points.
const TITLE_SIZE: usize = 32;
/// Table header font size, in half-points.
const LABEL_SIZE: usize = 24;
/// Fill colour of the table header row.
const LABEL_FILL: &str = "D9D9D9";
/// Minimum height of every table row, in twentieths of a point.
const ROW_HEIGHT: f32 = 400.0;
/// Fixed column widths, in twentieths of a point.
const COLUMN_WIDTHS: [usize; 3] = [4000, 2000, 3000];
/// Table header labels, in column order.
const COLUMN_LABELS: [&str; 3] = ["Nombre", "ID", "Clase"];

/// Writes the roster document for a single (teacher, class) group.
///
/// The document holds a centered title block naming the teacher and class
/// followed by a bordered three-column table with one row per student. The
/// file is fully written and closed before this returns.
pub fn write_group_document(
    path: &Path,
    teacher: &str,
    class: &str,
    students: &[Student],
) -> Result<()> {
    let mut rows = Vec::with_capacity(students.len() + 1);
    rows.push(label_row());
    for student in students {
        rows.push(student_row(student, class));
    }
    let table = Table::new(rows).set_grid(COLUMN_WIDTHS.to_vec());

    let file = File::create(path)?;
    Docx::new()
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN)
                .right(PAGE_MARGIN),
        )
        .add_paragraph(title_paragraph(teacher, class))
        .add_table(table)
        .build()
        .pack(file)
        .map_err(docx_rs::DocxError::from)?;

    Ok(())
}

fn title_paragraph(teacher: &str, class: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(
            Run::new()
                .add_text(format!("Profesor: {teacher}"))
                .bold()
                .size(TITLE_SIZE)
                .add_break(BreakType::TextWrapping),
        )
        .add_run(
            Run::new()
                .add_text(format!("Clase: {}", display_class(class)))
                .bold()
                .size(TITLE_SIZE),
        )
}

fn label_row() -> TableRow {
    let cells = COLUMN_LABELS
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(label, width)| {
            TableCell::new()
                .add_paragraph(
                    Paragraph::new()
                        .align(AlignmentType::Center)
                        .add_run(Run::new().add_text(*label).bold().size(LABEL_SIZE)),
                )
                .shading(Shading::new().shd_type(ShdType::Clear).fill(LABEL_FILL))
                .width(width, WidthType::Dxa)
        })
        .collect();

    TableRow::new(cells)
        .height_rule(HeightRule::AtLeast)
        .row_height(ROW_HEIGHT)
}

fn student_row(student: &Student, class: &str) -> TableRow {
    let values = [
        student.name.as_str(),
        student.id.as_str(),
        display_class(class),
    ];
    let cells = values
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(value, width)| {
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text(*value)))
                .width(width, WidthType::Dxa)
        })
        .collect();

    TableRow::new(cells)
        .height_rule(HeightRule::AtLeast)
        .row_height(ROW_HEIGHT)
}
