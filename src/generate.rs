use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::{docx_write, excel_read};
use crate::model::display_class;

/// Outcome of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Paths of the documents written, in generation order.
    pub documents: Vec<PathBuf>,
    /// Absolute path of the output directory.
    pub output_dir: PathBuf,
}

/// Reads the student workbook and writes one roster document per
/// (teacher, class) group into `output_dir`.
///
/// The directory is created if absent. Groups are rendered sequentially in
/// first-seen order, and each document is fully written before the next one
/// starts. The first failure aborts the run; documents already written stay
/// on disk.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output_dir.display())
)]
pub fn excel_to_documents(input: &Path, output_dir: &Path) -> Result<RunSummary> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
        info!(folder = %output_dir.display(), "created output folder");
    }

    let roster = excel_read::read_roster(input)?;
    info!(group_count = roster.groups().len(), "grouped students from workbook");

    let mut documents = Vec::with_capacity(roster.groups().len());
    for group in roster.groups() {
        let file_name = format!(
            "{} - {} - estudiantes.docx",
            group.key.teacher,
            display_class(&group.key.class)
        );
        let path = output_dir.join(file_name);
        docx_write::write_group_document(&path, &group.key.teacher, &group.key.class, &group.students)?;
        info!(path = %path.display(), students = group.students.len(), "document written");
        documents.push(path);
    }

    let output_dir = std::path::absolute(output_dir)?;
    debug!(document_count = documents.len(), "generation finished");
    Ok(RunSummary {
        documents,
        output_dir,
    })
}
