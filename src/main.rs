use std::path::Path;

use roster_docs::generate;
use roster_docs::{Result, RosterError};
use tracing_subscriber::EnvFilter;

/// Student workbook read from the working directory.
const INPUT_PATH: &str = "students.xlsx";
/// Folder receiving one document per (teacher, class) group.
const OUTPUT_DIR: &str = "OUTPUT-FOLDER";

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;

    let input = Path::new(INPUT_PATH);
    if !input.exists() {
        return Err(RosterError::MissingInput(input.to_path_buf()));
    }

    let summary = generate::excel_to_documents(input, Path::new(OUTPUT_DIR))?;
    println!(
        "All documents have been created successfully in: {}",
        summary.output_dir.display()
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| RosterError::Logging(error.to_string()))
}
