//! Command-line interface implementation

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::describe::annotate_document;
use crate::document::{image_path_for, load_document, load_image, save_document, DocumentError};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Annotate sprite atlas metadata with human-readable frame descriptions
#[derive(Parser)]
#[command(name = "atn")]
#[command(about = "Annotate sprite atlas metadata with human-readable frame descriptions")]
#[command(version)]
pub struct Cli {
    /// Atlas metadata JSON file (rewritten in place)
    pub document: PathBuf,

    /// Atlas image; defaults to the document path with a .png extension
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    run_annotate(&cli.document, cli.image.as_deref())
}

/// Execute the annotation pipeline: load, describe every frame, save.
fn run_annotate(document_path: &Path, image_arg: Option<&Path>) -> ExitCode {
    let mut document = match load_document(document_path) {
        Ok(document) => document,
        Err(e @ DocumentError::Read { .. }) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let image_path = match image_arg {
        Some(path) => path.to_path_buf(),
        None => image_path_for(document_path),
    };
    let image = match load_image(&image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let count = match annotate_document(&mut document, &image) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(e) = save_document(&document, document_path) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Updated descriptions for {count} frames");
    ExitCode::from(EXIT_SUCCESS)
}
