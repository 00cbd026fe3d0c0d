//! Atlas document and image I/O

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

use crate::models::AtlasDocument;

/// Error type for document and image I/O failures
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Cannot open or read a file
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid atlas metadata JSON
    #[error("cannot parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The atlas image cannot be decoded
    #[error("cannot decode image '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Cannot create or replace the output file
    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Serialization failed mid-write
    #[error("cannot serialize '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The document path with its extension swapped for the atlas image's.
pub fn image_path_for(document: &Path) -> PathBuf {
    document.with_extension("png")
}

/// Read and parse the atlas metadata document.
pub fn load_document(path: &Path) -> Result<AtlasDocument, DocumentError> {
    let file = File::open(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the atlas image into an RGBA8 buffer.
///
/// Images without an alpha channel decode fully opaque, so every pixel
/// participates in sampling.
pub fn load_image(path: &Path) -> Result<RgbaImage, DocumentError> {
    let image = image::open(path).map_err(|source| DocumentError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

/// Serialize the document with 2-space indentation, then atomically
/// replace the original file via a temp-file rename.
pub fn save_document(document: &AtlasDocument, path: &Path) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| DocumentError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp = temp_sibling(path);
    match write_pretty(document, &tmp) {
        Ok(()) => fs::rename(&tmp, path).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

// Single-writer tool: a fixed sibling name is collision-free
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("atlas"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_pretty(document: &AtlasDocument, path: &Path) -> Result<(), DocumentError> {
    let file = File::create(path).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
        DocumentError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}
