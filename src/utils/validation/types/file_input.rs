//! Avatar selection handling.
//!
//! The form only cares that exactly one file was picked; the file itself is an
//! opaque handle. Front-ends build those handles from filesystem paths, keeping
//! only the final path component as the file name.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use image::ImageFormat;
use serde::Serialize;

use crate::models::{FileSelection, SelectedFile};
use crate::utils::error_messages::{FormField, ValidationError};

/// MIME type reported for files that are not a known image format
const GENERIC_MIME_TYPE: &str = "application/octet-stream";

/// The single file chosen as avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvatarInput {
    file: SelectedFile,
}

impl AvatarInput {
    /// Accepts a selection holding exactly one file
    pub fn new(selection: FileSelection) -> Result<Self, ValidationError> {
        let mut files = selection.into_files();
        match files.pop() {
            Some(file) if files.is_empty() => Ok(Self { file }),
            _ => Err(ValidationError::RequiredFieldMissing {
                field: FormField::Avatar,
            }),
        }
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

impl SelectedFile {
    pub fn new(name: &str, size: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_owned(),
            size,
            mime_type: mime_type.to_owned(),
        }
    }

    /// Builds a file handle from a path on disk, as a file picker would.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        if !metadata.is_file() {
            bail!("{} is not a regular file", path.display());
        }

        let name = Self::sanitize_filename(path)?;

        let mime_type = ImageFormat::from_path(path)
            .map(|format| format.to_mime_type())
            .unwrap_or(GENERIC_MIME_TYPE);

        Ok(Self::new(&name, metadata.len(), mime_type))
    }

    /// Strips any directory components from the path
    fn sanitize_filename(path: &Path) -> Result<String> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::trim)
            .ok_or_else(|| anyhow!("Invalid filename"))?;

        if filename.is_empty() {
            bail!("Filename cannot be empty");
        }

        Ok(filename.to_string())
    }
}
