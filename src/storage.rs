use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path_list::FileReference;

/// Suffix appended to the original base name of every protected copy.
const PROTECTED_SUFFIX: &str = "_protected.pdf";

/// Read access to source files. Storage conventions are host-specific, so
/// the batch runner only sees this seam.
pub trait FileSource {
    fn read(&self, file: &FileReference) -> Result<Vec<u8>>;
}

/// Destination for protected copies. Implementations name the copy, persist
/// it, and return the derived file name used.
pub trait ProtectedFileSink {
    fn store(&mut self, original: &FileReference, content: &[u8]) -> Result<String>;
}

/// Computes the derived name of a protected copy: the original file name
/// with its last extension stripped plus `_protected.pdf`.
pub fn derived_file_name(original: &FileReference) -> String {
    let name = original.file_name();
    let stem = match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    };
    format!("{stem}{PROTECTED_SUFFIX}")
}

/// Reads source files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn read(&self, file: &FileReference) -> Result<Vec<u8>> {
        fs::read(file.as_str()).map_err(|source| Error::Io {
            path: file.as_str().to_string(),
            source,
        })
    }
}

/// Writes protected copies into a destination directory under their derived
/// names.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(directory: P) -> DirectorySink {
        DirectorySink {
            directory: directory.into(),
        }
    }
}

impl ProtectedFileSink for DirectorySink {
    fn store(&mut self, original: &FileReference, content: &[u8]) -> Result<String> {
        let name = derived_file_name(original);
        fs::write(self.directory.join(&name), content).map_err(Error::storage)?;
        Ok(name)
    }
}
