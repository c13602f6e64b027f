use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::path_list::FileReference;
use crate::protector::protect;
use crate::storage::{FileSource, ProtectedFileSink};

/// One batch of source files to protect with a single password.
#[derive(Debug, Clone)]
pub struct PasswordProtectionRequest {
    /// Source PDFs, processed strictly in this order.
    pub source_files: Vec<FileReference>,
    /// Plaintext password, applied as both owner and user password.
    pub password: String,
}

/// Derived file names produced by a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    names: Vec<String>,
}

impl BatchResult {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names joined with `;`, no leading or trailing separator.
    pub fn to_delimited(&self) -> String {
        self.names.join(";")
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

/// Protects every file of the request and hands each copy to `sink`.
///
/// Files are processed sequentially in input order: read through `files`,
/// protected with the request password, then stored by `sink`, which names
/// the copy and returns the derived file name. An empty source list returns
/// an empty result without touching the sink.
///
/// Any single-file failure aborts the whole batch with a typed error. Copies
/// stored before the failing file are not rolled back, but no result is
/// produced; the caller decides retry and cleanup policy.
pub fn run_batch<F, S>(request: &PasswordProtectionRequest, files: &F, sink: &mut S) -> Result<BatchResult>
where
    F: FileSource,
    S: ProtectedFileSink,
{
    if request.password.is_empty() {
        return Err(Error::InvalidArgument("password must not be empty".to_string()));
    }

    let mut names = Vec::with_capacity(request.source_files.len());
    for file in &request.source_files {
        debug!("protecting {file}");
        let content = files.read(file)?;
        let protected = protect(&content, &request.password)?;
        let name = sink.store(file, &protected)?;
        names.push(name);
    }

    Ok(BatchResult { names })
}
