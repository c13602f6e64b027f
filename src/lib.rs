//! Batch password protection for PDF documents.
//!
//! The crate is a thin orchestration layer over [`lopdf`]: it parses a
//! `;`-delimited list of source paths, applies a password-based protection
//! policy to each document (identical owner and user password, 128-bit key,
//! full access permissions) and hands every protected copy to a
//! caller-provided sink, which names and persists it.

mod error;
pub use error::{Error, Result};

mod path_list;
pub use path_list::{FileReference, parse_file_paths};

mod protector;
pub use protector::{ENCRYPTION_KEY_LENGTH, protect};

mod batch;
pub use batch::{BatchResult, PasswordProtectionRequest, run_batch};

mod storage;
pub use storage::{DirectorySink, FileSource, FsFileSource, ProtectedFileSink, derived_file_name};

mod host;
pub use host::{CredentialResolver, PlaintextCredentials, RecordReader, ToolSettings, execute};
