//! Record-level orchestration against a host platform.
//!
//! A host stores the uploaded file list in one record field and expects the
//! produced file names in another, with the password kept in some at-rest
//! form. The platform services involved are injected as collaborator traits
//! rather than looked up from global state.

use log::info;

use crate::batch::{BatchResult, PasswordProtectionRequest, run_batch};
use crate::error::Result;
use crate::path_list::parse_file_paths;
use crate::storage::{FileSource, ProtectedFileSink};

/// Field access on the record currently being processed.
pub trait RecordReader {
    fn read_field(&self, field_id: &str) -> Result<String>;
    fn write_field(&mut self, field_id: &str, value: &str) -> Result<()>;
}

/// Maps a configured at-rest password to its plaintext form.
pub trait CredentialResolver {
    fn resolve(&self, stored: &str) -> Result<String>;
}

/// Resolver for hosts that configure the password in plaintext.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialResolver for PlaintextCredentials {
    fn resolve(&self, stored: &str) -> Result<String> {
        Ok(stored.to_string())
    }
}

/// Tool configuration as the host hands it over.
#[derive(Debug, Clone)]
pub struct ToolSettings {
    /// Record field holding the `;`-delimited source path list.
    pub source_field: String,
    /// Record field receiving the `;`-delimited result.
    pub output_field: String,
    /// Password in its configured at-rest form.
    pub password: String,
}

/// Runs the tool against one record: reads the source path list, resolves
/// the password, protects every file, and writes the joined result back.
///
/// The output field is only written when at least one file was processed,
/// mirroring the host convention of leaving the field untouched for empty
/// uploads. Errors propagate typed to the caller; nothing is swallowed.
pub fn execute<R, C, F, S>(
    settings: &ToolSettings,
    record: &mut R,
    credentials: &C,
    files: &F,
    sink: &mut S,
) -> Result<BatchResult>
where
    R: RecordReader,
    C: CredentialResolver,
    F: FileSource,
    S: ProtectedFileSink,
{
    let path_list = record.read_field(&settings.source_field)?;
    let password = credentials.resolve(&settings.password)?;

    let request = PasswordProtectionRequest {
        source_files: parse_file_paths(&path_list),
        password,
    };
    if request.source_files.is_empty() {
        info!("field {} holds no source files, nothing to protect", settings.source_field);
        return Ok(BatchResult::default());
    }

    let result = run_batch(&request, files, sink)?;
    record.write_field(&settings.output_field, &result.to_delimited())?;
    info!(
        "protected {} file(s) from field {} into field {}",
        result.len(),
        settings.source_field,
        settings.output_field
    );
    Ok(result)
}
