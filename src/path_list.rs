use std::fmt;

/// Path of a source PDF, normalized to `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference(String);

impl FileReference {
    /// Creates a reference from a path string, normalizing `\` to `/`.
    pub fn new<S: Into<String>>(path: S) -> FileReference {
        FileReference(path.into().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file-name component, i.e. everything after the last separator.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a `;`-delimited path list into individual file references.
///
/// Each segment is trimmed. A segment containing a separator updates the
/// carried directory to everything before its last separator; a segment
/// without one is joined onto that carried directory. A separator-free
/// segment seen before any directory resolves to the bare file name.
/// Blank segments are skipped, so an empty input yields an empty list.
pub fn parse_file_paths(input: &str) -> Vec<FileReference> {
    // Directory carried across segments, updated by every segment that
    // names one explicitly. `None` until a directory has been seen, which
    // keeps the root directory (`Some("")`, from an absolute segment like
    // `/a.pdf`) distinguishable from no directory at all.
    let mut directory: Option<String> = None;
    let mut references = Vec::new();

    for segment in input.split(';') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized = trimmed.replace('\\', "/");
        let full_path = match normalized.rfind('/') {
            Some(index) => {
                directory = Some(normalized[..index].to_string());
                normalized
            }
            None => match &directory {
                Some(dir) => format!("{dir}/{normalized}"),
                None => normalized,
            },
        };
        references.push(FileReference(full_path));
    }

    references
}
