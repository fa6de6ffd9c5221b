//! Turns a `javap -s` report into a C header exposing the name and JNI
//! signature of each native method as string macros.

mod case;
mod codegen;
mod parser;
mod record;

pub use case::macro_stem;
pub use codegen::HeaderDocument;
pub use parser::{
    PatternConfig, PatternSet, DEFAULT_DECLARATION_PATTERN, DEFAULT_ERROR_PATTERN,
    DEFAULT_SIGNATURE_PATTERN,
};
pub use record::{Accumulator, MethodRecord};

use crate::error::HeaderError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Fully qualified class name, e.g. `com.example.Callbacks`
    pub class_name: String,
    pub patterns: PatternConfig,
}

impl HeaderConfig {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            patterns: PatternConfig::default(),
        }
    }
}

/// Reads the report line by line and collects every complete method.
pub fn parse_report<I, S>(
    lines: I,
    class_name: &str,
    patterns: &PatternSet,
) -> Result<HeaderDocument, HeaderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut doc = HeaderDocument::new(class_name);
    let mut acc = Accumulator::default();

    for line in lines {
        let line = line.as_ref();
        if patterns.is_error(line) {
            return Err(HeaderError::ToolReported {
                line: line.to_owned(),
            });
        }
        if let Some(name) = patterns.declaration(line) {
            acc.declare(line, name);
        }
        if let Some(signature) = patterns.signature(line) {
            doc.push(acc.sign(line, signature)?);
        }
    }
    acc.finish();

    Ok(doc)
}

/// Renders the header text for a report. Nothing is written to disk.
pub fn generate_header<I, S>(lines: I, config: &HeaderConfig) -> Result<String, HeaderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns = PatternSet::compile(&config.patterns)?;
    let doc = parse_report(lines, &config.class_name, &patterns)?;
    Ok(doc.to_string())
}

/// Replaces `path` with `text`. The content goes to a temporary file next to
/// the target first and is renamed into place once fully written.
pub fn write_header(path: &Path, text: &str) -> Result<(), HeaderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| HeaderError::io(dir, e))?;

    let mut file = NamedTempFile::new_in(dir).map_err(|e| HeaderError::io(path, e))?;
    // temp files are created owner-only, keep the mode a plain write would give
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| HeaderError::io(path, e))?;
    }
    file.write_all(text.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| HeaderError::io(path, e))?;
    file.persist(path)
        .map_err(|e| HeaderError::io(path, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
