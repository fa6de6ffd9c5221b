use color_eyre::eyre::Result;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub fn exit_on_err<T>(result: Result<T>) -> T {
    match result {
        Err(err) => {
            eprintln!("{:?}", err);
            std::process::exit(1);
        }
        Ok(val) => val,
    }
}

/// Which of the three report patterns a configuration error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Error,
    Declaration,
    Signature,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternKind::Error => "error",
            PatternKind::Declaration => "declaration",
            PatternKind::Signature => "signature",
        };
        f.write_str(name)
    }
}

/// Errors raised while turning a `javap` report into a header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A report line matched the error pattern.
    #[error("javap reported an error: {line}")]
    ToolReported { line: String },
    /// A signature line showed up with no method name waiting for it.
    #[error("cannot parse signature - no name parsed, line: [{line}]")]
    OrphanSignature { line: String },
    #[error("failed to write header to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid {kind} pattern `{pattern}`")]
    InvalidPattern {
        kind: PatternKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("{kind} pattern `{pattern}` has no capture group")]
    MissingCaptureGroup { kind: PatternKind, pattern: String },
}

impl HeaderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HeaderError::Io {
            path: path.into(),
            source,
        }
    }
}
