use crate::error::{HeaderError, PatternKind};
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_ERROR_PATTERN: &str = r"^ERROR:.*$";
pub const DEFAULT_DECLARATION_PATTERN: &str = r"^.*\s+([^.\s(]+)\([^()]*\)[^()]*;$";
pub const DEFAULT_SIGNATURE_PATTERN: &str = r"^\s*(?:Signature|descriptor):\s+(.+)$";

/// The three pattern strings used to read a `javap -s` report.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PatternConfig {
    pub error: String,
    pub declaration: String,
    pub signature: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            error: DEFAULT_ERROR_PATTERN.to_owned(),
            declaration: DEFAULT_DECLARATION_PATTERN.to_owned(),
            signature: DEFAULT_SIGNATURE_PATTERN.to_owned(),
        }
    }
}

/// Compiled report patterns. Every pattern has to match the whole line.
#[derive(Debug)]
pub struct PatternSet {
    error: Regex,
    declaration: Regex,
    signature: Regex,
}

impl PatternSet {
    pub fn compile(config: &PatternConfig) -> Result<Self, HeaderError> {
        Ok(Self {
            error: compile_line_pattern(PatternKind::Error, &config.error, false)?,
            declaration: compile_line_pattern(PatternKind::Declaration, &config.declaration, true)?,
            signature: compile_line_pattern(PatternKind::Signature, &config.signature, true)?,
        })
    }

    pub fn is_error(&self, line: &str) -> bool {
        self.error.is_match(line)
    }

    /// Returns the method name captured from a declaration line.
    pub fn declaration<'a>(&self, line: &'a str) -> Option<&'a str> {
        first_group(&self.declaration, line)
    }

    /// Returns the raw signature captured from a signature line.
    pub fn signature<'a>(&self, line: &'a str) -> Option<&'a str> {
        first_group(&self.signature, line)
    }
}

fn compile_line_pattern(
    kind: PatternKind,
    pattern: &str,
    needs_group: bool,
) -> Result<Regex, HeaderError> {
    let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| {
        HeaderError::InvalidPattern {
            kind,
            pattern: pattern.to_owned(),
            source,
        }
    })?;
    // captures_len counts the implicit whole-match group
    if needs_group && regex.captures_len() < 2 {
        return Err(HeaderError::MissingCaptureGroup {
            kind,
            pattern: pattern.to_owned(),
        });
    }
    Ok(regex)
}

fn first_group<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
