use super::case::macro_stem;
use crate::error::HeaderError;
use tracing::debug;

/// A declaration that is still waiting for its signature line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMethod {
    declaration_line: String,
    name: String,
    macro_stem: String,
}

/// A native method with both its name and its JNI signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub declaration_line: String,
    pub name: String,
    pub macro_stem: String,
    pub signature_line: String,
    pub signature: String,
}

/// Pairs each declaration line with the signature line that follows it.
#[derive(Debug, Default)]
pub struct Accumulator {
    pending: Option<PendingMethod>,
}

impl Accumulator {
    pub fn declare(&mut self, line: &str, name: &str) {
        let method = PendingMethod {
            declaration_line: line.to_owned(),
            name: name.to_owned(),
            macro_stem: macro_stem(name),
        };
        if let Some(orphan) = self.pending.replace(method) {
            debug!(
                "discarding `{}`, declared without a signature",
                orphan.declaration_line
            );
        }
    }

    pub fn sign(&mut self, line: &str, signature: &str) -> Result<MethodRecord, HeaderError> {
        let method = self
            .pending
            .take()
            .ok_or_else(|| HeaderError::OrphanSignature {
                line: line.to_owned(),
            })?;
        Ok(MethodRecord {
            declaration_line: method.declaration_line,
            name: method.name,
            macro_stem: method.macro_stem,
            signature_line: line.to_owned(),
            signature: signature.to_owned(),
        })
    }

    pub fn finish(self) {
        if let Some(method) = self.pending {
            debug!(
                "report ended before a signature for `{}`, dropping it",
                method.declaration_line
            );
        }
    }
}
