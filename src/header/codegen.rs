use super::record::MethodRecord;
use std::fmt;

/// A callbacks header for one class: the include guard plus one
/// `_NAME`/`_SIGNATURE` macro pair per method, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    guard_token: String,
    records: Vec<MethodRecord>,
}

impl HeaderDocument {
    pub fn new(class_name: &str) -> Self {
        Self {
            guard_token: class_name.replace('.', "_"),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: MethodRecord) {
        self.records.push(record);
    }

    pub fn guard_token(&self) -> &str {
        &self.guard_token
    }

    pub fn records(&self) -> &[MethodRecord] {
        &self.records
    }
}

impl fmt::Display for HeaderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = &self.guard_token;
        writeln!(f, "/* DO NOT EDIT THIS FILE - it is machine generated */")?;
        writeln!(f, "/* Header for class {} */", guard)?;
        writeln!(f)?;
        writeln!(f, "#ifndef _Callbacks_{}", guard)?;
        writeln!(f, "#define _Callbacks_{}", guard)?;
        writeln!(f)?;

        for record in &self.records {
            writeln!(f, "/* {} */", record.declaration_line)?;
            writeln!(f, "#define {}_NAME \"{}\"", record.macro_stem, record.name)?;
            writeln!(f, "/* {} */", record.signature_line)?;
            writeln!(
                f,
                "#define {}_SIGNATURE \"{}\"",
                record.macro_stem, record.signature
            )?;
            writeln!(f)?;
        }

        writeln!(f, "#endif //_Callbacks_{}", guard)
    }
}
