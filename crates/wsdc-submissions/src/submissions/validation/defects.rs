use serde::{Deserialize, Serialize};

/// Field length ceilings, in characters.
pub mod limits {
    pub const NAME: usize = 255;
    pub const LOCATION: usize = 512;
    pub const ID: usize = 20;
    pub const SCORE: usize = 10;
    pub const EMAIL: usize = 254;
    pub const PHONE: usize = 30;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

/// A single reported violation, addressed by a JSON-path-like property path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub error_code: String,
    pub message: String,
    pub property_path: Option<String>,
    pub severity: Severity,
}

impl Defect {
    pub fn new(
        error_code: impl Into<String>,
        message: impl Into<String>,
        property_path: Option<String>,
        severity: Severity,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            property_path,
            severity,
        }
    }
}

/// Append-only defect accumulator with a path prefix.
///
/// Child validators receive a view from [`DefectSink::with_prefix`]; everything they record
/// lands in the same underlying list, qualified by the prefix chain, in discovery order.
#[derive(Debug)]
pub struct DefectSink<'a> {
    defects: &'a mut Vec<Defect>,
    prefix: String,
}

impl<'a> DefectSink<'a> {
    pub fn new(defects: &'a mut Vec<Defect>) -> Self {
        Self {
            defects,
            prefix: String::new(),
        }
    }

    pub fn record(
        &mut self,
        code: &str,
        message: impl Into<String>,
        path: &str,
        severity: Severity,
    ) {
        let property_path = self.qualify(path);
        self.defects.push(Defect::new(
            code,
            message,
            Some(property_path),
            severity,
        ));
    }

    pub fn error(&mut self, code: &str, message: impl Into<String>, path: &str) {
        self.record(code, message, path, Severity::Error);
    }

    pub fn with_prefix(&mut self, segment: &str) -> DefectSink<'_> {
        let prefix = self.qualify(segment);
        DefectSink {
            defects: &mut *self.defects,
            prefix,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn qualify(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            path.to_string()
        } else if path.is_empty() {
            self.prefix.clone()
        } else if path.starts_with('[') {
            format!("{}{}", self.prefix, path)
        } else {
            format!("{}.{}", self.prefix, path)
        }
    }
}
