#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Raw markup handed back to the host pipeline. The `html` string is trusted
/// as-is and not parsed further.
#[derive(Debug, Clone)]
pub struct RawNode {
    pub html: String,
    pub format: String,
    pub source: Option<String>,
    pub location: Option<SourceLocation>,
}
