use crate::host::SourceLocation;
use crate::utils::{CsvListError, Result};
use std::collections::HashMap;

/// Per-invocation directive options, resolved once per render call.
#[derive(Debug, Clone, Default)]
pub struct CsvListOptions {
    pub file: Option<String>,
    pub encoding: Option<String>,
    pub title_key: String,
    pub id_key: String,
    pub id_prefix: String,
}

impl CsvListOptions {
    /// Build typed options from the host's raw option dictionary. Unknown
    /// option names are rejected.
    pub fn from_map(options: &HashMap<String, String>) -> Result<Self> {
        let mut parsed = Self::default();
        for (name, value) in options {
            match name.as_str() {
                "file" => parsed.file = Some(value.clone()),
                "encoding" => parsed.encoding = Some(value.clone()),
                "title-key" => parsed.title_key = value.clone(),
                "id-key" => parsed.id_key = value.clone(),
                "id-prefix" => parsed.id_prefix = value.clone(),
                other => {
                    return Err(CsvListError::Config(format!(
                        "unknown \"csv-list\" option: {other}"
                    )))
                }
            }
        }
        Ok(parsed)
    }
}

/// One directive invocation as handed over by the host markup parser.
#[derive(Debug, Clone, Default)]
pub struct DirectiveInput {
    /// Required free-text format label.
    pub arguments: String,
    pub options: CsvListOptions,
    /// Inline body lines; empty when the body is absent.
    pub content: Vec<String>,
    pub location: Option<SourceLocation>,
}
