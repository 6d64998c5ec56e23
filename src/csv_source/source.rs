use crate::host::PathResolver;
use crate::utils::{CsvListError, Result};
use encoding_rs::Encoding;
use std::path::Path;

/// CSV text ready for parsing, plus the attribution path when it came from a
/// file.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub text: String,
    pub source: Option<String>,
}

/// Resolve the directive body: inline content and an external file are
/// mutually exclusive, and neither yields an empty document.
pub fn resolve_source(
    directive: &str,
    content: &[String],
    file: Option<&str>,
    encoding: &str,
    resolver: &dyn PathResolver,
) -> Result<SourceText> {
    if !content.is_empty() {
        if file.is_some() {
            return Err(CsvListError::ContentAndFile {
                directive: directive.to_string(),
            });
        }
        return Ok(SourceText {
            text: content.join("\n"),
            source: None,
        });
    }

    if let Some(path) = file {
        let resolved = resolver.resolve(path)?;
        let text = read_to_string_with_encoding(&resolved.absolute, encoding)?;
        tracing::debug!(path = %resolved.attribution, bytes = text.len(), "loaded csv source file");
        return Ok(SourceText {
            text,
            source: Some(resolved.attribution),
        });
    }

    Ok(SourceText {
        text: String::new(),
        source: None,
    })
}

/// Read a file and decode it with the named encoding. The label is looked up
/// via the WHATWG registry; malformed byte sequences are an error rather than
/// silent replacement.
pub fn read_to_string_with_encoding(path: &Path, label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| CsvListError::UnknownEncoding(label.to_string()))?;

    let bytes = std::fs::read(path)?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(CsvListError::Decode {
            path: path.display().to_string(),
            encoding: encoding.name().to_string(),
        });
    }

    Ok(text.into_owned())
}
