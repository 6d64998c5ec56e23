pub mod config;
pub mod errors;

pub use config::{AssetConfig, DirectiveDefaults, ExtensionConfig, LoggingConfig};
pub use errors::{CsvListError, Result};

pub fn normalize_format(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_format_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_format("  CSV   Glossary "), "csv glossary");
        assert_eq!(normalize_format("changelog"), "changelog");
        assert_eq!(normalize_format(""), "");
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
