use crate::utils::{CsvListError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub absolute: PathBuf,
    /// Path recorded on the output node for source attribution, relative to
    /// the project base directory when the file lives under it.
    pub attribution: String,
}

pub trait PathResolver {
    fn resolve(&self, relative: &str) -> Result<ResolvedPath>;
}

/// Resolves directive paths against the directory of the document currently
/// being built.
#[derive(Debug, Clone)]
pub struct DocumentDir {
    source_dir: PathBuf,
    base_dir: Option<PathBuf>,
}

impl DocumentDir {
    /// Build a resolver from the path of the current document.
    pub fn new(document: impl AsRef<Path>) -> Self {
        let source_dir = document
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            source_dir,
            base_dir: None,
        }
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: dir.into(),
            base_dir: None,
        }
    }

    pub fn with_base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base.into());
        self
    }
}

impl PathResolver for DocumentDir {
    fn resolve(&self, relative: &str) -> Result<ResolvedPath> {
        let joined = self.source_dir.join(relative);
        let absolute = joined
            .canonicalize()
            .map_err(|_| CsvListError::FileNotFound(joined.display().to_string()))?;

        let base = match &self.base_dir {
            Some(base) => Some(base.clone()),
            None => std::env::current_dir().ok(),
        };
        let attribution = base
            .as_deref()
            .and_then(|base| absolute.strip_prefix(base).ok())
            .unwrap_or(&absolute)
            .display()
            .to_string();

        Ok(ResolvedPath {
            absolute,
            attribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolves_relative_to_document_dir() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("people.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "a,b").unwrap();

        let resolver = DocumentDir::new(dir.path().join("index.rst"));
        let resolved = resolver.resolve("people.csv").unwrap();
        assert!(resolved.absolute.ends_with("people.csv"));
    }

    #[test]
    fn attribution_is_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let csv_path = dir.path().join("data").join("people.csv");
        std::fs::write(&csv_path, "a,b\n").unwrap();

        let base = dir.path().canonicalize().unwrap();
        let resolver = DocumentDir::from_dir(dir.path()).with_base_dir(base);
        let resolved = resolver.resolve("data/people.csv").unwrap();
        assert_eq!(resolved.attribution, format!("data{}people.csv", std::path::MAIN_SEPARATOR));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = DocumentDir::from_dir(dir.path());
        let err = resolver.resolve("absent.csv").unwrap_err();
        assert!(matches!(err, CsvListError::FileNotFound(_)));
    }
}
