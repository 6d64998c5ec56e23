use crate::utils::AssetConfig;
use std::path::{Path, PathBuf};

/// Static-asset registration surface of the host build system.
pub trait AssetRegistrar {
    fn add_static_path(&mut self, path: &Path);
    fn add_stylesheet(&mut self, filename: &str);
}

/// Directory holding the stylesheet shipped with this crate.
pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Build-initialization hook. Registers the stylesheet and its directory for
/// HTML builds; other output targets are left untouched.
pub fn register_static_assets(
    builder: &str,
    assets: &AssetConfig,
    registrar: &mut dyn AssetRegistrar,
) {
    if builder != "html" {
        return;
    }

    let dir = if assets.static_dir.is_absolute() {
        assets.static_dir.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&assets.static_dir)
    };

    tracing::debug!(dir = %dir.display(), stylesheet = %assets.stylesheet, "registering static assets");
    registrar.add_static_path(&dir);
    registrar.add_stylesheet(&assets.stylesheet);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ExtensionConfig;

    #[derive(Default)]
    struct RecordingRegistrar {
        static_paths: Vec<PathBuf>,
        stylesheets: Vec<String>,
    }

    impl AssetRegistrar for RecordingRegistrar {
        fn add_static_path(&mut self, path: &Path) {
            self.static_paths.push(path.to_path_buf());
        }

        fn add_stylesheet(&mut self, filename: &str) {
            self.stylesheets.push(filename.to_string());
        }
    }

    #[test]
    fn html_build_registers_stylesheet_and_static_dir() {
        let config = ExtensionConfig::default();
        let mut registrar = RecordingRegistrar::default();
        register_static_assets("html", &config.assets, &mut registrar);

        assert_eq!(registrar.stylesheets, vec!["csv_list.css".to_string()]);
        assert_eq!(registrar.static_paths.len(), 1);
        assert!(registrar.static_paths[0].ends_with("static"));
    }

    #[test]
    fn non_html_build_is_a_no_op() {
        let config = ExtensionConfig::default();
        let mut registrar = RecordingRegistrar::default();
        register_static_assets("latex", &config.assets, &mut registrar);

        assert!(registrar.stylesheets.is_empty());
        assert!(registrar.static_paths.is_empty());
    }
}
