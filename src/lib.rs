pub mod csv_source;
pub mod directive;
pub mod host;
pub mod render;
pub mod utils;

pub use csv_source::{RecordTable, SourceText};
pub use directive::{CsvListDirective, CsvListOptions, Directive, DirectiveInput, DIRECTIVE_NAME};
pub use host::{
    register_static_assets, static_dir, AssetRegistrar, DocumentDir, NullTranslator, PathResolver,
    RawNode, SourceLocation, Translator,
};
pub use render::{HtmlBuilder, RecordRenderer};
pub use utils::{CsvListError, ExtensionConfig, Result};
