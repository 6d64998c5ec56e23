pub mod assets;
pub mod node;
pub mod resolver;
pub mod translate;

pub use assets::{register_static_assets, static_dir, AssetRegistrar};
pub use node::{RawNode, SourceLocation};
pub use resolver::{DocumentDir, PathResolver, ResolvedPath};
pub use translate::{NullTranslator, Translator};
