pub mod csv_list;
pub mod options;

pub use csv_list::{CsvListDirective, DIRECTIVE_NAME};
pub use options::{CsvListOptions, DirectiveInput};

use crate::host::RawNode;
use crate::utils::Result;

/// A documentation-source markup instruction expanded by the build pipeline
/// into structured output content.
pub trait Directive {
    fn name(&self) -> &str;
    fn run(&self, input: &DirectiveInput) -> Result<RawNode>;
}
