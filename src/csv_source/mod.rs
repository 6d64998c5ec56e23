pub mod parse;
pub mod source;

pub use parse::{record_map, RecordTable};
pub use source::{read_to_string_with_encoding, resolve_source, SourceText};
