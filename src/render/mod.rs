pub mod html;
pub mod record;

pub use html::HtmlBuilder;
pub use record::{RecordRenderer, PERMALINK_LABEL};
