pub mod helpers;
pub mod logger;

pub use helpers::{DEFAULT_REPORT_FILENAME, attachment_filename, is_pdf, pretty_json};
pub use logger::init_tracing;
