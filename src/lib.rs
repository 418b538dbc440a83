pub mod analyzers;
pub mod error;
pub mod loader;
pub mod output;
pub mod record;

pub use analyzers::report::{Report, ReportKind, generate_report};
pub use error::ReportError;
pub use loader::load_sources;
