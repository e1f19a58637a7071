pub mod config;
pub mod exit_codes;
pub mod init;
pub mod languages;
pub mod options;
pub mod printer;
pub mod processor;
pub mod registry;
pub mod service;
pub mod session;

pub use crate::options::FormatOptions;
pub use crate::printer::{CommandPrinter, PrettyPrinter, PrinterConfig};
pub use crate::processor::LanguageProcessor;
pub use crate::registry::{DEFAULT_LANGUAGE, LanguageRegistry};
pub use crate::service::{FormatError, FormatterService};
pub use crate::session::{ChangeEvent, EditOrigin, EditSession};
