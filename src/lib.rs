pub mod classifier;
pub mod error;
pub mod inspector;
pub mod language;
pub mod output;

pub use classifier::{LineClassifier, LineCounts};
pub use error::{LocFileError, Result};
pub use inspector::{FileInfo, FileInspector};
pub use language::LanguageRegistry;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
