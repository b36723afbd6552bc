//! Component sources: where component files come from.

pub mod ignores;
pub mod local;

use tokenbridge_core::errors::{BatchResult, SourceError};
use tokenbridge_core::ComponentFile;

pub use local::LocalComponentSource;

/// A provider of component files. Implementations decide the transport;
/// the engine only sees [`ComponentFile`] records.
pub trait ComponentSource: Send + Sync {
    /// Names of all components, sorted.
    fn list_components(&self) -> Result<Vec<String>, SourceError>;

    /// Files of one component. Unreadable files are reported as non-fatal
    /// errors alongside the files that were read.
    fn component_files(&self, name: &str) -> Result<BatchResult<Vec<ComponentFile>>, SourceError>;

    /// Files of every component, in component order.
    fn all_files(&self) -> Result<BatchResult<Vec<ComponentFile>>, SourceError> {
        let mut out = BatchResult::new(Vec::new());
        for name in self.list_components()? {
            let batch = self.component_files(&name)?;
            out.data.extend(batch.data);
            out.errors.extend(batch.errors);
        }
        Ok(out)
    }
}
