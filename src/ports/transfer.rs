use std::path::Path;

use crate::domain::AppError;

/// Boundary to the synchronous file-copy mechanism.
pub trait FileTransfer {
    /// Copy `source` to `destination`, blocking until the copy completes.
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), AppError>;
}
