use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::FileTransfer;

/// Fake transfer recording every copy, optionally failing at a fixed point.
#[derive(Debug, Default)]
pub struct RecordingTransfer {
    copies: RefCell<Vec<(PathBuf, PathBuf)>>,
    fail_at: Option<usize>,
}

impl RecordingTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the n-th copy (0-based); earlier copies succeed.
    pub fn failing_at(n: usize) -> Self {
        Self { copies: RefCell::default(), fail_at: Some(n) }
    }

    /// Every copy completed so far.
    pub fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.copies.borrow().clone()
    }
}

impl FileTransfer for RecordingTransfer {
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), AppError> {
        let index = self.copies.borrow().len();
        if self.fail_at == Some(index) {
            return Err(AppError::CopyFailure {
                src: source.display().to_string(),
                dst: destination.display().to_string(),
                details: "rejected by fake transfer".to_string(),
            });
        }

        self.copies.borrow_mut().push((source.to_path_buf(), destination.to_path_buf()));
        Ok(())
    }
}
