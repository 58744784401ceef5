use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::FileTransfer;

/// Copies member files by shelling out to `cp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCopier;

impl ShellCopier {
    pub fn new() -> Self {
        Self
    }

    fn failure(source: &Path, destination: &Path, details: String) -> AppError {
        AppError::CopyFailure {
            src: source.display().to_string(),
            dst: destination.display().to_string(),
            details,
        }
    }
}

impl FileTransfer for ShellCopier {
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), AppError> {
        let output = Command::new("cp")
            .arg(source)
            .arg(destination)
            .output()
            .map_err(|e| Self::failure(source, destination, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() { "Unknown error".to_string() } else { stderr };
            return Err(Self::failure(source, destination, details));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_an_existing_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("PRECTOT.202202.nc4");
        let destination = dir.path().join("PRECTOT.202203.nc4");
        fs::write(&source, b"payload").unwrap();

        ShellCopier::new().copy(&source, &destination).unwrap();

        assert_eq!(fs::read(&destination).unwrap(), b"payload");
    }

    #[test]
    fn missing_source_is_a_copy_failure() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("absent.nc4");
        let destination = dir.path().join("copy.nc4");

        let err = ShellCopier::new().copy(&source, &destination).unwrap_err();

        assert!(matches!(err, AppError::CopyFailure { ref src, .. } if src.contains("absent.nc4")));
        assert!(!destination.exists());
    }
}
