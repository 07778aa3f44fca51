use std::path::{Path, PathBuf};

/// Two-patient store used across handler and store tests
pub const SCENARIO: &str = r#"{
    "P001": {"name": "john", "height": 170, "weight": 70, "bmi": 24.2},
    "P002": {"name": "jane", "height": 160, "weight": 55, "bmi": 21.5}
}"#;

/// Patients file under the system temp dir, removed when dropped
pub struct TempPatientsFile {
    path: PathBuf,
}

impl TempPatientsFile {
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempPatientsFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Write `contents` to a fresh temp file
pub fn write_patients_file(contents: &str) -> TempPatientsFile {
    let path = std::env::temp_dir().join(format!("patients-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Failed to write test patients file");
    TempPatientsFile { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_removed_on_drop() {
        let file = write_patients_file("{}");
        let path = file.path();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_file_removed_on_panic() {
        let path = std::panic::catch_unwind(|| {
            let file = write_patients_file("{}");
            let path = file.path();
            std::panic::panic_any(path);
        })
        .unwrap_err()
        .downcast::<PathBuf>()
        .unwrap();

        assert!(!path.exists());
    }
}
