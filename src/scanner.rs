use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognized as fix request files.
pub const REQUEST_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Finds fix request files.
///
/// The input may be a single file, which is taken as-is whatever its extension, or a
/// directory, which is walked recursively for `.yaml`, `.yml` and `.json` files.
/// Hidden directories and `target` are skipped.
///
/// # Example
///
/// ```no_run
/// use docfill::scanner::RequestScanner;
/// use std::path::PathBuf;
///
/// let scanner = RequestScanner::new(PathBuf::from("./requests"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} request files", result.request_files.len());
/// ```
pub struct RequestScanner {
    root_path: PathBuf,
}

/// Result of a scan.
pub struct ScanResult {
    /// Request files in a stable, sorted order
    pub request_files: Vec<PathBuf>,
    /// Paths that could not be read while walking
    pub warnings: Vec<String>,
}

impl RequestScanner {
    /// Creates a scanner rooted at a file or directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Collects the request files under the root.
    ///
    /// Inaccessible entries are logged and reported as warnings; scanning continues past them.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path does not exist.
    pub fn scan(&self) -> Result<ScanResult> {
        let metadata = std::fs::metadata(&self.root_path)
            .with_context(|| format!("Input path does not exist: {}", self.root_path.display()))?;

        if metadata.is_file() {
            return Ok(ScanResult {
                request_files: vec![self.root_path.clone()],
                warnings: Vec::new(),
            });
        }

        let mut request_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                !file_name.starts_with('.') && file_name != "target"
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && is_request_file(path) {
                        debug!("Found request file: {}", path.display());
                        request_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult {
            request_files,
            warnings,
        })
    }
}

fn is_request_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| REQUEST_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(result: &ScanResult) -> Vec<String> {
        result
            .request_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_scan_finds_request_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("methods.yaml"), "[]").unwrap();
        fs::write(root.join("types.yml"), "[]").unwrap();
        fs::write(root.join("params.json"), "[]").unwrap();
        fs::write(root.join("readme.md"), "# README").unwrap();

        let result = RequestScanner::new(root.to_path_buf()).scan().unwrap();

        assert_eq!(file_names(&result), vec!["methods.yaml", "params.json", "types.yml"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("api/models")).unwrap();
        fs::write(root.join("api/service.yaml"), "[]").unwrap();
        fs::write(root.join("api/models/user.yaml"), "[]").unwrap();

        let result = RequestScanner::new(root.to_path_buf()).scan().unwrap();
        assert_eq!(result.request_files.len(), 2);
    }

    #[test]
    fn test_scan_skips_hidden_and_target_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join(".cache")).unwrap();
        fs::create_dir(root.join("target")).unwrap();
        fs::write(root.join(".cache/old.yaml"), "[]").unwrap();
        fs::write(root.join("target/out.json"), "[]").unwrap();
        fs::write(root.join("requests.yaml"), "[]").unwrap();

        let result = RequestScanner::new(root.to_path_buf()).scan().unwrap();
        assert_eq!(file_names(&result), vec!["requests.yaml"]);
    }

    #[test]
    fn test_scan_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("requests.txt");
        fs::write(&path, "[]").unwrap();

        let result = RequestScanner::new(path.clone()).scan().unwrap();
        assert_eq!(result.request_files, vec![path]);
    }

    #[test]
    fn test_scan_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = RequestScanner::new(temp_dir.path().join("absent")).scan();
        assert!(result.is_err());
    }
}
