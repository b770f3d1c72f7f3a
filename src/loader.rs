use crate::error::{Error, Result};
use crate::fixer::FixRequest;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads fix request files.
///
/// A request file holds a list of [`FixRequest`]s, as a JSON array for `.json` files and
/// as a YAML sequence otherwise.
///
/// # Example
///
/// ```no_run
/// use docfill::loader::RequestLoader;
/// use std::path::Path;
///
/// let loaded = RequestLoader::load_file(Path::new("requests/methods.yaml")).unwrap();
/// println!("Loaded {} requests", loaded.requests.len());
/// ```
pub struct RequestLoader;

/// The requests read from one file.
#[derive(Debug)]
pub struct LoadedFile {
    /// Path to the request file
    pub path: PathBuf,
    /// Requests in file order
    pub requests: Vec<FixRequest>,
}

impl RequestLoader {
    /// Loads the requests in a single file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a YAML or JSON request file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`] if it does
    /// not hold a list of requests.
    pub fn load_file(path: &Path) -> Result<LoadedFile> {
        debug!("Loading requests from {}", path.display());

        let content = fs::read_to_string(path)?;

        let parsed = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        let requests: Vec<FixRequest> = parsed.map_err(|message| Error::Parse {
            file: path.to_path_buf(),
            message,
        })?;

        debug!("Loaded {} requests from {}", requests.len(), path.display());

        Ok(LoadedFile {
            path: path.to_path_buf(),
            requests,
        })
    }

    /// Loads several request files, continuing past files that fail.
    ///
    /// # Returns
    ///
    /// One result per input path, in input order. Failures are also logged as warnings.
    pub fn load_files(paths: &[PathBuf]) -> Vec<Result<LoadedFile>> {
        debug!("Loading {} request files", paths.len());

        let results: Vec<Result<LoadedFile>> = paths
            .iter()
            .map(|path| {
                Self::load_file(path).inspect_err(|e| {
                    warn!("Failed to load {}: {}", path.display(), e);
                })
            })
            .collect();

        let success_count = results.iter().filter(|r| r.is_ok()).count();
        debug!(
            "Loading complete: {} succeeded, {} failed",
            success_count,
            results.len() - success_count
        );

        results
    }
}
