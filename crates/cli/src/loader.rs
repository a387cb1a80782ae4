//! Signal file loading
//!
//! Signals are plain text files of whitespace-separated samples. A dataset
//! directory holds `sim/` (condition present) and `nao/` (condition absent)
//! subdirectories of `.txt` signals.

use std::fs;
use std::path::{Path, PathBuf};
use storage::{Label, SignalRepository, StorageError};
use thiserror::Error;
use tracing::{info, warn};

/// Subdirectory name and label for each class
pub const LABEL_DIRECTORIES: [(&str, Label); 2] = [("sim", Label::Present), ("nao", Label::Absent)];

/// Errors while reading signal files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid sample {token:?} at position {position}")]
    Parse { token: String, position: usize },
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Outcome of ingesting a dataset directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Parse whitespace-separated samples
pub fn parse_samples(text: &str) -> Result<Vec<f64>, LoadError> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f64>().map_err(|_| LoadError::Parse {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Read and parse one signal file
pub fn load_signal_file(path: &Path) -> Result<Vec<f64>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&text)
}

/// Load every `.txt` signal under `dir/sim` and `dir/nao` into `repo`.
///
/// Files are visited in filename order. Unreadable or unparsable files are
/// skipped with a warning; a missing class directory is only warned about.
pub fn ingest_directory(dir: &Path, repo: &SignalRepository) -> Result<IngestSummary, LoadError> {
    let mut summary = IngestSummary::default();

    for (subdir, label) in LABEL_DIRECTORIES {
        let class_dir = dir.join(subdir);
        if !class_dir.is_dir() {
            warn!(path = %class_dir.display(), "Class directory not found");
            continue;
        }

        for path in signal_files(&class_dir)? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match load_signal_file(&path) {
                Ok(samples) => {
                    repo.insert_signal(&name, label, samples)?;
                    summary.loaded += 1;
                    info!(name = %name, label = %label.as_char(), "Loaded signal");
                }
                Err(e) => {
                    summary.skipped += 1;
                    warn!(name = %name, error = %e, "Skipping signal file");
                }
            }
        }
    }

    Ok(summary)
}

/// `.txt` files in a directory, sorted by name
fn signal_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::SampleSource;

    #[test]
    fn test_parse_samples() {
        let samples = parse_samples("1.0 2.5\n-3\t4e2\n").unwrap();
        assert_eq!(samples, vec![1.0, 2.5, -3.0, 400.0]);
        assert!(parse_samples("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_position() {
        let err = parse_samples("1.0 abc 3.0").unwrap_err();
        assert!(matches!(err, LoadError::Parse { position: 1, ref token } if token == "abc"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_signal_file(Path::new("/nonexistent/signal.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_ingest_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sim")).unwrap();
        fs::create_dir(dir.path().join("nao")).unwrap();
        fs::write(dir.path().join("sim/b.txt"), "1 2 3 4").unwrap();
        fs::write(dir.path().join("sim/a.txt"), "4 3 2 1").unwrap();
        fs::write(dir.path().join("sim/notes.md"), "ignored").unwrap();
        fs::write(dir.path().join("nao/c.txt"), "1 x 3").unwrap();
        fs::write(dir.path().join("nao/d.txt"), "5 5 6").unwrap();

        let repo = SignalRepository::new();
        let summary = ingest_directory(dir.path(), &repo).unwrap();

        assert_eq!(summary, IngestSummary { loaded: 3, skipped: 1 });
        let names: Vec<String> = repo.list(None, 10).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "d.txt"]);
        assert_eq!(repo.get(3).unwrap().label, Label::Absent);
        assert_eq!(repo.fetch_samples(1).unwrap(), vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_missing_class_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nao")).unwrap();
        fs::write(dir.path().join("nao/x.txt"), "1 2").unwrap();

        let repo = SignalRepository::new();
        let summary = ingest_directory(dir.path(), &repo).unwrap();
        assert_eq!(summary.loaded, 1);
    }
}
