//! Adapters that move `.net` text between files and the (pure) conversion functions.
//!
//! The transducer itself never touches the file system; these helpers are used by the
//! binaries to materialize the input and to store the output.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// An error raised when a `.net` file cannot be read or written.
#[derive(Debug, Error)]
pub enum NetIoError {
    #[error("Cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the whole input file into a string.
pub fn load_input(path: &Path) -> Result<String, NetIoError> {
    let text = fs::read_to_string(path).map_err(|source| NetIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Loaded input.");
    Ok(text)
}

/// Write `text` into the file `suggested_name` inside `directory` and return the path
/// of the written file.
pub fn save_output(
    text: &str,
    directory: &Path,
    suggested_name: &str,
) -> Result<PathBuf, NetIoError> {
    let path = directory.join(suggested_name);
    save_output_to(text, &path)?;
    Ok(path)
}

/// Write `text` into exactly the given file.
pub fn save_output_to(text: &str, path: &Path) -> Result<(), NetIoError> {
    fs::write(path, text).map_err(|source| NetIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Saved output.");
    Ok(())
}

/// File name component of an input path, used as the hint for the output file name.
#[must_use]
pub fn input_filename(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionDirection::OlcaToHugin;
    use crate::{ConversionRequest, convert};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lib-io-net-dialect-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_and_save() {
        let dir = scratch_dir("load-save");
        let input_path = dir.join("model.net");
        fs::write(&input_path, "File generated in OLCATool\n\nnode A {\n  states(a, b);\n}")
            .unwrap();

        let text = load_input(&input_path).unwrap();
        let request = ConversionRequest::new(text, OlcaToHugin)
            .with_filename(input_filename(&input_path).unwrap());
        let response = request.run();

        let saved = save_output(&response.text, &dir, &response.suggested_filename).unwrap();
        assert_eq!(saved, dir.join("OLCA2Hugin-model.net"));
        assert_eq!(
            fs::read_to_string(&saved).unwrap(),
            convert(&request.text, OlcaToHugin)
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let dir = scratch_dir("missing");
        let path = dir.join("does-not-exist.net");
        let error = load_input(&path).unwrap_err();
        assert!(matches!(error, NetIoError::Read { .. }));
        assert!(error.to_string().starts_with("Cannot read `"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = scratch_dir("write-missing").join("no-such-dir");
        let error = save_output("x", &dir, "out.net").unwrap_err();
        assert!(matches!(error, NetIoError::Write { .. }));
    }

    #[test]
    fn test_input_filename() {
        assert_eq!(
            input_filename(Path::new("/tmp/models/a.net")),
            Some("a.net".to_string())
        );
        assert_eq!(input_filename(Path::new("/")), None);
    }
}
