use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::Converter;
use crate::parsing::Pipeline;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(PathBuf),
}

/// Markdown files in `dir`, sorted. Subfolders are searched when
/// `recursive` is set.
pub fn scan_markdown_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, IoError> {
    validate_input_dir(dir)?;

    let mut files = Vec::new();
    scan_directory(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if recursive {
                scan_directory(&path, recursive, files)?;
            }
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_input_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidInputDir(path.to_path_buf()));
    }
    Ok(())
}

/// Read a file as a list of lines, without line endings.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Where the converted form of `input` goes.
///
/// Without an output root the file lands next to its source. With one, the
/// path relative to `input_root` is mirrored beneath it.
pub fn output_path(
    input: &Path,
    input_root: &Path,
    output_root: Option<&Path>,
    extension: &str,
) -> PathBuf {
    let target = match output_root {
        Some(root) => {
            let relative = input
                .strip_prefix(input_root)
                .ok()
                .map(Path::to_path_buf)
                .or_else(|| input.file_name().map(PathBuf::from))
                .unwrap_or_else(|| input.to_path_buf());
            root.join(relative)
        }
        None => input.to_path_buf(),
    };
    target.with_extension(extension)
}

/// Write `content` to `path`, creating parent folders as needed.
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Read, parse and render one file.
pub fn convert_file(
    path: &Path,
    converter: &dyn Converter,
    pipeline: &Pipeline,
    full: bool,
) -> Result<String, IoError> {
    let lines = read_lines(path)?;
    log::debug!("{}: {} lines", path.display(), lines.len());

    let dot = pipeline.parse_lines(lines);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}:\n{}", path.display(), dot.outline());
    }
    Ok(converter.convert(&dot, full))
}
