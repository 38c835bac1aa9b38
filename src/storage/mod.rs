// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::profile::models::SectionKind;
use crate::utils::error::StorageError;

/// Mode requested for newly created output files.
pub const OUTPUT_FILE_MODE: u32 = 0o777;

pub const README_SUFFIX: &str = "readme.txt";

/// Writes output files next to the input profile, named `<base>.<suffix>`.
pub struct OutputWriter {
    dir: PathBuf,
    base_name: String,
}

impl OutputWriter {
    /// Derives the output directory and base name from the input profile path.
    /// `dir/client.ovpn` gives directory `dir` and base name `client`.
    pub fn for_input<P: AsRef<Path>>(input: P) -> Result<Self, StorageError> {
        let input = input.as_ref();

        let base_name = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| StorageError::InvalidPath(input.display().to_string()))?
            .to_string();

        let dir = match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self { dir, base_name })
    }

    /// File name (without directory) for the given suffix.
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}.{}", self.base_name, suffix)
    }

    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.dir.join(self.file_name(suffix))
    }

    /// Writes `content` to `<base>.<suffix>`, replacing any previous file.
    pub fn write_section_file(&self, suffix: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        let file_path = self.output_path(suffix);
        write_output_file(&file_path, content)?;
        tracing::debug!("Wrote {} bytes to {}", content.len(), file_path.display());
        Ok(file_path)
    }

    pub fn write_section(&self, kind: SectionKind, content: &[u8]) -> Result<PathBuf, StorageError> {
        self.write_section_file(kind.file_suffix(), content)
    }

    pub fn write_readme(&self, readme: &str) -> Result<PathBuf, StorageError> {
        self.write_section_file(README_SUFFIX, readme.as_bytes())
    }
}

fn write_output_file(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // Mode only applies when the file is created; the umask still applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    let mut file = options.open(path).map_err(StorageError::IoError)?;
    file.write_all(content).map_err(StorageError::IoError)?;
    Ok(())
}
