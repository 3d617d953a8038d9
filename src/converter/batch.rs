//! Folder conversion building blocks: file filter, destination folder, summary

use crate::converter::single::{format_sizes, ConversionResult};
use crate::utils::error::{ConversionError, IcoForgeError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Which files of a folder take part in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// `.*`: every regular file
    Any,
    /// Lowercased extension including its leading dot
    Suffix(String),
}

impl ExtensionFilter {
    /// Parse a user-entered extension.
    ///
    /// Input is trimmed; empty input is rejected. A missing leading dot is
    /// added, so `png`, `.png` and `.PNG` are equivalent and `*` means `.*`.
    pub fn parse(input: &str) -> Result<Self, IcoForgeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(IcoForgeError::InvalidExtension(input.to_string()));
        }

        let ext = if trimmed.starts_with('.') {
            trimmed.to_string()
        } else {
            format!(".{}", trimmed)
        };

        if ext == ".*" {
            Ok(ExtensionFilter::Any)
        } else {
            Ok(ExtensionFilter::Suffix(ext.to_lowercase()))
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::Any => true,
            ExtensionFilter::Suffix(ext) => file_name.to_lowercase().ends_with(ext.as_str()),
        }
    }
}

impl FromStr for ExtensionFilter {
    type Err = IcoForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionFilter::Any => f.write_str(".*"),
            ExtensionFilter::Suffix(ext) => f.write_str(ext),
        }
    }
}

/// Create `<folder>/<base>`, or `<base>1`, `<base>2`, ... if taken.
///
/// Name collisions are resolved by counting up; any other failure to
/// create the folder is a [`IcoForgeError::DirectoryAllocation`].
pub fn allocate_destination(folder: &Path, base: &str) -> Result<PathBuf, IcoForgeError> {
    let mut counter: u64 = 0;
    loop {
        let name = if counter == 0 {
            base.to_string()
        } else {
            format!("{}{}", base, counter)
        };
        let candidate = folder.join(name);

        match fs::create_dir(&candidate) {
            Ok(()) => {
                info!("Created result folder {:?}", candidate);
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{:?} already exists, trying next name", candidate);
                counter += 1;
            }
            Err(source) => {
                return Err(IcoForgeError::DirectoryAllocation {
                    path: candidate,
                    source,
                })
            }
        }
    }
}

/// Regular files directly inside `folder` that pass `filter`, sorted by name
pub fn collect_sources(folder: &Path, filter: &ExtensionFilter) -> Result<Vec<PathBuf>, IcoForgeError> {
    let unreadable = |source: io::Error| IcoForgeError::FolderUnreadable {
        path: folder.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(folder).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        // Follows symlinks, so a link to a regular file qualifies
        if !path.is_file() {
            continue;
        }
        if filter.matches(&entry.file_name().to_string_lossy()) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Result of one file within a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub result: Result<ConversionResult, ConversionError>,
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(done) => write!(
                f,
                "'{}' ------ OK   {}",
                self.source.display(),
                format_sizes(&done.sizes)
            ),
            Err(e) => write!(f, "'{}' ------ ERROR:   {}", self.source.display(), e),
        }
    }
}

/// Totals of a finished batch
#[derive(Debug)]
pub struct BatchSummary {
    pub destination: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result folder: {}", self.destination.display())?;
        writeln!(f, "Success: {}", self.success_count())?;
        write!(f, "Errors: {}", self.error_count())
    }
}
