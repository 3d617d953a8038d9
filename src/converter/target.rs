//! Classifying the path the user asked to convert

use crate::utils::error::IcoForgeError;
use crate::utils::naming::normalize_path_input;
use std::path::PathBuf;

/// What a user-supplied path points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// Normalize raw input and classify it.
///
/// The check is a snapshot: the path may change before it is opened.
pub fn resolve_target(raw: &str) -> Result<Target, IcoForgeError> {
    let path = PathBuf::from(normalize_path_input(raw));
    if path.is_file() {
        Ok(Target::File(path))
    } else if path.is_dir() {
        Ok(Target::Directory(path))
    } else {
        Err(IcoForgeError::PathNotFound(path))
    }
}
