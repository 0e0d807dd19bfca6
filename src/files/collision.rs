//! Run-scoped collision resolution for export paths.
//!
//! Every path handed out during one export run is recorded in a
//! [`SeenPaths`] arena. A name that was already issued gets a numeric
//! disambiguator before its extension: `README.md`, `README-2.md`,
//! `README-3.md`, ...

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::filename::{
    fit_extension, split_extension, truncate_chars, DEFAULT_EXTENSION, MAX_FILENAME_LENGTH,
};

/// Upper bound on disambiguation attempts for a single name.
pub const MAX_DISAMBIGUATION_ATTEMPTS: usize = 10_000;

/// First numeric suffix tried after the bare name.
const FIRST_SUFFIX: usize = 2;

/// A unique destination for one exported block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportPath {
    pub directory: PathBuf,
    pub filename: String,
}

impl ExportPath {
    /// Full path of the file (`directory/filename`).
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

impl fmt::Display for ExportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Error when no free name is found within the attempt bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No unique name for '{filename}' in {} after {attempts} attempts", .directory.display())]
pub struct CollisionExhausted {
    pub directory: PathBuf,
    pub filename: String,
    pub attempts: usize,
}

/// Paths already issued during one export run.
///
/// Owned by a single run and passed by reference to [`make_unique`];
/// separate runs never share one.
#[derive(Debug, Default)]
pub struct SeenPaths {
    paths: HashSet<PathBuf>,
}

impl SeenPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `directory/filename` was already issued.
    pub fn contains(&self, directory: &Path, filename: &str) -> bool {
        self.paths.contains(&directory.join(filename))
    }

    /// Number of issued paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn insert(&mut self, directory: &Path, filename: &str) -> bool {
        self.paths.insert(directory.join(filename))
    }
}

/// Returns a path for `filename` in `directory` that no earlier call in
/// this run has returned, and records it in `seen`.
pub fn make_unique(
    directory: &Path,
    filename: &str,
    seen: &mut SeenPaths,
) -> Result<ExportPath, CollisionExhausted> {
    make_unique_bounded(directory, filename, seen, MAX_DISAMBIGUATION_ATTEMPTS)
}

/// Same as [`make_unique`] with an explicit attempt bound.
pub fn make_unique_bounded(
    directory: &Path,
    filename: &str,
    seen: &mut SeenPaths,
    max_attempts: usize,
) -> Result<ExportPath, CollisionExhausted> {
    let found = std::iter::once(filename.to_string())
        .chain(disambiguated_names(filename))
        .take(max_attempts)
        .find(|candidate| !seen.contains(directory, candidate));

    match found {
        Some(name) => {
            seen.insert(directory, &name);
            Ok(ExportPath {
                directory: directory.to_path_buf(),
                filename: name,
            })
        }
        None => Err(CollisionExhausted {
            directory: directory.to_path_buf(),
            filename: filename.to_string(),
            attempts: max_attempts,
        }),
    }
}

/// Lazy sequence of `stem-N.ext` names for N = 2, 3, ...
///
/// The stem is shortened when needed so each name stays within
/// [`MAX_FILENAME_LENGTH`]. If the extension leaves no room for even one
/// stem character, the extension is cut too.
fn disambiguated_names(filename: &str) -> impl Iterator<Item = String> + '_ {
    let (stem, ext) = match split_extension(filename) {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (filename, None),
    };

    (FIRST_SUFFIX..).map(move |n| {
        let suffix = format!("-{}", n);
        match ext {
            Some(ext) => {
                let budget = MAX_FILENAME_LENGTH.saturating_sub(suffix.len() + ext.len() + 1);
                let stem = truncate_chars(stem, budget.max(1));
                let room = MAX_FILENAME_LENGTH.saturating_sub(stem.len() + suffix.len() + 1);
                let ext = fit_extension(ext, room, DEFAULT_EXTENSION);
                format!("{}{}.{}", stem, suffix, ext)
            }
            None => {
                let budget = MAX_FILENAME_LENGTH.saturating_sub(suffix.len());
                format!("{}{}", truncate_chars(stem, budget.max(1)), suffix)
            }
        }
    })
}
