use std::io;
use std::path::{Component, Path, PathBuf};

/// Errors that can occur during site path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside site root '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Path '{path}' must be relative to the site root")]
    NotRelative { path: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Resolves a site-relative path against the site root.
///
/// This function performs the following checks:
/// 1. Rejects absolute paths and any `..` component up front
/// 2. Canonicalizes the joined path to resolve symlinks
/// 3. Ensures the canonical path is still within the canonical root
///
/// # Arguments
///
/// * `root` - The site root directory
/// * `relative` - A path such as `tools/calculator.html`
///
/// # Returns
///
/// * `Ok(PathBuf)` - The canonicalized, validated path
/// * `Err(PathSecurityError)` - If validation fails
///
/// # Examples
///
/// ```rust,ignore
/// let file = validate_site_path(Path::new("/srv/site"), "tools/calculator.html")?;
/// ```
pub fn validate_site_path(root: &Path, relative: &str) -> Result<PathBuf, PathSecurityError> {
    let rel = Path::new(relative.trim_start_matches("./"));

    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(PathSecurityError::NotRelative {
            path: rel.to_path_buf(),
        });
    }

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.to_path_buf(),
        error: e,
    })?;

    let joined = canonical_root.join(rel);

    if !joined.exists() {
        return Err(PathSecurityError::PathNotFound { path: joined });
    }

    let canonical_path = joined
        .canonicalize()
        .map_err(|e| PathSecurityError::CannotCanonicalize {
            path: joined.clone(),
            error: e,
        })?;

    // A symlink inside the site may still point elsewhere
    if !is_within_root(&canonical_path, &canonical_root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}

/// Checks if a path is within (or equal to) a root directory
fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
