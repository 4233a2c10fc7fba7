//! Environment/runtime helpers

use std::path::PathBuf;

/// Load `.env` from the working directory or its parents, if any.
/// Returns the file that was loaded; a missing file is not an error.
///
/// Runs before logging is set up, so callers log the returned path themselves.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
