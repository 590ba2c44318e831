use std::env;
use std::path::PathBuf;

use crate::constants::envvars;

/// Loads `./.env`, then the file named by `A4B_ENV_FILE` if set.
///
/// Runs before the logger exists, so the loaded paths are returned for the
/// caller to report. Variables already set are never overridden.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(env_file) = env::var(envvars::ENV_FILE) {
        if dotenv::from_path(&env_file).is_ok() {
            loaded.push(PathBuf::from(env_file));
        }
    }
    loaded
}
