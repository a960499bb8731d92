pub mod check;
pub mod sample;
pub mod template;

use fieldcheck_core::errors::{FieldCheckError, Result};
use fieldcheck_core::template::Template;
use fieldcheck_core::Config;
use std::path::Path;

/// Load the explicit config file, or discover one in the working directory
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().map_err(|e| FieldCheckError::io(Path::new("."), &e))?;
            Config::discover(&cwd)
        }
    }
}

/// A `--template` flag wins over the configured template
pub fn resolve_template(flag: Option<&Path>, config: &Config) -> Result<Template> {
    match flag {
        Some(path) => Template::load(path),
        None => config.resolve_template(),
    }
}
