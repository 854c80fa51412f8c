//! Loads a project's `.env` file into a build environment as preprocessor
//! definitions, for use from a pre-build hook or a `build.rs`.

use std::env::VarError;

pub mod build_env;
pub mod cargo;
mod config;
pub mod dotenv;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
mod time_utils;

pub use build_env::BuildEnvironment;
pub use dotenv::DotenvSyntax;
pub use error::LoadError;
pub use loader::{load_dotenv, load_dotenv_from, load_dotenv_reader, run_pre_build_hook};
pub use models::{ConfigEntry, MacroDefinition};

/// Syntax requested through `ENVDEFS_SYNTAX`. Unset means the default;
/// `None` when the value is not recognised or not valid Unicode.
pub fn syntax_from_env() -> Option<DotenvSyntax> {
    match std::env::var(config::SYNTAX_ENV) {
        Ok(name) => DotenvSyntax::from_name(&name),
        Err(VarError::NotPresent) => Some(DotenvSyntax::default()),
        Err(VarError::NotUnicode(_)) => None,
    }
}
