use crate::config::{CARGO_MANIFEST_DIR_KEY, DOTENV_FILE_NAME, PROJECT_DIR_KEY, SEEDED_VARS};
use crate::error::LoadError;
use crate::models::MacroDefinition;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Per-build configuration: construction variables plus the append-only
/// `CPPDEFINES` list handed to the compiler.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
    #[serde(rename = "VARIABLES")]
    vars: BTreeMap<String, String>,
    #[serde(rename = "CPPDEFINES")]
    cpp_defines: Vec<MacroDefinition>,
}

impl BuildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Self::new();
        env.set(PROJECT_DIR_KEY, dir.as_ref().to_string_lossy());
        env
    }

    /// Seeds `PROJECT_DIR` and `CARGO_MANIFEST_DIR` from the process
    /// environment. Nothing else is imported, the dump would echo it.
    pub fn from_process_env() -> Self {
        Self::from_lookup(
            |key| std::env::var_os(key).map(|value| value.to_string_lossy().into_owned()),
            std::env::current_dir().ok(),
        )
    }

    /// `PROJECT_DIR` falls back to `CARGO_MANIFEST_DIR`, then to `current_dir`.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        current_dir: Option<PathBuf>,
    ) -> Self {
        let mut env = Self::new();
        for key in SEEDED_VARS {
            if let Some(value) = lookup(key) {
                env.set(key, value);
            }
        }

        if env.get(PROJECT_DIR_KEY).is_none() {
            let fallback = env
                .get(CARGO_MANIFEST_DIR_KEY)
                .map(PathBuf::from)
                .or(current_dir);

            if let Some(dir) = fallback {
                debug!("{} not set, using {}", PROJECT_DIR_KEY, dir.display());
                env.set(PROJECT_DIR_KEY, dir.to_string_lossy());
            }
        }

        env
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn project_dir(&self) -> Result<&Path, LoadError> {
        self.get(PROJECT_DIR_KEY)
            .map(Path::new)
            .ok_or_else(|| LoadError::MissingVariable(PROJECT_DIR_KEY.to_string()))
    }

    /// `<PROJECT_DIR>/.env`, the directory is not checked.
    pub fn dotenv_path(&self) -> Result<PathBuf, LoadError> {
        Ok(self.project_dir()?.join(DOTENV_FILE_NAME))
    }

    pub fn append_defines(&mut self, defines: impl IntoIterator<Item = MacroDefinition>) {
        self.cpp_defines.extend(defines);
    }

    pub fn cpp_defines(&self) -> &[MacroDefinition] {
        &self.cpp_defines
    }

    pub fn define(&self, index: usize) -> Result<&MacroDefinition, LoadError> {
        self.cpp_defines.get(index).ok_or(LoadError::Index {
            index,
            len: self.cpp_defines.len(),
        })
    }

    pub fn dump(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn compiler_flags(&self) -> Vec<String> {
        self.cpp_defines
            .iter()
            .map(MacroDefinition::compiler_flag)
            .collect()
    }
}
