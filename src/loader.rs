use crate::build_env::BuildEnvironment;
use crate::config::{DIAGNOSTIC_DEFINE_INDEX, TEST_MACROS};
use crate::dotenv::{DotenvSyntax, entries};
use crate::error::LoadError;
use crate::logging::{log_defines_summary, log_dotenv_opened, log_entry_applied};
use crate::models::MacroDefinition;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Pre-build hook: dumps the environment, then loads `<PROJECT_DIR>/.env`.
pub fn run_pre_build_hook<W: Write>(
    env: &mut BuildEnvironment,
    syntax: DotenvSyntax,
    out: &mut W,
) -> Result<(), LoadError> {
    writeln!(out, "{}", env.dump()?).map_err(LoadError::Output)?;
    load_dotenv(env, syntax, out)
}

/// Appends one definition per `.env` entry, then the fixed test macros, and
/// echoes definition #4.
pub fn load_dotenv<W: Write>(
    env: &mut BuildEnvironment,
    syntax: DotenvSyntax,
    out: &mut W,
) -> Result<(), LoadError> {
    let path = env.dotenv_path()?;
    load_dotenv_from(env, &path, syntax, out)
}

pub fn load_dotenv_from<W: Write>(
    env: &mut BuildEnvironment,
    path: &Path,
    syntax: DotenvSyntax,
    out: &mut W,
) -> Result<(), LoadError> {
    let file = File::open(path).map_err(|error| LoadError::file(path, error))?;
    log_dotenv_opened(path);
    load_dotenv_reader(env, BufReader::new(file), path, syntax, out)
}

/// Same as [`load_dotenv_from`] over an already opened source. `path` only
/// labels errors.
pub fn load_dotenv_reader<R: BufRead, W: Write>(
    env: &mut BuildEnvironment,
    reader: R,
    path: &Path,
    syntax: DotenvSyntax,
    out: &mut W,
) -> Result<(), LoadError> {
    for entry in entries(reader, path, syntax) {
        let entry = entry?;
        writeln!(out, "Setting {} to {}", entry.key, entry.value).map_err(LoadError::Output)?;
        log_entry_applied(&entry);
        env.append_defines([MacroDefinition::from(entry)]);
    }

    env.append_defines(
        TEST_MACROS
            .iter()
            .map(|(name, value)| MacroDefinition::new(*name, *value)),
    );

    let define = env.define(DIAGNOSTIC_DEFINE_INDEX)?;
    writeln!(out, "{}", define).map_err(LoadError::Output)?;
    log_defines_summary(env.cpp_defines());

    Ok(())
}
