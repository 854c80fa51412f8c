//! Forwards `.env` entries to a Rust `build.rs` through cargo's build script
//! protocol, so `env!("KEY")` can bake them into the binary.
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
//!     let path = std::path::Path::new(&manifest_dir).join(".env");
//!     envdefs::cargo::emit_rustc_env(&path, Default::default(), &mut std::io::stdout()).unwrap();
//! }
//! ```

use crate::dotenv::{DotenvSyntax, read_entries};
use crate::error::LoadError;
use crate::logging::log_skipped_entry;
use crate::models::ConfigEntry;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Writes `cargo:rerun-if-changed` for `path` and one `cargo:rustc-env`
/// line per usable entry. Returns the entries that were emitted.
pub fn emit_rustc_env<W: Write>(
    path: &Path,
    syntax: DotenvSyntax,
    out: &mut W,
) -> Result<Vec<ConfigEntry>, LoadError> {
    // Before opening, so a missing file still reruns once it appears.
    writeln!(out, "cargo:rerun-if-changed={}", path.display()).map_err(LoadError::Output)?;

    let file = File::open(path).map_err(|error| LoadError::file(path, error))?;
    let mut emitted = Vec::new();

    for entry in read_entries(BufReader::new(file), path, syntax)? {
        if let Some(reason) = unrepresentable(&entry) {
            log_skipped_entry(&entry, reason);
            continue;
        }
        writeln!(out, "cargo:rustc-env={}={}", entry.key, entry.value)
            .map_err(LoadError::Output)?;
        emitted.push(entry);
    }

    Ok(emitted)
}

fn unrepresentable(entry: &ConfigEntry) -> Option<&'static str> {
    if entry.key.is_empty() {
        Some("empty key")
    } else if entry.key.contains(['\n', '\r']) || entry.value.contains(['\n', '\r']) {
        Some("cargo directives cannot span lines")
    } else {
        None
    }
}
