use crate::config::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use crate::models::{ConfigEntry, MacroDefinition};
use crate::time_utils::{get_formatted_timestamp, get_uptime_string};
use log::{error, info, warn};
use std::path::Path;

const SPLASH_SCREEN: &str = r#"
  ___ _ ___   ____| |___ / _|___
 / -_) ' \ V / _` / -_)  _(_-<
 \___|_||_\_/\__,_\___|_| /__/"#;

pub(crate) enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Installs `env_logger` on stderr, level from `ENVDEFS_LOG`. Stdout is left
/// to the hook's own output.
pub fn init() {
    crate::time_utils::mark_start();
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

pub fn print_splash_screen() {
    info!("{}", SPLASH_SCREEN);
}

pub(crate) fn log_dotenv_opened(path: &Path) {
    log_message(
        LogLevel::Info,
        &format!("📄 Reading definitions from {}", path.display()),
    );
}

pub(crate) fn log_entry_applied(entry: &ConfigEntry) {
    log_message(LogLevel::Info, &format!("🔧 Defined {}", entry.key));
}

pub(crate) fn log_defines_summary(defines: &[MacroDefinition]) {
    log_message(
        LogLevel::Info,
        &format!("✅ {} macro definitions in build environment", defines.len()),
    );
}

pub(crate) fn log_skipped_entry(entry: &ConfigEntry, reason: &str) {
    log_message(
        LogLevel::Warn,
        &format!("⚠️ Skipping {:?}: {}", entry.key, reason),
    );
}

pub fn log_load_error(error: &dyn std::error::Error) {
    log_message(LogLevel::Error, &format!("🚫 {}", error));
}

fn log_message(level: LogLevel, message: &str) {
    let prefix = format!("{} [{}]", get_uptime_string(), get_formatted_timestamp());

    match level {
        LogLevel::Error => error!("\x1b[31m{} {}\x1b[0m", prefix, message),
        LogLevel::Warn => warn!("\x1b[38;5;11m{} {}\x1b[0m", prefix, message),
        LogLevel::Info => info!("\x1b[38;5;40m{} {}\x1b[0m", prefix, message),
    }
}
