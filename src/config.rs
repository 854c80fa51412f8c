pub(crate) const DOTENV_FILE_NAME: &str = ".env";
pub(crate) const PROJECT_DIR_KEY: &str = "PROJECT_DIR";
pub(crate) const CARGO_MANIFEST_DIR_KEY: &str = "CARGO_MANIFEST_DIR";

// The only process variables copied into a build environment.
pub(crate) const SEEDED_VARS: [&str; 2] = [PROJECT_DIR_KEY, CARGO_MANIFEST_DIR_KEY];

/// Position in `CPPDEFINES` echoed after loading, a leftover sanity check the
/// build hook has always printed.
pub(crate) const DIAGNOSTIC_DEFINE_INDEX: usize = 4;

// Each entry embeds the same literal with a different escaping style.
pub(crate) const TEST_MACROS: [(&str, &str); 4] = [
    ("TEST_MACRO", r#""test_macro""#),
    ("TEST_MACRO1", r#""\"test_macro"\""#),
    ("TEST_MACRO2", r#"\"test_macro\""#),
    ("TEST_MACRO3", r#""test_macro""#),
];

pub(crate) const LOG_LEVEL_ENV: &str = "ENVDEFS_LOG";
pub(crate) const SYNTAX_ENV: &str = "ENVDEFS_SYNTAX";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

pub(crate) const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const TIMEZONE: &str = "UTC";
