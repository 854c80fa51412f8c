use serde::Serialize;
use std::fmt;

/// One `KEY=VALUE` pair read from a dotenv file, quotes already stripped.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// A preprocessor `-DNAME=VALUE` definition as the build tool stores it.
///
/// `value` is kept in the tool's escaped form, e.g. `\"bar\"` for a dotenv
/// value `bar`, so the compiler sees `"bar"` after shell expansion.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MacroDefinition {
    pub name: String,
    pub value: String,
}

impl MacroDefinition {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Wraps a plain value so it survives stringification as a C string literal.
    pub fn string_literal(name: impl Into<String>, value: &str) -> Self {
        Self::new(name, format!("\\\"{}\\\"", value))
    }

    /// The value as the compiled code sees it, with one layer of `\"` escaping
    /// removed. Returns `None` when the value was not produced by
    /// [`MacroDefinition::string_literal`].
    pub fn literal_value(&self) -> Option<&str> {
        self.value.strip_prefix("\\\"")?.strip_suffix("\\\"")
    }

    pub fn compiler_flag(&self) -> String {
        format!("-D{}={}", self.name, self.value)
    }
}

impl From<ConfigEntry> for MacroDefinition {
    fn from(entry: ConfigEntry) -> Self {
        Self::string_literal(entry.key, &entry.value)
    }
}

/// Renders as a Python tuple repr, `('NAME', 'VALUE')`, backslashes doubled.
impl fmt::Display for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", quoted_repr(&self.name), quoted_repr(&self.value))
    }
}

/// Single quotes unless the text holds `'` and no `"`, like Python's `repr(str)`.
fn quoted_repr(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
