//! Typed, read-only access to process environment variables
//!
//! [`Environment`] snapshots the process environment once and answers
//! lookups from that snapshot, so reads stay consistent for the life
//! of the value. Raw strings come back as [`Value`], which carries the
//! coercion rules (truthy flags, zero-fallback numbers). For
//! configuration surfaces, declare a static table of [`Setting`]
//! descriptors and read it through [`Settings`].

// Standard library
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// External crates
use tracing::{debug, trace};

/// Name fragments marking a variable as sensitive for logging.
const SENSITIVE_MARKERS: &[&str] = &["password", "secret", "token", "key", "credential"];

static SHARED: LazyLock<Environment> = LazyLock::new(Environment::new);

/// The process arguments, program name first.
#[must_use]
pub fn arguments() -> Vec<String> {
    std::env::args().collect()
}

fn is_sensitive(name: &str) -> bool {
    let lowered = name.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// A read-only snapshot of the process environment.
///
/// Lookups through [`get`](Environment::get) qualify the key with the
/// configured prefix and uppercase it, so `with_prefix("app")` turns
/// `get("timeout")` into a lookup of `APP_TIMEOUT`. Use
/// [`raw`](Environment::raw) to bypass qualification, and
/// [`from_vars`](Environment::from_vars) to build a snapshot from
/// explicit pairs in tests.
///
/// # Examples
///
/// ```
/// use kitbag::Environment;
///
/// let environment = Environment::from_vars([
///     ("APP_VERBOSE".to_owned(), "true".to_owned()),
/// ])
/// .with_prefix("app");
///
/// assert!(environment.get("verbose").is_some_and(|value| value.to_flag()));
/// ```
#[derive(Clone)]
pub struct Environment {
    prefix: Option<String>,
    log_sensitive: bool,
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// The process-wide snapshot, taken on first access.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Build a snapshot from explicit pairs instead of the process
    /// environment.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            prefix: None,
            log_sensitive: false,
            vars: vars.into_iter().collect(),
        }
    }

    /// Qualify subsequent [`get`](Environment::get) lookups with
    /// `prefix`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Log sensitive values verbatim instead of redacting them.
    #[must_use]
    pub fn with_log_sensitive(mut self, log_sensitive: bool) -> Self {
        self.log_sensitive = log_sensitive;
        self
    }

    /// The configured lookup prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn qualified(&self, key: &str) -> String {
        let name = match &self.prefix {
            Some(prefix) => format!("{prefix}_{key}"),
            None => key.to_owned(),
        };
        name.to_uppercase()
    }

    /// Look up a variable by its exact name, without qualification.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up the qualified variable and wrap it for coercion.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let name = self.qualified(key);
        match self.vars.get(&name) {
            Some(raw) => {
                if self.log_sensitive || !is_sensitive(&name) {
                    trace!(name = %name, value = %raw, "environment variable read");
                } else {
                    trace!(name = %name, value = "[REDACTED]", "environment variable read");
                }
                Some(Value::new(raw.clone()))
            }
            None => {
                debug!(name = %name, "environment variable not set");
                None
            }
        }
    }

    /// Whether the qualified variable is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(&self.qualified(key))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Values stay out of Debug output to keep secrets out of logs.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("prefix", &self.prefix)
            .field("vars", &self.vars.len())
            .finish_non_exhaustive()
    }
}

/// A raw environment value with typed coercions.
///
/// Coercions never fail: flags fall back to `false`, numbers to zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    /// Wrap a raw string value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Coerce to a boolean. Exactly `"1"`, `"true"`, and `"YES"` are
    /// true; everything else, other casings included, is false.
    #[must_use]
    pub fn to_flag(&self) -> bool {
        matches!(self.0.as_str(), "1" | "true" | "YES")
    }

    /// Coerce to an integer, falling back to `0` on parse failure.
    #[must_use]
    pub fn to_integer(&self) -> i64 {
        self.0.parse().unwrap_or_default()
    }

    /// Coerce to a float, falling back to `0.0` on parse failure.
    #[must_use]
    pub fn to_float(&self) -> f64 {
        self.0.parse().unwrap_or_default()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The coercion applied to a setting's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Keep the raw string.
    Text,
    /// Coerce with [`Value::to_flag`].
    Flag,
    /// Coerce with [`Value::to_integer`].
    Integer,
    /// Coerce with [`Value::to_float`].
    Float,
}

impl Kind {
    /// Apply this coercion to a raw value.
    #[must_use]
    pub fn coerce(self, value: &Value) -> Typed {
        match self {
            Self::Text => Typed::Text(value.as_str().to_owned()),
            Self::Flag => Typed::Flag(value.to_flag()),
            Self::Integer => Typed::Integer(value.to_integer()),
            Self::Float => Typed::Float(value.to_float()),
        }
    }
}

/// A coerced setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum Typed {
    /// A raw string value.
    Text(String),
    /// A boolean value.
    Flag(bool),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
}

impl Typed {
    /// The string value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The boolean value, if this is a flag.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    /// The float value, if this is a float.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }
}

/// One entry in a configuration table: a stable option name, the
/// environment key it reads, and the coercion to apply.
///
/// Declare tables as constants:
///
/// ```
/// use kitbag::{Kind, Setting};
///
/// const SETTINGS: &[Setting] = &[
///     Setting::flag("verbose", "VERBOSE"),
///     Setting::integer("timeout", "TIMEOUT_SECS"),
/// ];
///
/// assert_eq!(SETTINGS[0].kind(), Kind::Flag);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Setting {
    name: &'static str,
    key: &'static str,
    kind: Kind,
}

impl Setting {
    /// Declare a setting with an explicit coercion.
    #[must_use]
    pub const fn new(name: &'static str, key: &'static str, kind: Kind) -> Self {
        Self { name, key, kind }
    }

    /// Declare a text setting.
    #[must_use]
    pub const fn text(name: &'static str, key: &'static str) -> Self {
        Self::new(name, key, Kind::Text)
    }

    /// Declare a boolean setting.
    #[must_use]
    pub const fn flag(name: &'static str, key: &'static str) -> Self {
        Self::new(name, key, Kind::Flag)
    }

    /// Declare an integer setting.
    #[must_use]
    pub const fn integer(name: &'static str, key: &'static str) -> Self {
        Self::new(name, key, Kind::Integer)
    }

    /// Declare a float setting.
    #[must_use]
    pub const fn float(name: &'static str, key: &'static str) -> Self {
        Self::new(name, key, Kind::Float)
    }

    /// The stable option name used for lookups.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The environment key this setting reads.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// The coercion applied to the raw value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }
}

/// A configuration table bound to an environment snapshot.
///
/// Lookups go by option name: the table supplies the environment key
/// and coercion. Typed accessors fall back to the type's zero value
/// when the option is unset or not of that kind.
#[derive(Debug, Clone)]
pub struct Settings {
    environment: Environment,
    table: &'static [Setting],
}

impl Settings {
    /// Bind a table of settings to an environment snapshot.
    #[must_use]
    pub const fn new(environment: Environment, table: &'static [Setting]) -> Self {
        Self { environment, table }
    }

    fn descriptor(&self, name: &str) -> Option<&Setting> {
        self.table.iter().find(|setting| setting.name == name)
    }

    /// Read and coerce the named option.
    ///
    /// Returns `None` when the name is not in the table or the
    /// variable is unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Typed> {
        let setting = self.descriptor(name)?;
        let value = self.environment.get(setting.key)?;
        Some(setting.kind.coerce(&value))
    }

    /// The named text option, if set.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Typed::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The named flag, or `false` when unset.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name)
            .and_then(|typed| typed.as_flag())
            .unwrap_or_default()
    }

    /// The named integer, or `0` when unset.
    #[must_use]
    pub fn integer(&self, name: &str) -> i64 {
        self.get(name)
            .and_then(|typed| typed.as_integer())
            .unwrap_or_default()
    }

    /// The named float, or `0.0` when unset.
    #[must_use]
    pub fn float(&self, name: &str) -> f64 {
        self.get(name)
            .and_then(|typed| typed.as_float())
            .unwrap_or_default()
    }
}
