//! Version descriptor model
//!
//! A descriptor is a small JSON document bundled with every mod (the *local*
//! descriptor) or hosted online (the *master* descriptor):
//!
//! ```json
//! {
//!   "modName": "LazyLib",
//!   "masterVersionFile": "https://example.com/lazylib.version",
//!   "modThreadId": 5444,
//!   "modVersion": { "major": 2, "minor": 4, "patch": "b" }
//! }
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::version::error::ParseError;

/// Forum thread used when a descriptor doesn't name one
pub const DEFAULT_THREAD_ID: u32 = 177;

/// Name shown for local descriptors without a `modName`
pub const UNKNOWN_MOD_NAME: &str = "<unknown>";

const VERSION_FIELD: &str = "modVersion";
const MASTER_URL_FIELD: &str = "masterVersionFile";
const NAME_FIELD: &str = "modName";
const THREAD_ID_FIELD: &str = "modThreadId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DescriptorKind {
    Local,
    Master,
}

/// One version of one mod, parsed from a descriptor document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    major: u32,
    minor: u32,
    patch: String,
    name: Option<String>,
    master_url: Option<String>,
    thread_id: u32,
}

impl VersionInfo {
    /// Creates a bare version with no name or master URL attached
    pub fn new(major: u32, minor: u32, patch: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            patch: patch.into(),
            name: None,
            master_url: None,
            thread_id: DEFAULT_THREAD_ID,
        }
    }

    /// Parse a descriptor bundled with an installed mod.
    ///
    /// `masterVersionFile` is required; `modName` and `modThreadId` are optional.
    pub fn from_local(document: &Value) -> Result<Self, ParseError> {
        Self::parse(document, DescriptorKind::Local)
    }

    /// Parse a master descriptor fetched from `masterVersionFile`.
    ///
    /// Only the version numbers are read. Name and master URL stay empty even
    /// when the document carries them.
    pub fn from_master(document: &Value) -> Result<Self, ParseError> {
        Self::parse(document, DescriptorKind::Master)
    }

    fn parse(document: &Value, kind: DescriptorKind) -> Result<Self, ParseError> {
        let (name, master_url, thread_id) = match kind {
            DescriptorKind::Local => {
                let master_url = match document.get(MASTER_URL_FIELD) {
                    Some(Value::String(url)) => url.clone(),
                    Some(other) => {
                        return Err(ParseError::InvalidField {
                            field: MASTER_URL_FIELD,
                            reason: format!("expected a string, found {}", other),
                        });
                    }
                    None => return Err(ParseError::MissingField(MASTER_URL_FIELD)),
                };
                let name = document
                    .get(NAME_FIELD)
                    .and_then(coerce_string)
                    .unwrap_or_else(|| UNKNOWN_MOD_NAME.to_string());
                let thread_id = document
                    .get(THREAD_ID_FIELD)
                    .and_then(coerce_u32)
                    .unwrap_or(DEFAULT_THREAD_ID);

                (Some(name), Some(master_url), thread_id)
            }
            DescriptorKind::Master => (None, None, DEFAULT_THREAD_ID),
        };

        let version = version_object(document)?;

        let major = version.get("major").and_then(coerce_u32).unwrap_or(0);
        let minor = version.get("minor").and_then(coerce_u32).unwrap_or(0);
        let patch = match version.get("patch") {
            None | Some(Value::Null) => "0".to_string(),
            Some(value) => coerce_string(value).ok_or_else(|| ParseError::InvalidField {
                field: "patch",
                reason: format!("expected a string or number, found {}", value),
            })?,
        };

        Ok(Self {
            major,
            minor,
            patch,
            name,
            master_url,
            thread_id,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Mod name; always `None` for master descriptors
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Where the current master descriptor lives; local descriptors only
    pub fn master_url(&self) -> Option<&str> {
        self.master_url.as_deref()
    }

    pub fn thread_id(&self) -> u32 {
        self.thread_id
    }

    /// Forum thread URL for this mod
    pub fn thread_url(&self) -> String {
        format!(
            "http://fractalsoftworks.com/forum/index.php?topic={}.0",
            self.thread_id
        )
    }

    fn display_name(&self) -> &str {
        self.name().unwrap_or(UNKNOWN_MOD_NAME)
    }

    /// Orders by major, then minor, then patch.
    ///
    /// Patch is compared as case-insensitive text, so `"2"` sorts after `"10"`.
    pub fn version_cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then_with(|| cmp_ignore_case(&self.patch, &other.patch))
    }

    /// Returns true when `other` is a strictly newer version.
    ///
    /// A missing counterpart is never newer.
    pub fn is_older_than(&self, other: Option<&VersionInfo>) -> bool {
        let Some(other) = other else {
            return false;
        };

        debug!(
            "{}: {} vs {}",
            self.display_name(),
            self.version(),
            other.version()
        );

        self.version_cmp(other) == Ordering::Less
    }

    /// Human-readable version string.
    ///
    /// Examples:
    /// - (2, 0, "0") -> "2"
    /// - (2, 4, "0") -> "2.4"
    /// - (2, 4, "1") -> "2.4.1"
    /// - (2, 4, "b") -> "2.4b"
    pub fn version(&self) -> String {
        if self.patch == "0" {
            if self.minor == 0 {
                self.major.to_string()
            } else {
                format!("{}.{}", self.major, self.minor)
            }
        } else if self.patch.chars().all(|c| c.is_ascii_digit()) {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        } else {
            format!("{}.{}{}", self.major, self.minor, self.patch)
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.display_name(), self.version())
    }
}

fn version_object(document: &Value) -> Result<&Map<String, Value>, ParseError> {
    match document.get(VERSION_FIELD) {
        Some(Value::Object(version)) => Ok(version),
        Some(other) => Err(ParseError::InvalidField {
            field: VERSION_FIELD,
            reason: format!("expected an object, found {}", other),
        }),
        None => Err(ParseError::MissingField(VERSION_FIELD)),
    }
}

/// Lenient integer read: numbers are truncated, numeric strings are accepted
fn coerce_u32(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_finite() && number >= 0.0 && number <= f64::from(u32::MAX) {
        Some(number.trunc() as u32)
    } else {
        None
    }
}

/// Lenient string read: scalars are rendered as text, containers are rejected
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Folds one char to one char: upper case when that is a single char, then the
/// first char of its lower case
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}
