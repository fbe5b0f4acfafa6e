// Base Extractor Types for Classdoc
//
// All data structures produced by class documentation extraction:
// class metadata, method and property records, the aggregate model,
// configuration, and the structured diagnostics sink.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description used whenever a class, method or property has no documentation
pub const UNDOCUMENTED: &str = "Undocumented";

/// Category assigned to members without an `@category` tag
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Configuration for a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Try to re-synthesize a single class snippet when the full parse fails
    pub recover: bool,
    /// Capture the dedented source text of every method
    pub include_source: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            recover: true,
            include_source: true,
        }
    }
}

/// Class-level metadata. Exactly one per extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub class_name: String,
    pub extends_name: String,
    /// Opaque label supplied by the caller, carried through unmodified
    pub source_path: String,
    /// Escaped prose; never empty (falls back to [`UNDOCUMENTED`])
    pub description: String,
}

impl ClassInfo {
    pub fn new(source_path: &str) -> Self {
        Self {
            class_name: String::new(),
            extends_name: String::new(),
            source_path: source_path.to_string(),
            description: UNDOCUMENTED.to_string(),
        }
    }
}

/// Access level of a method, derived in priority order
/// constructor → static → private (leading underscore) → public
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Constructor,
    Static,
    Private,
    Public,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Constructor => write!(f, "constructor"),
            Access::Static => write!(f, "static"),
            Access::Private => write!(f, "private"),
            Access::Public => write!(f, "public"),
        }
    }
}

/// A documented parameter (`@param {type} name description`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
}

/// A documented return value (`@returns {type} description`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Returns {
    #[serde(rename = "type")]
    pub return_type: String,
    pub description: Option<String>,
}

/// One documented method. Built once per member declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    /// `name(p1, p2)`; async/static are carried by the flags
    pub signature: String,
    pub is_async: bool,
    pub is_static: bool,
    pub access: Access,
    pub parameters: Vec<Parameter>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub returns: Option<Returns>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub throws: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deprecated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub since: Option<String>,
    pub category: String,
    /// 1-based
    pub start_line: u32,
    /// 1-based
    pub end_line: u32,
    pub source_text: String,
}

/// A property declared by a free-floating `@member` comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<String>,
}

/// The complete result of one extraction. Owns every record it contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationModel {
    pub class_info: ClassInfo,
    pub methods: Vec<MethodRecord>,
    pub properties_by_category: IndexMap<String, Vec<PropertyRecord>>,
    pub methods_by_category: IndexMap<String, Vec<MethodRecord>>,
}

impl DocumentationModel {
    pub fn new(class_info: ClassInfo) -> Self {
        Self {
            class_info,
            methods: Vec::new(),
            properties_by_category: IndexMap::new(),
            methods_by_category: IndexMap::new(),
        }
    }

    /// Methods declared `static`, in declaration order
    pub fn class_methods(&self) -> impl Iterator<Item = &MethodRecord> {
        self.methods.iter().filter(|m| m.is_static)
    }

    /// Non-static methods, in declaration order
    pub fn instance_methods(&self) -> impl Iterator<Item = &MethodRecord> {
        self.methods.iter().filter(|m| !m.is_static)
    }

    pub fn property_count(&self) -> usize {
        self.properties_by_category.values().map(Vec::len).sum()
    }
}

/// Which tier of the parse pipeline produced a model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParseTier {
    /// Full tree built from the input as given
    Parsed,
    /// Tree built from a re-synthesized single-class snippet
    Recovered,
    /// Regex-only extraction
    Fallback,
}

impl fmt::Display for ParseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTier::Parsed => write!(f, "parsed"),
            ParseTier::Recovered => write!(f, "recovered"),
            ParseTier::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A structured diagnostic raised during extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 1-based source line, when the diagnostic points at one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<u32>,
}

/// Per-extraction diagnostics sink
///
/// Every record is mirrored as a `tracing` event so hosts that install a
/// subscriber see the same stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Info, message.into(), None);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Warning, message.into(), None);
    }

    pub fn warn_at(&mut self, line: u32, message: impl Into<String>) {
        self.push(DiagnosticLevel::Warning, message.into(), Some(line));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Error, message.into(), None);
    }

    pub fn error_at(&mut self, line: u32, message: impl Into<String>) {
        self.push(DiagnosticLevel::Error, message.into(), Some(line));
    }

    fn push(&mut self, level: DiagnosticLevel, message: String, line: Option<u32>) {
        match level {
            DiagnosticLevel::Info => tracing::debug!(line = ?line, "{}", message),
            DiagnosticLevel::Warning => tracing::warn!(line = ?line, "{}", message),
            DiagnosticLevel::Error => tracing::error!(line = ?line, "{}", message),
        }
        self.records.push(Diagnostic {
            level,
            message,
            line,
        });
    }

    /// Append another sink's records without re-emitting them
    pub fn extend(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_level(&self, level: DiagnosticLevel) -> bool {
        self.records.iter().any(|d| d.level == level)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.records
    }
}

/// Model plus the tier that produced it and everything reported on the way
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub model: DocumentationModel,
    pub tier: ParseTier,
    pub diagnostics: Vec<Diagnostic>,
}
