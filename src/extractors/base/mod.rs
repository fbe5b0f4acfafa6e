// Base Extractor Types and Traits for Classdoc
//
// - types.rs: documentation model, configuration and diagnostics
// - error.rs: internal error taxonomy flowing through the parse tiers
// - extractor.rs: BaseExtractor implementation (source text access)
// - tree_methods.rs: Tree navigation and traversal methods

pub mod error;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use error::{ExtractError, ExtractResult};
pub use extractor::BaseExtractor;
pub use types::{
    Access, ClassInfo, Diagnostic, DiagnosticLevel, Diagnostics, DocumentationModel,
    ExtractConfig, ExtractionReport, MethodRecord, Parameter, ParseTier, PropertyRecord, Returns,
    UNCATEGORIZED, UNDOCUMENTED,
};
