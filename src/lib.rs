// Classdoc Core - tree-sitter powered JSDoc class documentation extraction
//
// Library first: the extraction engine, the renderers and the `classdoc`
// binary live here. Built with the `python` feature it is also a PyO3
// extension module.

pub mod extractors;
pub mod language;
pub mod render;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use extractors::base::{
    Access, ClassInfo, Diagnostic, DiagnosticLevel, DocumentationModel, ExtractConfig,
    ExtractionReport, MethodRecord, Parameter, ParseTier, PropertyRecord, Returns,
    UNCATEGORIZED, UNDOCUMENTED,
};
pub use extractors::manager::ExtractorManager;
pub use render::{create_renderer, Renderer};

/// Extract the documentation model of the class in `source_text`
///
/// Never fails: malformed input degrades through recovery and regex
/// fallback down to a minimal model.
pub fn extract(source_text: &str, source_path: &str) -> DocumentationModel {
    ExtractorManager::new().extract(source_text, source_path)
}

/// Like [`extract`], also reporting the parse tier and diagnostics
pub fn extract_report(source_text: &str, source_path: &str) -> ExtractionReport {
    ExtractorManager::new().extract_report(source_text, source_path)
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Classdoc Core Python module
#[cfg(feature = "python")]
#[pymodule]
fn classdoc_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(bindings::extract_class_doc, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::extract_class_docs_batch, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::render_class_doc, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;

    Ok(())
}
