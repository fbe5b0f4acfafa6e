// PyO3 Bindings Module
//
// Python bindings for the class documentation extractor. Models cross the
// boundary as JSON strings so Python sees the same camelCase shape the
// renderers produce.

mod api;

// Re-export for lib.rs
pub use api::{detect_language, extract_class_doc, extract_class_docs_batch, render_class_doc};
