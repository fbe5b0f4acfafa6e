// API Functions - PyO3-exposed functions for Python
//
// These functions provide the public API for classdoc's extraction functionality.

use crate::language::detect_language_from_extension;
use crate::render::create_renderer;
use crate::ExtractorManager;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::Path;

/// Extract the documentation of the class in `content`
///
/// Args:
///     content (str): JavaScript source text
///     file_path (str): Label carried into classInfo.sourcePath
///
/// Returns:
///     str: JSON of the extraction report (model, tier, diagnostics)
///
/// Never fails on malformed source: extraction degrades to a fallback model.
#[pyfunction]
#[pyo3(signature = (content, file_path))]
pub fn extract_class_doc(content: &str, file_path: &str) -> PyResult<String> {
    let report = ExtractorManager::new().extract_report(content, file_path);
    serde_json::to_string(&report)
        .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
}

/// Render the class documentation of `content` as "xml" or "json"
///
/// Raises:
///     ValueError: If the format is unknown
#[pyfunction]
#[pyo3(signature = (content, file_path, format = "xml"))]
pub fn render_class_doc(content: &str, file_path: &str, format: &str) -> PyResult<String> {
    let renderer = create_renderer(format).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let model = ExtractorManager::new().extract(content, file_path);
    Ok(renderer.render(&model))
}

/// Detect the source language from a file path
///
/// Returns:
///     str: "javascript", "jsx", or "text" for anything else
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> PyResult<String> {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    Ok(detect_language_from_extension(extension)
        .unwrap_or("text")
        .to_string())
}

/// Extract many classes in parallel
///
/// Releases the GIL while Rayon processes the batch. Each input gets its own
/// parser and comment index, so results match sequential extraction.
///
/// Args:
///     files (list[tuple[str, str]]): (content, file_path) pairs
///
/// Returns:
///     list[str]: JSON reports in the same order as the input
#[pyfunction]
#[pyo3(signature = (files))]
pub fn extract_class_docs_batch(py: Python<'_>, files: Vec<(String, String)>) -> PyResult<Vec<String>> {
    let reports = py.detach(move || ExtractorManager::new().extract_batch(&files));

    reports
        .iter()
        .map(|report| {
            serde_json::to_string(report)
                .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
        })
        .collect()
}
