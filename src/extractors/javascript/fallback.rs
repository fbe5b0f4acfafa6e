//! Degraded extraction paths
//!
//! Two text-level strategies for input the parser rejects: re-synthesizing a
//! minimal single-class snippet that can be parsed again, and a regex-only
//! scan that always produces a model.

use super::categories::categorize_methods;
use super::visibility::derive_access;
use crate::extractors::base::{
    ClassInfo, Diagnostics, DocumentationModel, MethodRecord, Parameter, UNCATEGORIZED,
};
use regex::Regex;
use std::sync::LazyLock;

pub const FALLBACK_CLASS_DESCRIPTION: &str =
    "Unable to fully parse the class due to syntax errors. Fallback parsing applied.";
pub const FALLBACK_METHOD_DESCRIPTION: &str = "Method extracted during fallback parsing.";
pub const FALLBACK_PARAM_DESCRIPTION: &str = "Parameter extracted during fallback parsing.";
pub const FALLBACK_PARAM_TYPE: &str = "unknown";
pub const UNKNOWN_CLASS: &str = "Unknown";

// Doc comment, then `(class Name ... {`, body up to the brace closing the wrapper
static WRAPPED_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*\*(.*?)\*/\s*\(\s*class\s+([A-Za-z_$][\w$]*)[^{]*\{(.*?)\}\s*\)").unwrap()
});

// Same head, body up to the last closing brace of the input
static WRAPPED_CLASS_TO_LAST_BRACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*\*(.*?)\*/\s*\(\s*class\s+([A-Za-z_$][\w$]*)[^{]*\{(.*)\}").unwrap()
});

static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+([A-Za-z_$][\w$]*)(?:\s+extends\s+([A-Za-z_$][\w$.]*))?").unwrap()
});

static METHOD_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(static\s+)?(\w+)\s*\(([^)]*)\)\s*\{").unwrap());

const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "with", "return",
];

/// A class snippet rebuilt from malformed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredClass {
    pub class_name: String,
    pub snippet: String,
}

/// Candidate `/**comment*/ class Name { body }` snippets rebuilt from the
/// first wrapped class expression in `text`, best guess first.
///
/// The first candidate ends the body where the wrapper closes; the second
/// runs it to the last `}` of the input, for bodies that contain `})`
/// themselves. Identical candidates are reported once.
pub fn synthesize_class_snippets(text: &str) -> Vec<RecoveredClass> {
    let mut candidates: Vec<RecoveredClass> = Vec::new();
    for pattern in [&*WRAPPED_CLASS, &*WRAPPED_CLASS_TO_LAST_BRACE] {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let class_name = caps[2].to_string();
        let snippet = format!(
            "/**{}*/\nclass {} {{\n{}\n}}\n",
            &caps[1], class_name, &caps[3]
        );
        if candidates.iter().all(|c| c.snippet != snippet) {
            candidates.push(RecoveredClass {
                class_name,
                snippet,
            });
        }
    }
    candidates
}

/// Regex-only model; never fails
pub fn fallback_model(text: &str, source_path: &str, diagnostics: &mut Diagnostics) -> DocumentationModel {
    let mut info = ClassInfo::new(source_path);
    info.description = FALLBACK_CLASS_DESCRIPTION.to_string();
    match CLASS_NAME.captures(text) {
        Some(caps) => {
            info.class_name = caps[1].to_string();
            if let Some(extends) = caps.get(2) {
                info.extends_name = extends.as_str().to_string();
            }
        }
        None => {
            info.class_name = UNKNOWN_CLASS.to_string();
            diagnostics.warn("Fallback parsing found no class declaration");
        }
    }

    let methods: Vec<MethodRecord> = METHOD_SIGNATURE
        .captures_iter(text)
        .filter(|caps| !CONTROL_KEYWORDS.contains(&&caps[2]))
        .map(|caps| {
            let is_static = caps.get(1).is_some();
            let name = caps[2].to_string();
            let line = line_of_offset(text, caps.get(2).map_or(0, |m| m.start()));
            let raw_params: Vec<&str> = caps[3]
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();

            MethodRecord {
                signature: format!("{}({})", name, raw_params.join(", ")),
                is_async: false,
                is_static,
                access: derive_access(&name, !is_static && name == "constructor", is_static),
                parameters: raw_params
                    .iter()
                    .map(|p| Parameter {
                        name: p.to_string(),
                        param_type: FALLBACK_PARAM_TYPE.to_string(),
                        description: FALLBACK_PARAM_DESCRIPTION.to_string(),
                    })
                    .collect(),
                description: FALLBACK_METHOD_DESCRIPTION.to_string(),
                returns: None,
                throws: None,
                example: None,
                deprecated: None,
                since: None,
                category: UNCATEGORIZED.to_string(),
                start_line: line,
                end_line: line,
                source_text: String::new(),
                name,
            }
        })
        .collect();

    diagnostics.info(format!(
        "Fallback parsing applied: {} methods recovered",
        methods.len()
    ));

    let mut model = DocumentationModel::new(info);
    model.methods_by_category = categorize_methods(&methods);
    model.methods = methods;
    model
}

fn line_of_offset(text: &str, offset: usize) -> u32 {
    let newlines = text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    newlines as u32 + 1
}
