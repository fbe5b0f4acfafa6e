//! JSON renderer - structured output for tooling integration.
//!
//! Serializes the documentation model as-is, with camelCase keys.

use crate::extractors::base::DocumentationModel;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, model: &DocumentationModel) -> String {
        match serde_json::to_string_pretty(model) {
            Ok(mut out) => {
                out.push('\n');
                out
            }
            Err(e) => {
                tracing::error!("Failed to serialize model for {}: {}", model.class_info.source_path, e);
                String::new()
            }
        }
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ClassInfo;

    #[test]
    fn renders_camel_case_model() {
        let mut info = ClassInfo::new("lib/Foo.js");
        info.class_name = "Foo".to_string();
        let out = JsonRenderer.render(&DocumentationModel::new(info));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["classInfo"]["className"], "Foo");
        assert_eq!(value["classInfo"]["sourcePath"], "lib/Foo.js");
        assert!(value["methods"].as_array().unwrap().is_empty());
        assert!(out.ends_with('\n'));
    }
}
