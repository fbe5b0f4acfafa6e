//! Categorizer
//!
//! Properties are comment-only declarations: every `/** ... */` in the raw
//! text carrying an `@member` tag becomes a property, independently of the
//! tree. Methods are bucketed by their resolved category. Both maps keep
//! first-seen category order and declaration order within a category.

use super::jsdoc::parse_jsdoc;
use crate::extractors::base::{
    Diagnostics, MethodRecord, PropertyRecord, UNCATEGORIZED, UNDOCUMENTED,
};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*\s*(.*?)\s*\*/").unwrap());

/// Scan `text` for `@member` comments and group them by category
pub fn parse_properties(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> IndexMap<String, Vec<PropertyRecord>> {
    let mut categories: IndexMap<String, Vec<PropertyRecord>> = IndexMap::new();

    for caps in DOC_COMMENT.captures_iter(text) {
        let doc = parse_jsdoc(&caps[1], diagnostics);
        let entries = doc.entries;
        let Some(member) = entries.member else {
            continue;
        };

        let description = entries
            .description
            .or_else(|| Some(member.description).filter(|d| !d.is_empty()))
            .unwrap_or_else(|| UNDOCUMENTED.to_string());
        let property = PropertyRecord {
            name: member.name,
            property_type: member.member_type,
            description,
            category: entries
                .category
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            default: entries.default,
        };

        categories
            .entry(property.category.clone())
            .or_default()
            .push(property);
    }

    categories
}

/// Bucket methods by category
pub fn categorize_methods(methods: &[MethodRecord]) -> IndexMap<String, Vec<MethodRecord>> {
    let mut categories: IndexMap<String, Vec<MethodRecord>> = IndexMap::new();
    for method in methods {
        let category = if method.category.is_empty() {
            UNCATEGORIZED
        } else {
            method.category.as_str()
        };
        categories
            .entry(category.to_string())
            .or_default()
            .push(method.clone());
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::Access;

    fn method(name: &str, category: &str) -> MethodRecord {
        MethodRecord {
            name: name.to_string(),
            signature: format!("{}()", name),
            is_async: false,
            is_static: false,
            access: Access::Public,
            parameters: Vec::new(),
            description: UNDOCUMENTED.to_string(),
            returns: None,
            throws: None,
            example: None,
            deprecated: None,
            since: None,
            category: category.to_string(),
            start_line: 1,
            end_line: 1,
            source_text: String::new(),
        }
    }

    #[test]
    fn member_comments_become_properties() {
        let text = r#"
            /**
             * @member {String} path - Path from _index.json entry
             * @category File Properties
             */
            /**
             * @member {Boolean} isLoading - Indicates loading
             * @category Loading
             * @default false
             */
            /**
             * @member {Number} size - Size in bytes
             * @category File Properties
             */
            /** Not a property */
        "#;
        let props = parse_properties(text, &mut Diagnostics::new());
        let keys: Vec<_> = props.keys().cloned().collect();
        assert_eq!(keys, vec!["File Properties", "Loading"]);
        assert_eq!(props["File Properties"].len(), 2);
        assert_eq!(props["File Properties"][0].name, "path");
        assert_eq!(props["File Properties"][1].name, "size");
        assert_eq!(props["Loading"][0].default.as_deref(), Some("false"));
        assert_eq!(props["Loading"][0].property_type, "Boolean");
    }

    #[test]
    fn property_description_precedence() {
        let text = "/** @member {String} a - member text\n * @description tagged text */\n/** @member {String} b */";
        let props = parse_properties(text, &mut Diagnostics::new());
        let uncategorized = &props[UNCATEGORIZED];
        assert_eq!(uncategorized[0].description, "tagged text");
        assert_eq!(uncategorized[1].description, UNDOCUMENTED);
    }

    #[test]
    fn methods_grouped_in_first_seen_order() {
        let methods = vec![
            method("a", "Loading"),
            method("b", UNCATEGORIZED),
            method("c", "Loading"),
        ];
        let grouped = categorize_methods(&methods);
        let keys: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(keys, vec!["Loading", UNCATEGORIZED]);
        let names: Vec<_> = grouped["Loading"].iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
