//! XML renderer - the markup document consumed by the class viewer.
//!
//! Comment-derived text arrives escaped from the tag parser and is written
//! as-is. Names, categories, paths and source come straight from the code
//! and are escaped here.

use crate::extractors::base::{
    DocumentationModel, MethodRecord, PropertyRecord, UNCATEGORIZED, UNDOCUMENTED,
};
use crate::render::Renderer;
use crate::utils::escape::escape_markup;

pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn render(&self, model: &DocumentationModel) -> String {
        let mut out = String::new();
        out.push_str("<class>\n");
        render_class_info(&mut out, model);

        let properties: Vec<(&str, Vec<&PropertyRecord>)> = model
            .properties_by_category
            .iter()
            .map(|(category, props)| (category.as_str(), props.iter().collect()))
            .collect();
        render_section(&mut out, "properties", &properties, render_property);

        let class_methods = methods_by_category(model, true);
        render_section(&mut out, "classMethods", &class_methods, render_method);

        let instance_methods = methods_by_category(model, false);
        render_section(&mut out, "instanceMethods", &instance_methods, render_method);

        out.push_str("</class>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "xml"
    }
}

fn render_class_info(out: &mut String, model: &DocumentationModel) {
    let info = &model.class_info;
    let path = escape_markup(&info.source_path);
    out.push_str("<classInfo>\n");
    out.push_str(&format!(
        "  <className>{}</className>\n",
        escape_markup(&info.class_name)
    ));
    out.push_str(&format!(
        "  <extends>{}</extends>\n",
        escape_markup(&info.extends_name)
    ));
    out.push_str(&format!(
        "  <filePath><a href=\"{}\">{}</a></filePath>\n",
        path, path
    ));
    out.push_str(&format!("  <description>{}</description>\n", info.description));
    out.push_str("</classInfo>\n");
}

/// Category groups of one section, static or not, in first-seen order
fn methods_by_category(model: &DocumentationModel, is_static: bool) -> Vec<(&str, Vec<&MethodRecord>)> {
    model
        .methods_by_category
        .iter()
        .map(|(category, methods)| {
            let selected = methods.iter().filter(|m| m.is_static == is_static).collect();
            (category.as_str(), selected)
        })
        .collect()
}

fn render_section<T>(
    out: &mut String,
    section: &str,
    groups: &[(&str, Vec<&T>)],
    render_item: fn(&mut String, &T),
) {
    if groups.iter().all(|(_, items)| items.is_empty()) {
        return;
    }

    out.push_str(&format!("<{}>\n", section));
    for (category, items) in groups.iter().filter(|(_, items)| !items.is_empty()) {
        out.push_str("<category>\n");
        if *category != UNCATEGORIZED {
            out.push_str(&format!("<name>{}</name>\n", escape_markup(category)));
        }
        for item in items {
            render_item(out, *item);
        }
        out.push_str("</category>\n");
    }
    out.push_str(&format!("</{}>\n", section));
}

fn render_method(out: &mut String, method: &MethodRecord) {
    out.push_str("<method>\n");
    out.push_str(&format!(
        "  <name class=\"collapsible\">{}</name>\n",
        escape_markup(&method.name)
    ));
    let async_attr = if method.is_async { " async=\"true\"" } else { "" };
    out.push_str(&format!(
        "  <fullMethodName class=\"collapsible\"{}>{}</fullMethodName>\n",
        async_attr,
        escape_markup(&method.signature)
    ));
    out.push_str("  <div class=\"collapsible-content\">\n");
    out.push_str("    <methodinfo>\n");
    out.push_str("      <div class=\"method-info-content\">\n");
    out.push_str(&format!(
        "      <lineNumberStart>{}</lineNumberStart>\n",
        method.start_line
    ));
    out.push_str(&format!(
        "      <lineNumberEnd>{}</lineNumberEnd>\n",
        method.end_line
    ));

    if !method.parameters.is_empty() {
        out.push_str("  <params>\n");
        for param in &method.parameters {
            out.push_str("    <param>\n");
            out.push_str(&format!(
                "      <paramname>{}</paramname>\n",
                escape_markup(&param.name)
            ));
            out.push_str(&format!("      <paramtype>{}</paramtype>\n", param.param_type));
            if !param.description.is_empty() {
                out.push_str(&format!(
                    "      <description>{}</description>\n",
                    param.description
                ));
            }
            out.push_str("    </param>\n");
        }
        out.push_str("  </params>\n");
    }

    if !method.description.is_empty() {
        out.push_str(&format!("  <description>{}</description>\n", method.description));
    } else if method.returns.is_none() {
        out.push_str(&format!("  <description>{}</description>\n", UNDOCUMENTED));
    }

    if let Some(returns) = &method.returns {
        out.push_str("  <returns>\n");
        out.push_str(&format!(
            "    <returntype>{}</returntype>\n",
            returns.return_type
        ));
        if let Some(description) = &returns.description {
            out.push_str(&format!("    <description>{}</description>\n", description));
        }
        out.push_str("  </returns>\n");
    }

    out.push_str(&format!("  <isAsync>{}</isAsync>\n", method.is_async));
    out.push_str(&format!("  <access>{}</access>\n", method.access));
    out.push_str(&format!("  <isStatic>{}</isStatic>\n", method.is_static));
    for (tag, value) in [
        ("example", &method.example),
        ("deprecated", &method.deprecated),
        ("since", &method.since),
        ("throws", &method.throws),
    ] {
        if let Some(value) = value {
            out.push_str(&format!("  <{tag}>{value}</{tag}>\n"));
        }
    }
    out.push_str(&format!(
        "  <category>{}</category>\n",
        escape_markup(&method.category)
    ));

    out.push_str("      <div class=\"source-wrapper\">\n");
    out.push_str("        <div class=\"source-toggle collapsible\">source</div>\n");
    out.push_str(&format!(
        "        <methodsource class=\"collapsible-content\">{}</methodsource>\n",
        escape_markup(&method.source_text)
    ));
    out.push_str("      </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </methodinfo>\n");
    out.push_str("  </div>\n");
    out.push_str("</method>\n");
}

fn render_property(out: &mut String, property: &PropertyRecord) {
    out.push_str("<property>\n");
    out.push_str(&format!(
        "  <propertyname>{}</propertyname>\n",
        escape_markup(&property.name)
    ));
    out.push_str(&format!(
        "  <propertytype>{}</propertytype>\n",
        property.property_type
    ));
    out.push_str(&format!(
        "  <description>{}</description>\n",
        property.description
    ));
    out.push_str(&format!(
        "  <category>{}</category>\n",
        escape_markup(&property.category)
    ));
    if let Some(default) = &property.default {
        out.push_str(&format!("  <default>{}</default>\n", escape_markup(default)));
    }
    out.push_str("</property>\n");
}
