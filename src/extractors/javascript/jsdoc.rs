//! JSDoc tag grammar
//!
//! Turns the text of one block comment into a description plus a typed map
//! of the recognised tags. Lines that do not open a new `@tag` continue the
//! current tag (or, before any tag, the free-text description). The tag set
//! is closed: anything else is reported and skipped.

use crate::extractors::base::{Diagnostics, Parameter, Returns};
use crate::utils::escape::{escape_markup, escape_prose};
use regex::Regex;
use std::sync::LazyLock;

static TAG_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\w+)").unwrap());

static LEADING_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\s?").unwrap());

/// Recognised tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Param,
    Returns,
    Throws,
    Example,
    Deprecated,
    Since,
    Class,
    Extends,
    Description,
    Classdesc,
    Category,
    Default,
    Member,
    Type,
}

impl Tag {
    pub fn from_name(name: &str) -> Option<Tag> {
        match name {
            "param" => Some(Tag::Param),
            "returns" | "return" => Some(Tag::Returns),
            "throws" => Some(Tag::Throws),
            "example" => Some(Tag::Example),
            "deprecated" => Some(Tag::Deprecated),
            "since" => Some(Tag::Since),
            "class" => Some(Tag::Class),
            "extends" => Some(Tag::Extends),
            "description" => Some(Tag::Description),
            "classdesc" => Some(Tag::Classdesc),
            "category" => Some(Tag::Category),
            "default" => Some(Tag::Default),
            "member" => Some(Tag::Member),
            "type" => Some(Tag::Type),
            _ => None,
        }
    }
}

/// `@member {type} name description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTag {
    pub name: String,
    pub member_type: String,
    pub description: String,
}

/// `@type {type} name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTag {
    pub name: String,
    pub type_name: String,
}

/// Typed values of every recognised tag in one comment
///
/// Types and free text are stored escaped; `class`, `extends`, `category`
/// and `default` are stored raw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEntries {
    pub params: Vec<Parameter>,
    pub returns: Option<Returns>,
    pub throws: Option<String>,
    pub example: Option<String>,
    pub deprecated: Option<String>,
    pub since: Option<String>,
    pub class: Option<String>,
    pub extends: Option<String>,
    pub description: Option<String>,
    pub classdesc: Option<String>,
    pub category: Option<String>,
    pub default: Option<String>,
    pub member: Option<MemberTag>,
    pub type_tag: Option<TypeTag>,
}

/// Parsed comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsDoc {
    /// `@description` if present, else the untagged text; escaped prose
    pub description: String,
    pub entries: TagEntries,
}

/// Parse one comment's text (with or without leading asterisks)
pub fn parse_jsdoc(comment: &str, diagnostics: &mut Diagnostics) -> JsDoc {
    let mut entries = TagEntries::default();
    let mut description: Vec<String> = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in comment.split('\n') {
        let line = LEADING_ASTERISK.replace(line.trim(), "");

        if let Some(caps) = TAG_START.captures(&line) {
            if let Some((tag, content)) = current.take() {
                process_tag(&tag, &content.join("\n"), &mut entries, diagnostics);
            }
            let rest = line[caps[0].len()..].trim().to_string();
            current = Some((caps[1].to_string(), vec![rest]));
        } else if let Some((_, content)) = current.as_mut() {
            content.push(line.into_owned());
        } else if !line.is_empty() {
            description.push(line.into_owned());
        }
    }

    if let Some((tag, content)) = current.take() {
        process_tag(&tag, &content.join("\n"), &mut entries, diagnostics);
    }

    let description = match &entries.description {
        Some(desc) if !desc.is_empty() => desc.clone(),
        _ => escape_prose(&description.join("\n")),
    };

    JsDoc {
        description,
        entries,
    }
}

fn process_tag(name: &str, content: &str, entries: &mut TagEntries, diagnostics: &mut Diagnostics) {
    let Some(tag) = Tag::from_name(name) else {
        diagnostics.warn(format!("Unknown tag: @{}", name));
        return;
    };

    let trimmed = content.trim();
    match tag {
        Tag::Param => {
            let (param_type, rest) = split_type(content);
            let mut words = rest.split_whitespace();
            let name = words.next().map(clean_param_name).unwrap_or_default();
            let description = strip_dash(&words.collect::<Vec<_>>().join(" "));
            entries.params.push(Parameter {
                name: if name.is_empty() {
                    "unnamed".to_string()
                } else {
                    name
                },
                param_type: escape_markup(&param_type),
                description: escape_markup(&description),
            });
        }
        Tag::Returns => {
            let (return_type, rest) = split_type(content);
            let description = rest.split_whitespace().collect::<Vec<_>>().join(" ");
            if !return_type.is_empty() || !description.is_empty() {
                entries.returns = Some(Returns {
                    return_type: escape_markup(&return_type),
                    description: non_empty(escape_markup(&description)),
                });
            }
        }
        Tag::Throws => entries.throws = non_empty(escape_markup(trimmed)),
        Tag::Example => entries.example = non_empty(escape_markup(trimmed)),
        Tag::Deprecated => entries.deprecated = non_empty(escape_markup(trimmed)),
        Tag::Since => entries.since = non_empty(escape_markup(trimmed)),
        Tag::Class => entries.class = non_empty(trimmed.to_string()),
        Tag::Extends => entries.extends = non_empty(trimmed.to_string()),
        Tag::Description => entries.description = non_empty(escape_prose(trimmed)),
        Tag::Classdesc => entries.classdesc = non_empty(escape_prose(trimmed)),
        Tag::Category => entries.category = non_empty(trimmed.to_string()),
        Tag::Default => entries.default = non_empty(trimmed.to_string()),
        Tag::Member => {
            let (member_type, rest) = split_type(content);
            let mut words = rest.split_whitespace();
            let name = match words.next() {
                Some(word) => word.to_string(),
                None => entries
                    .type_tag
                    .as_ref()
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "unnamed".to_string()),
            };
            let description = strip_dash(&words.collect::<Vec<_>>().join(" "));
            entries.member = Some(MemberTag {
                name,
                member_type: escape_markup(&member_type),
                description: escape_markup(&description),
            });
        }
        Tag::Type => {
            let (type_name, rest) = split_type(content);
            let name = rest
                .split_whitespace()
                .next()
                .unwrap_or("unnamed")
                .to_string();
            entries.type_tag = Some(TypeTag {
                name,
                type_name: escape_markup(&type_name),
            });
        }
    }
}

/// Split a leading `{type}` (braces balanced) from the rest of a tag body
fn split_type(content: &str) -> (String, &str) {
    let content = content.trim_start();
    if !content.starts_with('{') {
        return (String::new(), content);
    }

    let mut depth = 0usize;
    for (idx, c) in content.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = content[1..idx].trim().to_string();
                    return (inner, &content[idx + 1..]);
                }
            }
            _ => {}
        }
    }

    // Unterminated: everything up to the first whitespace is the type
    let end = content.find(char::is_whitespace).unwrap_or(content.len());
    (content[1..end].trim().to_string(), &content[end..])
}

/// `-name` → `name`, `[name=1]` → `name`
fn clean_param_name(raw: &str) -> String {
    let name = raw.trim_start_matches('-');
    let name = match name.strip_prefix('[') {
        Some(inner) => {
            let inner = inner.trim_end_matches(']');
            inner.split('=').next().unwrap_or(inner)
        }
        None => name,
    };
    name.trim().to_string()
}

fn strip_dash(text: &str) -> String {
    let text = text.trim();
    if text == "-" {
        return String::new();
    }
    text.strip_prefix("- ").unwrap_or(text).to_string()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
