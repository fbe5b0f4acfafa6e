//! ExtractorManager - Public API for class documentation extraction
//!
//! Runs the parse tiers as a strict fallthrough chain: a full parse, then a
//! re-parse of a re-synthesized single-class snippet, then the regex-only
//! model. Every call owns its own parser, extractor and comment index, so
//! batches run in parallel without shared state.

use crate::extractors::base::{
    Diagnostics, DocumentationModel, ExtractConfig, ExtractError, ExtractResult,
    ExtractionReport, ParseTier,
};
use crate::extractors::javascript::fallback::{fallback_model, synthesize_class_snippets};
use crate::extractors::javascript::JavaScriptExtractor;
use crate::language;
use rayon::prelude::*;
use tree_sitter::{Node, Parser, Tree};

/// Result of running the parse tiers over one input
pub enum ParseOutcome {
    /// The input parsed cleanly
    Parsed(Tree),
    /// A synthesized snippet parsed cleanly; `text` is what `tree` was built from
    Recovered { tree: Tree, text: String },
    /// No tree could be built; the regex-only model
    Fallback(DocumentationModel),
}

impl ParseOutcome {
    pub fn tier(&self) -> ParseTier {
        match self {
            ParseOutcome::Parsed(_) => ParseTier::Parsed,
            ParseOutcome::Recovered { .. } => ParseTier::Recovered,
            ParseOutcome::Fallback(_) => ParseTier::Fallback,
        }
    }
}

/// Entry point for single and batch extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    config: ExtractConfig,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExtractConfig) {
        self.config = config;
    }

    /// Extract the documentation model; never fails
    pub fn extract(&self, source_text: &str, source_path: &str) -> DocumentationModel {
        self.extract_report(source_text, source_path).model
    }

    /// Extract the model along with the tier used and all diagnostics
    pub fn extract_report(&self, source_text: &str, source_path: &str) -> ExtractionReport {
        let mut diagnostics = Diagnostics::new();
        let outcome = self.parse(source_text, source_path, &mut diagnostics);
        let tier = outcome.tier();

        let model = match outcome {
            ParseOutcome::Parsed(tree) => {
                self.visit(&tree, source_text, source_text, source_path, &mut diagnostics)
            }
            ParseOutcome::Recovered { tree, text } => {
                self.visit(&tree, &text, source_text, source_path, &mut diagnostics)
            }
            ParseOutcome::Fallback(model) => model,
        };

        tracing::debug!(
            "Extracted {} methods from {} ({} tier)",
            model.methods.len(),
            source_path,
            tier
        );

        ExtractionReport {
            model,
            tier,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Extract many independent inputs in parallel; results keep input order
    pub fn extract_batch(&self, inputs: &[(String, String)]) -> Vec<ExtractionReport> {
        inputs
            .par_iter()
            .map(|(source_text, source_path)| self.extract_report(source_text, source_path))
            .collect()
    }

    /// Run the tier chain up to the first tier that yields something usable
    pub fn parse(
        &self,
        source_text: &str,
        source_path: &str,
        diagnostics: &mut Diagnostics,
    ) -> ParseOutcome {
        let mut parser = match javascript_parser() {
            Ok(parser) => parser,
            Err(e) => {
                diagnostics.error(e.to_string());
                return ParseOutcome::Fallback(fallback_model(source_text, source_path, diagnostics));
            }
        };

        match parse_tree(&mut parser, source_text) {
            Ok(tree) => return ParseOutcome::Parsed(tree),
            Err(e) => report(diagnostics, &e),
        }

        if self.config.recover {
            match recover(&mut parser, source_text) {
                Ok((tree, text)) => {
                    diagnostics.info("Parsed a re-synthesized class snippet");
                    return ParseOutcome::Recovered { tree, text };
                }
                Err(e) => report(diagnostics, &e),
            }
        }

        diagnostics.warn("Falling back to regex-based extraction");
        ParseOutcome::Fallback(fallback_model(source_text, source_path, diagnostics))
    }

    fn visit(
        &self,
        tree: &Tree,
        tree_text: &str,
        property_text: &str,
        source_path: &str,
        diagnostics: &mut Diagnostics,
    ) -> DocumentationModel {
        let mut extractor = JavaScriptExtractor::new(
            source_path.to_string(),
            tree_text.to_string(),
            self.config.clone(),
        );
        let model = extractor.extract_model(tree, property_text);
        diagnostics.extend(extractor.take_diagnostics());
        model
    }
}

fn javascript_parser() -> ExtractResult<Parser> {
    language::javascript_parser().map_err(|e| ExtractError::Language(e.to_string()))
}

/// Parse `text`; any ERROR or MISSING node is a failure
fn parse_tree(parser: &mut Parser, text: &str) -> ExtractResult<Tree> {
    let tree = parser.parse(text, None).ok_or(ExtractError::NoTree)?;
    let root = tree.root_node();
    if root.has_error() {
        let (line, column) = first_error_position(&root);
        return Err(ExtractError::TreeBuild { line, column });
    }
    Ok(tree)
}

/// Re-parse each synthesized snippet in turn; the first clean one wins and
/// the last failure is reported otherwise
fn recover(parser: &mut Parser, source_text: &str) -> ExtractResult<(Tree, String)> {
    let mut last_error = ExtractError::RecoveryPatternNotFound;
    for recovered in synthesize_class_snippets(source_text) {
        tracing::debug!("Re-parsing synthesized snippet for class {}", recovered.class_name);

        match parse_tree(parser, &recovered.snippet) {
            Ok(tree) => return Ok((tree, recovered.snippet)),
            Err(ExtractError::TreeBuild { line, column }) => {
                last_error = ExtractError::Recovery {
                    class_name: recovered.class_name,
                    line,
                    column,
                };
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_error)
}

fn report(diagnostics: &mut Diagnostics, error: &ExtractError) {
    match error {
        ExtractError::TreeBuild { line, .. } | ExtractError::Recovery { line, .. } => {
            diagnostics.warn_at(*line, error.to_string())
        }
        _ => diagnostics.warn(error.to_string()),
    }
}

/// 1-based position of the first ERROR or MISSING node
fn first_error_position(root: &Node) -> (u32, u32) {
    let node = first_error(root).unwrap_or(*root);
    let position = node.start_position();
    (position.row as u32 + 1, position.column as u32 + 1)
}

/// Follow the error path down from `node`, leftmost branch first
fn first_error<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    let mut current = *node;
    loop {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        if !current.has_error() {
            return None;
        }
        let mut cursor = current.walk();
        let next = current
            .children(&mut cursor)
            .find(|child| child.is_error() || child.is_missing() || child.has_error());
        current = next?;
    }
}
