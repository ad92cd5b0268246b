use crate::core::ast::SyntaxNode;
use crate::core::errors::{Error, Result};
use crate::core::{DefinitionMetrics, Language, MetricsSet};
use crate::metrics;
use std::path::Path;

pub mod python;

/// A language front end: turns source text into the syntax tree the metrics
/// engine consumes.
pub trait Analyzer: std::fmt::Debug {
    fn parse(&self, content: &str, path: &Path) -> Result<SyntaxNode>;
    fn language(&self) -> Language;
}

pub fn get_analyzer(language: Language) -> Result<Box<dyn Analyzer>> {
    match language {
        Language::Python => Ok(Box::new(python::PythonAnalyzer::new())),
        Language::Unknown => Err(Error::Unsupported(
            "no analyzer registered for this file type".to_string(),
        )),
    }
}

/// Parse a file's content and run both engine modes over the resulting tree.
pub fn analyze_file(
    content: &str,
    path: &Path,
    analyzer: &dyn Analyzer,
    recursion_limit: usize,
) -> Result<(MetricsSet, Vec<DefinitionMetrics>)> {
    let root = analyzer.parse(content, path)?;
    let metrics = metrics::analyze_with_limit(&root, recursion_limit)?;
    let definitions = metrics::analyze_definitions_with_limit(&root, recursion_limit)?;
    Ok((metrics, definitions))
}
